use super::{normalize_path, Vault};
use crate::error::{PaperlinkError, Result};
use crate::model::{Child, Entry, FolderEntry, NoteFile};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Clone)]
enum Node {
    Folder,
    File(String),
}

/// In-memory vault for testing.
///
/// Uses `RefCell` for interior mutability since paperlink is single-threaded.
/// The vault root always exists and is never stored as a node.
#[derive(Default)]
pub struct InMemoryVault {
    nodes: RefCell<BTreeMap<String, Node>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every create operation fail, for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Put a file in place directly, replacing whatever was there.
    /// Stands in for the user editing a note (or dropping a file) by hand.
    pub fn put_file(&self, path: &str, content: &str) {
        let path = normalize_path(path);
        let mut nodes = self.nodes.borrow_mut();
        for parent in ancestors(&path) {
            nodes.entry(parent).or_insert(Node::Folder);
        }
        nodes.insert(path, Node::File(content.to_string()));
    }

    /// Number of files anywhere in the vault.
    pub fn file_count(&self) -> usize {
        self.nodes
            .borrow()
            .values()
            .filter(|node| matches!(node, Node::File(_)))
            .count()
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PaperlinkError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }

    fn is_folder(nodes: &BTreeMap<String, Node>, path: &str) -> bool {
        path.is_empty() || matches!(nodes.get(path), Some(Node::Folder))
    }
}

impl Vault for InMemoryVault {
    fn entry(&self, path: &str) -> Result<Option<Entry>> {
        let path = normalize_path(path);
        let nodes = self.nodes.borrow();

        if !Self::is_folder(&nodes, &path) {
            return Ok(nodes
                .get(&path)
                .map(|_| Entry::File(NoteFile::new(path.clone()))));
        }

        // BTreeMap order gives children sorted by path, which for siblings
        // is the same as sorted by name.
        let children = nodes
            .iter()
            .filter(|(key, _)| parent_of(key) == path)
            .filter(|(key, _)| !name_of(key).starts_with('.'))
            .map(|(key, node)| match node {
                Node::Folder => Child::Folder(key.clone()),
                Node::File(_) => Child::File(NoteFile::new(key.clone())),
            })
            .collect();

        Ok(Some(Entry::Folder(FolderEntry { path, children })))
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        self.check_writable()?;
        let path = normalize_path(path);
        let mut nodes = self.nodes.borrow_mut();

        let mut chain = ancestors(&path);
        chain.push(path);
        for segment_path in chain {
            if segment_path.is_empty() {
                continue;
            }
            match nodes.get(&segment_path) {
                Some(Node::Folder) => {}
                Some(Node::File(_)) => {
                    return Err(PaperlinkError::Store(format!(
                        "A file already exists at {}",
                        segment_path
                    )))
                }
                None => {
                    nodes.insert(segment_path, Node::Folder);
                }
            }
        }
        Ok(())
    }

    fn create_file(&self, path: &str, content: &str) -> Result<NoteFile> {
        self.check_writable()?;
        let path = normalize_path(path);
        let mut nodes = self.nodes.borrow_mut();

        if path.is_empty() || nodes.contains_key(&path) {
            return Err(PaperlinkError::Store(format!("File already exists: {}", path)));
        }
        if !Self::is_folder(&nodes, parent_of(&path)) {
            return Err(PaperlinkError::Store(format!(
                "Parent folder does not exist: {}",
                parent_of(&path)
            )));
        }

        nodes.insert(path.clone(), Node::File(content.to_string()));
        Ok(NoteFile::new(path))
    }

    fn read_file(&self, file: &NoteFile) -> Result<String> {
        let path = normalize_path(&file.path);
        match self.nodes.borrow().get(&path) {
            Some(Node::File(text)) => Ok(text.clone()),
            Some(Node::Folder) => Err(PaperlinkError::Store(format!("{} is a folder", path))),
            None => Err(PaperlinkError::Store(format!("File not found: {}", path))),
        }
    }

    fn locate(&self, file: &NoteFile) -> PathBuf {
        PathBuf::from(format!("memory://{}", normalize_path(&file.path)))
    }
}

fn parent_of(path: &str) -> &str {
    path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

fn name_of(path: &str) -> &str {
    path.rsplit_once('/').map(|(_, name)| name).unwrap_or(path)
}

/// Proper ancestors of `path`, outermost first, excluding the root.
fn ancestors(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = parent_of(path);
    while !current.is_empty() {
        out.push(current.to_string());
        current = parent_of(current);
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_folder_makes_parents() {
        let vault = InMemoryVault::new();
        vault.create_folder("a/b/c").unwrap();
        assert!(matches!(vault.entry("a").unwrap(), Some(Entry::Folder(_))));
        assert!(matches!(vault.entry("a/b/c").unwrap(), Some(Entry::Folder(_))));
    }

    #[test]
    fn create_file_requires_parent_folder() {
        let vault = InMemoryVault::new();
        assert!(vault.create_file("missing/x.md", "").is_err());
        vault.create_folder("missing").unwrap();
        vault.create_file("missing/x.md", "hi").unwrap();
        assert_eq!(
            vault.read_file(&NoteFile::new("missing/x.md")).unwrap(),
            "hi"
        );
    }

    #[test]
    fn create_file_never_overwrites() {
        let vault = InMemoryVault::new();
        vault.create_file("x.md", "first").unwrap();
        assert!(vault.create_file("x.md", "second").is_err());
        assert_eq!(vault.read_file(&NoteFile::new("x.md")).unwrap(), "first");
    }

    #[test]
    fn children_are_immediate_and_sorted() {
        let vault = InMemoryVault::new();
        vault.put_file("papers/b.md", "");
        vault.put_file("papers/a.md", "");
        vault.put_file("papers/sub/deep.md", "");
        vault.put_file("papers/.hidden", "");

        let Some(Entry::Folder(folder)) = vault.entry("papers/").unwrap() else {
            panic!("expected folder");
        };
        assert_eq!(
            folder.children,
            vec![
                Child::File(NoteFile::new("papers/a.md")),
                Child::File(NoteFile::new("papers/b.md")),
                Child::Folder("papers/sub".into()),
            ]
        );
    }

    #[test]
    fn folder_over_file_is_rejected() {
        let vault = InMemoryVault::new();
        vault.put_file("papers", "not a folder");
        assert!(vault.create_folder("papers/inner").is_err());
    }

    #[test]
    fn simulated_write_errors() {
        let vault = InMemoryVault::new();
        vault.set_simulate_write_error(true);
        assert!(vault.create_folder("papers").is_err());
        assert!(vault.create_file("x.md", "").is_err());
        assert_eq!(vault.file_count(), 0);
    }

    #[test]
    fn locate_is_virtual() {
        let vault = InMemoryVault::new();
        assert_eq!(
            vault.locate(&NoteFile::new("papers/x.md")),
            PathBuf::from("memory://papers/x.md")
        );
    }
}
