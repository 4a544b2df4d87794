use super::{normalize_path, Vault};
use crate::error::{PaperlinkError, Result};
use crate::model::{Child, Entry, FolderEntry, NoteFile};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A vault rooted at a directory on disk.
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Normalize `path` and refuse anything that would leave the vault.
    fn checked(&self, path: &str) -> Result<String> {
        let normalized = normalize_path(path);
        if normalized.split('/').any(|segment| segment == ".." || segment == ".") {
            return Err(PaperlinkError::Store(format!(
                "Path escapes the vault: {}",
                path
            )));
        }
        Ok(normalized)
    }

    fn folder_entry(&self, rel: &str, full: &Path) -> Result<FolderEntry> {
        let mut listed = Vec::new();
        for entry in fs::read_dir(full).map_err(PaperlinkError::Io)? {
            let entry = entry.map_err(PaperlinkError::Io)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let is_dir = entry.file_type().map_err(PaperlinkError::Io)?.is_dir();
            listed.push((name, is_dir));
        }
        listed.sort();

        let children = listed
            .into_iter()
            .map(|(name, is_dir)| {
                let child_path = if rel.is_empty() {
                    name
                } else {
                    format!("{}/{}", rel, name)
                };
                if is_dir {
                    Child::Folder(child_path)
                } else {
                    Child::File(NoteFile::new(child_path))
                }
            })
            .collect();

        Ok(FolderEntry {
            path: rel.to_string(),
            children,
        })
    }
}

impl Vault for FsVault {
    fn entry(&self, path: &str) -> Result<Option<Entry>> {
        let rel = self.checked(path)?;
        let full = self.root.join(&rel);

        let meta = match fs::metadata(&full) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PaperlinkError::Io(e)),
        };

        if meta.is_dir() {
            Ok(Some(Entry::Folder(self.folder_entry(&rel, &full)?)))
        } else {
            Ok(Some(Entry::File(NoteFile::new(rel))))
        }
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        let rel = self.checked(path)?;
        fs::create_dir_all(self.root.join(rel)).map_err(PaperlinkError::Io)
    }

    fn create_file(&self, path: &str, content: &str) -> Result<NoteFile> {
        let rel = self.checked(path)?;
        if rel.is_empty() {
            return Err(PaperlinkError::Store("Cannot create a file at the vault root".into()));
        }
        let full = self.root.join(&rel);

        // create_new: whoever creates the file first owns it, nobody overwrites.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .map_err(PaperlinkError::Io)?;

        if let Err(e) = file.write_all(content.as_bytes()).and_then(|_| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&full);
            return Err(PaperlinkError::Io(e));
        }

        Ok(NoteFile::new(rel))
    }

    fn read_file(&self, file: &NoteFile) -> Result<String> {
        let rel = self.checked(&file.path)?;
        fs::read_to_string(self.root.join(rel)).map_err(PaperlinkError::Io)
    }

    fn locate(&self, file: &NoteFile) -> PathBuf {
        self.root.join(normalize_path(&file.path))
    }
}
