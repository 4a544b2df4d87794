use paperlink::model::{Child, Entry, NoteFile};
use paperlink::store::fs::FsVault;
use paperlink::store::Vault;
use std::fs;

fn vault() -> (tempfile::TempDir, FsVault) {
    let dir = tempfile::tempdir().unwrap();
    let vault = FsVault::new(dir.path().to_path_buf());
    (dir, vault)
}

#[test]
fn test_missing_entry_is_none() {
    let (_dir, vault) = vault();
    assert!(vault.entry("papers").unwrap().is_none());
    assert!(vault.entry("papers/x.md").unwrap().is_none());
}

#[test]
fn test_create_folder_is_recursive_and_idempotent() {
    let (dir, vault) = vault();
    vault.create_folder("library/papers").unwrap();
    vault.create_folder("library/papers/").unwrap();
    assert!(dir.path().join("library/papers").is_dir());
}

#[test]
fn test_create_file_never_overwrites() {
    let (_dir, vault) = vault();
    vault.create_folder("papers").unwrap();
    let file = vault.create_file("papers/x.md", "first").unwrap();
    assert_eq!(file, NoteFile::new("papers/x.md"));

    assert!(vault.create_file("papers/x.md", "second").is_err());
    assert_eq!(vault.read_file(&file).unwrap(), "first");
}

#[test]
fn test_create_file_needs_parent() {
    let (_dir, vault) = vault();
    assert!(vault.create_file("missing/x.md", "").is_err());
}

#[test]
fn test_folder_children_sorted_without_hidden() {
    let (dir, vault) = vault();
    vault.create_folder("papers/archive").unwrap();
    fs::write(dir.path().join("papers/b.md"), "").unwrap();
    fs::write(dir.path().join("papers/a.md"), "").unwrap();
    fs::write(dir.path().join("papers/.DS_Store"), "").unwrap();

    let Some(Entry::Folder(folder)) = vault.entry("papers").unwrap() else {
        panic!("expected a folder");
    };
    assert_eq!(
        folder.children,
        vec![
            Child::File(NoteFile::new("papers/a.md")),
            Child::Folder("papers/archive".to_string()),
            Child::File(NoteFile::new("papers/b.md")),
        ]
    );
    assert_eq!(folder.first_file(), Some(&NoteFile::new("papers/a.md")));
}

#[test]
fn test_file_entry() {
    let (dir, vault) = vault();
    fs::write(dir.path().join("papers"), "").unwrap();
    assert!(matches!(
        vault.entry("papers").unwrap(),
        Some(Entry::File(ref f)) if f.path == "papers"
    ));
}

#[test]
fn test_paths_are_normalized() {
    let (dir, vault) = vault();
    vault.create_folder("/papers//").unwrap();
    vault.create_file("papers//x.md", "x").unwrap();
    assert!(dir.path().join("papers/x.md").is_file());
    assert_eq!(
        vault.locate(&NoteFile::new("/papers/x.md")),
        dir.path().join("papers/x.md")
    );
}

#[test]
fn test_escaping_the_vault_is_refused() {
    let (_dir, vault) = vault();
    assert!(vault.entry("../outside").is_err());
    assert!(vault.create_folder("papers/../../x").is_err());
    assert!(vault.create_file("./x.md", "").is_err());
}
