//! # Storage Layer
//!
//! This module defines the storage abstraction for paperlink. The [`Vault`]
//! trait is the small slice of "host file storage" the note logic needs:
//! look up what occupies a path, create a folder, create a file, read a file.
//!
//! ## Paths
//!
//! Vault paths are vault-relative and `/`-separated, the way a user writes
//! them in settings (`papers`, `library/papers`). Every implementation runs
//! them through [`normalize_path`] first, so `papers/`, `/papers` and
//! `papers//x.md` address the same entries as `papers` and `papers/x.md`.
//!
//! ## Existence is Truth
//!
//! Whatever [`Vault::entry`] reports is authoritative. The note logic never
//! compares or merges content; a file at the derived path *is* the note.
//! [`Vault::create_file`] never overwrites: creating over an existing entry
//! is an error.
//!
//! ## Implementations
//!
//! - [`fs::FsVault`]: a directory on disk.
//! - [`memory::InMemoryVault`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{Entry, NoteFile};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for the vault holding paper notes.
pub trait Vault {
    /// What occupies `path`, if anything. Folders list their immediate children.
    fn entry(&self, path: &str) -> Result<Option<Entry>>;

    /// Create a folder (and any missing parents).
    fn create_folder(&self, path: &str) -> Result<()>;

    /// Create a new file. Fails if anything already occupies `path`.
    fn create_file(&self, path: &str, content: &str) -> Result<NoteFile>;

    /// Read a file's content.
    fn read_file(&self, file: &NoteFile) -> Result<String>;

    /// Where a viewer can find the file. For FsVault this is the real path,
    /// for InMemoryVault a virtual one.
    fn locate(&self, file: &NoteFile) -> PathBuf;
}

/// Collapse repeated separators and strip leading/trailing ones.
pub fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_and_collapses() {
        assert_eq!(normalize_path("papers"), "papers");
        assert_eq!(normalize_path("/papers/"), "papers");
        assert_eq!(normalize_path("a//b///c.md"), "a/b/c.md");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_path("my papers/ A .md"), "my papers/ A .md");
    }
}
