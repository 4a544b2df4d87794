/// Optional bibliographic attributes of a paper.
///
/// An empty string and `None` mean the same thing: the value is not present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperMetadata {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub year: Option<String>,
    pub doi: Option<String>,
}

impl PaperMetadata {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn authors(&self) -> Option<&str> {
        present(&self.authors)
    }

    pub fn year(&self) -> Option<&str> {
        present(&self.year)
    }

    pub fn doi(&self) -> Option<&str> {
        present(&self.doi)
    }
}

/// A request to open (or create) the note for one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRequest {
    pub id: String,
    pub metadata: PaperMetadata,
}

impl PaperRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: PaperMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: PaperMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// What to call the paper in notices: the title when present, else the id.
    pub fn label(&self) -> &str {
        self.metadata.title().unwrap_or(&self.id)
    }
}

/// A note file inside the vault, addressed by its vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteFile {
    pub path: String,
}

impl NoteFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Last path segment, e.g. `A Study.md`.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// An immediate child of a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Folder(String),
    File(NoteFile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub path: String,
    /// Immediate children, sorted by name.
    pub children: Vec<Child>,
}

impl FolderEntry {
    pub fn first_file(&self) -> Option<&NoteFile> {
        self.children.iter().find_map(|child| match child {
            Child::File(file) => Some(file),
            Child::Folder(_) => None,
        })
    }
}

/// Whatever occupies a vault path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Folder(FolderEntry),
    File(NoteFile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOutcome {
    Created,
    OpenedExisting,
}

pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
