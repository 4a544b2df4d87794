use thiserror::Error;

/// Broad classes of failure, used to pick the notice wording and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing user input. Nothing was mutated.
    Input,
    /// A path is occupied by the wrong kind of entry.
    Collision,
    /// The storage layer (or the viewer) failed underneath us.
    Storage,
}

#[derive(Error, Debug)]
pub enum PaperlinkError {
    #[error("No paper ID provided")]
    MissingId,

    #[error("Please enter a valid folder path")]
    InvalidFolderPath,

    #[error("Could not recognize parameters in the URL")]
    UnrecognizedParameters,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported protocol action: {0}")]
    UnsupportedAction(String),

    #[error("Protocol handler is disabled (set protocol-handler-enabled to true)")]
    ProtocolDisabled,

    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: String, value: String },

    #[error("Unknown config key: {0}")]
    UnknownSetting(String),

    #[error("{0} exists but is not a folder")]
    FolderCollision(String),

    #[error("{0} exists but is not a file")]
    NoteCollision(String),

    #[error("Papers folder {path} is unavailable: {source}")]
    FolderUnavailable {
        path: String,
        #[source]
        source: Box<PaperlinkError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Viewer error: {0}")]
    Viewer(String),
}

impl PaperlinkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaperlinkError::MissingId
            | PaperlinkError::InvalidFolderPath
            | PaperlinkError::UnrecognizedParameters
            | PaperlinkError::InvalidUrl(_)
            | PaperlinkError::UnsupportedAction(_)
            | PaperlinkError::ProtocolDisabled
            | PaperlinkError::InvalidSetting { .. }
            | PaperlinkError::UnknownSetting(_) => ErrorKind::Input,
            PaperlinkError::FolderCollision(_) | PaperlinkError::NoteCollision(_) => {
                ErrorKind::Collision
            }
            PaperlinkError::FolderUnavailable { source, .. } => source.kind(),
            PaperlinkError::Io(_)
            | PaperlinkError::Serialization(_)
            | PaperlinkError::Store(_)
            | PaperlinkError::Viewer(_) => ErrorKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaperlinkError>;
