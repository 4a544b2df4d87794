use crate::config::Settings;
use crate::error::{PaperlinkError, Result};
use crate::store::memory::InMemoryVault;
use crate::viewer::Viewer;
use std::path::{Path, PathBuf};

/// Viewer that remembers what it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingViewer {
    pub opened: Vec<PathBuf>,
    pub fail: bool,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            opened: Vec::new(),
            fail: true,
        }
    }
}

impl Viewer for RecordingViewer {
    fn open(&mut self, location: &Path) -> Result<()> {
        if self.fail {
            return Err(PaperlinkError::Viewer("Simulated viewer failure".to_string()));
        }
        self.opened.push(location.to_path_buf());
        Ok(())
    }
}

pub struct TestEnv {
    pub vault: InMemoryVault,
    pub viewer: RecordingViewer,
    pub settings: Settings,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            vault: InMemoryVault::new(),
            viewer: RecordingViewer::new(),
            settings: Settings::default(),
        }
    }

    pub fn with_template(mut self, template: &str) -> Self {
        self.settings.paper_note_template = template.to_string();
        self
    }

    pub fn with_folder(mut self, folder: &str) -> Self {
        self.settings.paper_notes_folder = folder.to_string();
        self
    }
}
