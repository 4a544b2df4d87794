//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! collaborators a command needs (a [`Vault`], a [`Viewer`], the loaded
//! [`Settings`] and where to persist them) and dispatches to
//! `commands/*.rs`.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, colors or prompts
//!
//! ## Generic Over Vault and Viewer
//!
//! - Production: `PaperlinkApi<FsVault, SystemViewer>` (or another viewer)
//! - Testing: `PaperlinkApi<InMemoryVault, RecordingViewer>`
//!
//! Most methods return a bare [`CmdResult`]: their failures are already
//! folded into error notices. Only [`PaperlinkApi::config`] returns `Result`
//! and leaves reporting to the caller.

use crate::commands::config::ConfigAction;
use crate::commands::create::PaperForm;
use crate::commands::{self, CmdResult};
use crate::config::Settings;
use crate::error::Result;
use crate::protocol::ProtocolParams;
use crate::store::Vault;
use crate::viewer::Viewer;
use std::path::PathBuf;

pub struct PaperlinkApi<V: Vault, W: Viewer> {
    vault: V,
    viewer: W,
    settings: Settings,
    settings_path: Option<PathBuf>,
}

impl<V: Vault, W: Viewer> PaperlinkApi<V, W> {
    pub fn new(vault: V, viewer: W, settings: Settings) -> Self {
        Self {
            vault,
            viewer,
            settings,
            settings_path: None,
        }
    }

    /// Persist settings changes to `path`.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn viewer(&self) -> &W {
        &self.viewer
    }

    /// A raw `paperlib://`, `paperlib-open://` or `obsidian://paperlib…` link.
    pub fn handle_url(&mut self, url: &str) -> CmdResult {
        commands::handle::url(&self.vault, &mut self.viewer, &self.settings, url)
    }

    pub fn paperlib(&mut self, params: &ProtocolParams) -> CmdResult {
        commands::handle::paperlib(&self.vault, &mut self.viewer, &self.settings, params)
    }

    pub fn paperlib_open(&mut self, params: &ProtocolParams) -> CmdResult {
        commands::handle::paperlib_open(&self.vault, &mut self.viewer, &self.settings, params)
    }

    pub fn create_note(&mut self, form: PaperForm) -> CmdResult {
        commands::create::run(&self.vault, &mut self.viewer, &self.settings, form)
    }

    pub fn open_folder(&mut self) -> CmdResult {
        commands::open_folder::run(&self.vault, &mut self.viewer, &self.settings)
    }

    pub fn ensure_folder(&self) -> CmdResult {
        commands::folder::report(&self.vault, &self.settings)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(
            &self.vault,
            &mut self.settings,
            self.settings_path.as_deref(),
            action,
        )
    }
}
