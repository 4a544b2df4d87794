//! # Command Layer
//!
//! This module contains the **core business logic** of paperlink. Each
//! operation lives in its own submodule and implements plain Rust functions
//! over a [`Vault`](crate::store::Vault), a [`Viewer`](crate::viewer::Viewer)
//! and the current [`Settings`](crate::config::Settings).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, colors or prompts
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return data, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries the notes touched,
//! the outcome of a resolution, the locations handed to the viewer, settings
//! to display and the user-visible notices ([`CmdMessage`]).
//!
//! ## Two Kinds of Commands
//!
//! The building blocks ([`folder::run`], [`resolve`], [`normalize`],
//! [`config`]) return `Result` and let errors propagate with `?`. The entry
//! points ([`handle`], [`create`], [`open_folder`], [`folder::report`]) never
//! fail: every error is turned into exactly one error notice and one log
//! line.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Tests use
//! `InMemoryVault` and `RecordingViewer` from [`crate::test_utils`].
//!
//! ## Command Modules
//!
//! - [`folder`]: Ensure the notes folder exists
//! - [`resolve`]: Find or create the note for a paper and open it
//! - [`normalize`]: Turn protocol parameters into a paper request
//! - [`handle`]: Protocol entry points (`paperlib`, `paperlib-open`)
//! - [`create`]: Manual-entry form
//! - [`open_folder`]: Open the first note in the notes folder
//! - [`config`]: Show and change settings

use crate::config::SettingKey;
use crate::error::PaperlinkError;
use crate::model::{NoteFile, NoteOutcome};
use log::error;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod folder;
pub mod handle;
pub mod normalize;
pub mod open_folder;
pub mod resolve;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub notes: Vec<NoteFile>,
    pub outcome: Option<NoteOutcome>,
    pub opened: Vec<PathBuf>,
    pub settings: Vec<(SettingKey, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// Fold `other` into `self`, keeping message order.
    pub fn merge(&mut self, other: CmdResult) {
        self.notes.extend(other.notes);
        if other.outcome.is_some() {
            self.outcome = other.outcome;
        }
        self.opened.extend(other.opened);
        self.settings.extend(other.settings);
        self.messages.extend(other.messages);
    }
}

/// Turn an error into the single notice an entry point reports.
pub(crate) fn failure(event: &str, notice_prefix: &str, err: &PaperlinkError) -> CmdResult {
    error!("event={} kind={:?} error={}", event, err.kind(), err);
    CmdResult::default().with_message(CmdMessage::error(format!("{}{}", notice_prefix, err)))
}
