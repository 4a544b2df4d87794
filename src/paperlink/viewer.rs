//! # Viewers
//!
//! Opening a note is the last step of every successful resolution. What
//! "opening" means depends on who invoked us: a browser handing over a
//! `paperlib://` link wants the note to pop up in the desktop's default
//! Markdown app, a terminal user wants their `$EDITOR`.

use crate::error::{PaperlinkError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

pub trait Viewer {
    /// Show the file at `location` to the user.
    fn open(&mut self, location: &Path) -> Result<()>;
}

/// Hands the file to the platform opener and returns immediately.
///
/// The path goes to the opener as a single argument; no shell parses it.
#[derive(Debug, Default)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&mut self, location: &Path) -> Result<()> {
        open::that_detached(location).map_err(|e| {
            PaperlinkError::Viewer(format!("Failed to open {}: {}", location.display(), e))
        })
    }
}

/// Opens the file in the user's editor and waits for it to close.
#[derive(Debug, Default)]
pub struct EditorViewer;

impl Viewer for EditorViewer {
    fn open(&mut self, location: &Path) -> Result<()> {
        let editor = get_editor()?;

        let status = Command::new(&editor)
            .arg(location)
            .status()
            .map_err(|e| PaperlinkError::Viewer(format!("Failed to launch editor '{}': {}", editor, e)))?;

        if !status.success() {
            return Err(PaperlinkError::Viewer(format!(
                "Editor '{}' exited with non-zero status",
                editor
            )));
        }
        Ok(())
    }
}

/// Gets the editor command from environment.
/// Checks $VISUAL, then $EDITOR, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(PaperlinkError::Viewer(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}
