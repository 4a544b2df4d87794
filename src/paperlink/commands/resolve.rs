//! Find the note for a paper, creating it from the template if needed, and
//! open it.
//!
//! The note lives at `<folder>/<name>.md`, where `name` is the sanitized title
//! or, without a title, the sanitized id. Whatever file already sits at that
//! path is the note: it is opened as-is, never re-templated or merged. Two
//! papers whose titles sanitize to the same name therefore share one note.
//!
//! A title made only of whitespace still counts as a title.

use crate::commands::folder::ensure_folder;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{PaperlinkError, Result};
use crate::model::{Entry, NoteOutcome, PaperRequest};
use crate::sanitize::sanitize;
use crate::store::Vault;
use crate::template::expand;
use crate::viewer::Viewer;
use log::info;

/// Where the note for `request` lives: `(name, path)`.
pub fn note_location(folder: &str, request: &PaperRequest) -> (String, String) {
    let name = match request.metadata.title() {
        Some(title) => sanitize(title),
        None => sanitize(&request.id),
    };
    let path = format!("{}/{}.md", folder, name);
    (name, path)
}

pub fn run<V: Vault, W: Viewer>(
    vault: &V,
    viewer: &mut W,
    settings: &Settings,
    request: &PaperRequest,
) -> Result<CmdResult> {
    if request.id.is_empty() {
        return Err(PaperlinkError::MissingId);
    }

    let folder = &settings.paper_notes_folder;
    ensure_folder(vault, folder).map_err(|source| PaperlinkError::FolderUnavailable {
        path: folder.clone(),
        source: Box::new(source),
    })?;

    let (name, path) = note_location(folder, request);
    let mut result = CmdResult::default();

    let (file, outcome) = match vault.entry(&path)? {
        Some(Entry::File(file)) => {
            result.add_message(CmdMessage::info(format!(
                "Opening existing paper note: {}",
                name
            )));
            (file, NoteOutcome::OpenedExisting)
        }
        Some(Entry::Folder(_)) => return Err(PaperlinkError::NoteCollision(path)),
        None => {
            let content = expand(&settings.paper_note_template, &request.id, &request.metadata);
            let file = vault.create_file(&path, &content)?;
            result.add_message(CmdMessage::success(format!(
                "Created new paper note: {}",
                name
            )));
            (file, NoteOutcome::Created)
        }
    };

    info!(
        "event=note_resolved outcome={:?} path={:?} id={:?}",
        outcome, file.path, request.id
    );

    let location = vault.locate(&file);
    viewer.open(&location)?;

    result.notes.push(file);
    result.outcome = Some(outcome);
    result.opened.push(location);
    Ok(result)
}
