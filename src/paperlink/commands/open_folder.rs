use crate::commands::{failure, CmdMessage, CmdResult};
use crate::config::Settings;
use crate::model::Entry;
use crate::store::Vault;
use crate::viewer::Viewer;
use log::info;

/// Open the first note (by name) in the configured folder.
///
/// Nothing is created: a missing folder is only reported.
pub fn run<V: Vault, W: Viewer>(vault: &V, viewer: &mut W, settings: &Settings) -> CmdResult {
    let folder = &settings.paper_notes_folder;

    let entry = match vault.entry(folder) {
        Ok(entry) => entry,
        Err(err) => return failure("open_folder_failed", "Error: ", &err),
    };

    let folder_entry = match entry {
        Some(Entry::Folder(folder_entry)) => folder_entry,
        _ => {
            return CmdResult::default().with_message(CmdMessage::error(format!(
                "Papers folder not found: {}",
                folder
            )))
        }
    };

    let Some(file) = folder_entry.first_file() else {
        return CmdResult::default().with_message(CmdMessage::warning(format!(
            "No file found in papers folder: {}",
            folder
        )));
    };

    let location = vault.locate(file);
    if let Err(err) = viewer.open(&location) {
        return failure("open_folder_failed", "Error: ", &err);
    }
    info!("event=folder_opened path={:?} file={:?}", folder, file.path);

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Opened papers folder: {}",
        folder
    )));
    result.notes.push(file.clone());
    result.opened.push(location);
    result
}
