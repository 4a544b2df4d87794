use crate::commands::{failure, CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{ErrorKind, PaperlinkError, Result};
use crate::model::Entry;
use crate::store::Vault;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderStatus {
    Existing,
    Created,
}

/// Make sure a folder exists at `path`. Safe to call any number of times.
///
/// A file sitting at `path` is a collision and is left untouched.
pub fn ensure_folder<V: Vault>(vault: &V, path: &str) -> Result<FolderStatus> {
    if path.trim().is_empty() {
        return Err(PaperlinkError::InvalidFolderPath);
    }

    match vault.entry(path)? {
        Some(Entry::Folder(_)) => {
            debug!("event=folder_exists path={:?}", path);
            Ok(FolderStatus::Existing)
        }
        Some(Entry::File(_)) => Err(PaperlinkError::FolderCollision(path.to_string())),
        None => {
            vault.create_folder(path)?;
            info!("event=folder_created path={:?}", path);
            Ok(FolderStatus::Created)
        }
    }
}

/// The "Create" action of the settings surface: ensure the configured folder.
pub fn run<V: Vault>(vault: &V, settings: &Settings) -> Result<CmdResult> {
    ensure_folder(vault, &settings.paper_notes_folder)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Folder created/verified: {}",
        settings.paper_notes_folder
    )));
    Ok(result)
}

/// Like [`run`], but a failure becomes a single error notice.
pub fn report<V: Vault>(vault: &V, settings: &Settings) -> CmdResult {
    match run(vault, settings) {
        Ok(result) => result,
        Err(err) => {
            let prefix = match err.kind() {
                ErrorKind::Input => "",
                ErrorKind::Collision => "Error: ",
                ErrorKind::Storage => "Error creating papers folder: ",
            };
            failure("folder_failed", prefix, &err)
        }
    }
}
