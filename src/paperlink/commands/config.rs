use crate::commands::{folder, CmdMessage, CmdResult};
use crate::config::{SettingKey, Settings};
use crate::error::Result;
use crate::store::Vault;
use log::info;
use std::path::Path;

pub const RESTART_NOTICE: &str = "Please restart paperlink for this change to take effect";

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set {
        key: String,
        value: String,
        /// Also ensure the folder when setting `paper-notes-folder`.
        create: bool,
    },
}

/// Show or change settings. `path` is where changes are persisted; `None`
/// keeps them in memory only.
pub fn run<V: Vault>(
    vault: &V,
    settings: &mut Settings,
    path: Option<&Path>,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let mut result = CmdResult::default();
            for key in SettingKey::ALL {
                result.settings.push((key, settings.get(key)));
            }
            Ok(result)
        }
        ConfigAction::ShowKey(name) => {
            let key = SettingKey::parse(&name)?;
            let mut result = CmdResult::default();
            result.settings.push((key, settings.get(key)));
            Ok(result)
        }
        ConfigAction::Set { key, value, create } => {
            let key = SettingKey::parse(&key)?;
            let previous = settings.get(key);
            settings.set(key, &value)?;

            if let Some(path) = path {
                settings.save(path)?;
            }
            info!("event=setting_changed key={} value={:?}", key.as_str(), settings.get(key));

            let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
                "{} set to {}",
                key.as_str(),
                settings.get(key)
            )));

            if key == SettingKey::ProtocolHandlerEnabled && previous != settings.get(key) {
                result.add_message(CmdMessage::info(RESTART_NOTICE));
            }

            if create {
                if key == SettingKey::PaperNotesFolder {
                    result.merge(folder::report(vault, settings));
                } else {
                    result.add_message(CmdMessage::warning(format!(
                        "--create only applies to {}",
                        SettingKey::PaperNotesFolder.as_str()
                    )));
                }
            }

            Ok(result)
        }
    }
}
