//! # Settings
//!
//! Settings live in a single JSON file. On load, whatever keys the file has are
//! merged over the defaults, so an empty object (or a file written by an older
//! version) is always valid.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `paperNotesFolder` | `papers` | Vault-relative folder holding paper notes |
//! | `paperNoteTemplate` | see [`DEFAULT_TEMPLATE`] | Template for new notes |
//! | `protocolHandlerEnabled` | `true` | Accept `paperlib://` links |
//!
//! The default location is `settings.json` in the per-user config directory
//! (via the `directories` crate).

use crate::error::{PaperlinkError, Result};
use crate::template::DEFAULT_TEMPLATE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILENAME: &str = "settings.json";
const DEFAULT_FOLDER: &str = "papers";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub paper_notes_folder: String,
    pub paper_note_template: String,
    pub protocol_handler_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paper_notes_folder: DEFAULT_FOLDER.to_string(),
            paper_note_template: DEFAULT_TEMPLATE.to_string(),
            protocol_handler_enabled: true,
        }
    }
}

/// The keys exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    PaperNotesFolder,
    PaperNoteTemplate,
    ProtocolHandlerEnabled,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::PaperNotesFolder,
        SettingKey::PaperNoteTemplate,
        SettingKey::ProtocolHandlerEnabled,
    ];

    pub fn parse(key: &str) -> Result<Self> {
        match key {
            "paper-notes-folder" => Ok(SettingKey::PaperNotesFolder),
            "paper-note-template" => Ok(SettingKey::PaperNoteTemplate),
            "protocol-handler-enabled" => Ok(SettingKey::ProtocolHandlerEnabled),
            other => Err(PaperlinkError::UnknownSetting(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::PaperNotesFolder => "paper-notes-folder",
            SettingKey::PaperNoteTemplate => "paper-note-template",
            SettingKey::ProtocolHandlerEnabled => "protocol-handler-enabled",
        }
    }
}

impl Settings {
    /// Load settings from `path`, or return defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(PaperlinkError::Io)?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(PaperlinkError::Serialization)?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PaperlinkError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(PaperlinkError::Serialization)?;
        fs::write(path, content).map_err(PaperlinkError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: SettingKey) -> String {
        match key {
            SettingKey::PaperNotesFolder => self.paper_notes_folder.clone(),
            SettingKey::PaperNoteTemplate => self.paper_note_template.clone(),
            SettingKey::ProtocolHandlerEnabled => self.protocol_handler_enabled.to_string(),
        }
    }

    pub fn set(&mut self, key: SettingKey, value: &str) -> Result<()> {
        match key {
            SettingKey::PaperNotesFolder => self.paper_notes_folder = value.to_string(),
            SettingKey::PaperNoteTemplate => self.paper_note_template = value.to_string(),
            SettingKey::ProtocolHandlerEnabled => {
                self.protocol_handler_enabled = parse_bool(value).ok_or_else(|| {
                    PaperlinkError::InvalidSetting {
                        key: key.as_str().to_string(),
                        value: value.to_string(),
                    }
                })?;
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// `settings.json` in the per-user config directory, if the platform has one.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "paperlink", "paperlink")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
}

/// Per-user directory for rotating log files.
pub fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "paperlink", "paperlink")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.paper_notes_folder, "papers");
        assert_eq!(settings.paper_note_template, DEFAULT_TEMPLATE);
        assert!(settings.protocol_handler_enabled);
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"paperNotesFolder": "refs"}"#).unwrap();
        assert_eq!(settings.paper_notes_folder, "refs");
        assert_eq!(settings.paper_note_template, DEFAULT_TEMPLATE);
        assert!(settings.protocol_handler_enabled);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"protocolHandlerEnabled": false, "theme": "dark"}"#).unwrap();
        assert!(!settings.protocol_handler_enabled);
    }

    #[test]
    fn test_persisted_layout_uses_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["paperNotesFolder"], "papers");
        assert_eq!(json["protocolHandlerEnabled"], true);
        assert!(json.get("paperNoteTemplate").is_some());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILENAME);

        let mut settings = Settings::default();
        settings.set(SettingKey::PaperNotesFolder, "library/papers").unwrap();
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.paper_notes_folder, "library/papers");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(PaperlinkError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_bool_accepts_common_spellings() {
        let mut settings = Settings::default();
        settings.set(SettingKey::ProtocolHandlerEnabled, "off").unwrap();
        assert!(!settings.protocol_handler_enabled);
        settings.set(SettingKey::ProtocolHandlerEnabled, "TRUE").unwrap();
        assert!(settings.protocol_handler_enabled);
    }

    #[test]
    fn test_set_bool_rejects_garbage() {
        let mut settings = Settings::default();
        let err = settings
            .set(SettingKey::ProtocolHandlerEnabled, "maybe")
            .unwrap_err();
        assert!(matches!(err, PaperlinkError::InvalidSetting { .. }));
        assert!(settings.protocol_handler_enabled);
    }

    #[test]
    fn test_key_parsing() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::parse(key.as_str()).unwrap(), key);
        }
        assert!(matches!(
            SettingKey::parse("file-ext"),
            Err(PaperlinkError::UnknownSetting(_))
        ));
    }
}
