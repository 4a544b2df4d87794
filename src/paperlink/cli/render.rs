use colored::Colorize;
use paperlink::commands::{CmdMessage, MessageLevel};
use paperlink::config::SettingKey;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// A single setting prints as its bare value; several print as
/// `key = value` lines with multi-line values escaped onto one line.
pub(super) fn render_settings(settings: &[(SettingKey, String)]) -> String {
    match settings {
        [] => String::new(),
        [(_, value)] => format!("{}\n", value),
        all => all
            .iter()
            .map(|(key, value)| format!("{} = {}\n", key.as_str(), one_line(value)))
            .collect(),
    }
}

fn one_line(value: &str) -> String {
    if value.contains('\n') {
        format!("{:?}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_setting_is_bare() {
        let out = render_settings(&[(SettingKey::PaperNotesFolder, "papers".to_string())]);
        assert_eq!(out, "papers\n");
    }

    #[test]
    fn test_all_settings_one_per_line() {
        let out = render_settings(&[
            (SettingKey::PaperNotesFolder, "papers".to_string()),
            (SettingKey::PaperNoteTemplate, "a\nb".to_string()),
            (SettingKey::ProtocolHandlerEnabled, "true".to_string()),
        ]);
        assert_eq!(
            out,
            "paper-notes-folder = papers\npaper-note-template = \"a\\nb\"\nprotocol-handler-enabled = true\n"
        );
    }

    #[test]
    fn test_no_settings_renders_nothing() {
        assert_eq!(render_settings(&[]), "");
    }
}
