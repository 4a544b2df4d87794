//! Protocol entry points.
//!
//! These never return an error: whatever goes wrong becomes one error notice
//! in the returned [`CmdResult`] plus one log line.

use crate::commands::normalize::{normalize_direct, normalize_open, Strategy};
use crate::commands::{failure, resolve, CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::PaperlinkError;
use crate::model::PaperRequest;
use crate::protocol::{Action, ProtocolParams, ProtocolRequest};
use crate::store::Vault;
use crate::viewer::Viewer;
use log::info;

/// Handle a raw deep link such as `paperlib://open?id=…`.
pub fn url<V: Vault, W: Viewer>(
    vault: &V,
    viewer: &mut W,
    settings: &Settings,
    raw: &str,
) -> CmdResult {
    if !settings.protocol_handler_enabled {
        return failure("protocol_disabled", "Error: ", &PaperlinkError::ProtocolDisabled);
    }

    match ProtocolRequest::parse(raw) {
        Ok(request) => dispatch(vault, viewer, settings, &request),
        Err(err) => failure("protocol_url_invalid", "Error: ", &err),
    }
}

pub fn dispatch<V: Vault, W: Viewer>(
    vault: &V,
    viewer: &mut W,
    settings: &Settings,
    request: &ProtocolRequest,
) -> CmdResult {
    match request.action {
        Action::Paperlib => paperlib(vault, viewer, settings, &request.params),
        Action::PaperlibOpen => paperlib_open(vault, viewer, settings, &request.params),
    }
}

/// `paperlib`: metadata arrives as-is, `id` is required.
pub fn paperlib<V: Vault, W: Viewer>(
    vault: &V,
    viewer: &mut W,
    settings: &Settings,
    params: &ProtocolParams,
) -> CmdResult {
    info!("event=protocol_request action=paperlib params=[{}]", params);

    match normalize_direct(params) {
        Ok(request) => open_request(vault, viewer, settings, Strategy::Direct, &request),
        Err(err) => failure("protocol_rejected", "Error: ", &err),
    }
}

/// `paperlib-open`: several parameter shapes, tried in a fixed order.
pub fn paperlib_open<V: Vault, W: Viewer>(
    vault: &V,
    viewer: &mut W,
    settings: &Settings,
    params: &ProtocolParams,
) -> CmdResult {
    info!("event=protocol_request action=paperlib-open params=[{}]", params);

    match normalize_open(params) {
        Ok((strategy, request)) => open_request(vault, viewer, settings, strategy, &request),
        Err(err) => failure("protocol_rejected", "Error: ", &err),
    }
}

fn open_request<V: Vault, W: Viewer>(
    vault: &V,
    viewer: &mut W,
    settings: &Settings,
    strategy: Strategy,
    request: &PaperRequest,
) -> CmdResult {
    info!("event=protocol_normalized strategy={} id={:?}", strategy, request.id);

    match resolve::run(vault, viewer, settings, request) {
        Ok(result) => result.with_message(CmdMessage::success(format!(
            "Successfully opened paper: {}",
            request.label()
        ))),
        Err(err) => failure("protocol_failed", "Error opening paper: ", &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{NoteFile, NoteOutcome};
    use crate::test_utils::TestEnv;
    use std::path::PathBuf;

    fn params(pairs: &[(&str, &str)]) -> ProtocolParams {
        pairs.iter().copied().collect()
    }

    fn contents(result: &CmdResult) -> Vec<&str> {
        result.messages.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn paperlib_creates_and_reports() {
        let mut env = TestEnv::new();
        let result = paperlib(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            &params(&[("id", "10.1/abc"), ("title", "A Study of X"), ("year", "2024")]),
        );

        assert!(!result.has_errors());
        assert_eq!(result.outcome, Some(NoteOutcome::Created));
        assert_eq!(
            contents(&result),
            vec![
                "Created new paper note: A Study of X",
                "Successfully opened paper: A Study of X",
            ]
        );
    }

    #[test]
    fn paperlib_without_id_touches_nothing() {
        let mut env = TestEnv::new();
        let result = paperlib(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            &params(&[("title", "T")]),
        );

        assert!(result.has_errors());
        assert_eq!(contents(&result), vec!["Error: No paper ID provided"]);
        assert!(env.vault.entry("papers").unwrap().is_none());
        assert!(env.viewer.opened.is_empty());
    }

    #[test]
    fn open_with_path() {
        let mut env = TestEnv::new();
        let result = paperlib_open(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            &params(&[("path", "paperlib/foo")]),
        );
        assert_eq!(result.notes, vec![NoteFile::new("papers/foo.md")]);
        assert_eq!(
            result.messages.last().map(|m| m.content.as_str()),
            Some("Successfully opened paper: foo")
        );
    }

    #[test]
    fn open_with_vault_and_file() {
        let mut env = TestEnv::new();
        let result = paperlib_open(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            &params(&[("vault", "v"), ("file", "My%20Paper")]),
        );
        assert_eq!(result.notes, vec![NoteFile::new("papers/My Paper.md")]);
    }

    #[test]
    fn open_with_unrecognized_parameters() {
        let mut env = TestEnv::new();
        let result = paperlib_open(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            &params(&[("foo", "bar")]),
        );
        assert_eq!(
            contents(&result),
            vec!["Error: Could not recognize parameters in the URL"]
        );
        assert_eq!(env.vault.file_count(), 0);
        assert!(env.vault.entry("papers").unwrap().is_none());
    }

    #[test]
    fn resolver_failure_is_reported_not_retried() {
        let mut env = TestEnv::new();
        env.vault.put_file("papers", "occupied");

        // `path` matches first; its failure must not fall through to `id`.
        let result = paperlib_open(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            &params(&[("path", "paperlib/foo"), ("id", "other")]),
        );
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0]
            .content
            .starts_with("Error opening paper: Papers folder papers is unavailable"));
        assert_eq!(env.vault.file_count(), 1);
    }

    #[test]
    fn empty_path_remainder_is_a_missing_id() {
        let mut env = TestEnv::new();
        let result = paperlib_open(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            &params(&[("path", "paperlib/")]),
        );
        assert_eq!(
            contents(&result),
            vec!["Error opening paper: No paper ID provided"]
        );
    }

    #[test]
    fn url_dispatches_by_action() {
        let mut env = TestEnv::new();
        let result = url(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            "paperlib-open://open?vault=v&file=My%2520Paper",
        );
        assert!(!result.has_errors());
        assert_eq!(result.notes, vec![NoteFile::new("papers/My Paper.md")]);

        let result = url(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            "obsidian://paperlib?id=x7",
        );
        assert_eq!(result.notes, vec![NoteFile::new("papers/x7.md")]);
    }

    #[test]
    fn shell_metacharacters_reach_viewer_as_one_path() {
        let mut env = TestEnv::new();
        let result = url(
            &env.vault,
            &mut env.viewer,
            &env.settings,
            "paperlib://open?id=1&title=a%26calc%26%5E%25x%25",
        );
        assert!(!result.has_errors());
        assert_eq!(result.notes, vec![NoteFile::new("papers/a&calc&^%x%.md")]);
        assert_eq!(
            env.viewer.opened,
            vec![PathBuf::from("memory://papers/a&calc&^%x%.md")]
        );
    }

    #[test]
    fn url_refused_when_disabled() {
        let mut env = TestEnv::new();
        env.settings.protocol_handler_enabled = false;
        let result = url(&env.vault, &mut env.viewer, &env.settings, "paperlib://x?id=1");
        assert!(result.has_errors());
        assert_eq!(env.vault.file_count(), 0);
    }

    #[test]
    fn bad_url_is_an_error_notice() {
        let mut env = TestEnv::new();
        let result = url(&env.vault, &mut env.viewer, &env.settings, "mailto:someone");
        assert!(result.has_errors());
        assert!(env.viewer.opened.is_empty());
    }
}
