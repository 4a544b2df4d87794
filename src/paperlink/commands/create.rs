//! Manual entry: the user types in what a protocol link would have carried.

use crate::commands::{failure, resolve, CmdMessage, CmdResult};
use crate::config::Settings;
use crate::model::{PaperMetadata, PaperRequest};
use crate::store::Vault;
use crate::viewer::Viewer;

pub const ID_REQUIRED: &str = "Paper ID is required";

/// Raw form fields, as typed.
#[derive(Debug, Clone, Default)]
pub struct PaperForm {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub year: String,
    pub doi: String,
}

impl PaperForm {
    /// Trim every field. `None` when the id is blank, which blocks submission.
    pub fn into_request(self) -> Option<PaperRequest> {
        let id = self.id.trim();
        if id.is_empty() {
            return None;
        }

        let metadata = PaperMetadata {
            title: field(&self.title),
            authors: field(&self.authors),
            year: field(&self.year),
            doi: field(&self.doi),
        };
        Some(PaperRequest::new(id).with_metadata(metadata))
    }
}

fn field(raw: &str) -> Option<String> {
    Some(raw.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn run<V: Vault, W: Viewer>(
    vault: &V,
    viewer: &mut W,
    settings: &Settings,
    form: PaperForm,
) -> CmdResult {
    let Some(request) = form.into_request() else {
        return CmdResult::default().with_message(CmdMessage::error(ID_REQUIRED));
    };

    match resolve::run(vault, viewer, settings, &request) {
        Ok(result) => result,
        Err(err) => failure("manual_create_failed", "Error creating paper note: ", &err),
    }
}
