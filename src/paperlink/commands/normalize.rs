//! # Request Normalization
//!
//! Both protocol actions end in the same call: resolve a [`PaperRequest`].
//! They differ in how the request is dug out of the parameters.
//!
//! `paperlib` links carry the metadata directly and only need an `id`.
//!
//! `paperlib-open` links come in several shapes. They are matched against
//! [`OPEN_STRATEGIES`] in order and the first strategy whose `matches`
//! returns true builds the request; later strategies are never consulted.
//!
//! | Order | Strategy | Needs | id / title |
//! |-------|----------|-------|------------|
//! | 1 | `Path` | `path` | `path` minus a leading `paperlib/` |
//! | 2 | `VaultFile` | `vault` and `file` | percent-decoded `file` |
//! | 3 | `Metadata` | `id`, or `title` and `authors` | `id ?? title ?? "unknown"` / `title` |

use crate::error::{PaperlinkError, Result};
use crate::model::{PaperMetadata, PaperRequest};
use crate::protocol::ProtocolParams;
use log::warn;
use std::fmt;

const PATH_PREFIX: &str = "paperlib/";
const UNKNOWN_ID: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    Path,
    VaultFile,
    Metadata,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Direct => "direct",
            Strategy::Path => "path",
            Strategy::VaultFile => "vault-file",
            Strategy::Metadata => "metadata",
        };
        f.write_str(name)
    }
}

pub struct ExtractionStrategy {
    pub strategy: Strategy,
    pub matches: fn(&ProtocolParams) -> bool,
    pub extract: fn(&ProtocolParams) -> PaperRequest,
}

pub const OPEN_STRATEGIES: [ExtractionStrategy; 3] = [
    ExtractionStrategy {
        strategy: Strategy::Path,
        matches: has_path,
        extract: extract_path,
    },
    ExtractionStrategy {
        strategy: Strategy::VaultFile,
        matches: has_vault_file,
        extract: extract_vault_file,
    },
    ExtractionStrategy {
        strategy: Strategy::Metadata,
        matches: has_metadata,
        extract: extract_metadata,
    },
];

/// `paperlib` links: the parameters already are the request.
pub fn normalize_direct(params: &ProtocolParams) -> Result<PaperRequest> {
    let id = params.get("id").ok_or(PaperlinkError::MissingId)?;
    Ok(PaperRequest::new(id).with_metadata(metadata_of(params)))
}

/// `paperlib-open` links: first matching strategy wins.
pub fn normalize_open(params: &ProtocolParams) -> Result<(Strategy, PaperRequest)> {
    OPEN_STRATEGIES
        .iter()
        .find(|candidate| (candidate.matches)(params))
        .map(|candidate| (candidate.strategy, (candidate.extract)(params)))
        .ok_or(PaperlinkError::UnrecognizedParameters)
}

fn metadata_of(params: &ProtocolParams) -> PaperMetadata {
    PaperMetadata {
        title: params.owned("title"),
        authors: params.owned("authors"),
        year: params.owned("year"),
        doi: params.owned("doi"),
    }
}

fn has_path(params: &ProtocolParams) -> bool {
    params.has("path")
}

fn has_vault_file(params: &ProtocolParams) -> bool {
    params.has("vault") && params.has("file")
}

fn has_metadata(params: &ProtocolParams) -> bool {
    params.has("id") || (params.has("title") && params.has("authors"))
}

/// A single name used as both id and title.
fn named(name: String) -> PaperRequest {
    PaperRequest::new(name.clone()).with_metadata(PaperMetadata::default().with_title(name))
}

fn extract_path(params: &ProtocolParams) -> PaperRequest {
    let path = params.get("path").unwrap_or_default();
    named(path.strip_prefix(PATH_PREFIX).unwrap_or(path).to_string())
}

fn extract_vault_file(params: &ProtocolParams) -> PaperRequest {
    let file = params.get("file").unwrap_or_default();
    let decoded = match urlencoding::decode(file) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            warn!("event=file_param_undecodable file={:?} error={}", file, e);
            file.to_string()
        }
    };
    named(decoded)
}

fn extract_metadata(params: &ProtocolParams) -> PaperRequest {
    let id = params
        .get("id")
        .or_else(|| params.get("title"))
        .unwrap_or(UNKNOWN_ID);
    PaperRequest::new(id).with_metadata(metadata_of(params))
}
