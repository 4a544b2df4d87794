//! # Protocol Requests
//!
//! A reference manager hands us a deep link; this module turns the link into
//! an action plus a flat parameter map. Deciding what the parameters *mean*
//! is the normalizer's job (`commands::normalize`).
//!
//! ## Accepted shapes
//!
//! ```text
//! paperlib://open?id=…&title=…               → Action::Paperlib
//! paperlib-open://open?path=paperlib/Foo     → Action::PaperlibOpen
//! obsidian://paperlib?id=…                   → Action::Paperlib
//! obsidian://paperlib-open?vault=v&file=…    → Action::PaperlibOpen
//! ```
//!
//! With the `obsidian` scheme the host part names the action; with the
//! dedicated schemes the host part is ignored.
//!
//! Query keys and values are percent-decoded once here. A `+` is kept as a
//! literal plus sign, the way the reference manager's links are written
//! (`title=C++ Primer`). For repeated keys the last value wins.

use crate::error::{PaperlinkError, Result};
use log::warn;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

const HOST_SCHEME: &str = "obsidian";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Direct metadata links: `id`, `title`, `authors`, `year`, `doi`.
    Paperlib,
    /// Generic open links: `path`, or `vault` + `file`, or metadata.
    PaperlibOpen,
}

impl Action {
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "paperlib" => Ok(Action::Paperlib),
            "paperlib-open" => Ok(Action::PaperlibOpen),
            other => Err(PaperlinkError::UnsupportedAction(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Paperlib => "paperlib",
            Action::PaperlibOpen => "paperlib-open",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw key/value parameters of one protocol request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolParams(BTreeMap<String, String>);

impl ProtocolParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// The value of `key` if it is present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Like [`get`](Self::get) but owned, for building metadata.
    pub fn owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProtocolParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ProtocolParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl fmt::Display for ProtocolParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={:?}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolRequest {
    pub action: Action,
    pub params: ProtocolParams,
}

impl ProtocolRequest {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim()).map_err(|e| PaperlinkError::InvalidUrl(e.to_string()))?;

        let action = if url.scheme() == HOST_SCHEME {
            let host = url.host_str().ok_or_else(|| {
                PaperlinkError::InvalidUrl(format!("{} URL without an action", HOST_SCHEME))
            })?;
            Action::parse(host)?
        } else {
            Action::parse(url.scheme())?
        };

        let params = url
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();

        Ok(Self { action, params })
    }
}

/// Percent-decode one query component, keeping the raw text if the escapes
/// do not form UTF-8.
fn decode(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(Cow::Borrowed(text)) => text.to_string(),
        Ok(Cow::Owned(text)) => text,
        Err(e) => {
            warn!("event=query_undecodable raw={:?} error={}", raw, e);
            raw.to_string()
        }
    }
}
