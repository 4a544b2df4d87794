//! # Paperlink Architecture
//!
//! Paperlink turns deep links from a reference manager (`paperlib://…`) into
//! Markdown paper notes inside a vault directory: it works out which paper a
//! link means, finds that paper's note (creating it from a template when it
//! does not exist yet) and opens it.
//!
//! Like the rest of the crate's layering, this is a library that happens to
//! have a CLI client, not the other way around.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints colored notices        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the vault, the viewer and the loaded settings       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Normalize protocol parameters, resolve notes             │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (store/, viewer.rs)                          │
//! │  - Vault trait: FsVault (production), InMemoryVault (tests) │
//! │  - Viewer trait: system opener, $EDITOR, recorder (tests)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Flow
//!
//! ```text
//! URL ─▶ protocol::ProtocolRequest ─▶ commands::normalize ─▶ PaperRequest
//!     ─▶ commands::resolve ─▶ folder ensured ─▶ note created or found
//!     ─▶ Viewer::open
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit` and never assumes a terminal. Diagnostics go through
//! the `log` facade; user-facing outcomes are [`commands::CmdMessage`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`protocol`]: Deep-link parsing
//! - [`store`]: Vault abstraction and implementations
//! - [`viewer`]: Opening notes for the user
//! - [`model`]: Core data types (`PaperRequest`, `NoteFile`, `Entry`)
//! - [`sanitize`], [`template`]: Note naming and note content
//! - [`config`]: Persisted settings
//! - [`logging`]: Log bootstrap
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod protocol;
pub mod sanitize;
pub mod store;
pub mod template;
pub mod viewer;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
