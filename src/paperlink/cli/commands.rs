//! # CLI Layer
//!
//! This module is **one possible UI client** for paperlink. It is the only
//! place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, prompts)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads settings and builds the `PaperlinkApi`
//! - `handle_*()`: Per-command handlers that call the API
//! - `print_*()` / `render_*()`: Output formatting (see `render.rs`)
//!
//! Every invocation ends by printing the notices it produced. The exit status
//! is non-zero when any of them is an error.

use super::prompt::fill_form;
use super::render::{print_messages, render_settings};
use super::setup::{Cli, Commands, ViewerKind};
use clap::Parser;
use log::{error, warn};
use paperlink::api::PaperlinkApi;
use paperlink::commands::config::ConfigAction;
use paperlink::commands::create::PaperForm;
use paperlink::commands::{CmdMessage, CmdResult};
use paperlink::config::{default_log_dir, default_settings_path, Settings};
use paperlink::error::Result;
use paperlink::logging::init_logging;
use paperlink::store::fs::FsVault;
use paperlink::viewer::{EditorViewer, SystemViewer, Viewer};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Writes the note's path to stdout, for scripts and tests.
#[derive(Debug, Default)]
struct PrintViewer;

impl Viewer for PrintViewer {
    fn open(&mut self, location: &Path) -> Result<()> {
        println!("{}", location.display());
        Ok(())
    }
}

/// The viewer picked with `--viewer`.
enum CliViewer {
    System(SystemViewer),
    Editor(EditorViewer),
    Print(PrintViewer),
}

impl From<ViewerKind> for CliViewer {
    fn from(kind: ViewerKind) -> Self {
        match kind {
            ViewerKind::System => CliViewer::System(SystemViewer),
            ViewerKind::Editor => CliViewer::Editor(EditorViewer),
            ViewerKind::Print => CliViewer::Print(PrintViewer),
        }
    }
}

impl Viewer for CliViewer {
    fn open(&mut self, location: &Path) -> Result<()> {
        match self {
            CliViewer::System(viewer) => viewer.open(location),
            CliViewer::Editor(viewer) => viewer.open(location),
            CliViewer::Print(viewer) => viewer.open(location),
        }
    }
}

struct AppContext {
    api: PaperlinkApi<FsVault, CliViewer>,
}

/// Returns whether the invocation finished without error notices.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    start_logging(&cli);

    let mut ctx = init_context(&cli)?;

    let result = match cli.command {
        Commands::Handle { url } => ctx.api.handle_url(&url),
        Commands::Create {
            id,
            title,
            authors,
            year,
            doi,
        } => {
            let form = PaperForm {
                id: id.unwrap_or_default(),
                title: title.unwrap_or_default(),
                authors: authors.unwrap_or_default(),
                year: year.unwrap_or_default(),
                doi: doi.unwrap_or_default(),
            };
            handle_create(&mut ctx, form)?
        }
        Commands::OpenFolder => ctx.api.open_folder(),
        Commands::EnsureFolder => ctx.api.ensure_folder(),
        Commands::Config { key, value, create } => handle_config(&mut ctx, key, value, create),
    };

    print!("{}", render_settings(&result.settings));
    print_messages(&result.messages);
    Ok(!result.has_errors())
}

fn start_logging(cli: &Cli) {
    let log_dir = cli.log_dir.clone().or_else(default_log_dir);
    if let Err(e) = init_logging(cli.verbose, log_dir.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.vault {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let root = std::path::absolute(&root).unwrap_or(root);

    let settings_path = cli.config.clone().or_else(default_settings_path);
    let settings = match &settings_path {
        Some(path) => Settings::load(path)?,
        None => {
            warn!("event=settings_unavailable reason=no_config_dir");
            Settings::default()
        }
    };

    let viewer: CliViewer = cli.viewer.into();
    let mut api = PaperlinkApi::new(FsVault::new(root), viewer, settings);
    if let Some(path) = settings_path {
        api = api.with_settings_path(path);
    }
    Ok(AppContext { api })
}

fn handle_create(ctx: &mut AppContext, form: PaperForm) -> Result<CmdResult> {
    let form = if form.id.trim().is_empty() && std::io::stdin().is_terminal() {
        fill_form(form)?
    } else {
        form
    };
    Ok(ctx.api.create_note(form))
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
    create: bool,
) -> CmdResult {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(key), Some(value)) => ConfigAction::Set { key, value, create },
    };

    match ctx.api.config(action) {
        Ok(result) => result,
        Err(e) => {
            error!("event=config_failed kind={:?} error={}", e.kind(), e);
            CmdResult::default().with_message(CmdMessage::error(format!("Error: {}", e)))
        }
    }
}
