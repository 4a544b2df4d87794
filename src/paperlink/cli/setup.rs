use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paperlink", bin_name = "paperlink", version)]
#[command(
    about = "Open (or create) Markdown paper notes from reference-manager links",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory holding the notes folder [default: current directory]
    #[arg(long, global = true, env = "PAPERLINK_VAULT", value_name = "DIR", help_heading = "Options")]
    pub vault: Option<PathBuf>,

    /// Settings file [default: per-user config directory]
    #[arg(long, global = true, env = "PAPERLINK_CONFIG", value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// How to open notes
    #[arg(
        long,
        global = true,
        env = "PAPERLINK_VIEWER",
        value_enum,
        default_value_t = ViewerKind::System,
        help_heading = "Options"
    )]
    pub viewer: ViewerKind,

    /// Directory for log files [default: per-user data directory]
    #[arg(long, global = true, env = "PAPERLINK_LOG_DIR", value_name = "DIR", help_heading = "Options")]
    pub log_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewerKind {
    /// Platform opener (open, xdg-open, start)
    System,
    /// $VISUAL or $EDITOR, waiting for it to exit
    Editor,
    /// Print the note's path
    Print,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Handle a paperlib:// or paperlib-open:// link
    Handle {
        /// The full link, e.g. "paperlib://open?id=10.1/abc&title=..."
        url: String,
    },

    /// Create (or open) a paper note by hand
    Create {
        /// Paper identifier; prompted for when omitted on a terminal
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Authors, as a single string
        #[arg(long)]
        authors: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        doi: Option<String>,
    },

    /// Open the first note in the papers folder
    #[command(name = "open-folder")]
    OpenFolder,

    /// Create the papers folder if it does not exist
    #[command(name = "ensure-folder")]
    EnsureFolder,

    /// Show or change settings
    Config {
        /// Setting to show or change
        key: Option<String>,

        /// New value
        value: Option<String>,

        /// Also create the folder when setting paper-notes-folder
        #[arg(long)]
        create: bool,
    },
}
