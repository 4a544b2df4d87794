//! Diagnostic logging bootstrap.
//!
//! Protocol links are usually opened by the desktop, not from a terminal, so
//! stderr is often nowhere to be seen. Logs therefore go to rotating files in
//! a per-user directory, with warnings and errors duplicated to stderr.
//!
//! Log lines are `event=<name> key=value ...` pairs.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "paperlink";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Starts the global logger.
///
/// With `log_dir` set, logs go to rotating files there; otherwise to stderr.
/// Calling again with the same directory is a no-op. Never panics.
///
/// # Errors
/// - The directory cannot be created.
/// - The logger backend fails to start, or was already started elsewhere
///   with a different directory.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> Result<(), String> {
    let wanted = log_dir.map(Path::to_path_buf);

    if let Some(state) = LOGGING_STATE.get() {
        return if state.log_dir == wanted {
            Ok(())
        } else {
            Err("logging already initialized with a different directory".to_string())
        };
    }

    let level = if verbose { "debug" } else { "info" };

    LOGGING_STATE
        .get_or_try_init(|| -> Result<LoggingState, String> {
            let logger = Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?;

            let logger = match &wanted {
                Some(dir) => {
                    std::fs::create_dir_all(dir).map_err(|err| {
                        format!("failed to create log directory `{}`: {err}", dir.display())
                    })?;
                    logger
                        .log_to_file(
                            FileSpec::default()
                                .directory(dir.as_path())
                                .basename(LOG_FILE_BASENAME),
                        )
                        .rotate(
                            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                            Naming::Numbers,
                            Cleanup::KeepLogFiles(MAX_LOG_FILES),
                        )
                        .duplicate_to_stderr(Duplicate::Warn)
                        .write_mode(WriteMode::BufferAndFlush)
                        .append()
                        .format_for_files(flexi_logger::detailed_format)
                }
                None => logger.log_to_stderr(),
            };

            let handle = logger
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))?;

            info!(
                "event=app_start version={} platform={} log_dir={}",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS,
                wanted
                    .as_ref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_else(|| "stderr".to_string())
            );

            Ok(LoggingState {
                log_dir: wanted.clone(),
                _logger: handle,
            })
        })
        .map(|_| ())
}
