//! Structured logger with per-action outcomes and summary collection.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{ACTION_TARGET, STAGE_TARGET};
use super::types::{Log, OptionEntry, OptionStatus};
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger that records one entry per applied option.
///
/// Messages go through [`tracing`]; the installed subscriber decides where
/// they end up (see [`init_subscriber`](super::subscriber::init_subscriber)).
#[derive(Debug)]
pub struct Logger {
    entries: Mutex<Vec<OptionEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Only remembers the log file path for the summary; the file itself is
    /// written by the subscriber's file layer.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<OptionEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log the outcome of one file action belonging to `option`.
    ///
    /// Successful actions are `debug`, dry-run actions `info`, and failed
    /// actions `error`.
    pub fn action(&self, option: &str, status: OptionStatus, msg: &str) {
        let field = status.as_str();
        match status {
            OptionStatus::Ok => {
                tracing::debug!(target: ACTION_TARGET, option, status = field, "{msg}");
            }
            OptionStatus::DryRun => {
                tracing::info!(target: ACTION_TARGET, option, status = field, "{msg}");
            }
            OptionStatus::Failed => {
                tracing::error!(target: ACTION_TARGET, option, status = field, "{msg}");
            }
        }
    }

    /// Record an option result for the summary.
    pub fn record_option(&self, name: &str, status: OptionStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(OptionEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Print the summary of all recorded options.
    pub fn print_summary(&self) {
        let entries = self.entries();
        if entries.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut ok = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;

        for entry in &entries {
            let color = match entry.status {
                OptionStatus::Ok => {
                    ok += 1;
                    "\x1b[32m"
                }
                OptionStatus::DryRun => {
                    dry_run += 1;
                    "\x1b[33m"
                }
                OptionStatus::Failed => {
                    failed += 1;
                    "\x1b[31m"
                }
            };

            let suffix = entry
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!(
                "{color}{} {}{suffix}\x1b[0m",
                entry.status.marker(),
                entry.name
            ));
        }

        let total = ok + dry_run + failed;
        self.info(&format!(
            "{total} options: \x1b[32m{ok} ok\x1b[0m, \x1b[33m{dry_run} dry-run\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, error);

    fn action(&self, option: &str, status: OptionStatus, msg: &str) {
        self.action(option, status, msg);
    }

    fn record_option(&self, name: &str, status: OptionStatus, message: Option<&str>) {
        self.record_option(name, status, message);
    }
}
