//! Command-line flags for the host program.
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;

/// Default manifest file name, looked up in the root directory.
pub const DEFAULT_MANIFEST: &str = "setup.toml";

/// Host flags for the project setup tool.
///
/// Only flags placed before the command word are parsed here; the command
/// word and everything after it are captured verbatim in [`Cli::args`] and
/// handled by [`commands::run`](crate::commands::run), which owns the help
/// text and the `--help`/`-h` handling.
#[derive(Parser, Debug)]
#[command(
    name = "configure",
    about = "Sets up project configuration files",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Setup manifest to load (defaults to `setup.toml` in the root directory)
    #[arg(long, env = "PROJECT_SETUP_MANIFEST", value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Directory that relative configuration paths are resolved against
    #[arg(long, env = "PROJECT_SETUP_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Command word followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl Cli {
    /// Root directory: `--root`, or the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `--root` is not given and the current directory
    /// cannot be determined.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("determining current directory"),
        }
    }

    /// Manifest path: `--manifest`, or [`DEFAULT_MANIFEST`] under `root`.
    #[must_use]
    pub fn manifest_path(&self, root: &std::path::Path) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| root.join(DEFAULT_MANIFEST))
    }
}

/// Program path used for `{cmd}` in help text, from `argv[0]`.
///
/// A non-UTF-8 path is converted lossily; a missing one falls back to
/// `configure`.
#[must_use]
pub fn program_name(arg0: Option<OsString>) -> String {
    arg0.map_or_else(
        || "configure".to_string(),
        |arg| arg.to_string_lossy().into_owned(),
    )
}
