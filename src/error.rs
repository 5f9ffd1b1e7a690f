//! Domain-specific error types for the setup engine.
//!
//! - [`ConfigError`]: conflicting option names and manifest loading; fatal,
//!   converted to [`anyhow::Error`] at the CLI boundary via `?`
//! - [`ActionError`]: a single file write, modify, or JSON patch; recorded in
//!   the execution report and never propagated
//!
//! Unrecognised tokens and an empty selection are not errors: they are
//! [`Resolution`](crate::setup::dispatch::Resolution) outcomes rendered as
//! user-facing text.

use std::path::PathBuf;

use thiserror::Error;

/// Errors detected while building the registry or loading the manifest.
///
/// All of these are fatal and are reported before any argument is processed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Two entries share the same canonical name.
    #[error("option '{name}' is declared twice")]
    DuplicateOption {
        /// The repeated canonical name.
        name: String,
    },

    /// Two distinct entries claim the same canonical or alternate name.
    #[error("option name '{name}' is claimed by both '{first}' and '{second}'")]
    DuplicateName {
        /// The ambiguous name.
        name: String,
        /// Canonical name of the entry that claimed it first.
        first: String,
        /// Canonical name of the entry that claimed it second.
        second: String,
    },

    /// A manifest file entry is neither a write nor a modify action.
    #[error("option '{option}' has an invalid file action for {path}: {reason}")]
    InvalidAction {
        /// Canonical name of the owning option.
        option: String,
        /// Target path of the action as written in the manifest.
        path: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The manifest could not be read.
    #[error("IO error reading setup manifest {path}: {source}")]
    Io {
        /// Path to the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the expected shape.
    #[error("Invalid setup manifest {path}: {message}")]
    Parse {
        /// Path to the manifest.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Errors recorded for a single file action.
///
/// These never abort a run; the applier stores them in the execution report.
#[derive(Error, Debug)]
pub enum ActionError {
    /// A modify or JSON patch action targets a file that does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Resolved target path.
        path: PathBuf,
    },

    /// Reading or writing the target failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Resolved target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The target of a JSON patch is not valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        /// Resolved target path.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },

    /// The patched JSON document could not be serialised.
    #[error("failed to serialise JSON for {}: {source}", path.display())]
    Serialize {
        /// Resolved target path.
        path: PathBuf,
        /// Serialiser error.
        source: serde_json::Error,
    },
}

impl ActionError {
    /// Classify an I/O error from the file-system layer.
    ///
    /// `NotFound` becomes [`ActionError::FileNotFound`]; everything else is
    /// kept as [`ActionError::Io`].
    #[must_use]
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
