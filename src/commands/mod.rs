//! Top-level command dispatch.
//!
//! The first captured argument is the command word; only `setup` and `help`
//! are known.  Anything else (including a missing command or a top-level
//! `--help`) prints `Invalid arguments.` followed by the top-level help.
pub mod setup;

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::options::SetupDefinition;
use crate::options::registry::Registry;
use crate::setup::Context;
use crate::setup::help;

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Help was printed on request.
    Help,
    /// The invocation was malformed; help was printed after an error line.
    UsageError,
    /// Options were applied; `failures` actions failed.
    Applied {
        /// Number of failed actions.
        failures: usize,
    },
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use project_setup::commands::Outcome;
    ///
    /// assert_eq!(Outcome::Help.exit_code(), 0);
    /// assert_eq!(Outcome::UsageError.exit_code(), 2);
    /// assert_eq!(Outcome::Applied { failures: 0 }.exit_code(), 0);
    /// assert_eq!(Outcome::Applied { failures: 3 }.exit_code(), 1);
    /// ```
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Help | Self::Applied { failures: 0 } => 0,
            Self::Applied { .. } => 1,
            Self::UsageError => 2,
        }
    }
}

/// Run the command named by `args[0]`.
///
/// `program` is the invoked program path; its file name is what help text
/// shows as the command.  The registry is built before any argument is
/// looked at, so conflicting option names fail every invocation.
///
/// # Errors
///
/// Returns an error if the option names conflict or if writing to `out`
/// fails.
pub fn run(
    definition: &SetupDefinition,
    program: &str,
    args: &[String],
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let registry = Registry::new(definition).context("building option registry")?;
    let cmd = command_name(program);

    match args.split_first() {
        Some((command, tokens)) if command == "setup" => {
            setup::run(definition, &registry, &cmd, tokens, ctx, out)
        }
        Some((command, _)) if command == "help" => {
            emit(
                out,
                &help::render_top_level_help(&definition.title, &definition.description, &cmd),
            )?;
            Ok(Outcome::Help)
        }
        _ => {
            ctx.log.debug(&format!("unrecognised command line: {args:?}"));
            let text = format!(
                "{}\n{}",
                help::invalid_command_error(),
                help::render_top_level_help(&definition.title, &definition.description, &cmd)
            );
            emit(out, &text)?;
            Ok(Outcome::UsageError)
        }
    }
}

/// File name of `program`, or `program` itself if it has none.
fn command_name(program: &str) -> String {
    Path::new(program)
        .file_name()
        .map_or_else(|| program.to_string(), |name| name.to_string_lossy().into_owned())
}

/// Write `text` verbatim to `out`.
fn emit(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("writing output")
}
