//! The `setup` command.
use std::io::Write;

use anyhow::Result;

use super::{Outcome, emit};
use crate::options::SetupDefinition;
use crate::options::registry::Registry;
use crate::setup::{Context, Resolution, apply, classify, dispatch, help};

/// Classify `tokens`, then print help or apply the selection.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.  Failed actions are not
/// errors; they are counted in [`Outcome::Applied`].
pub fn run(
    definition: &SetupDefinition,
    registry: &Registry<'_>,
    cmd: &str,
    tokens: &[String],
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let classification = classify(tokens, registry);
    let usage = || {
        help::render_setup_help(
            &definition.title,
            &definition.description,
            cmd,
            registry.options(),
        )
    };

    match dispatch(&classification) {
        Resolution::HelpRequested => {
            emit(out, &usage())?;
            Ok(Outcome::Help)
        }
        Resolution::InvalidArguments(invalid) => {
            emit(out, &format!("{}\n{}", help::invalid_arguments_error(&invalid), usage()))?;
            Ok(Outcome::UsageError)
        }
        Resolution::EmptySelection => {
            emit(out, &format!("{}\n{}", help::no_arguments_error(), usage()))?;
            Ok(Outcome::UsageError)
        }
        Resolution::Apply(names) => {
            ctx.log.debug(&format!("selected options: {}", names.join(", ")));
            let report = apply(&names, registry, ctx);
            let stats = report.stats();
            ctx.log.debug(&format!("{} actions: {}", report.outcomes().len(), stats.summary(ctx.dry_run)));
            if report.has_failures() {
                ctx.log.error(&format!(
                    "{} of {} actions failed",
                    report.failures().count(),
                    report.outcomes().len()
                ));
            }
            Ok(Outcome::Applied {
                failures: report.failures().count(),
            })
        }
    }
}
