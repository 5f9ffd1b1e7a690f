//! Apply selected options: write, modify, and JSON-patch configuration files.
//!
//! Every action runs even if an earlier one failed; nothing is rolled back.
//! The per-action results are collected in an [`ExecutionReport`].
use std::path::{Path, PathBuf};

use super::context::Context;
use super::json::{PatchError, Patched, patch_document};
use crate::error::ActionError;
use crate::logging::OptionStatus;
use crate::options::registry::Registry;
use crate::options::{FileAction, JsonPatch, SetupOption};

/// A single file-system action that can be described and applied.
pub trait Applicable {
    /// Human-readable description of this action.
    fn description(&self) -> String;

    /// Target path as declared by the option.
    fn target(&self) -> &str;

    /// Apply the action to `path`, the [`target`](Self::target) already
    /// resolved against the context root.
    ///
    /// In dry-run mode every read still happens, so a missing target or an
    /// invalid document is reported, but nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the target cannot be read, parsed, or
    /// written.
    fn apply(&self, ctx: &Context, path: &Path) -> Result<ActionChange, ActionError>;
}

/// Result of applying one action.
///
/// # Examples
///
/// ```
/// use project_setup::setup::ActionChange;
///
/// assert_ne!(ActionChange::Applied, ActionChange::Unchanged);
/// assert_eq!(ActionChange::DryRun, ActionChange::DryRun);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChange {
    /// The target was written.
    Applied,
    /// The target already had the desired content.
    Unchanged,
    /// The target would have been written (dry run).
    DryRun,
}

/// Outcome of one attempted action.
#[derive(Debug)]
pub struct ActionOutcome {
    /// Canonical name of the owning option.
    pub option: String,
    /// Description of the action.
    pub description: String,
    /// Resolved target path.
    pub target: PathBuf,
    /// What happened.
    pub result: Result<ActionChange, ActionError>,
}

/// Counters over a set of action outcomes.
///
/// # Examples
///
/// ```
/// use project_setup::setup::apply::ReportStats;
///
/// let stats = ReportStats { applied: 2, unchanged: 1, failed: 0 };
/// assert_eq!(stats.summary(false), "2 applied, 1 unchanged, 0 failed");
/// assert_eq!(stats.summary(true), "2 would apply, 1 unchanged, 0 failed");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    /// Actions that wrote (or would write) their target.
    pub applied: u32,
    /// Actions whose target was already correct.
    pub unchanged: u32,
    /// Actions that failed.
    pub failed: u32,
}

impl ReportStats {
    /// Count one result.
    pub const fn record(&mut self, result: &Result<ActionChange, ActionError>) {
        match result {
            Ok(ActionChange::Applied | ActionChange::DryRun) => self.applied += 1,
            Ok(ActionChange::Unchanged) => self.unchanged += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Format the summary string (e.g. "2 applied, 1 unchanged, 0 failed").
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would apply" } else { "applied" };
        format!(
            "{} {verb}, {} unchanged, {} failed",
            self.applied, self.unchanged, self.failed
        )
    }
}

/// Ordered outcomes of every action attempted in one run.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    outcomes: Vec<ActionOutcome>,
}

impl ExecutionReport {
    /// All outcomes, in execution order.
    #[must_use]
    pub fn outcomes(&self) -> &[ActionOutcome] {
        &self.outcomes
    }

    /// Outcomes whose action failed.
    pub fn failures(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    /// Whether any action failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Counters over all outcomes.
    #[must_use]
    pub fn stats(&self) -> ReportStats {
        let mut stats = ReportStats::default();
        for outcome in &self.outcomes {
            stats.record(&outcome.result);
        }
        stats
    }
}

/// Apply the options named in `names` followed by every default entry.
///
/// Names must be canonical (as produced by
/// [`classify`](super::classify::classify)); each option runs once even if a
/// name repeats or also names a default.  Within an option the file actions
/// run first, then the JSON patches, each in declared order.
#[must_use]
pub fn apply(names: &[&str], registry: &Registry<'_>, ctx: &Context) -> ExecutionReport {
    let mut report = ExecutionReport::default();

    for option in selection(names, registry) {
        ctx.log.stage(&format!("Applying {}", option.name));
        let mut stats = ReportStats::default();

        for action in actions(option) {
            let outcome = run_action(option, action, ctx);
            stats.record(&outcome.result);
            report.outcomes.push(outcome);
        }

        let status = if stats.failed > 0 {
            OptionStatus::Failed
        } else if ctx.dry_run {
            OptionStatus::DryRun
        } else {
            OptionStatus::Ok
        };
        ctx.log.info(&stats.summary(ctx.dry_run));
        ctx.log
            .record_option(&option.name, status, Some(&stats.summary(ctx.dry_run)));
    }

    report
}

/// Selected options in argv order, then defaults in caller order, each once.
fn selection<'a>(names: &[&str], registry: &Registry<'a>) -> Vec<&'a SetupOption> {
    let mut selected: Vec<&'a SetupOption> = Vec::new();
    let chosen = names.iter().filter_map(|name| registry.option(name));
    for option in chosen.chain(registry.defaults().iter().copied()) {
        if !selected.iter().any(|s| s.name == option.name) {
            selected.push(option);
        }
    }
    selected
}

fn actions(option: &SetupOption) -> impl Iterator<Item = &dyn Applicable> {
    option
        .configuration_files
        .iter()
        .map(|f| f as &dyn Applicable)
        .chain(option.json_data.iter().map(|j| j as &dyn Applicable))
}

fn run_action(option: &SetupOption, action: &dyn Applicable, ctx: &Context) -> ActionOutcome {
    let description = action.description();
    let target = ctx.resolve(action.target());
    let result = action.apply(ctx, &target);

    let (status, msg) = match &result {
        Ok(ActionChange::Applied) => (OptionStatus::Ok, format!("{description}: written")),
        Ok(ActionChange::Unchanged) => (OptionStatus::Ok, format!("{description}: up to date")),
        Ok(ActionChange::DryRun) => (OptionStatus::DryRun, format!("would {description}")),
        Err(e) => (OptionStatus::Failed, format!("{description}: {e}")),
    };
    ctx.log.action(&option.name, status, &msg);

    ActionOutcome {
        option: option.name.clone(),
        description,
        target,
        result,
    }
}

/// Read a target that must already exist.
fn read_existing(ctx: &Context, path: &Path) -> Result<String, ActionError> {
    if !ctx.fs_ops.exists(path) {
        return Err(ActionError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    ctx.fs_ops
        .read_to_string(path)
        .map_err(|e| ActionError::from_io(path.to_path_buf(), e))
}

/// Write `content` unless this is a dry run.
fn commit(ctx: &Context, path: &Path, content: &str) -> Result<ActionChange, ActionError> {
    if ctx.dry_run {
        return Ok(ActionChange::DryRun);
    }
    ctx.fs_ops
        .write(path, content)
        .map_err(|source| ActionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(ActionChange::Applied)
}

impl Applicable for FileAction {
    fn description(&self) -> String {
        match self {
            Self::Write { path, .. } => format!("write {path}"),
            Self::Modify { path, .. } => format!("modify {path}"),
        }
    }

    fn target(&self) -> &str {
        self.path()
    }

    fn apply(&self, ctx: &Context, path: &Path) -> Result<ActionChange, ActionError> {
        match self {
            Self::Write { content, .. } => commit(ctx, path, content),
            Self::Modify { transform, .. } => {
                let current = read_existing(ctx, path)?;
                let updated = transform.apply(&current);
                if updated == current {
                    return Ok(ActionChange::Unchanged);
                }
                commit(ctx, path, &updated)
            }
        }
    }
}

impl Applicable for JsonPatch {
    fn description(&self) -> String {
        format!("patch {}", self.path)
    }

    fn target(&self) -> &str {
        &self.path
    }

    fn apply(&self, ctx: &Context, path: &Path) -> Result<ActionChange, ActionError> {
        let current = read_existing(ctx, path)?;
        let path = path.to_path_buf();
        match patch_document(&current, &self.data) {
            Ok(Patched::Unchanged) => Ok(ActionChange::Unchanged),
            Ok(Patched::Updated(text)) => commit(ctx, &path, &text),
            Err(PatchError::Parse(source)) => Err(ActionError::InvalidJson { path, source }),
            Err(PatchError::Serialize(source)) => Err(ActionError::Serialize { path, source }),
        }
    }
}
