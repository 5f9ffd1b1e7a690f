//! Core logging types: per-option entries, status, and the [`Log`] trait.

/// Per-option result for summary reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Canonical option name.
    pub name: String,
    /// Final status of the option.
    pub status: OptionStatus,
    /// Optional detail message (e.g., action counts).
    pub message: Option<String>,
}

/// Status of an applied option or of a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    /// Every action succeeded.
    Ok,
    /// Ran in dry-run mode; nothing was written.
    DryRun,
    /// At least one action failed.
    Failed,
}

impl OptionStatus {
    /// Marker printed in front of status lines.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Ok => '✓',
            Self::DryRun => '~',
            Self::Failed => '✗',
        }
    }

    /// Lower-case name recorded as the `status` field of action events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::DryRun => "dry-run",
            Self::Failed => "failed",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    #[must_use]
    pub fn from_field(value: &str) -> Option<Self> {
        match value {
            "ok" => Some(Self::Ok),
            "dry-run" => Some(Self::DryRun),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Abstraction over logging backends.
///
/// The applier logs through this trait so it does not depend on how (or
/// whether) a subscriber has been installed.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log the outcome of one file action belonging to `option`.
    fn action(&self, option: &str, status: OptionStatus, msg: &str);
    /// Record an option result for the summary.
    fn record_option(&self, name: &str, status: OptionStatus, message: Option<&str>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_field_round_trips() {
        for status in [OptionStatus::Ok, OptionStatus::DryRun, OptionStatus::Failed] {
            assert_eq!(OptionStatus::from_field(status.as_str()), Some(status));
        }
        assert_eq!(OptionStatus::from_field("skipped"), None);
    }

    #[test]
    fn markers_are_distinct() {
        assert_eq!(OptionStatus::Ok.marker(), '✓');
        assert_eq!(OptionStatus::DryRun.marker(), '~');
        assert_eq!(OptionStatus::Failed.marker(), '✗');
    }
}
