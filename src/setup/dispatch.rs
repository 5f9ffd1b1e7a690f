//! Decide what a classified invocation does.
use super::classify::ClassificationResult;

/// What the `setup` command should do, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Print help and succeed.
    HelpRequested,
    /// Report the unrecognised tokens, print help, and apply nothing.
    InvalidArguments(Vec<String>),
    /// Report that nothing was selected and print help.
    EmptySelection,
    /// Apply these options (canonical names, argv order) plus the defaults.
    Apply(Vec<&'a str>),
}

/// Resolve a classification; the first matching rule wins.
///
/// Help beats invalid tokens, invalid tokens beat an empty selection, and a
/// single invalid token blocks every valid one.
#[must_use]
pub fn dispatch<'a>(classification: &ClassificationResult<'a>) -> Resolution<'a> {
    if classification.help_requested {
        Resolution::HelpRequested
    } else if !classification.invalid_option_names.is_empty() {
        Resolution::InvalidArguments(classification.invalid_option_names.clone())
    } else if classification.valid_option_names.is_empty() {
        Resolution::EmptySelection
    } else {
        Resolution::Apply(classification.valid_option_names.clone())
    }
}
