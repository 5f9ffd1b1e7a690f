//! Sort argv tokens into valid option names, invalid tokens, and help.
use crate::options::registry::Registry;

/// Tokens that request help when they come first.
const HELP_FLAGS: [&str; 2] = ["--help", "-h"];

/// Outcome of classifying the tokens that follow the command word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationResult<'a> {
    /// `true` if the first token is `--help` or `-h`.
    pub help_requested: bool,
    /// Canonical names of recognised tokens, in argv order, each at most once.
    pub valid_option_names: Vec<&'a str>,
    /// Unrecognised tokens as given, in argv order.
    pub invalid_option_names: Vec<String>,
}

/// Classify `tokens` against `registry`.
///
/// Only the first token is checked for a help flag; a help flag in any other
/// position is looked up like any other name and normally ends up invalid.
///
/// # Examples
///
/// ```
/// use project_setup::options::{SetupDefinition, SetupOption, registry::Registry};
/// use project_setup::setup::classify;
///
/// let def = SetupDefinition::new("Configuration", "Sets up tooling.")
///     .with_option(SetupOption::new("prettier", "Formatting").with_alternate_name("format"));
/// let registry = Registry::new(&def).unwrap();
///
/// let result = classify(&["format", "prettier", "apple"], &registry);
/// assert!(!result.help_requested);
/// assert_eq!(result.valid_option_names, vec!["prettier"]);
/// assert_eq!(result.invalid_option_names, vec!["apple".to_string()]);
/// ```
#[must_use]
pub fn classify<'a, S: AsRef<str>>(tokens: &[S], registry: &Registry<'a>) -> ClassificationResult<'a> {
    let help_requested = tokens
        .first()
        .is_some_and(|first| HELP_FLAGS.contains(&first.as_ref()));

    let mut result = ClassificationResult {
        help_requested,
        ..ClassificationResult::default()
    };

    for token in tokens {
        let token = token.as_ref();
        match registry.resolve(token) {
            Some(name) => {
                if !result.valid_option_names.contains(&name) {
                    result.valid_option_names.push(name);
                }
            }
            None => result.invalid_option_names.push(token.to_string()),
        }
    }

    result
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::options::{SetupDefinition, SetupOption};

    fn definition() -> SetupDefinition {
        SetupDefinition::new("Configuration", "Testing.")
            .with_option(SetupOption::new("one", "first").with_alternate_name("1"))
            .with_option(SetupOption::new("two", "second"))
            .with_option(SetupOption::new("three", "third"))
    }

    #[test]
    fn leading_help_flag_is_detected() {
        let def = definition();
        let registry = Registry::new(&def).unwrap();
        assert!(classify(&["--help"], &registry).help_requested);
        assert!(classify(&["-h", "apple"], &registry).help_requested);
        assert!(classify(&["--help", "one"], &registry).help_requested);
    }

    #[test]
    fn help_flag_after_first_token_is_not_help() {
        let def = definition();
        let registry = Registry::new(&def).unwrap();
        let result = classify(&["one", "--help"], &registry);
        assert!(!result.help_requested);
        assert_eq!(result.valid_option_names, vec!["one"]);
        assert_eq!(result.invalid_option_names, vec!["--help".to_string()]);
    }

    #[test]
    fn empty_tokens_classify_to_nothing() {
        let def = definition();
        let registry = Registry::new(&def).unwrap();
        let result = classify::<&str>(&[], &registry);
        assert_eq!(result, ClassificationResult::default());
    }

    #[test]
    fn alternate_and_canonical_are_deduplicated() {
        let def = definition();
        let registry = Registry::new(&def).unwrap();
        let result = classify(&["two", "1", "one", "two"], &registry);
        assert_eq!(result.valid_option_names, vec!["two", "one"]);
        assert!(result.invalid_option_names.is_empty());
    }

    #[test]
    fn invalid_tokens_keep_argv_order_and_repeats() {
        let def = definition();
        let registry = Registry::new(&def).unwrap();
        let result = classify(&["pear", "one", "apple", "pear"], &registry);
        assert_eq!(
            result.invalid_option_names,
            vec!["pear".to_string(), "apple".to_string(), "pear".to_string()]
        );
    }

    #[test]
    fn classifies_owned_strings() {
        let def = definition();
        let registry = Registry::new(&def).unwrap();
        let tokens = vec!["three".to_string()];
        assert_eq!(classify(&tokens, &registry).valid_option_names, vec!["three"]);
    }
}
