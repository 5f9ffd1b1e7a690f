//! Help and usage text.
//!
//! Every function here is a pure formatter returning a `String` that ends in
//! a newline; callers write the text verbatim to their output.
use std::fmt::Write as _;

use crate::options::SetupOption;

/// Gap between the longest argument name and its description.
const GUTTER: &str = "    ";

/// Help block for the `setup` command.
///
/// Argument names are padded to the longest canonical name (measured in
/// characters) followed by a four-space gutter.
///
/// # Examples
///
/// ```
/// use project_setup::options::SetupOption;
/// use project_setup::setup::help::render_setup_help;
///
/// let one = SetupOption::new("one", "First");
/// let three = SetupOption::new("three", "Third");
/// let text = render_setup_help("Configuration", "Testing.", "configuration", &[&one, &three]);
///
/// assert!(text.contains("  one      First\n"));
/// assert!(text.contains("  three    Third\n"));
/// ```
#[must_use]
pub fn render_setup_help(
    title: &str,
    description: &str,
    cmd: &str,
    options: &[&SetupOption],
) -> String {
    let width = options
        .iter()
        .map(|o| o.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&heading(title, description));
    out.push_str("\n\nSetup\n\n");
    let _ = writeln!(
        out,
        "Usage: {cmd} setup [setup options] [setup arguments]"
    );
    out.push('\n');
    out.push_str("Options:\n");
    out.push_str("  --help, -h    Prints this help message\n");
    out.push('\n');
    out.push_str("Arguments:\n");
    for option in options {
        let _ = writeln!(
            out,
            "  {:<width$}{GUTTER}{}",
            option.name, option.description
        );
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "To learn more about this utility (beyond the setup command), run: {cmd} --help"
    );
    out
}

/// Help block for the program itself.
#[must_use]
pub fn render_top_level_help(title: &str, description: &str, cmd: &str) -> String {
    let mut out = String::new();
    out.push_str(&heading(title, description));
    out.push_str("\n\n");
    let _ = writeln!(out, "Usage: {cmd} [options] [command] [command arguments]");
    out.push('\n');
    out.push_str("Options:\n");
    out.push_str("  --help, -h    Prints this help message\n");
    out.push('\n');
    out.push_str("Commands:\n");
    out.push_str("  help    Prints this help message\n");
    out.push_str("  setup   Sets up configuration files\n");
    out.push('\n');
    let _ = writeln!(
        out,
        "To learn more about a given command, run: {cmd} [command] help"
    );
    out
}

/// Preamble printed when `setup` is given no tokens.
#[must_use]
pub fn no_arguments_error() -> String {
    "Error: No arguments specified. See below for correct usage.\n".to_string()
}

/// Preamble printed when `setup` is given unrecognised tokens.
///
/// # Examples
///
/// ```
/// use project_setup::setup::help::invalid_arguments_error;
///
/// assert_eq!(
///     invalid_arguments_error(&["apple".to_string()]),
///     "Error: apple is an invalid argument. See below for correct usage.\n"
/// );
/// assert_eq!(
///     invalid_arguments_error(&["apple".to_string(), "pear".to_string()]),
///     "Error: apple, pear are invalid arguments. See below for correct usage.\n"
/// );
/// ```
#[must_use]
pub fn invalid_arguments_error(tokens: &[String]) -> String {
    let phrase = if tokens.len() == 1 {
        "is an invalid argument"
    } else {
        "are invalid arguments"
    };
    format!(
        "Error: {} {phrase}. See below for correct usage.\n",
        tokens.join(", ")
    )
}

/// Preamble printed for a missing or unknown command word.
#[must_use]
pub fn invalid_command_error() -> String {
    "Invalid arguments.\n".to_string()
}

fn heading(title: &str, description: &str) -> String {
    format!("{title} – {description}")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    const SETUP_HELP: &str = r#"Configuration – Testing the help output.

Setup

Usage: configuration setup [setup options] [setup arguments]

Options:
  --help, -h    Prints this help message

Arguments:
  one      The description for "one"
  two      The description for "two"
  three    The third description

To learn more about this utility (beyond the setup command), run: configuration --help
"#;

    fn options() -> Vec<SetupOption> {
        vec![
            SetupOption::new("one", r#"The description for "one""#),
            SetupOption::new("two", r#"The description for "two""#),
            SetupOption::new("three", "The third description"),
        ]
    }

    #[test]
    fn setup_help_matches_layout() {
        let options = options();
        let refs: Vec<&SetupOption> = options.iter().collect();
        let text = render_setup_help(
            "Configuration",
            "Testing the help output.",
            "configuration",
            &refs,
        );
        assert_eq!(text, SETUP_HELP);
    }

    #[test]
    fn padding_is_recomputed_per_render() {
        let short = SetupOption::new("ab", "x");
        let text = render_setup_help("t", "d", "c", &[&short]);
        assert!(text.contains("\n  ab    x\n"));
    }

    #[test]
    fn padding_counts_characters_not_bytes() {
        let wide = SetupOption::new("ünï", "wide");
        let plain = SetupOption::new("abcd", "plain");
        let text = render_setup_help("t", "d", "c", &[&wide, &plain]);
        assert!(text.contains("\n  ünï     wide\n"));
        assert!(text.contains("\n  abcd    plain\n"));
    }

    #[test]
    fn setup_help_without_options_has_empty_argument_list() {
        let text = render_setup_help("t", "d", "c", &[]);
        assert!(text.contains("Arguments:\n\nTo learn more"));
    }

    #[test]
    fn top_level_help_names_commands() {
        let text = render_top_level_help("Configuration", "Testing.", "configuration");
        assert!(text.starts_with("Configuration – Testing.\n\nUsage: configuration [options]"));
        assert!(text.contains("  help    Prints this help message\n"));
        assert!(text.contains("  setup   Sets up configuration files\n"));
        assert!(text.ends_with("run: configuration [command] help\n"));
    }

    #[test]
    fn no_arguments_error_text() {
        assert_eq!(
            no_arguments_error(),
            "Error: No arguments specified. See below for correct usage.\n"
        );
    }

    #[test]
    fn invalid_arguments_error_keeps_token_order() {
        let tokens = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        assert_eq!(
            invalid_arguments_error(&tokens),
            "Error: b, a, c are invalid arguments. See below for correct usage.\n"
        );
    }
}
