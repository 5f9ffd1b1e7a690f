#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `setup` command.
//!
//! These tests run full command lines against an in-memory file system,
//! verifying that:
//! - help, invalid-argument, and no-argument output match the layout exactly
//! - selected options write their files relative to the working directory
//! - invalid tokens prevent every file action
//! - failures are reported per action without stopping the run
//! - defaults run on every successful invocation

mod common;

use common::{Harness, SAMPLE_SETUP_HELP, sample_definition};
use project_setup::commands::Outcome;
use project_setup::logging::OptionStatus;
use project_setup::options::{FileAction, JsonPatch, SetupDefinition, SetupOption, Transform};
use serde_json::json;

// ---------------------------------------------------------------------------
// Help and usage errors
// ---------------------------------------------------------------------------

#[test]
fn prints_help_information() {
    let run = Harness::new(sample_definition()).run(&["setup", "--help"]);
    assert_eq!(run.outcome, Outcome::Help);
    assert_eq!(run.output, SAMPLE_SETUP_HELP);
}

#[test]
fn short_help_flag_ignores_other_tokens() {
    let run = Harness::new(sample_definition()).run(&["setup", "-h", "apple", "one"]);
    assert_eq!(run.outcome, Outcome::Help);
    assert_eq!(run.output, SAMPLE_SETUP_HELP);
}

#[test]
fn handles_no_arguments() {
    let run = Harness::new(sample_definition()).run(&["setup"]);
    assert_eq!(run.outcome, Outcome::UsageError);
    assert_eq!(
        run.output,
        format!(
            "Error: No arguments specified. See below for correct usage.\n\n{SAMPLE_SETUP_HELP}"
        )
    );
}

#[test]
fn handles_invalid_arguments() {
    let run = Harness::new(sample_definition()).run(&["setup", "apple"]);
    assert_eq!(run.outcome, Outcome::UsageError);
    assert_eq!(
        run.output,
        format!(
            "Error: apple is an invalid argument. See below for correct usage.\n\n{SAMPLE_SETUP_HELP}"
        )
    );
}

#[test]
fn lists_several_invalid_arguments_in_order() {
    let run = Harness::new(sample_definition()).run(&["setup", "pear", "one", "apple"]);
    assert!(run.output.starts_with(
        "Error: pear, apple are invalid arguments. See below for correct usage.\n\n"
    ));
}

// ---------------------------------------------------------------------------
// Applying options
// ---------------------------------------------------------------------------

fn writing_definition() -> SetupDefinition {
    SetupDefinition::new("Configuration", "Testing the help output.")
        .with_option(
            SetupOption::new("one", r#"The description for "one""#)
                .with_file(FileAction::write("./this-is-a-test.txt", "Hello, World!"))
                .with_file(FileAction::write("./this-is-a-second-test.txt", "New content")),
        )
        .with_option(SetupOption::new("two", r#"The description for "two""#))
        .with_option(SetupOption::new("three", "The third description"))
}

#[test]
fn writes_files_relative_to_working_directory() {
    let run = Harness::new(writing_definition())
        .with_cwd("/home/me")
        .run(&["setup", "one"]);

    assert_eq!(run.outcome, Outcome::Applied { failures: 0 });
    assert!(run.output.is_empty());
    assert_eq!(
        run.file("/home/me/this-is-a-test.txt").as_deref(),
        Some("Hello, World!")
    );
    assert_eq!(
        run.file("/home/me/this-is-a-second-test.txt").as_deref(),
        Some("New content")
    );
}

#[test]
fn invalid_arguments_leave_files_untouched() {
    let run = Harness::new(writing_definition())
        .with_cwd("/home/me")
        .with_file("/home/me/this-is-a-second-test.txt", "Original content")
        .run(&["setup", "one", "apple"]);

    assert_eq!(run.outcome, Outcome::UsageError);
    assert_eq!(run.file("/home/me/this-is-a-test.txt"), None);
    assert_eq!(
        run.file("/home/me/this-is-a-second-test.txt").as_deref(),
        Some("Original content")
    );
}

#[test]
fn modify_missing_file_is_reported_and_run_continues() {
    let def = SetupDefinition::new("Configuration", "Testing.")
        .with_option(
            SetupOption::new("ignore", "Ignore build output")
                .with_file(FileAction::modify("./.gitignore", |s| format!("{s}dist\n")))
                .with_file(FileAction::write("./.npmignore", "dist\n")),
        );
    let run = Harness::new(def).with_cwd("/home/me").run(&["setup", "ignore"]);

    assert_eq!(run.outcome, Outcome::Applied { failures: 1 });
    assert_eq!(run.outcome.exit_code(), 1);
    assert_eq!(run.file("/home/me/.gitignore"), None);
    assert_eq!(run.file("/home/me/.npmignore").as_deref(), Some("dist\n"));
    assert_eq!(
        run.statuses(),
        vec![("ignore".to_string(), OptionStatus::Failed)]
    );
}

#[test]
fn alternate_names_resolve_and_dedupe() {
    let def = SetupDefinition::new("Configuration", "Testing.").with_option(
        SetupOption::new("prettier", "Formatting")
            .with_alternate_name("format")
            .with_file(FileAction::modify("./.gitignore", |s| format!("{s}x\n"))),
    );
    let run = Harness::new(def)
        .with_cwd("/p")
        .with_file("/p/.gitignore", "")
        .run(&["setup", "format", "prettier"]);

    assert_eq!(run.outcome, Outcome::Applied { failures: 0 });
    assert_eq!(run.file("/p/.gitignore").as_deref(), Some("x\n"));
}

#[test]
fn defaults_apply_once_after_selected_options() {
    let def = SetupDefinition::new("Configuration", "Testing.")
        .with_option(
            SetupOption::new("prettier", "Formatting")
                .with_file(FileAction::write("./.prettierrc", "{}\n"))
                .with_json(JsonPatch::new(
                    "./package.json",
                    json!({"scripts": {"format": "prettier --write ."}}),
                )),
        )
        .with_default(SetupOption::new("ignore", "").with_file(FileAction::Modify {
            path: "./.gitignore".to_string(),
            transform: Transform::append_line("node_modules"),
        }));

    let run = Harness::new(def)
        .with_cwd("/p")
        .with_file("/p/package.json", "{\n  \"name\": \"demo\"\n}\n")
        .with_file("/p/.gitignore", "dist\n")
        .run(&["setup", "prettier"]);

    assert_eq!(run.outcome, Outcome::Applied { failures: 0 });
    assert_eq!(run.file("/p/.prettierrc").as_deref(), Some("{}\n"));
    assert_eq!(
        run.file("/p/package.json").as_deref(),
        Some("{\n  \"name\": \"demo\",\n  \"scripts\": {\n    \"format\": \"prettier --write .\"\n  }\n}\n")
    );
    assert_eq!(run.file("/p/.gitignore").as_deref(), Some("dist\nnode_modules\n"));
    assert_eq!(
        run.statuses(),
        vec![
            ("prettier".to_string(), OptionStatus::Ok),
            ("ignore".to_string(), OptionStatus::Ok),
        ]
    );
}

#[test]
fn dry_run_writes_nothing() {
    let run = Harness::new(writing_definition())
        .with_cwd("/home/me")
        .dry_run()
        .run(&["setup", "one"]);

    assert_eq!(run.outcome, Outcome::Applied { failures: 0 });
    assert!(run.fs.snapshot().is_empty());
    assert_eq!(
        run.statuses(),
        vec![("one".to_string(), OptionStatus::DryRun)]
    );
}
