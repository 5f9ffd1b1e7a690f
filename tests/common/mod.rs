// Shared helpers for integration tests.
//
// Provides an in-memory harness so each integration test can describe a
// starting file system, run one command line, and inspect the output, the
// outcome, and the resulting files.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use project_setup::commands::{self, Outcome};
use project_setup::logging::{Logger, OptionStatus};
use project_setup::operations::{FileSystemOps, MemoryFileSystemOps};
use project_setup::options::{SetupDefinition, SetupOption};
use project_setup::setup::Context;

/// The definition used throughout the help-text tests.
pub fn sample_definition() -> SetupDefinition {
    SetupDefinition::new("Configuration", "Testing the help output.")
        .with_option(SetupOption::new("one", r#"The description for "one""#))
        .with_option(SetupOption::new("two", r#"The description for "two""#))
        .with_option(SetupOption::new("three", "The third description"))
}

/// Setup help block for [`sample_definition`] invoked as `configuration`.
pub const SAMPLE_SETUP_HELP: &str = r#"Configuration – Testing the help output.

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

/// Result of one harness run.
pub struct TestRun {
    pub outcome: Outcome,
    pub output: String,
    pub fs: Arc<MemoryFileSystemOps>,
    pub log: Arc<Logger>,
}

impl TestRun {
    /// Contents of `path` after the run.
    pub fn file(&self, path: &str) -> Option<String> {
        self.fs.contents(path)
    }

    /// Recorded `(option, status)` pairs in order.
    pub fn statuses(&self) -> Vec<(String, OptionStatus)> {
        self.log
            .entries()
            .into_iter()
            .map(|entry| (entry.name, entry.status))
            .collect()
    }
}

/// Fluent builder for an in-memory run.
pub struct Harness {
    definition: SetupDefinition,
    fs: MemoryFileSystemOps,
    cwd: PathBuf,
    dry_run: bool,
}

impl Harness {
    pub fn new(definition: SetupDefinition) -> Self {
        Self {
            definition,
            fs: MemoryFileSystemOps::new(),
            cwd: PathBuf::from("/"),
            dry_run: false,
        }
    }

    /// Add a file to the starting file system.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.fs = self.fs.with_file(path, content);
        self
    }

    /// Working directory relative targets resolve against.
    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = PathBuf::from(cwd);
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Run `args` (command word first) as the program `configuration`.
    pub fn run(self, args: &[&str]) -> TestRun {
        let fs = Arc::new(self.fs);
        let log = Arc::new(Logger::new("test"));
        let fs_ops: Arc<dyn FileSystemOps> = fs.clone();
        let ctx = Context::new(log.clone(), self.cwd, self.dry_run).with_fs_ops(fs_ops);
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        let mut out = Vec::new();
        let outcome = commands::run(&self.definition, "/usr/bin/configuration", &args, &ctx, &mut out)
            .expect("command should run");
        TestRun {
            outcome,
            output: String::from_utf8(out).expect("utf-8 output"),
            fs,
            log,
        }
    }
}
