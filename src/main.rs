//! `configure`: apply project configuration options from a setup manifest.
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use project_setup::cli::{Cli, program_name};
use project_setup::commands::{self, Outcome};
use project_setup::logging::{Logger, RunHeader, init_subscriber};
use project_setup::options::manifest;
use project_setup::setup::Context;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let cli = Cli::parse();
    let root = cli.resolve_root();
    init_subscriber(
        cli.verbose,
        &RunHeader {
            command: "setup",
            root: root.as_deref().ok(),
            args: &cli.args,
        },
    );
    let log = Arc::new(Logger::new("setup"));

    match root.and_then(|root| run(&cli, root, &log)) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, root: PathBuf, log: &Arc<Logger>) -> Result<Outcome> {
    let definition = manifest::load(&cli.manifest_path(&root))?;
    log.debug(&format!(
        "{} options, {} defaults",
        definition.options.len(),
        definition.defaults.len()
    ));

    let ctx = Context::new(log.clone(), root, cli.dry_run);
    let program = program_name(std::env::args_os().next());

    let mut stdout = std::io::stdout().lock();
    let outcome = commands::run(&definition, &program, &cli.args, &ctx, &mut stdout)?;

    if matches!(outcome, Outcome::Applied { .. }) {
        log.print_summary();
    }
    Ok(outcome)
}
