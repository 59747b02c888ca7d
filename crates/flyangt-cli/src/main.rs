//! FlyANGT CLI
//!
//! Command-line interface for the release tooling

use clap::{Parser, Subcommand};
use flyangt_core::errors::ExError;
use flyangt_core::flyangt_core_types::{RunContext, RunId};
use flyangt_core::logging_facility::{init, OpTimer, Profile};
use flyangt_core::{log_op_end, log_op_start};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "flyangt")]
#[command(about = "FlyANGT - RC diffing, changelogs and retention", long_about = None)]
struct Cli {
    /// Tooling configuration file
    #[arg(long, global = true, default_value = "flyangt.toml")]
    config: PathBuf,

    /// Directory holding the RC registry
    #[arg(long, global = true, default_value = ".flyangt")]
    state_dir: PathBuf,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Structural diff of two JSON files
    Diff(commands::diff::DiffArgs),
    /// Release candidate operations
    Rc(commands::rc::RcArgs),
    /// Changelog between two RCs
    Changelog(commands::changelog::ChangelogArgs),
    /// Retention report and apply
    Retention(commands::retention::RetentionArgs),
}

fn main() {
    let cli = Cli::parse();
    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let run = RunContext::new();
    let timer = OpTimer::start();
    log_op_start!("cli", run_id = run.run_id.as_str());

    let result = commands::Context::load(&cli.config, cli.state_dir).and_then(|ctx| match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, &ctx),
        Commands::Rc(args) => commands::rc::execute(args, &ctx),
        Commands::Changelog(args) => commands::changelog::execute(args, &ctx),
        Commands::Retention(args) => commands::retention::execute(args, &ctx),
    });

    if let Err(e) = result {
        report_failure(e, &run);
        std::process::exit(1);
    }
    log_op_end!("cli", duration_ms = timer.elapsed_ms(), run_id = run.run_id.as_str());
}

/// Log and print a failed run; structured errors carry the run id
fn report_failure(err: Box<dyn std::error::Error>, run: &RunContext) {
    match err.downcast::<ExError>() {
        Ok(ex) => {
            let ex = (*ex).with_run_id(run.run_id.clone());
            let run_id = ex.run_id().map(RunId::as_str).unwrap_or_default();
            tracing::error!(
                component = module_path!(),
                op = "cli",
                run_id = run_id,
                err_code = ex.code(),
                error = %ex,
            );
            eprintln!("Error: {} (run_id: {})", ex, run_id);
        }
        Err(other) => {
            tracing::error!(
                component = module_path!(),
                op = "cli",
                run_id = run.run_id.as_str(),
                error = %other,
            );
            eprintln!("Error: {} (run_id: {})", other, run.run_id);
        }
    }
}
