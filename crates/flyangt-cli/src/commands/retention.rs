//! Retention commands
//!
//! Usage:
//!   flyangt retention report --records <FILE> [--days <N>] [--include-new] [--kind lead|request]
//!   flyangt retention apply  --records <FILE> [--days <N>] [--include-new] [--kind lead|request]
//!
//! `apply` rewrites the records file with the archived statuses.

use crate::commands::{print_json, CommandResult, Context};
use clap::{Args, Subcommand, ValueEnum};
use flyangt_core::retention::{
    apply, generate_report, InMemoryRecords, RecordKind, RetentionCriteria, RetentionRecord,
};
use flyangt_core::{Clock, SystemClock};
use flyangt_store::files::{read_json, write_json};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Lead,
    Request,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Lead => RecordKind::Lead,
            KindArg::Request => RecordKind::Request,
        }
    }
}

#[derive(Debug, Args)]
pub struct RetentionArgs {
    #[command(subcommand)]
    pub command: RetentionCommand,
}

#[derive(Debug, Subcommand)]
pub enum RetentionCommand {
    /// Preview eligible records
    Report(CriteriaArgs),
    /// Archive eligible records
    Apply(CriteriaArgs),
}

#[derive(Debug, Args)]
pub struct CriteriaArgs {
    /// JSON array of records
    #[arg(long)]
    pub records: PathBuf,

    /// Minimum age in days
    #[arg(long, default_value_t = 90)]
    pub days: u64,

    /// Also target records still marked new
    #[arg(long)]
    pub include_new: bool,

    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

impl CriteriaArgs {
    fn criteria(&self) -> RetentionCriteria {
        RetentionCriteria {
            days: self.days,
            include_new: self.include_new,
            kind: self.kind.map(RecordKind::from),
        }
    }
}

pub fn execute(args: RetentionArgs, ctx: &Context) -> CommandResult {
    let config = &ctx.config.retention;
    let now = SystemClock.now();
    match args.command {
        RetentionCommand::Report(criteria_args) => {
            let records: Vec<RetentionRecord> = read_json(&criteria_args.records)?;
            let report = generate_report(&records, &criteria_args.criteria(), config, now);
            print_json(&report)
        }
        RetentionCommand::Apply(criteria_args) => {
            let records: Vec<RetentionRecord> = read_json(&criteria_args.records)?;
            let mut store = InMemoryRecords::new(records.clone());
            let result = apply(&records, &criteria_args.criteria(), config, now, &mut store);
            if result.archived_count > 0 {
                write_json(&criteria_args.records, &store.records())?;
            }
            print_json(&result)?;
            if result.success {
                Ok(())
            } else {
                Err(format!("retention apply finished with {} error(s)", result.errors.len()).into())
            }
        }
    }
}
