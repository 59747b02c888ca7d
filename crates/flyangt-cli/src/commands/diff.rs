//! Diff command
//!
//! Usage: flyangt diff <A> <B> [--group <ID>] [--max-items <N>]

use crate::commands::{print_json, CommandResult, Context};
use clap::Args;
use flyangt_core::diff::diff;
use flyangt_store::files::read_json;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Before
    pub a: PathBuf,
    /// After
    pub b: PathBuf,

    /// Group id reported in the output
    #[arg(short, long, default_value = "diff")]
    pub group: String,

    /// Item cap (default: rc.max_diff_items)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Print only the one-line summary
    #[arg(long)]
    pub summary: bool,
}

pub fn execute(args: DiffArgs, ctx: &Context) -> CommandResult {
    let a: Value = read_json(&args.a)?;
    let b: Value = read_json(&args.b)?;
    let max_items = args.max_items.unwrap_or(ctx.config.rc.max_diff_items);

    let report = diff(&args.group, Some(&a), Some(&b), max_items);
    if args.summary {
        println!("{}", report.summary_line());
        Ok(())
    } else {
        print_json(&report)
    }
}
