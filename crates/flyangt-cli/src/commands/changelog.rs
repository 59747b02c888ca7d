//! Changelog command
//!
//! Usage: flyangt changelog --from <ID> --to <ID> [--lang en|ru] [--format md|json] [--out <DIR>]

use crate::commands::{CommandResult, Context};
use clap::{Args, ValueEnum};
use flyangt_core::changelog::Language;
use flyangt_core::errors::{ExError, FlyError};
use flyangt_core::rc::build_rc_changelog;
use flyangt_core::render::{export_json, export_markdown, ExportFile};
use flyangt_core::{Clock, SystemClock};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Md,
    Json,
}

#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Older RC id
    #[arg(long)]
    pub from: String,

    /// Newer RC id
    #[arg(long)]
    pub to: String,

    #[arg(long, default_value = "en")]
    pub lang: Language,

    #[arg(long, value_enum, default_value_t = OutputFormat::Md)]
    pub format: OutputFormat,

    /// Write a named export file into this directory instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: ChangelogArgs, ctx: &Context) -> CommandResult {
    let registry = ctx.rc_store().load()?;
    let lookup = |id: &str| {
        registry
            .get(id)
            .ok_or_else(|| ExError::from(FlyError::RcNotFound { rc_id: id.to_string() }))
    };
    let from = lookup(&args.from)?;
    let to = lookup(&args.to)?;

    let rc_config = &ctx.config.rc;
    let changelog = &ctx.config.changelog;
    let doc = build_rc_changelog(
        from,
        to,
        args.lang,
        &rc_config.diff_groups,
        rc_config.max_diff_items,
        changelog,
        SystemClock.now(),
    );

    let formatting = &changelog.formatting;
    let file: ExportFile = match args.format {
        OutputFormat::Md => export_markdown(&doc, &formatting.file_prefix, formatting.include_meta),
        OutputFormat::Json => export_json(&doc, &formatting.file_prefix),
    };

    match args.out {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let path = dir.join(&file.filename);
            std::fs::write(&path, &file.content)?;
            println!("{}", path.display());
        }
        None => print!("{}", String::from_utf8_lossy(&file.content)),
    }
    Ok(())
}
