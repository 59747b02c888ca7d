//! RC commands
//!
//! Usage:
//!   flyangt rc create --state <FILE> [--name <NAME>]
//!   flyangt rc list | show <ID> | delete <ID> | select <ID>
//!   flyangt rc status --state <FILE>
//!   flyangt rc backup --out <FILE> | restore <FILE>

use crate::commands::{print_json, CommandResult, Context};
use clap::{Args, Subcommand};
use flyangt_core::errors::{ExError, FlyError};
use flyangt_core::rc::{build_artifacts, create_rc, RcInput, RcRegistry};
use flyangt_core::{Clock, SystemClock};
use flyangt_store::files::read_json;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RcArgs {
    #[command(subcommand)]
    pub command: RcCommand,
}

#[derive(Debug, Subcommand)]
pub enum RcCommand {
    /// Freeze the current state into a new RC
    Create {
        /// JSON file with locale, configCounts, release, smoke and i18n
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// List RCs, newest first
    List,
    /// Print one RC as JSON
    Show { id: String },
    /// Remove an RC from the registry
    Delete { id: String },
    /// Mark an RC as selected
    Select { id: String },
    /// Live gate status of a state file, without creating an RC
    Status {
        #[arg(long)]
        state: PathBuf,
    },
    /// Write the registry to a backup file
    Backup {
        #[arg(long)]
        out: PathBuf,
    },
    /// Replace the registry with a backup
    Restore { file: PathBuf },
}

pub fn execute(args: RcArgs, ctx: &Context) -> CommandResult {
    let mut store = ctx.rc_store();
    match args.command {
        RcCommand::Create { state, name } => {
            let input: RcInput = read_json(&state)?;
            let rc = create_rc(&input, name.as_deref(), &ctx.config.rc, &SystemClock);
            let registry = store.load()?.with_record(rc.clone(), ctx.config.rc.max_records);
            store.save(&registry)?;
            println!("{} {}", rc.id, rc.status);
        }
        RcCommand::List => {
            let registry = store.load()?;
            let selected = registry.selected();
            for rc in registry.records() {
                let marker = if Some(rc.id.as_str()) == selected { "*" } else { " " };
                println!(
                    "{} {}  {:<6}  {}  {}",
                    marker,
                    rc.id,
                    rc.status.to_string(),
                    rc.created_at.format("%Y-%m-%d %H:%M:%S"),
                    rc.name
                );
            }
        }
        RcCommand::Show { id } => {
            let registry = store.load()?;
            let rc = registry
                .get(&id)
                .ok_or_else(|| ExError::from(FlyError::RcNotFound { rc_id: id.clone() }))?;
            print_json(rc)?;
        }
        RcCommand::Delete { id } => {
            let registry = store.load()?.without(&id)?;
            store.save(&registry)?;
            println!("deleted {}", id);
        }
        RcCommand::Select { id } => {
            let registry = store.load()?.select(&id)?;
            store.save(&registry)?;
            println!("selected {}", id);
        }
        RcCommand::Status { state } => {
            let input: RcInput = read_json(&state)?;
            let (status, summary, _) = build_artifacts(&input);
            print_json(&json!({ "status": status, "summary": summary }))?;
        }
        RcCommand::Backup { out } => {
            let raw = store.load()?.to_backup_json(SystemClock.now())?;
            std::fs::write(&out, raw)?;
            println!("wrote {}", out.display());
        }
        RcCommand::Restore { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let (registry, skipped): (RcRegistry, usize) = RcRegistry::from_backup_json(&raw)?;
            store.save(&registry)?;
            println!("restored {} record(s), skipped {}", registry.len(), skipped);
        }
    }
    Ok(())
}
