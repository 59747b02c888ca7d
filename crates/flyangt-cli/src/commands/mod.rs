pub mod changelog;
pub mod diff;
pub mod rc;
pub mod retention;

use flyangt_core::rc::RcStore;
use flyangt_core::ToolingConfig;
use flyangt_store::FsStorage;
use std::path::{Path, PathBuf};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Settings shared by every command
pub struct Context {
    pub config: ToolingConfig,
    pub state_dir: PathBuf,
}

impl Context {
    pub fn load(config_path: &Path, state_dir: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            config: ToolingConfig::load(config_path)?,
            state_dir,
        })
    }

    pub fn rc_store(&self) -> RcStore<FsStorage> {
        RcStore::new(FsStorage::new(&self.state_dir))
    }
}

/// Pretty-print a serializable value on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
