//! Atomic write primitive
//!
//! Content goes to a sibling temp file first and is renamed over the target,
//! so readers see either the old or the new value.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
    }

    let mut temp_name = target_path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content).map_err(|e| io_error("write_store_temp", e))?;
    fs::rename(temp_path, target_path).map_err(|e| io_error("rename_store_temp", e))?;

    Ok(())
}
