//! Key-to-path mapping
//!
//! Keys are hashed so any string is a safe file name; the first two hex
//! characters of the digest pick the shard directory.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub fn key_digest(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}

/// `<root>/<ab>/<digest>.json` for a key whose digest starts with `ab`
pub fn shard_path(root: &Path, key: &str) -> PathBuf {
    let digest = key_digest(key);
    let shard = &digest[..2];
    root.join(shard).join(format!("{}.json", digest))
}
