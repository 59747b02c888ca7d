//! RC id generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const RANDOM_ID_LEN: usize = 6;

/// How RC ids are derived
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RcIdMode {
    /// `PREFIX-YYYYMMDD-HHMMSS`
    #[default]
    Timestamp,
    /// `PREFIX-XXXXXX`
    Random,
}

/// Generate an RC id
///
/// Ids only need to be distinct enough for people comparing RCs by hand.
pub fn generate_rc_id(mode: RcIdMode, prefix: &str, now: DateTime<Utc>) -> String {
    match mode {
        RcIdMode::Timestamp => format!("{}-{}", prefix, now.format("%Y%m%d-%H%M%S")),
        RcIdMode::Random => format!("{}-{}", prefix, random_suffix(Uuid::new_v4().as_u128())),
    }
}

/// Low-order base36 digits of `seed`
fn random_suffix(mut seed: u128) -> String {
    let mut out = [0u8; RANDOM_ID_LEN];
    for slot in out.iter_mut().rev() {
        *slot = BASE36[(seed % 36) as usize];
        seed /= 36;
    }
    out.iter().map(|b| char::from(*b)).collect()
}
