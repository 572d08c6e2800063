use chrono::NaiveDateTime;
use md5::{Digest, Md5};

/// MD5 of the full content, as 32 lowercase hex chars.
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}

/// Canonical file name: `YYYY-MM-DD-HHmmss-<hash>.jpg`
pub fn canonical_name(time: &NaiveDateTime, hash: &str) -> String {
    format!("{}-{}.jpg", time.format("%Y-%m-%d-%H%M%S"), hash)
}
