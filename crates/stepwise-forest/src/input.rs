//! Validation applied before user input reaches an engine.

use crate::error::{Error, Result};

/// Case-folds a trie key and checks that it is a non-empty run of `a-z`.
pub fn normalize_key(raw: &str) -> Result<String> {
    let key = raw.to_lowercase();
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_lowercase()) {
        tracing::warn!(key = raw, "rejected trie key");
        return Err(Error::InvalidKey(raw.to_string()));
    }
    Ok(key)
}

/// Parses a value for the ordered structures.
pub fn parse_value(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        tracing::warn!(value = raw, "rejected value");
        Error::InvalidValue(raw.to_string())
    })
}

/// Slot of a validated lowercase letter.
#[inline]
pub(crate) fn slot(b: u8) -> usize {
    (b - b'a') as usize
}
