//! Strict line-delimited JSON decoding

use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Decode every non-blank line of `path`
///
/// Fails on the first line that is not valid UTF-8 or not valid JSON for
/// `T`; nothing is skipped silently.
pub(crate) fn read_jsonl<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let file = File::open(path).map_err(|e| StoreError::io_error(path, e))?;
    let reader = BufReader::new(file);
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| StoreError::io_error(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let value = serde_json::from_str(&line)
            .map_err(|e| StoreError::parse_error(path, idx + 1, e))?;
        out.push(value);
    }
    Ok(out)
}
