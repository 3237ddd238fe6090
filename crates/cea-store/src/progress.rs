//! Durable set of completed example ids
//!
//! The state file is a single JSON object `{"done_ids": [...]}` that is
//! fully replaced on every save. Replacement goes through a temporary file
//! in the same directory followed by a rename, so a crash leaves either the
//! previous or the new complete set on disk.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::{self, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Example ids already turned into an annotation record
///
/// Grows monotonically in a normal workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSet {
    #[serde(default)]
    done_ids: BTreeSet<String>,
}

impl ProgressSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.done_ids.contains(id)
    }

    /// Mark an id done, returning whether it was new
    #[inline]
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.done_ids.insert(id.into())
    }

    /// Mark many ids done, returning how many were new
    pub fn absorb<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for id in ids {
            if self.insert(id) {
                added += 1;
            }
        }
        added
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.done_ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.done_ids.is_empty()
    }

    /// Done ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.done_ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ProgressSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            done_ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Reads and atomically replaces the persisted [`ProgressSet`]
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    path: PathBuf,
}

impl ProgressTracker {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted set; a missing file is an empty set
    pub fn load(&self) -> StoreResult<ProgressSet> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no progress state yet");
                return Ok(ProgressSet::new());
            }
            Err(e) => return Err(StoreError::io_error(&self.path, e)),
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Progress {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the persisted set with `set`
    pub fn save(&self, set: &ProgressSet) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        create_dir_all(&dir).map_err(|e| StoreError::io_error(&dir, e))?;

        let mut body = serde_json::to_string_pretty(set)?;
        body.push('\n');

        let mut tmp =
            tempfile::NamedTempFile::new_in(&dir).map_err(|e| StoreError::io_error(&dir, e))?;
        tmp.write_all(body.as_bytes())
            .map_err(|e| StoreError::io_error(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io_error(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io_error(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), done = set.len(), "saved progress");
        Ok(())
    }
}
