//! Append-only annotation log
//!
//! One compact JSON line per completed example. Lines are never rewritten;
//! a successful [`OutputLog::append`] is the commit point of an example.

use crate::error::{StoreError, StoreResult};
use crate::jsonl::read_jsonl;
use cea_record::AnnotationRecord;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Line-delimited JSON file of [`AnnotationRecord`]s
#[derive(Debug, Clone)]
pub struct OutputLog {
    path: PathBuf,
}

#[derive(Deserialize)]
struct RecordId {
    id: String,
}

impl OutputLog {
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

    /// Append one record as a single line and sync it to disk
    pub fn append(&self, record: &AnnotationRecord) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent).map_err(|e| StoreError::io_error(parent, e))?;
            }
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io_error(&self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| StoreError::io_error(&self.path, e))?;
        file.sync_data()
            .map_err(|e| StoreError::io_error(&self.path, e))?;

        tracing::debug!(id = %record.id, path = %self.path.display(), "appended record");
        Ok(())
    }

    /// Decode every record in the log
    ///
    /// # Errors
    /// [`StoreError::LogNotFound`] if the log does not exist yet.
    pub fn read_records(&self) -> StoreResult<Vec<AnnotationRecord>> {
        if !self.path.exists() {
            return Err(StoreError::LogNotFound {
                path: self.path.clone(),
            });
        }
        read_jsonl(&self.path)
    }

    /// Ids of every record present in the log
    ///
    /// A missing log has no ids. Only the `id` field of each line is decoded.
    pub fn annotated_ids(&self) -> StoreResult<BTreeSet<String>> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }
        let ids: Vec<RecordId> = read_jsonl(&self.path)?;
        Ok(ids.into_iter().map(|r| r.id).collect())
    }
}
