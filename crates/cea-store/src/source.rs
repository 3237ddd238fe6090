//! Example source reader

use crate::error::{StoreError, StoreResult};
use crate::jsonl::read_jsonl;
use cea_record::Example;
use std::path::{Path, PathBuf};

/// Line-delimited JSON file of [`Example`]s
#[derive(Debug, Clone)]
pub struct ExampleSource {
    path: PathBuf,
}

impl ExampleSource {
    /// Open a source file
    ///
    /// # Errors
    /// [`StoreError::InputNotFound`] if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(StoreError::InputNotFound { path });
        }
        Ok(Self { path })
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every example in file order
    pub fn read_all(&self) -> StoreResult<Vec<Example>> {
        let examples: Vec<Example> = read_jsonl(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            count = examples.len(),
            "read example source"
        );
        Ok(examples)
    }
}
