//! # Record Store
//!
//! The `.gomr` file at the host module root: one [`ReplaceRecord`] per line,
//! `<name> <path>` with a `!` path prefix for synthetic records.
//!
//! Lifecycle:
//! - created implicitly on the first `add` (via [`RecordStore::append`])
//! - appended to by `add`, fully rewritten by `remove`
//! - read-only for `up`/`down`
//! - never deleted as a whole; an empty file is a valid empty store and is
//!   distinct from a missing one
//!
//! There are no concurrent writers, so truncate-and-rewrite is sufficient
//! for [`RecordStore::save`].

use crate::error::{GomrError, Result};
use crate::model::ReplaceRecord;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the record file inside the host module root.
pub const STORE_FILENAME: &str = ".gomr";

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Binds to the `.gomr` file inside `host_root`.
    pub fn new(host_root: &Path) -> Self {
        Self {
            path: host_root.join(STORE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all records. Fails with [`GomrError::StoreNotFound`] if the file
    /// doesn't exist, [`GomrError::StoreParse`] on a malformed line.
    pub fn load(&self) -> Result<Vec<ReplaceRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GomrError::StoreNotFound(self.path.clone())
            } else {
                GomrError::Io(e)
            }
        })?;

        let mut records = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(ReplaceRecord::decode(&self.path, i + 1, line)?);
        }
        Ok(records)
    }

    /// Like [`RecordStore::load`], but a missing file means "no records yet".
    /// Used by `remove`/`up`/`down` so a module that never ran `add` behaves
    /// as an empty store instead of erroring.
    pub fn load_or_empty(&self) -> Result<Vec<ReplaceRecord>> {
        match self.load() {
            Err(GomrError::StoreNotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Replaces the file contents with the given records. Zero records
    /// produce an empty file, not a deleted one.
    pub fn save(&self, records: &[ReplaceRecord]) -> Result<()> {
        let mut content = String::new();
        for record in records {
            content.push_str(&record.encode());
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(GomrError::Io)
    }

    /// Appends one record, creating the file if needed. `add` uses this so
    /// it never has to read existing records.
    pub fn append(&self, record: &ReplaceRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(GomrError::Io)?;
        writeln!(file, "{}", record.encode()).map_err(GomrError::Io)?;
        Ok(())
    }
}
