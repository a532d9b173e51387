use crate::error::{GomrError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Deletes a file, treating "already absent" as success. Used when cleaning
/// up synthetic manifests: a record whose placeholder is already gone is a
/// tolerated mismatch, not an error.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(GomrError::Io(e)),
    }
}
