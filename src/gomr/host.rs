use crate::error::{GomrError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Manifest marker identifying a host module root.
pub const MANIFEST_FILENAME: &str = "go.mod";

/// Finds the host module root: the first of `start` and its ancestors that
/// contains a `go.mod` file. Fails with [`GomrError::NoHostModule`] when the
/// filesystem root is reached without a match; a stat error other than
/// NotFound aborts the search.
pub fn find_host_root(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(MANIFEST_FILENAME);
        match candidate.metadata() {
            Ok(meta) if meta.is_file() => return Ok(dir.to_path_buf()),
            Ok(_) => {} // a directory named go.mod is not a manifest
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(GomrError::Io(e)),
        }
    }
    Err(GomrError::NoHostModule)
}

/// True if `dir` already carries its own manifest. `add` uses the negation
/// to decide whether a placeholder must be synthesized.
pub fn has_manifest(dir: &Path) -> bool {
    dir.join(MANIFEST_FILENAME).is_file()
}
