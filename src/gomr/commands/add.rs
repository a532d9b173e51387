use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GomrError, Result};
use crate::host::{self, find_host_root};
use crate::model::ReplaceRecord;
use crate::store::RecordStore;
use crate::tool::ManifestTool;
use std::path::{Path, PathBuf};

/// Adds a replace directive pointing `name` at a local path and records it.
///
/// With no explicit path, the conventional `<workspace_root>/src/<name>`
/// location is tried. The target must exist on disk before any manifest is
/// touched; if it lacks a go.mod, a placeholder is synthesized there first
/// so the host manifest never references a manifest-less directory.
pub fn run<T: ManifestTool>(
    tool: &T,
    cwd: &Path,
    workspace_root: Option<&Path>,
    name: &str,
    path: Option<PathBuf>,
) -> Result<CmdResult> {
    let path = match path {
        Some(p) => p,
        None => workspace_root
            .unwrap_or(Path::new(""))
            .join("src")
            .join(name),
    };

    // A field the store can't round-trip would poison every later load.
    ReplaceRecord::ensure_storable(name, &path)?;

    match path.metadata() {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GomrError::PathNotFound(path));
        }
        Err(e) => return Err(GomrError::Io(e)),
    }

    let synthetic = !host::has_manifest(&path);
    let host_root = find_host_root(cwd)?;

    // The placeholder must exist before the host manifest references it.
    if synthetic {
        tool.init(&path, name)?;
    }

    tool.edit(
        Some(&host_root),
        &[format!("-replace={}={}", name, path.display())],
    )?;

    let record = ReplaceRecord::new(name, path, synthetic);
    RecordStore::new(&host_root).append(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "added replace: {} => {}",
        record.name,
        record.path.display()
    )));
    Ok(result.with_affected_records(vec![record]))
}
