use crate::commands::helpers::remove_file_if_exists;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::host::find_host_root;
use crate::store::RecordStore;
use crate::tool::ManifestTool;
use std::path::Path;

/// Permanently removes every tracked replace whose name matches `name`
/// (case-insensitively): drops the directive from the host manifest,
/// deletes any synthesized go.mod/go.sum, and rewrites the store without
/// the matching records.
///
/// A name with no stored record is reported and succeeds; the store and
/// manifest are left untouched.
pub fn run<T: ManifestTool>(tool: &T, cwd: &Path, name: &str) -> Result<CmdResult> {
    let host_root = find_host_root(cwd)?;
    let store = RecordStore::new(&host_root);

    let (removed, kept): (Vec<_>, Vec<_>) = store
        .load_or_empty()?
        .into_iter()
        .partition(|r| r.matches(name));

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "could not find stored replace for module: {name}"
        )));
        return Ok(result);
    }

    for record in &removed {
        tool.edit(
            Some(&host_root),
            &[format!("-dropreplace={}", record.name)],
        )?;

        if record.synthetic {
            remove_file_if_exists(&record.path.join("go.mod"))?;
            remove_file_if_exists(&record.path.join("go.sum"))?;
        }
    }

    store.save(&kept)?;

    for record in &removed {
        result.add_message(CmdMessage::success(format!(
            "deleted replace: {} => {}",
            record.name,
            record.path.display()
        )));
    }
    Ok(result.with_affected_records(removed))
}
