use crate::commands::helpers::remove_file_if_exists;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::host::find_host_root;
use crate::store::RecordStore;
use crate::tool::ManifestTool;
use std::path::Path;

/// Drops every stored replace directive from the host manifest without
/// forgetting it: the store is left as-is so `up` can reinstall the set.
///
/// Synthetic placeholder manifests are deleted (absence tolerated), then all
/// `-dropreplace` arguments go out in a single batched edit.
pub fn run<T: ManifestTool>(tool: &T, cwd: &Path) -> Result<CmdResult> {
    let host_root = find_host_root(cwd)?;
    let records = RecordStore::new(&host_root).load_or_empty()?;

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("no stored replaces to remove"));
        return Ok(result);
    }

    let mut args = Vec::with_capacity(records.len());
    for record in &records {
        if record.synthetic {
            remove_file_if_exists(&record.path.join("go.mod"))?;
        }
        args.push(format!("-dropreplace={}", record.name));
    }

    tool.edit(Some(&host_root), &args)?;

    result.add_message(CmdMessage::success("replace lines removed"));
    Ok(result.with_affected_records(records))
}
