use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::host::find_host_root;
use crate::store::RecordStore;
use crate::tool::ManifestTool;
use std::path::Path;

/// Reinstalls every stored replace directive into the host manifest.
///
/// Synthetic placeholders are recreated first (idempotently, record by
/// record); the `-replace` arguments are then applied in a single batched
/// edit. A failing init aborts before the manifest is touched. The store is
/// read-only here.
pub fn run<T: ManifestTool>(tool: &T, cwd: &Path) -> Result<CmdResult> {
    let host_root = find_host_root(cwd)?;
    let records = RecordStore::new(&host_root).load_or_empty()?;

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("no stored replaces to install"));
        return Ok(result);
    }

    let mut args = Vec::with_capacity(records.len());
    for record in &records {
        if record.synthetic {
            tool.init(&record.path, &record.name)?;
        }
        args.push(format!(
            "-replace={}={}",
            record.name,
            record.path.display()
        ));
    }

    tool.edit(Some(&host_root), &args)?;

    result.add_message(CmdMessage::success("replace lines installed"));
    Ok(result.with_affected_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReplaceRecord;
    use crate::tool::testing::{RecordingTool, ToolCall};
    use std::fs;
    use tempfile::tempdir;

    fn host_module() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/host\n").unwrap();
        dir
    }

    #[test]
    fn inits_synthetics_then_batches_one_edit() {
        let host = host_module();
        RecordStore::new(host.path())
            .save(&[
                ReplaceRecord::new("a", "/x/a", false),
                ReplaceRecord::new("b", "/y/b", true),
            ])
            .unwrap();

        let tool = RecordingTool::new();
        run(&tool, host.path()).unwrap();

        assert_eq!(
            tool.calls(),
            vec![
                ToolCall::Init {
                    dir: "/y/b".into(),
                    module: "b".to_string(),
                },
                ToolCall::Edit {
                    dir: Some(host.path().to_path_buf()),
                    args: vec!["-replace=a=/x/a".to_string(), "-replace=b=/y/b".to_string()],
                },
            ]
        );
    }

    #[test]
    fn failing_init_aborts_before_the_edit() {
        let host = host_module();
        RecordStore::new(host.path())
            .save(&[
                ReplaceRecord::new("a", "/x/a", true),
                ReplaceRecord::new("b", "/y/b", false),
            ])
            .unwrap();

        let tool = RecordingTool {
            fail_init_for: Some("a".to_string()),
            ..RecordingTool::new()
        };
        assert!(run(&tool, host.path()).is_err());

        // Only the failed init was attempted; no edit ran.
        assert_eq!(tool.calls().len(), 1);
        assert!(matches!(tool.calls()[0], ToolCall::Init { .. }));
    }

    #[test]
    fn empty_store_skips_the_gateway() {
        let host = host_module();
        RecordStore::new(host.path()).save(&[]).unwrap();

        let tool = RecordingTool::new();
        let result = run(&tool, host.path()).unwrap();

        assert!(tool.calls().is_empty());
        assert!(result.affected_records.is_empty());
    }

    #[test]
    fn missing_store_behaves_as_empty() {
        let host = host_module();

        let tool = RecordingTool::new();
        run(&tool, host.path()).unwrap();

        assert!(tool.calls().is_empty());
    }

    #[test]
    fn does_not_rewrite_the_store() {
        let host = host_module();
        let store = RecordStore::new(host.path());
        let records = vec![ReplaceRecord::new("a", "/x/a", false)];
        store.save(&records).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let tool = RecordingTool::new();
        run(&tool, host.path()).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }
}
