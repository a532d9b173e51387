//! # Manifest Tool
//!
//! Thin gateway to `go mod`. All manifest reading and writing is delegated
//! to the real `go` binary; this module only shells out and surfaces its
//! output on failure. The tool's verdict on manifest correctness is final,
//! so there are no retries.
//!
//! The [`ManifestTool`] trait exists so command logic can be tested against
//! a recording fake without a `go` toolchain present.

use crate::error::{GomrError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

/// Environment variable overriding the `go` executable, used by the
/// end-to-end tests to substitute a stub binary.
pub const GO_BIN_ENV: &str = "GOMR_GO";

pub trait ManifestTool {
    /// Runs `go mod edit <args...>`. `dir` is the working directory for the
    /// invocation; `None` means the current process directory.
    fn edit(&self, dir: Option<&Path>, args: &[String]) -> Result<()>;

    /// Runs `go mod init <module>` in `dir`, creating a fresh go.mod that
    /// declares `module` as the directory's own identity.
    fn init(&self, dir: &Path, module: &str) -> Result<()>;
}

/// Production implementation wrapping the `go` binary.
pub struct GoTool {
    go_bin: String,
}

impl GoTool {
    pub fn new() -> Self {
        let go_bin = env::var(GO_BIN_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "go".to_string());
        Self { go_bin }
    }

    fn run(&self, dir: Option<&Path>, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(&self.go_bin);
        cmd.arg("mod").args(args);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(GomrError::Io)?;
        if output.status.success() {
            return Ok(());
        }

        // go writes diagnostics to both streams depending on the failure;
        // capture both for display.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(GomrError::Tool {
            output: combined.trim_end().to_string(),
        })
    }
}

impl Default for GoTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestTool for GoTool {
    fn edit(&self, dir: Option<&Path>, args: &[String]) -> Result<()> {
        let mut full: Vec<&str> = vec!["edit"];
        full.extend(args.iter().map(String::as_str));
        self.run(dir, &full)
    }

    fn init(&self, dir: &Path, module: &str) -> Result<()> {
        self.run(Some(dir), &["init", module])
    }
}
