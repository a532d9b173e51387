use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.2.0" for releases, "0.2.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "gomr", bin_name = "gomr", version = get_version())]
#[command(about = "Manages replaces in Go modules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a replace line to the current module
    Add {
        /// Module to redirect (e.g. github.com/foo/bar)
        name: String,

        /// Local path to point it at (defaults to $GOPATH/src/<name>)
        path: Option<PathBuf>,
    },

    /// Remove a replace from the current module
    #[command(alias = "rm")]
    Remove {
        /// Module whose replace should be dropped (matched case-insensitively)
        name: String,
    },

    /// Add all stored replace lines to go.mod
    Up,

    /// Remove all stored replace lines from go.mod
    Down,
}
