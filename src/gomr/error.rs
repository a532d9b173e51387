use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GomrError {
    #[error("path {0} does not exist")]
    PathNotFound(PathBuf),

    #[error("could not find a go.mod in the working directory or its parents")]
    NoHostModule,

    #[error("no record file at {0}")]
    StoreNotFound(PathBuf),

    #[error("malformed record in {path} at line {line}: expected `<name> <path>`")]
    StoreParse { path: PathBuf, line: usize },

    #[error("cannot store {field} {value:?}: must be non-empty with no whitespace")]
    UnstorableField { field: &'static str, value: String },

    #[error("go tool failed:\n{output}")]
    Tool { output: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GomrError>;
