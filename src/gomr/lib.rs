//! # Gomr Architecture
//!
//! Gomr manages temporary local `replace` directives in Go modules: point a
//! dependency at a checkout on disk, keep a record of what was pointed where,
//! and flip the whole set off (`down`) and back on (`up`) without losing it.
//!
//! This is a **library with a thin CLI client**, not a CLI with incidental
//! library code. The split drives the layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! │  - The ONLY place that touches stdout/stderr                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / remove / up / down orchestration                   │
//! │  - Returns structured CmdResult, no I/O assumptions         │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                          │
//!                  ▼                          ▼
//! ┌───────────────────────────┐  ┌───────────────────────────────┐
//! │  Record Store (store.rs)  │  │  Manifest Tool (tool.rs)      │
//! │  - the .gomr file         │  │  - ManifestTool trait         │
//! │  - line codec in model.rs │  │  - GoTool runs `go mod ...`   │
//! └───────────────────────────┘  └───────────────────────────────┘
//! ```
//!
//! ## The bookkeeping invariant
//!
//! Every replace directive gomr writes into `go.mod` is mirrored by one line
//! in `.gomr` at the host module root. Records whose target directory had no
//! `go.mod` of its own carry a synthetic marker: gomr ran `go mod init`
//! there, so it also owns deleting that placeholder on `remove`/`down`.
//!
//! Operations are sequential and non-transactional. A failure aborts the
//! remaining steps and is reported; earlier steps are not rolled back, so the
//! store and the manifest can diverge after a partial failure. The external
//! `go` tool is the authority on manifest correctness and is never retried.
//!
//! ## Module Overview
//!
//! - [`commands`]: the four operations and their result types
//! - [`store`]: persistence of tracked records (the `.gomr` file)
//! - [`model`]: [`model::ReplaceRecord`] and its line encoding
//! - [`tool`]: the `go mod` gateway behind the [`tool::ManifestTool`] trait
//! - [`host`]: host-module root discovery (the `go.mod` walk)
//! - [`error`]: error types

pub mod commands;
pub mod error;
pub mod host;
pub mod model;
pub mod store;
pub mod tool;
