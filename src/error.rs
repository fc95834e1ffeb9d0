use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by this crate.
///
/// Only the file boundary can fail: malformed lines are silently discarded
/// by the parser, typed reads report absence via `Option`, and mutations
/// report their single failure condition (an empty key) via `bool`.
#[derive(Debug, Error)]
pub enum IniError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
