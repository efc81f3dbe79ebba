use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a [`RulesIndex`](super::RulesIndex).
///
/// No partial index is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum RulesError {
    /// The rules file could not be opened or read.
    #[error("failed to read rules file {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// The reader failed mid-stream.
    #[error("I/O error while reading rules: {0}")]
    Io(#[from] std::io::Error),

    /// A record did not have exactly four `:`-separated fields.
    #[error("line {line}: expected 4 fields (category:langcode:trigger:dependency), found {found}")]
    FieldCount { line: usize, found: usize },
}
