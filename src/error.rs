//! Error types surfaced to the host bundler.

use thiserror::Error;

/// Failures that abort the current build-emit event.
///
/// These are configuration problems, not data problems: malformed chunk
/// entries are absorbed by the data model's defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An unrecognized `chunksSortMode` string, reported when sorting runs.
    #[error("\"{0}\" is not a valid chunk sort mode")]
    InvalidSortMode(String),
}
