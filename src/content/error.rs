//! Content store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while querying a content store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("content collection `{0}` not found")]
    CollectionNotFound(String),

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed entry `{}`: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl StoreError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
