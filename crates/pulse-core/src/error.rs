//! Error types for the store boundary and the pipeline output.

use std::path::PathBuf;

use thiserror::Error;

/// A failed [`ProjectStore::fetch_all`](crate::ProjectStore::fetch_all) call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read project file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("project file '{}' is not a valid project list: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("project store is unavailable: {0}")]
    Unavailable(String),
}

/// Terminal failure delivered on a [`ResultStream`](crate::ResultStream).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("retrieval for term {term:?} failed: {source}")]
    Store {
        term: String,
        #[source]
        source: StoreError,
    },
}

impl PipelineError {
    /// The term whose retrieval failed.
    pub fn term(&self) -> &str {
        match self {
            PipelineError::Store { term, .. } => term,
        }
    }
}
