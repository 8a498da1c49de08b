//! Store: the boundary the executor fetches projects through.
//!
//! A store hands back the full current collection on every call. It may be
//! slow, and it may be called again before an earlier call has returned; the
//! executor never aborts a call, it only ignores results it no longer wants.
//! Implementations live in the `pulse-stores` crate.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::Project;

/// Source of the complete project collection.
///
/// `fetch_all` must be read-only: the executor issues one call per
/// normalized term and may leave several outstanding at once.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Project>, StoreError>;
}

