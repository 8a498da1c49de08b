//! pulse-stores: project store adapters for pulse.
//!
//! Each adapter implements [`pulse_core::ProjectStore`] and returns the whole
//! collection on every call. The executor decides what to keep.

pub mod json_file;
pub mod memory;

use std::sync::Arc;

use pulse_core::config::StoreConfig;
use pulse_core::ProjectStore;

pub use json_file::JsonFileStore;
pub use memory::{sample_projects, MemoryStore};

/// Pick the store described by `[store]`: a JSON file when `path` is set,
/// otherwise the sample projects served from memory.
pub fn from_config(config: &StoreConfig) -> Arc<dyn ProjectStore> {
    match &config.path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "store: json file");
            Arc::new(JsonFileStore::new(path))
        }
        None => {
            tracing::debug!(latency_ms = config.latency_ms, "store: in-memory samples");
            Arc::new(MemoryStore::sample().with_latency(config.latency()))
        }
    }
}
