//! pulse: live project search
//!
//! Umbrella crate over the workspace. Integration tests and benches import
//! the layers through here.
//!
//! # Architecture
//!
//! ```text
//! keystrokes ──► Normalizer ──► Executor ──► ResultStream ──► UI
//!                (debounce,     (fetch per      │
//!                 distinct)      term, latest   │
//!                                wins, filter)  │
//!                                   │           │
//!                              ProjectStore ◄───┘ (memory / json file)
//! ```
//!
//! The normalizer and executor are tokio tasks joined by unbounded channels.
//! Dropping the [`ResultStream`](pulse_core::ResultStream) aborts both.

pub use pulse_core::{
    config, error, executor, filter, normalizer, pipeline, store, types, PipelineError, Project,
    ProjectId, ProjectStore, QueryInput, ResultStream, SearchPipeline, SearchUpdate, StoreError,
};
pub use pulse_stores::{from_config, sample_projects, JsonFileStore, MemoryStore};
