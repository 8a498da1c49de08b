//! pulse-core: Project Pulse core library.
//!
//! This crate exposes the stages of the query pipeline as public modules,
//! plus the shared types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Normalizer ──► Executor ──► filtered projects
//!                                 │
//!                                 └──► ProjectStore::fetch_all
//! ```
//!
//! Stages talk over `tokio` channels. [`pipeline::SearchPipeline::activate`]
//! wires them together and hands back the two ends the UI needs.

pub mod config;
pub mod error;
pub mod executor;
pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod store;
pub mod types;

pub use error::{PipelineError, StoreError};
pub use pipeline::{QueryInput, ResultStream, SearchPipeline, SearchUpdate};
pub use store::ProjectStore;
pub use types::{Project, ProjectId};
