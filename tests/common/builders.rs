//! Test builders: ergonomic constructors for `Project` lists and pipelines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use std::sync::Arc;
use std::time::Duration;

use pulse::config::{FailurePolicy, SearchConfig};
use pulse::{Project, ProjectStore, SearchPipeline};

// ---------------------------------------------------------------------------
// ProjectBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Project`] fixtures.
///
/// ```rust
/// let project = ProjectBuilder::new(7, "Delta").tag("cli").tag("tui").build();
/// ```
pub struct ProjectBuilder {
    id: u64,
    name: String,
    tags: Vec<String>,
}

impl ProjectBuilder {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Project {
        Project::new(self.id, self.name, self.tags)
    }
}

/// `n` projects named `Project-<i>` with a single `tag-<i % 10>` tag.
pub fn numbered_projects(n: u64) -> Vec<Project> {
    (1..=n)
        .map(|i| ProjectBuilder::new(i, format!("Project-{i}")).tag(format!("tag-{}", i % 10)).build())
        .collect()
}

// ---------------------------------------------------------------------------
// PipelineBuilder
// ---------------------------------------------------------------------------

/// Builds a [`SearchPipeline`] with the default 300 ms quiescence unless told
/// otherwise.
pub struct PipelineBuilder {
    store: Arc<dyn ProjectStore>,
    config: SearchConfig,
}

impl PipelineBuilder {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            config: SearchConfig::default(),
        }
    }

    pub fn quiescence(mut self, window: Duration) -> Self {
        self.config.quiescence_ms = window.as_millis() as u64;
        self
    }

    pub fn recover_on_error(mut self) -> Self {
        self.config.on_store_error = FailurePolicy::Recover;
        self
    }

    pub fn build(self) -> SearchPipeline {
        SearchPipeline::new(self.store, self.config)
    }
}
