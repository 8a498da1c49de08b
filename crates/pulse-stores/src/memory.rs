//! In-memory store: a fixed collection, optionally slowed down.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pulse_core::{Project, ProjectStore, StoreError};

/// The three projects Pulse ships with.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(1, "Project Alpha", ["angular", "cli"]),
        Project::new(2, "Project Beta", ["rxjs", "http"]),
        Project::new(3, "Project Gamma", ["forms", "routing"]),
    ]
}

/// Serves a snapshot held in memory. Every call clones the full collection.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    projects: Arc<[Project]>,
    latency: Duration,
}

impl MemoryStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into(),
            latency: Duration::ZERO,
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_projects())
    }

    /// Delay every fetch by `latency`, to make debounce and supersession
    /// visible in the UI.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, StoreError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.projects.to_vec())
    }
}
