//! Fake `ProjectStore` whose per-call latency and outcome are scripted.
//!
//! Calls beyond the end of the script succeed immediately. Every call is
//! counted so harnesses can assert how many retrievals the pipeline issued.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pulse::{Project, ProjectStore, StoreError};

#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Succeed,
    Fail,
}

pub struct ScriptedStore {
    projects: Vec<Project>,
    script: Mutex<VecDeque<(Duration, Outcome)>>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue the behaviour of the next unscripted call.
    pub fn then(self, latency_ms: u64, outcome: Outcome) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back((Duration::from_millis(latency_ms), outcome));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectStore for ScriptedStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, StoreError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let step = self.script.lock().unwrap().pop_front();
        let (latency, outcome) = step.unwrap_or((Duration::ZERO, Outcome::Succeed));
        tokio::time::sleep(latency).await;
        match outcome {
            Outcome::Succeed => Ok(self.projects.clone()),
            Outcome::Fail => Err(StoreError::Unavailable(format!("scripted failure on call {call}"))),
        }
    }
}
