//! Executor: one retrieval per term, latest term wins.
//!
//! Each incoming term bumps the [`Generation`] and spawns a retrieval task
//! tagged with it. Completed retrievals report back on an internal channel;
//! only the one carrying the current generation is filtered and emitted. Older
//! retrievals keep running to completion (the store cannot be interrupted) and
//! their results are dropped on arrival.

use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::FailurePolicy;
use crate::error::{PipelineError, StoreError};
use crate::filter::filter_projects;
use crate::store::ProjectStore;
use crate::types::Project;

/// One value on the pipeline's output channel.
pub type SearchUpdate = Result<Vec<Project>, PipelineError>;

/// Token identifying the most recently issued retrieval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen{}", self.0)
    }
}

/// A finished store call, tagged with the generation that issued it.
struct Retrieval {
    generation: Generation,
    term: String,
    outcome: Result<Vec<Project>, StoreError>,
}

/// Retrieval + staleness + filter stage. Consumed by [`Executor::run`].
pub struct Executor {
    store: Arc<dyn ProjectStore>,
    policy: FailurePolicy,
    current: Generation,
    /// True while the current generation's retrieval has not reported back.
    in_flight: bool,
}

impl Executor {
    pub fn new(store: Arc<dyn ProjectStore>, policy: FailurePolicy) -> Self {
        Self {
            store,
            policy,
            current: Generation::default(),
            in_flight: false,
        }
    }

    /// Drive the stage.
    ///
    /// Stops when `output` is dropped, after a terminal store failure, or once
    /// `terms` has ended and the current retrieval (if any) has reported.
    /// Returning drops the completion receiver, so every retrieval still out
    /// is stale for good.
    pub async fn run(mut self, mut terms: UnboundedReceiver<String>, output: UnboundedSender<SearchUpdate>) {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Retrieval>();
        let mut terms_open = true;

        loop {
            if !terms_open && !self.in_flight {
                tracing::debug!(generation = %self.current, "executor: terms exhausted");
                break;
            }

            // A new term takes priority over a completion that raced it: the
            // completion is stale the moment the term is seen.
            tokio::select! {
                biased;

                () = output.closed() => {
                    tracing::debug!("executor: output dropped");
                    break;
                }

                term = terms.recv(), if terms_open => match term {
                    Some(term) => self.issue(term, &done_tx),
                    None => terms_open = false,
                },

                Some(done) = done_rx.recv() => {
                    if self.complete(done, &output).is_break() {
                        break;
                    }
                }
            }
        }
    }

    fn issue(&mut self, term: String, done: &UnboundedSender<Retrieval>) {
        if self.in_flight {
            tracing::debug!(superseded = %self.current, "executor: in-flight retrieval is now stale");
        }
        self.current = self.current.next();
        self.in_flight = true;

        let generation = self.current;
        tracing::debug!(%generation, term = %term, "executor: retrieval issued");

        let store = Arc::clone(&self.store);
        let done = done.clone();
        tokio::spawn(async move {
            let outcome = store.fetch_all().await;
            // Fails only if the executor has already stopped.
            let _ = done.send(Retrieval {
                generation,
                term,
                outcome,
            });
        });
    }

    fn complete(&mut self, done: Retrieval, output: &UnboundedSender<SearchUpdate>) -> ControlFlow<()> {
        if done.generation != self.current {
            tracing::debug!(
                stale = %done.generation,
                current = %self.current,
                term = %done.term,
                "executor: stale result discarded"
            );
            return ControlFlow::Continue(());
        }
        self.in_flight = false;

        match done.outcome {
            Ok(projects) => {
                let view = filter_projects(&projects, &done.term);
                tracing::debug!(
                    generation = %done.generation,
                    term = %done.term,
                    fetched = projects.len(),
                    matched = view.len(),
                    "executor: results emitted"
                );
                if output.send(Ok(view)).is_err() {
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            }
            Err(source) => match self.policy {
                FailurePolicy::Terminate => {
                    tracing::debug!(term = %done.term, error = %source, "executor: retrieval failed, terminating");
                    let _ = output.send(Err(PipelineError::Store {
                        term: done.term,
                        source,
                    }));
                    ControlFlow::Break(())
                }
                FailurePolicy::Recover => {
                    tracing::warn!(term = %done.term, error = %source, "executor: retrieval failed, awaiting next term");
                    ControlFlow::Continue(())
                }
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
