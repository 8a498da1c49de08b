//! Pipeline: wires a [`Normalizer`] into an [`Executor`] for one activation.
//!
//! ```text
//! QueryInput ──raw──► Normalizer ──terms──► Executor ──updates──► ResultStream
//! ```
//!
//! Every call to [`SearchPipeline::activate`] builds fresh stage state; nothing
//! carries over from a previous activation. Dropping the [`ResultStream`]
//! tears the activation down.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::config::SearchConfig;
use crate::executor::Executor;
use crate::normalizer::Normalizer;
use crate::store::ProjectStore;

pub use crate::executor::SearchUpdate;

/// Factory for pipeline activations over a shared store.
#[derive(Clone)]
pub struct SearchPipeline {
    store: Arc<dyn ProjectStore>,
    config: SearchConfig,
}

impl SearchPipeline {
    pub fn new(store: Arc<dyn ProjectStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Start a new activation and return its input and output ends.
    ///
    /// The first value on the stream is the unfiltered collection, driven by
    /// the normalizer's initial empty term.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime; both stages are spawned onto
    /// the current one.
    pub fn activate(&self) -> (QueryInput, ResultStream) {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (term_tx, term_rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        let normalizer = tokio::spawn(Normalizer::new(self.config.quiescence()).run(raw_rx, term_tx));
        let executor = tokio::spawn(
            Executor::new(Arc::clone(&self.store), self.config.on_store_error).run(term_rx, out_tx),
        );

        tracing::debug!(
            quiescence_ms = self.config.quiescence_ms,
            policy = ?self.config.on_store_error,
            "pipeline: activated"
        );

        (
            QueryInput { tx: raw_tx },
            ResultStream {
                rx: out_rx,
                tasks: [normalizer, executor],
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Input end
// ---------------------------------------------------------------------------

/// Where the UI pushes the text box contents after every edit.
#[derive(Debug, Clone)]
pub struct QueryInput {
    tx: UnboundedSender<String>,
}

impl QueryInput {
    /// Forward the current raw query text. Ignored once the activation has
    /// been torn down.
    pub fn push(&self, raw: impl Into<String>) {
        let _ = self.tx.send(raw.into());
    }

    /// True once the normalizer is no longer listening.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Resolves once the normalizer is no longer listening.
    pub async fn closed(&self) {
        self.tx.closed().await
    }
}

// ---------------------------------------------------------------------------
// Output end
// ---------------------------------------------------------------------------

/// Live sequence of filtered project lists for one activation.
///
/// An `Err` value is terminal: nothing follows it. Dropping the stream
/// unsubscribes, which stops both stages, releases the quiescence timer and
/// leaves any retrieval still running permanently stale.
#[derive(Debug)]
pub struct ResultStream {
    rx: UnboundedReceiver<SearchUpdate>,
    tasks: [JoinHandle<()>; 2],
}

impl ResultStream {
    /// Wait for the next value. `None` once the activation has ended.
    pub async fn next(&mut self) -> Option<SearchUpdate> {
        self.rx.recv().await
    }

    /// Non-blocking poll for UI loops.
    pub fn try_next(&mut self) -> Option<SearchUpdate> {
        self.rx.try_recv().ok()
    }

    /// True when no value is buffered and none can arrive any more.
    pub fn is_finished(&self) -> bool {
        self.rx.is_closed() && self.rx.is_empty()
    }
}

impl Drop for ResultStream {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
        tracing::debug!("pipeline: unsubscribed");
    }
}
