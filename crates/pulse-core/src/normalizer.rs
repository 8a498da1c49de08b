//! Normalizer: turns raw query text into stable, distinct terms.
//!
//! Two gates sit between the text box and the executor:
//!
//! 1. **Quiescence.** A raw value is only a candidate once nothing newer has
//!    arrived for the quiescence window. Every new value re-arms the timer, so
//!    a burst of keystrokes yields one candidate: the last one.
//! 2. **Distinctness.** A candidate byte-equal to the previously emitted term
//!    is dropped. No trimming or case folding happens here; that is the
//!    filter's business.
//!
//! The empty term is emitted on start so the unfiltered list shows up without
//! waiting for input.

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{self, Instant};

/// Default quiescence window.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// DistinctGate
// ---------------------------------------------------------------------------

/// Lets a term through only if it differs from the last one let through.
#[derive(Debug, Default)]
pub struct DistinctGate {
    last: Option<String>,
}

impl DistinctGate {
    /// Returns the candidate back if it is new, `None` if it repeats the
    /// previous admission.
    pub fn admit(&mut self, candidate: String) -> Option<String> {
        if self.last.as_deref() == Some(candidate.as_str()) {
            return None;
        }
        self.last = Some(candidate.clone());
        Some(candidate)
    }

    /// The most recently admitted term, i.e. the active one.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Debounce + dedup stage. Consumed by [`Normalizer::run`].
#[derive(Debug)]
pub struct Normalizer {
    quiescence: Duration,
    gate: DistinctGate,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

impl Normalizer {
    pub fn new(quiescence: Duration) -> Self {
        Self {
            quiescence,
            gate: DistinctGate::default(),
        }
    }

    /// Drive the stage until either side goes away.
    ///
    /// When `raw` closes, a candidate still waiting on its timer is flushed
    /// immediately (still subject to the distinct gate) before `terms` is
    /// closed. When `terms` closes, the stage stops at once and the timer is
    /// dropped with it.
    pub async fn run(mut self, mut raw: UnboundedReceiver<String>, terms: UnboundedSender<String>) {
        if !self.offer(String::new(), &terms) {
            return;
        }

        // Armed only while `pending` holds a candidate.
        let timer = time::sleep(self.quiescence);
        tokio::pin!(timer);
        let mut pending: Option<String> = None;

        loop {
            tokio::select! {
                biased;

                () = terms.closed() => {
                    tracing::debug!("normalizer: downstream closed");
                    return;
                }

                input = raw.recv() => match input {
                    Some(text) => {
                        timer.as_mut().reset(Instant::now() + self.quiescence);
                        pending = Some(text);
                    }
                    None => {
                        if let Some(text) = pending.take() {
                            self.offer(text, &terms);
                        }
                        tracing::debug!("normalizer: input closed");
                        return;
                    }
                },

                () = &mut timer, if pending.is_some() => {
                    if let Some(text) = pending.take() {
                        if !self.offer(text, &terms) {
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Push a settled candidate through the gate. Returns `false` once the
    /// downstream receiver is gone.
    fn offer(&mut self, candidate: String, terms: &UnboundedSender<String>) -> bool {
        match self.gate.admit(candidate) {
            Some(term) => {
                tracing::debug!(term = %term, "normalizer: term emitted");
                terms.send(term).is_ok()
            }
            None => {
                tracing::debug!(term = ?self.gate.last(), "normalizer: repeated term dropped");
                true
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
