//! Generation coordinator.
//!
//! Owns the one-at-a-time merge request: gates on readiness, snapshots the
//! manifest, runs the merger on a worker thread, and reports the outcome
//! over a bounded channel drained by `poll`/`wait` on the owning thread.
//! Timeline edits made while a request is in flight never affect the
//! captured snapshot — the artifact may just reflect an ordering the user
//! has since changed.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};

use reelkit_core::{MediaRef, ReelKitError, Result};
use reelkit_timeline::{missing_categories, TimelineSequence};

use crate::manifest::MergeManifest;
use crate::merge::ClipMerger;

/// Outcome sent back from the merge worker.
type MergeOutcome = std::result::Result<MediaRef, String>;

/// Lifecycle of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    /// No request made since start or the last reset.
    Idle,
    /// A merge is running; a second request is rejected, not queued.
    InFlight,
    /// The merge produced an artifact.
    Succeeded(MediaRef),
    /// The merge failed; the timeline is untouched and retry is allowed.
    Failed(String),
}

/// Orchestrates merge requests against a [`ClipMerger`].
pub struct GenerationCoordinator {
    merger: Arc<dyn ClipMerger>,
    state: GenerationState,
    pending: Option<Receiver<MergeOutcome>>,
}

impl GenerationCoordinator {
    /// Create an idle coordinator around a merge backend.
    pub fn new(merger: Arc<dyn ClipMerger>) -> Self {
        Self {
            merger,
            state: GenerationState::Idle,
            pending: None,
        }
    }

    /// Current request state. Call [`poll`](Self::poll) first to pick up a
    /// completion that has already arrived.
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// The merged artifact, once a request has succeeded.
    pub fn artifact(&self) -> Option<&MediaRef> {
        match &self.state {
            GenerationState::Succeeded(artifact) => Some(artifact),
            _ => None,
        }
    }

    /// True while a merge is running.
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, GenerationState::InFlight)
    }

    /// Start a merge for the sequence's current order.
    ///
    /// Rejects with [`ReelKitError::NotReady`] when a category is missing
    /// and with [`ReelKitError::AlreadyInFlight`] while a request is
    /// running. On acceptance the ordered clip list is snapshotted into a
    /// [`MergeManifest`] and handed to the merger on a worker thread.
    pub fn request(&mut self, seq: &TimelineSequence) -> Result<()> {
        self.poll();

        let missing = missing_categories(seq);
        if !missing.is_empty() {
            return Err(ReelKitError::NotReady(missing.into_vec()));
        }
        if self.is_in_flight() {
            return Err(ReelKitError::AlreadyInFlight);
        }

        let manifest = MergeManifest::from_clips(&seq.ordered_clips());
        tracing::info!(clips = manifest.len(), "generation requested");

        let (tx, rx) = bounded(1);
        let merger = Arc::clone(&self.merger);
        thread::spawn(move || {
            let outcome = merger.merge(&manifest).map_err(|e| e.to_string());
            // Send fails when the coordinator was reset; the result is
            // simply discarded then.
            let _ = tx.send(outcome);
        });

        self.pending = Some(rx);
        self.state = GenerationState::InFlight;
        Ok(())
    }

    /// Drain a completed merge, if any, without blocking.
    pub fn poll(&mut self) -> &GenerationState {
        let outcome = match &self.pending {
            Some(rx) => match rx.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err("merge worker disappeared".into())),
            },
            None => None,
        };
        if let Some(outcome) = outcome {
            self.settle(outcome);
        }
        &self.state
    }

    /// Block until the in-flight request settles. Returns immediately when
    /// nothing is in flight.
    pub fn wait(&mut self) -> &GenerationState {
        if let Some(rx) = self.pending.take() {
            let outcome = rx
                .recv()
                .unwrap_or_else(|_| Err("merge worker disappeared".into()));
            self.settle(outcome);
        }
        &self.state
    }

    /// Clear the result state back to idle.
    ///
    /// Does not cancel an in-flight merge: the worker keeps running, but
    /// its completion channel is dropped so the eventual result is
    /// discarded, and a fresh request may start immediately.
    pub fn reset(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("reset with a merge in flight; its result will be discarded");
        }
        self.state = GenerationState::Idle;
    }

    fn settle(&mut self, outcome: MergeOutcome) {
        self.pending = None;
        self.state = match outcome {
            Ok(artifact) => {
                tracing::info!(artifact = %artifact, "merge succeeded");
                GenerationState::Succeeded(artifact)
            }
            Err(reason) => {
                tracing::warn!(%reason, "merge failed");
                GenerationState::Failed(reason)
            }
        };
    }
}
