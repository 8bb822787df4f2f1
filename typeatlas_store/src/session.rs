// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external boundary: pipeline requests, session fetches, and the
//! progress event stream.
//!
//! Everything here is an abstract contract consumed as given — the wire
//! format and transport belong to the embedding shell. The store only needs
//! the shapes of the payloads and the ordering guarantee that
//! [`PipelineEvent::PhaseComplete`] events arrive in pipeline order.

use std::fmt;

use crate::sample::FontSample;

/// Opaque identifier of a stored session.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({:?})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Failure at the external boundary.
///
/// Fetch errors are recovered locally: the store logs them and keeps its
/// prior state. Nothing here is fatal to the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The boundary could not be reached or the call failed outright.
    Unavailable {
        /// Human-readable reason from the transport.
        reason: String,
    },
    /// The response arrived but violated the expected shape.
    Malformed {
        /// What was wrong with the payload.
        detail: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "external boundary unavailable: {reason}"),
            Self::Malformed { detail } => write!(f, "malformed response: {detail}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Metadata describing a stored session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionDescriptor {
    /// The session this describes.
    pub id: SessionId,
    /// Preview text the pipeline rendered the samples with.
    pub preview_text: String,
    /// Weight classes included in the run.
    pub weights: Vec<u16>,
}

/// Tunable parameters forwarded to the external pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlgorithmParams {
    /// Neighborhood size for the dimensionality reduction.
    pub neighbors: u32,
    /// Minimum distance parameter for the reduction.
    pub min_dist: f64,
    /// Minimum cluster size for the labeling step.
    pub min_cluster_size: u32,
}

impl Default for AlgorithmParams {
    fn default() -> Self {
        Self {
            neighbors: 15,
            min_dist: 0.1,
            min_cluster_size: 5,
        }
    }
}

/// A request to run the processing pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineRequest {
    /// Text to render for each sample.
    pub preview_text: String,
    /// Weight classes to include.
    pub weights: Vec<u16>,
    /// Algorithm parameters.
    pub params: AlgorithmParams,
    /// Reuse an existing session's rendered samples when set.
    pub session: Option<SessionId>,
}

/// Pipeline phases, in the order their completion events are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Rasterize preview text per sample.
    Render,
    /// Compute high-dimensional embeddings.
    Embed,
    /// Reduce embeddings to 2D.
    Reduce,
    /// Assign cluster labels.
    Cluster,
}

impl Phase {
    /// All phases in pipeline order.
    pub const ALL: [Self; 4] = [Self::Render, Self::Embed, Self::Reduce, Self::Cluster];

    fn bit(self) -> u8 {
        match self {
            Self::Render => 1,
            Self::Embed => 1 << 1,
            Self::Reduce => 1 << 2,
            Self::Cluster => 1 << 3,
        }
    }
}

/// A notification from the subscribe-only event stream.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineEvent {
    /// Progress counters. `done` and `total` are reported by independent
    /// upstream events and are not guaranteed to satisfy `done <= total`.
    Progress {
        /// Completed work items.
        done: u64,
        /// Scheduled work items.
        total: u64,
    },
    /// A phase finished. Emitted in pipeline order.
    PhaseComplete(Phase),
    /// The whole run finished and its results are stored under `session`.
    AllComplete {
        /// Session holding the results.
        session: SessionId,
    },
}

/// Accumulated view of the event stream for one pipeline run.
///
/// The counters are kept exactly as reported: `done` may transiently exceed
/// `total`, and the UI treats that as a display edge case rather than a bug
/// to hide. Only [`PipelineProgress::display_ratio`] guards the division.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineProgress {
    done: u64,
    total: u64,
    phases: u8,
    finished: Option<SessionId>,
}

impl PipelineProgress {
    /// Creates an idle progress view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed work items, as last reported.
    #[must_use]
    pub fn done(&self) -> u64 {
        self.done
    }

    /// Scheduled work items, as last reported.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns `true` once the given phase has completed.
    #[must_use]
    pub fn is_phase_complete(&self, phase: Phase) -> bool {
        self.phases & phase.bit() != 0
    }

    /// Session that finished, once [`PipelineEvent::AllComplete`] arrived.
    #[must_use]
    pub fn finished_session(&self) -> Option<&SessionId> {
        self.finished.as_ref()
    }

    /// Fraction of work done for display, clamped only against division by
    /// zero — not against `done > total`.
    #[must_use]
    pub fn display_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64
        }
    }

    /// Folds one event into the accumulated view.
    pub fn apply(&mut self, event: &PipelineEvent) {
        match event {
            PipelineEvent::Progress { done, total } => {
                self.done = *done;
                self.total = *total;
            }
            PipelineEvent::PhaseComplete(phase) => {
                self.phases |= phase.bit();
            }
            PipelineEvent::AllComplete { session } => {
                self.finished = Some(session.clone());
            }
        }
    }

    /// Clears all counters, for a new run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The request/response half of the external boundary.
///
/// Implemented by the embedding shell (over IPC, a subprocess, or a test
/// double). All calls are synchronous from the store's point of view: the
/// shell performs them off the UI event loop and delivers results back by
/// calling the store's `apply_*` entry points with a fetch ticket.
pub trait SessionSource {
    /// Starts a pipeline run, returning the session that will hold results.
    fn run_pipeline(&mut self, request: &PipelineRequest) -> Result<SessionId, FetchError>;

    /// Fetches metadata for a session; `None` when the session is unknown.
    fn fetch_session(&mut self, id: &SessionId) -> Result<Option<SessionDescriptor>, FetchError>;

    /// Fetches the sample map for a session; `None` when the session is unknown.
    fn fetch_samples(&mut self, id: &SessionId) -> Result<Option<Vec<FontSample>>, FetchError>;

    /// Enumerates stored sessions.
    fn list_sessions(&mut self) -> Result<Vec<SessionId>, FetchError>;

    /// Deletes a stored session.
    fn delete_session(&mut self, id: &SessionId) -> Result<(), FetchError>;
}

#[cfg(test)]
mod tests {
    use super::{Phase, PipelineEvent, PipelineProgress, SessionId};

    #[test]
    fn progress_tracks_latest_counts() {
        let mut progress = PipelineProgress::new();
        progress.apply(&PipelineEvent::Progress { done: 3, total: 10 });
        progress.apply(&PipelineEvent::Progress { done: 7, total: 10 });
        assert_eq!(progress.done(), 7);
        assert_eq!(progress.total(), 10);
        assert!((progress.display_ratio() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn done_exceeding_total_is_preserved() {
        // Upstream increments the numerator and adjusts the denominator from
        // independent events; the view shows whatever was reported.
        let mut progress = PipelineProgress::new();
        progress.apply(&PipelineEvent::Progress { done: 12, total: 10 });
        assert_eq!(progress.done(), 12);
        assert!(progress.display_ratio() > 1.0);
    }

    #[test]
    fn zero_total_guards_division() {
        let progress = PipelineProgress::new();
        assert_eq!(progress.display_ratio(), 0.0);
    }

    #[test]
    fn phases_accumulate_in_any_observation_order() {
        let mut progress = PipelineProgress::new();
        progress.apply(&PipelineEvent::PhaseComplete(Phase::Render));
        progress.apply(&PipelineEvent::PhaseComplete(Phase::Embed));
        assert!(progress.is_phase_complete(Phase::Render));
        assert!(progress.is_phase_complete(Phase::Embed));
        assert!(!progress.is_phase_complete(Phase::Cluster));
    }

    #[test]
    fn all_complete_records_session() {
        let mut progress = PipelineProgress::new();
        progress.apply(&PipelineEvent::AllComplete {
            session: SessionId::from("run-42"),
        });
        assert_eq!(
            progress.finished_session().map(SessionId::as_str),
            Some("run-42")
        );

        progress.reset();
        assert_eq!(progress.finished_session(), None);
    }
}
