// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use hashbrown::HashMap;
use tracing::{debug, warn};
use typeatlas_filter::{DebounceState, FilterOutput, SearchIndex};
use typeatlas_normalize::{CANVAS_SIDE, CanvasBounds, CanvasProjection};

use crate::invalidate::{self, DirtyChannels};
use crate::sample::{FontSample, SampleKey};
use crate::session::{FetchError, PipelineEvent, PipelineProgress, SessionDescriptor, SessionId};

/// Ticket captured when a fetch is started, used to discard stale responses.
///
/// The store bumps its fetch epoch whenever the active session changes; a
/// response whose ticket carries an older epoch is dropped on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

/// The shared state container of the explorer view.
///
/// `AtlasStore` owns every field the interactive surface reads, with one
/// writer per field:
///
/// - the sync layer (this module's `apply_*` entry points) writes the
///   session descriptor, the sample map, and pipeline progress;
/// - the search pipeline writes the committed query via
///   [`AtlasStore::search_input`] / [`AtlasStore::tick`];
/// - the hit tester writes the selection via [`AtlasStore::select`].
///
/// Derived values — the filtered key set, canvas bounds, sample count,
/// selected family — are pure functions of the current snapshot, recomputed
/// on read. Each mutation marks its invalidation [`Channel`](crate::Channel)
/// so consumers know what to recompute.
#[derive(Debug, Default)]
pub struct AtlasStore {
    session: Option<SessionId>,
    descriptor: Option<SessionDescriptor>,
    fetch_epoch: u64,
    samples: HashMap<SampleKey, Arc<FontSample>>,
    samples_revision: u64,
    index: SearchIndex<SampleKey>,
    debounce: DebounceState,
    committed_query: String,
    selection: Option<SampleKey>,
    progress: PipelineProgress,
    dirty: DirtyChannels,
    needs_session_refetch: bool,
    needs_samples_refetch: bool,
}

impl AtlasStore {
    /// Creates an empty store with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Session ─────────────────────────────────────────────────────────

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    /// Returns the fetched descriptor of the active session.
    #[must_use]
    pub fn descriptor(&self) -> Option<&SessionDescriptor> {
        self.descriptor.as_ref()
    }

    /// Switches the active session.
    ///
    /// Changing sessions invalidates all in-flight fetches (their tickets go
    /// stale), flags both externally-sourced values for refetch, and resets
    /// pipeline progress. Query and selection persist; the selection is
    /// reconciled against the map once the new one arrives. Callers reset
    /// their viewport alongside this.
    pub fn set_session(&mut self, session: Option<SessionId>) {
        if self.session == session {
            return;
        }
        self.session = session;
        self.fetch_epoch = self.fetch_epoch.wrapping_add(1);
        self.needs_session_refetch = self.session.is_some();
        self.needs_samples_refetch = self.session.is_some();
        self.progress.reset();
        self.dirty.mark(invalidate::SESSION);
    }

    /// Captures a ticket for a fetch about to be issued.
    #[must_use]
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket {
            epoch: self.fetch_epoch,
        }
    }

    /// Returns `true` when the session descriptor should be refetched.
    #[must_use]
    pub fn needs_session_refetch(&self) -> bool {
        self.needs_session_refetch
    }

    /// Returns `true` when the sample map should be refetched.
    #[must_use]
    pub fn needs_samples_refetch(&self) -> bool {
        self.needs_samples_refetch
    }

    /// Merges a fetched session descriptor. Returns `false` for stale tickets.
    pub fn apply_descriptor(
        &mut self,
        ticket: FetchTicket,
        descriptor: Option<SessionDescriptor>,
    ) -> bool {
        if ticket.epoch != self.fetch_epoch {
            debug!(epoch = ticket.epoch, "discarding stale session descriptor");
            return false;
        }
        self.needs_session_refetch = false;
        if self.descriptor != descriptor {
            self.descriptor = descriptor;
            self.dirty.mark(invalidate::SESSION);
        }
        true
    }

    /// Merges a fetched sample map, reconciling by key. Returns `false` for
    /// stale tickets.
    ///
    /// Entries whose content is unchanged keep their existing `Arc`, so
    /// downstream state keyed on sample identity survives the replacement.
    /// A selection whose key disappeared falls back to `None`.
    pub fn apply_samples(&mut self, ticket: FetchTicket, fetched: Vec<FontSample>) -> bool {
        if ticket.epoch != self.fetch_epoch {
            debug!(epoch = ticket.epoch, "discarding stale sample map");
            return false;
        }

        let mut next: HashMap<SampleKey, Arc<FontSample>> =
            HashMap::with_capacity(fetched.len());
        let mut reused = 0_usize;
        for sample in fetched {
            let key = sample.key.clone();
            match self.samples.get(&key) {
                Some(existing) if **existing == sample => {
                    next.insert(key, Arc::clone(existing));
                    reused += 1;
                }
                _ => {
                    next.insert(key, Arc::new(sample));
                }
            }
        }
        debug!(
            total = next.len(),
            reused,
            replaced = next.len() - reused,
            "reconciled sample map"
        );

        self.samples = next;
        self.samples_revision = self.samples_revision.wrapping_add(1);
        self.needs_samples_refetch = false;
        self.dirty.mark(invalidate::ITEMS);

        if let Some(selected) = &self.selection {
            if !self.samples.contains_key(selected) {
                self.selection = None;
                self.dirty.mark(invalidate::SELECTION);
            }
        }
        true
    }

    /// Records a failed fetch: logs it and leaves all prior state untouched.
    pub fn apply_fetch_failure(&mut self, ticket: FetchTicket, error: &FetchError) {
        if ticket.epoch != self.fetch_epoch {
            debug!(%error, "stale fetch failed; ignoring");
            return;
        }
        warn!(%error, "external fetch failed; keeping previous state");
    }

    // ── Samples and derived projections ─────────────────────────────────

    /// Returns the full sample map.
    #[must_use]
    pub fn samples(&self) -> &HashMap<SampleKey, Arc<FontSample>> {
        &self.samples
    }

    /// Looks up one sample by key.
    #[must_use]
    pub fn sample(&self, key: &SampleKey) -> Option<&Arc<FontSample>> {
        self.samples.get(key)
    }

    /// Number of samples in the active session.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Revision of the sample map; bumped on every replacement.
    #[must_use]
    pub fn samples_revision(&self) -> u64 {
        self.samples_revision
    }

    /// Derives the embedding → logical-canvas projection for the current map.
    ///
    /// `None` when no sample has a computed vector yet (empty-state render).
    #[must_use]
    pub fn projection(&self) -> Option<CanvasProjection> {
        let bounds = CanvasBounds::from_vectors(
            self.samples
                .values()
                .filter_map(|s| s.computed.as_ref().map(|c| c.vector)),
        )?;
        Some(CanvasProjection::new(bounds, CANVAS_SIDE))
    }

    // ── Query and filtering ─────────────────────────────────────────────

    /// Feeds a raw keystroke-level query change into the debounce window.
    pub fn search_input(&mut self, text: impl Into<String>, now_ms: u64) {
        self.debounce.input(text, now_ms);
    }

    /// Advances the debounce clock, committing a quiet query if due.
    ///
    /// On commit the query channel is marked and, for a non-empty query with
    /// matches, the selection follows the top-ranked match. Returns the
    /// committed query.
    pub fn tick(&mut self, now_ms: u64) -> Option<String> {
        let committed = self.debounce.poll(now_ms)?;
        self.committed_query = committed.clone();
        self.dirty.mark(invalidate::QUERY);

        if !self.committed_query.trim().is_empty() {
            let output = self.filtered();
            if let Some(top) = output.top() {
                let top = top.clone();
                self.select(Some(top));
            }
        }
        Some(committed)
    }

    /// Returns the committed (post-debounce) query.
    #[must_use]
    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    /// Computes the filtered key set for the committed query.
    ///
    /// The search index is memoized on the sample-map revision: a read that
    /// observes a newer revision rebuilds the index synchronously before
    /// matching. Samples with unusable fields are excluded, not errors.
    pub fn filtered(&mut self) -> FilterOutput<SampleKey> {
        if !self.index.is_current(self.samples_revision) {
            let entries = self
                .samples
                .iter()
                .map(|(key, sample)| (key.clone(), sample.search_fields()));
            self.index.rebuild(self.samples_revision, entries);
        }
        self.index.query(&self.committed_query)
    }

    // ── Selection ───────────────────────────────────────────────────────

    /// Returns the selected sample key, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&SampleKey> {
        self.selection.as_ref()
    }

    /// Returns the selected sample.
    #[must_use]
    pub fn selected_sample(&self) -> Option<&Arc<FontSample>> {
        self.selection.as_ref().and_then(|k| self.samples.get(k))
    }

    /// Returns the family name of the selected sample.
    #[must_use]
    pub fn selected_family(&self) -> Option<&str> {
        self.selected_sample().map(|s| s.family_name.as_str())
    }

    /// Sets the selection. A key not present in the map clears it instead.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, key: Option<SampleKey>) -> bool {
        let next = key.filter(|k| self.samples.contains_key(k));
        if self.selection == next {
            return false;
        }
        self.selection = next;
        self.dirty.mark(invalidate::SELECTION);
        true
    }

    // ── Pipeline events ─────────────────────────────────────────────────

    /// Folds a pipeline event into the progress view.
    ///
    /// An `AllComplete` for the active session flags the sample map for
    /// refetch so the new coordinates get picked up.
    pub fn apply_event(&mut self, event: &PipelineEvent) {
        self.progress.apply(event);
        self.dirty.mark(invalidate::PROGRESS);
        if let PipelineEvent::AllComplete { session } = event {
            if Some(session) == self.session.as_ref() {
                self.needs_samples_refetch = true;
            }
        }
    }

    /// Returns the accumulated pipeline progress.
    #[must_use]
    pub fn progress(&self) -> &PipelineProgress {
        &self.progress
    }

    // ── Invalidation ────────────────────────────────────────────────────

    /// Returns the dirty-channel set for consumers to inspect and clear.
    pub fn dirty(&mut self) -> &mut DirtyChannels {
        &mut self.dirty
    }
}
