// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeatlas Store: the shared state container behind the explorer view.
//!
//! Everything the interactive surface renders flows through [`AtlasStore`]:
//! externally-fetched session data is merged in by the sync entry points,
//! the debounced search query and the pointer-driven selection are written
//! by their owning input paths, and derived values (filtered key set, canvas
//! bounds, sample count) are recomputed from the current snapshot on read.
//!
//! The design is deliberately explicit where the original-style UI stores
//! are implicit:
//!
//! - **Single writer per field.** The sync layer writes the sample map and
//!   progress; the search pipeline writes the committed query; the hit
//!   tester writes the selection. No component mutates a field it doesn't
//!   own.
//! - **Explicit invalidation.** Each mutation marks a named [`Channel`];
//!   consumers drain the channels they care about and recompute, instead of
//!   relying on automatic dependency tracking.
//! - **Reconciliation preserves identity.** Refetched sample maps reuse the
//!   existing `Arc` for entries whose content didn't change, so selection
//!   and open-detail state survive refreshes untouched.
//! - **Stale responses are discarded.** Fetches carry a [`FetchTicket`];
//!   a response that resolves after the session changed is dropped, never
//!   merged.
//!
//! Failures at the external boundary are logged via `tracing` and leave
//! prior state untouched; no error in this crate is fatal to the view.
//!
//! ## Minimal example
//!
//! ```rust
//! use typeatlas_store::{AtlasStore, FontSample, SampleKey, SessionId};
//!
//! let mut store = AtlasStore::new();
//! store.set_session(Some(SessionId::from("demo")));
//!
//! // The shell fetches the sample map and delivers it with a ticket.
//! let ticket = store.begin_fetch();
//! let fetched: Vec<FontSample> = Vec::new();
//! assert!(store.apply_samples(ticket, fetched));
//! assert_eq!(store.sample_count(), 0);
//! ```

mod invalidate;
mod sample;
mod session;
mod store;

pub use invalidate::{Channel, DirtyChannels, ITEMS, PROGRESS, QUERY, SELECTION, SESSION};
pub use sample::{Computed, FontSample, SampleKey};
pub use session::{
    AlgorithmParams, FetchError, Phase, PipelineEvent, PipelineProgress, PipelineRequest,
    SessionDescriptor, SessionId, SessionSource,
};
pub use store::{AtlasStore, FetchTicket};
