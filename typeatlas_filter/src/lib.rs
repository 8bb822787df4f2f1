// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeatlas Filter: fuzzy narrowing of the visible sample set.
//!
//! Three pieces cooperate to keep the "currently visible samples" set
//! consistent with what the user typed:
//!
//! - [`SearchIndex`]: a flat index over each sample's text fields (name,
//!   family, flattened publisher/designer lists), memoized by the sample-map
//!   revision. The index is rebuilt when the map changes, never per query.
//! - The matcher (internal): case-insensitive, typo-tolerant multi-field
//!   scoring — exact, prefix, substring, bounded edit distance, and
//!   subsequence matches, in decreasing score order.
//! - [`DebounceState`]: commits a rapidly-changing input only after it has
//!   been stable for [`DEBOUNCE_MILLIS`], with caller-supplied timestamps so
//!   the crate stays clock-free and deterministic to test.
//!
//! ## Minimal example
//!
//! ```rust
//! use typeatlas_filter::SearchIndex;
//!
//! let mut index = SearchIndex::new();
//! index.rebuild(
//!     1,
//!     [
//!         ("inter", vec!["Inter".to_string(), "Rasmus Andersson".to_string()]),
//!         ("lora", vec!["Lora".to_string(), "Cyreal".to_string()]),
//!     ],
//! );
//!
//! let out = index.query("intr"); // one dropped letter still matches
//! assert_eq!(out.top(), Some(&"inter"));
//!
//! // Empty query keeps everything visible.
//! assert_eq!(index.query("").len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod index;
mod matcher;

pub use debounce::{DEBOUNCE_MILLIS, DebounceState};
pub use index::{FilterOutput, SearchIndex};
