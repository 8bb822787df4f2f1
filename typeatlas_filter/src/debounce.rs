// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced query commitment with a caller-supplied clock.

use alloc::string::String;

/// Quiet period before a raw query string is committed, in milliseconds.
pub const DEBOUNCE_MILLIS: u64 = 250;

#[derive(Clone, Debug)]
struct Pending {
    text: String,
    deadline: u64,
}

/// Commits a rapidly-changing input only once it has been stable for
/// [`DEBOUNCE_MILLIS`].
///
/// The state is a cancellable timer modeled with explicit millisecond
/// timestamps: each [`DebounceState::input`] supersedes any pending commit
/// and restarts the quiet period, and [`DebounceState::poll`] returns the
/// committed text exactly once when the deadline has passed. Callers drive
/// `poll` from their event loop tick; no clock is read here, which keeps
/// tests deterministic.
///
/// ```rust
/// use typeatlas_filter::{DEBOUNCE_MILLIS, DebounceState};
///
/// let mut debounce = DebounceState::new();
/// debounce.input("ham", 0);
/// debounce.input("hamburg", 100); // supersedes "ham"
///
/// assert_eq!(debounce.poll(200), None); // still inside the quiet period
/// assert_eq!(debounce.poll(100 + DEBOUNCE_MILLIS), Some("hamburg".to_string()));
/// assert_eq!(debounce.poll(1_000), None); // committed exactly once
/// ```
#[derive(Clone, Debug, Default)]
pub struct DebounceState {
    pending: Option<Pending>,
}

impl DebounceState {
    /// Creates an idle debounce state.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Returns `true` while an uncommitted input is waiting out its quiet period.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new raw input at time `now_ms`, superseding any pending one.
    pub fn input(&mut self, text: impl Into<String>, now_ms: u64) {
        self.pending = Some(Pending {
            text: text.into(),
            deadline: now_ms.saturating_add(DEBOUNCE_MILLIS),
        });
    }

    /// Commits the pending input if its quiet period has elapsed by `now_ms`.
    ///
    /// Returns the committed text at most once per input.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now_ms >= p.deadline) {
            return self.pending.take().map(|p| p.text);
        }
        None
    }

    /// Drops any pending input without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
