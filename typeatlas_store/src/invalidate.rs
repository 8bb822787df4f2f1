// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalidation channels: explicit dependency declaration for derived values.
//!
//! Every mutation entry point on the store marks the channel(s) it affects;
//! consumers check (and clear) the channels they declared an interest in and
//! recompute their derived values from the store's current snapshot. This
//! replaces implicit dependency tracking with a manual dirty-flag pass.

/// A named invalidation domain.
///
/// Channels are small indices into a bitmask; the store defines one per
/// independently-consumed field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Creates a channel with the given index (must be below 32).
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 32, "channel index out of range");
        Self(index)
    }

    const fn bit(self) -> u32 {
        1 << self.0
    }
}

/// The sample map was replaced; filter index, bounds, and positions are stale.
pub const ITEMS: Channel = Channel::new(0);
/// The committed query changed; the filtered set is stale.
pub const QUERY: Channel = Channel::new(1);
/// The selection changed; highlight rendering is stale.
pub const SELECTION: Channel = Channel::new(2);
/// The session descriptor changed.
pub const SESSION: Channel = Channel::new(3);
/// Pipeline progress counters changed.
pub const PROGRESS: Channel = Channel::new(4);

/// Accumulated dirty channels with a generation counter.
///
/// The generation increments on every mark, so observers can cheaply detect
/// "anything changed since I last looked" without enumerating channels.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirtyChannels {
    bits: u32,
    generation: u64,
}

impl DirtyChannels {
    /// Creates an empty dirty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bits: 0,
            generation: 0,
        }
    }

    /// Returns the current generation. Incremented on every mark.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks a channel dirty.
    pub fn mark(&mut self, channel: Channel) {
        self.bits |= channel.bit();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns `true` if the channel is currently dirty.
    #[must_use]
    pub fn is_dirty(&self, channel: Channel) -> bool {
        self.bits & channel.bit() != 0
    }

    /// Returns `true` if any channel is dirty.
    #[must_use]
    pub fn any(&self) -> bool {
        self.bits != 0
    }

    /// Clears a channel, reporting whether it was dirty.
    pub fn take(&mut self, channel: Channel) -> bool {
        let was = self.is_dirty(channel);
        self.bits &= !channel.bit();
        was
    }

    /// Clears all channels.
    pub fn clear(&mut self) {
        self.bits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{Channel, DirtyChannels, ITEMS, QUERY, SELECTION};

    #[test]
    fn mark_and_take() {
        let mut dirty = DirtyChannels::new();
        assert!(!dirty.any());

        dirty.mark(ITEMS);
        assert!(dirty.is_dirty(ITEMS));
        assert!(!dirty.is_dirty(QUERY));

        assert!(dirty.take(ITEMS));
        assert!(!dirty.is_dirty(ITEMS));
        assert!(!dirty.take(ITEMS));
    }

    #[test]
    fn channels_are_independent() {
        let mut dirty = DirtyChannels::new();
        dirty.mark(QUERY);
        dirty.mark(SELECTION);

        assert!(dirty.take(QUERY));
        assert!(dirty.is_dirty(SELECTION));
    }

    #[test]
    fn generation_counts_marks() {
        let mut dirty = DirtyChannels::new();
        let g0 = dirty.generation();
        dirty.mark(ITEMS);
        dirty.mark(ITEMS);
        assert_eq!(dirty.generation(), g0 + 2);

        // Taking does not bump the generation.
        dirty.take(ITEMS);
        assert_eq!(dirty.generation(), g0 + 2);
    }

    #[test]
    fn clear_resets_all_channels() {
        let mut dirty = DirtyChannels::new();
        dirty.mark(ITEMS);
        dirty.mark(Channel::new(7));
        dirty.clear();
        assert!(!dirty.any());
    }
}
