// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-gesture gating: pointer movement only pans while the pan button is held.

use kurbo::{Point, Vec2};

/// Pointer buttons the gesture layer distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary (usually left) button. Reserved for selection.
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// The middle (wheel) button.
    Middle,
}

/// Tracks an active pan drag keyed to a designated pan button.
///
/// Movement events arriving while the pan button is not held yield no delta,
/// so callers can forward every pointer-move event unconditionally:
///
/// ```rust
/// use kurbo::Point;
/// use typeatlas_viewport::{PanGesture, PointerButton};
///
/// let mut pan = PanGesture::default();
///
/// // Moves before the pan button is pressed are ignored.
/// assert!(pan.on_move(Point::new(5.0, 5.0)).is_none());
///
/// pan.on_button_down(PointerButton::Secondary, Point::new(10.0, 10.0));
/// let delta = pan.on_move(Point::new(14.0, 13.0)).unwrap();
/// assert_eq!((delta.x, delta.y), (4.0, 3.0));
///
/// pan.on_button_up(PointerButton::Secondary);
/// assert!(!pan.is_panning());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PanGesture {
    pan_button: PointerButton,
    last_pos: Option<Point>,
}

impl Default for PanGesture {
    fn default() -> Self {
        Self::new(PointerButton::Secondary)
    }
}

impl PanGesture {
    /// Creates a gesture tracker keyed to the given pan button.
    #[must_use]
    pub fn new(pan_button: PointerButton) -> Self {
        Self {
            pan_button,
            last_pos: None,
        }
    }

    /// Returns the button that activates panning.
    #[must_use]
    pub fn pan_button(&self) -> PointerButton {
        self.pan_button
    }

    /// Returns `true` while a pan drag is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.last_pos.is_some()
    }

    /// Handles a button press. Only the pan button starts a drag.
    pub fn on_button_down(&mut self, button: PointerButton, pos: Point) {
        if button == self.pan_button {
            self.last_pos = Some(pos);
        }
    }

    /// Handles a button release. Releasing the pan button ends the drag.
    pub fn on_button_up(&mut self, button: PointerButton) {
        if button == self.pan_button {
            self.last_pos = None;
        }
    }

    /// Handles a pointer move, returning the screen-space delta since the
    /// last position while the pan button is held.
    pub fn on_move(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }
}
