// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select-gesture gating: when pointer events should trigger hit testing.

use typeatlas_viewport::PointerButton;

/// Modifier keys held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Control (or Command) held.
    pub ctrl: bool,
    /// Shift held.
    pub shift: bool,
    /// Alt (or Option) held.
    pub alt: bool,
}

/// Side effect requested alongside a selection, orthogonal to selection itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitAction {
    /// Copy the hit sample's identifier to the clipboard.
    CopyKey,
}

/// What the caller should do in response to a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRequest {
    /// Run the hit test and update the selection.
    Select,
    /// Run the hit test, update the selection, and perform the action.
    SelectWith(HitAction),
}

/// Decides when hit testing runs, keeping selection and panning mutually
/// exclusive per gesture.
///
/// Hit testing runs on primary-button down and on move while any mouse
/// button is held (drag-select), but never while the designated pan button
/// is held. Alt-click additionally requests [`HitAction::CopyKey`].
///
/// ```rust
/// use typeatlas_hit::{HitRequest, Modifiers, SelectGesture};
/// use typeatlas_viewport::PointerButton;
///
/// let mut select = SelectGesture::default();
///
/// let req = select.on_button_down(PointerButton::Primary, Modifiers::default());
/// assert_eq!(req, Some(HitRequest::Select));
///
/// // Dragging with the primary button held keeps selecting.
/// assert!(select.on_move());
///
/// select.on_button_up(PointerButton::Primary);
/// assert!(!select.on_move());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SelectGesture {
    pan_button: PointerButton,
    primary_held: bool,
    secondary_held: bool,
    middle_held: bool,
}

impl Default for SelectGesture {
    fn default() -> Self {
        Self::new(PointerButton::Secondary)
    }
}

impl SelectGesture {
    /// Creates a gesture tracker that treats `pan_button` as pan-only.
    ///
    /// This must match the button given to the viewport's pan gesture so the
    /// two gestures stay mutually exclusive.
    #[must_use]
    pub fn new(pan_button: PointerButton) -> Self {
        Self {
            pan_button,
            primary_held: false,
            secondary_held: false,
            middle_held: false,
        }
    }

    fn held(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary_held,
            PointerButton::Secondary => self.secondary_held,
            PointerButton::Middle => self.middle_held,
        }
    }

    fn set_held(&mut self, button: PointerButton, held: bool) {
        match button {
            PointerButton::Primary => self.primary_held = held,
            PointerButton::Secondary => self.secondary_held = held,
            PointerButton::Middle => self.middle_held = held,
        }
    }

    fn any_held(&self) -> bool {
        self.primary_held || self.secondary_held || self.middle_held
    }

    /// Handles a button press, returning the hit request it implies.
    ///
    /// Only a primary-button press while the pan button is up triggers hit
    /// testing; alt upgrades it to a copy request.
    pub fn on_button_down(
        &mut self,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Option<HitRequest> {
        self.set_held(button, true);
        if button != PointerButton::Primary {
            return None;
        }
        if self.pan_button != PointerButton::Primary && self.held(self.pan_button) {
            return None;
        }
        if modifiers.alt {
            Some(HitRequest::SelectWith(HitAction::CopyKey))
        } else {
            Some(HitRequest::Select)
        }
    }

    /// Handles a button release.
    pub fn on_button_up(&mut self, button: PointerButton) {
        self.set_held(button, false);
    }

    /// Returns `true` if a pointer move should run the hit test (drag-select).
    #[must_use]
    pub fn on_move(&self) -> bool {
        self.any_held() && !self.held(self.pan_button)
    }
}

#[cfg(test)]
mod tests {
    use typeatlas_viewport::PointerButton;

    use super::{HitAction, HitRequest, Modifiers, SelectGesture};

    #[test]
    fn primary_down_requests_selection() {
        let mut select = SelectGesture::default();
        let req = select.on_button_down(PointerButton::Primary, Modifiers::default());
        assert_eq!(req, Some(HitRequest::Select));
    }

    #[test]
    fn alt_click_requests_copy() {
        let mut select = SelectGesture::default();
        let mods = Modifiers {
            alt: true,
            ..Modifiers::default()
        };
        let req = select.on_button_down(PointerButton::Primary, mods);
        assert_eq!(req, Some(HitRequest::SelectWith(HitAction::CopyKey)));
    }

    #[test]
    fn pan_button_down_never_selects() {
        let mut select = SelectGesture::default();
        let req = select.on_button_down(PointerButton::Secondary, Modifiers::default());
        assert_eq!(req, None);
    }

    #[test]
    fn primary_during_pan_is_suppressed() {
        let mut select = SelectGesture::default();
        select.on_button_down(PointerButton::Secondary, Modifiers::default());
        let req = select.on_button_down(PointerButton::Primary, Modifiers::default());
        assert_eq!(req, None);
    }

    #[test]
    fn move_with_button_held_selects() {
        let mut select = SelectGesture::default();
        assert!(!select.on_move());

        select.on_button_down(PointerButton::Primary, Modifiers::default());
        assert!(select.on_move());

        select.on_button_up(PointerButton::Primary);
        assert!(!select.on_move());
    }

    #[test]
    fn move_while_panning_never_selects() {
        let mut select = SelectGesture::default();
        select.on_button_down(PointerButton::Secondary, Modifiers::default());
        assert!(!select.on_move());

        // Even with the primary also held, pan wins for the whole gesture.
        select.on_button_down(PointerButton::Primary, Modifiers::default());
        assert!(!select.on_move());

        select.on_button_up(PointerButton::Secondary);
        assert!(select.on_move());
    }

    #[test]
    fn middle_button_drag_selects() {
        let mut select = SelectGesture::default();
        select.on_button_down(PointerButton::Middle, Modifiers::default());
        assert!(select.on_move());
    }
}
