// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Multiplicative zoom factor applied per wheel notch.
///
/// A positive wheel delta zooms out by this factor; a negative delta zooms
/// in by its reciprocal.
pub const ZOOM_STEP: f64 = 1.1;

/// Ratio between the initial view rect and the logical canvas side.
///
/// The initial rect is this many canvas sides wide, centered on the canvas,
/// so the whole canvas is visible with headroom on first render.
pub const VIEW_MARGIN_FACTOR: f64 = 2.0;

/// The sub-rectangle of the logical canvas currently rendered.
///
/// Width and height are always positive and finite; the viewport refuses any
/// update that would violate that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    /// Minimum X of the visible region, in logical canvas units.
    pub x: f64,
    /// Minimum Y of the visible region, in logical canvas units.
    pub y: f64,
    /// Width of the visible region, always positive.
    pub width: f64,
    /// Height of the visible region, always positive.
    pub height: f64,
}

impl ViewRect {
    /// Returns `true` if the rect has positive, finite extent and a finite origin.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Converts into a [`kurbo::Rect`] for intersection tests and rendering.
    #[must_use]
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Pan/zoom state over the logical canvas.
///
/// `Viewport` owns a [`ViewRect`] and converts pointer-device input into rect
/// updates. All operations are synchronous per-event computation; rendering
/// and hit-testing read the latest rect between events.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    rect: ViewRect,
    initial: ViewRect,
}

impl Viewport {
    /// Creates a viewport over a logical canvas of the given side length.
    ///
    /// The initial rect is [`VIEW_MARGIN_FACTOR`] canvas sides across,
    /// centered on the canvas.
    #[must_use]
    pub fn new(canvas_side: f64) -> Self {
        let span = canvas_side * VIEW_MARGIN_FACTOR;
        let offset = (span - canvas_side) / 2.0;
        let initial = ViewRect {
            x: -offset,
            y: -offset,
            width: span,
            height: span,
        };
        Self {
            rect: initial,
            initial,
        }
    }

    /// Returns the current view rect.
    #[must_use]
    pub fn rect(&self) -> ViewRect {
        self.rect
    }

    /// Returns the fixed initial rect this viewport resets to.
    #[must_use]
    pub fn initial_rect(&self) -> ViewRect {
        self.initial
    }

    /// Restores the initial rect. Used on session change.
    pub fn reset(&mut self) {
        self.rect = self.initial;
    }

    /// Returns the logical-units-per-pixel scale for the given surface.
    ///
    /// The logical canvas is square, so the scale is tied to the smaller
    /// on-screen dimension; the larger one shows margin. Returns `None` when
    /// the surface has no positive extent.
    #[must_use]
    pub fn scale(&self, surface: Size) -> Option<f64> {
        let min_dim = surface.width.min(surface.height);
        if !min_dim.is_finite() || min_dim <= 0.0 {
            return None;
        }
        Some(self.rect.width / min_dim)
    }

    /// Converts a screen-space point into logical canvas coordinates.
    #[must_use]
    pub fn screen_to_logical(&self, pt: Point, surface: Size) -> Option<Point> {
        let scale = self.scale(surface)?;
        Some(Point::new(
            self.rect.x + pt.x * scale,
            self.rect.y + pt.y * scale,
        ))
    }

    /// Converts a logical canvas point into screen-space coordinates.
    #[must_use]
    pub fn logical_to_screen(&self, pt: Point, surface: Size) -> Option<Point> {
        let scale = self.scale(surface)?;
        Some(Point::new(
            (pt.x - self.rect.x) / scale,
            (pt.y - self.rect.y) / scale,
        ))
    }

    /// Pans the view by a screen-space pointer delta.
    ///
    /// Dragging the pointer right moves the canvas right under the cursor,
    /// so the view rect origin moves left: the delta is subtracted. Callers
    /// gate this behind [`PanGesture`](crate::PanGesture) so movement without
    /// the pan button held is ignored.
    pub fn pan_by_screen(&mut self, delta: Vec2, surface: Size) {
        let Some(scale) = self.scale(surface) else {
            return;
        };
        let candidate = ViewRect {
            x: self.rect.x - delta.x * scale,
            y: self.rect.y - delta.y * scale,
            ..self.rect
        };
        if candidate.is_valid() {
            self.rect = candidate;
        }
    }

    /// Zooms about the logical point under the given screen position.
    ///
    /// `wheel_delta > 0` zooms out by [`ZOOM_STEP`]; `wheel_delta < 0` zooms
    /// in by its reciprocal; zero is a no-op. The logical point under the
    /// pointer stays fixed on screen. Candidate rects that are non-positive
    /// or non-finite are rejected and the current rect kept.
    pub fn zoom_about_screen(&mut self, wheel_delta: f64, pointer: Point, surface: Size) {
        let factor = if wheel_delta > 0.0 {
            ZOOM_STEP
        } else if wheel_delta < 0.0 {
            1.0 / ZOOM_STEP
        } else {
            return;
        };
        let Some(anchor) = self.screen_to_logical(pointer, surface) else {
            return;
        };
        let candidate = ViewRect {
            x: anchor.x - (anchor.x - self.rect.x) * factor,
            y: anchor.y - (anchor.y - self.rect.y) * factor,
            width: self.rect.width * factor,
            height: self.rect.height * factor,
        };
        if candidate.is_valid() {
            self.rect = candidate;
        }
    }
}
