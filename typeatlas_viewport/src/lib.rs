// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeatlas Viewport: pan/zoom state over the logical canvas.
//!
//! This crate provides a small, headless model of the sub-rectangle of the
//! logical canvas that is currently rendered. It focuses on:
//! - View-rect state (pan + zoom) with a fixed, resettable initial rect.
//! - Aspect-correct conversion between screen pixels and logical units.
//! - Cursor-anchored zooming driven by wheel direction.
//! - Pan-button gating so pointer movement only pans while the designated
//!   button is held.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to:
//! - Feed pointer deltas and wheel events in from their windowing layer.
//! - Read [`Viewport::rect`] when rendering and hit-testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use typeatlas_viewport::Viewport;
//!
//! // Logical canvas is the 600x600 square produced by normalization.
//! let mut view = Viewport::new(600.0);
//!
//! // Pan by 12 screen pixels on an 800x600 window.
//! let surface = Size::new(800.0, 600.0);
//! view.pan_by_screen(Vec2::new(12.0, 0.0), surface);
//!
//! // Wheel-in one notch, anchored at the window center.
//! view.zoom_about_screen(-1.0, Point::new(400.0, 300.0), surface);
//!
//! // The rect stays square: zoom scales both axes by the same factor.
//! let rect = view.rect();
//! assert!((rect.width - rect.height).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The logical canvas is square, so the screen↔logical scale is tied to
//!   the *smaller* on-screen dimension; the larger one shows margin.
//! - Zoom is multiplicative ([`ZOOM_STEP`] per wheel notch) and anchored at
//!   the cursor, not the canvas center.
//! - There are no explicit zoom limits; instead any candidate rect that is
//!   non-positive or non-finite is rejected and the previous rect kept.
//!
//! This crate is `no_std`.

#![no_std]

mod gesture;
mod viewport;

pub use gesture::{PanGesture, PointerButton};
pub use viewport::{VIEW_MARGIN_FACTOR, ViewRect, Viewport, ZOOM_STEP};
