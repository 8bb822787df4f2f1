// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeatlas Hit: pointer hit testing over rendered samples.
//!
//! Given a pointer position and the set of currently rendered, selectable
//! sample visuals, [`hit_test`] picks at most one: the visual whose center is
//! nearest to the pointer *among those whose bounding shape contains it*. A
//! globally nearer center outside its own shape never wins, and a pointer
//! touching no shape changes nothing.
//!
//! [`SelectGesture`] decides *when* hit testing runs: on primary-button down
//! and on move while a mouse button is held (drag-select), but never while
//! the designated pan button is held — panning and selecting are mutually
//! exclusive per gesture. An optional modifier combination turns a click
//! into an additional [`HitAction`] (for example, copy the sample
//! identifier) without changing selection semantics.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use typeatlas_hit::{HitShape, HitTarget, hit_test};
//!
//! let targets = [
//!     HitTarget::new("inter", Point::new(10.0, 10.0), HitShape::circle(6.0)),
//!     HitTarget::new("lora", Point::new(18.0, 10.0), HitShape::circle(6.0)),
//! ];
//!
//! // Pointer inside both circles; the nearer center wins.
//! assert_eq!(hit_test(Point::new(13.0, 10.0), &targets), Some(&"inter"));
//! // Pointer outside every shape: no selection change.
//! assert_eq!(hit_test(Point::new(50.0, 50.0), &targets), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod gesture;
mod target;

pub use gesture::{HitAction, HitRequest, Modifiers, SelectGesture};
pub use target::{HitShape, HitTarget, hit_test};
