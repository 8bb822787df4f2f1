// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeatlas Normalize: embedding-space coordinate normalization.
//!
//! The external pipeline places every font sample at an unbounded real pair
//! in a 2D embedding space. Before any pan/zoom is applied, those raw
//! coordinates are mapped into a fixed **logical canvas**: an abstract square
//! of side [`CANVAS_SIDE`] whose corners correspond to the extreme samples.
//! This crate provides that mapping:
//!
//! - [`CanvasBounds`]: min/max accumulation over the vectors that exist.
//!   Samples the pipeline has not positioned yet simply don't contribute.
//! - [`CanvasProjection`]: the pure bounds → canvas transform, with a
//!   defined center fallback for degenerate axes so no NaN or infinity can
//!   ever reach the viewport.
//!
//! ## Minimal example
//!
//! ```rust
//! use typeatlas_normalize::{CanvasBounds, CanvasProjection, CANVAS_SIDE};
//!
//! let bounds = CanvasBounds::from_vectors([(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]).unwrap();
//! let projection = CanvasProjection::new(bounds, CANVAS_SIDE);
//!
//! let p = projection.project((5.0, 10.0));
//! assert_eq!((p.x, p.y), (300.0, 600.0));
//! ```
//!
//! The projection is recomputed from scratch whenever the sample map changes;
//! it holds no caches and has no side effects.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod projection;

pub use bounds::CanvasBounds;
pub use projection::{CANVAS_SIDE, CanvasProjection};
