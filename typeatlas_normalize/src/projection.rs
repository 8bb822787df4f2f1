// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::bounds::CanvasBounds;

/// Side length of the logical canvas square, in logical units.
///
/// The reference UI renders the embedding into a 600×600 logical square; the
/// viewport then decides which part of that square is on screen.
pub const CANVAS_SIDE: f64 = 600.0;

/// Pure mapping from raw embedding coordinates into the logical canvas.
///
/// Each axis is normalized independently: the minimal value maps to `0.0`,
/// the maximal value to `side`. When an axis is degenerate (all vectors share
/// the same value) the projection places every sample at the canvas center on
/// that axis instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasProjection {
    bounds: CanvasBounds,
    side: f64,
}

impl CanvasProjection {
    /// Creates a projection onto a canvas of the given side length.
    ///
    /// A non-positive or non-finite `side` falls back to [`CANVAS_SIDE`].
    #[must_use]
    pub fn new(bounds: CanvasBounds, side: f64) -> Self {
        let side = if side.is_finite() && side > 0.0 {
            side
        } else {
            CANVAS_SIDE
        };
        Self { bounds, side }
    }

    /// Returns the bounds this projection was derived from.
    #[must_use]
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Returns the canvas side length in logical units.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Projects a raw embedding vector onto the logical canvas.
    #[must_use]
    pub fn project(&self, vector: (f64, f64)) -> Point {
        Point::new(
            Self::project_axis(vector.0, self.bounds.min_x, self.bounds.max_x, self.side),
            Self::project_axis(vector.1, self.bounds.min_y, self.bounds.max_y, self.side),
        )
    }

    fn project_axis(value: f64, min: f64, max: f64, side: f64) -> f64 {
        let extent = max - min;
        if extent <= 0.0 {
            return side / 2.0;
        }
        (value - min) / extent * side
    }
}

#[cfg(test)]
mod tests {
    use super::{CANVAS_SIDE, CanvasProjection};
    use crate::bounds::CanvasBounds;

    fn bounds_of(vectors: &[(f64, f64)]) -> CanvasBounds {
        CanvasBounds::from_vectors(vectors.iter().copied()).unwrap()
    }

    #[test]
    fn extremes_map_to_canvas_edges() {
        let vectors = [(-3.0, 1.0), (7.0, 4.0), (2.0, 2.5)];
        let projection = CanvasProjection::new(bounds_of(&vectors), CANVAS_SIDE);

        let lo = projection.project((-3.0, 1.0));
        let hi = projection.project((7.0, 4.0));
        assert_eq!(lo.x, 0.0);
        assert_eq!(lo.y, 0.0);
        assert_eq!(hi.x, CANVAS_SIDE);
        assert_eq!(hi.y, CANVAS_SIDE);

        let mid = projection.project((2.0, 2.5));
        assert!(mid.x > 0.0 && mid.x < CANVAS_SIDE);
        assert!(mid.y > 0.0 && mid.y < CANVAS_SIDE);
    }

    #[test]
    fn interior_values_stay_in_range() {
        let vectors = [(0.0, -10.0), (1.0, -4.0), (0.25, -7.0), (0.75, -5.5)];
        let projection = CanvasProjection::new(bounds_of(&vectors), CANVAS_SIDE);
        for &v in &vectors {
            let p = projection.project(v);
            assert!((0.0..=CANVAS_SIDE).contains(&p.x));
            assert!((0.0..=CANVAS_SIDE).contains(&p.y));
        }
    }

    #[test]
    fn degenerate_axis_maps_to_center() {
        // All samples share the same X; Y varies normally.
        let vectors = [(4.0, 0.0), (4.0, 10.0), (4.0, 5.0)];
        let projection = CanvasProjection::new(bounds_of(&vectors), CANVAS_SIDE);
        for &v in &vectors {
            let p = projection.project(v);
            assert_eq!(p.x, CANVAS_SIDE / 2.0);
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn fully_degenerate_bounds_center_everything() {
        let projection = CanvasProjection::new(bounds_of(&[(1.0, 1.0)]), CANVAS_SIDE);
        let p = projection.project((1.0, 1.0));
        assert_eq!((p.x, p.y), (CANVAS_SIDE / 2.0, CANVAS_SIDE / 2.0));
    }

    #[test]
    fn reference_triangle_scenario() {
        let vectors = [(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
        let projection = CanvasProjection::new(bounds_of(&vectors), 600.0);

        let a = projection.project((0.0, 0.0));
        let b = projection.project((10.0, 0.0));
        let c = projection.project((5.0, 10.0));
        assert_eq!((a.x, a.y), (0.0, 0.0));
        assert_eq!((b.x, b.y), (600.0, 0.0));
        assert_eq!((c.x, c.y), (300.0, 600.0));
    }

    #[test]
    fn invalid_side_falls_back_to_default() {
        let projection = CanvasProjection::new(bounds_of(&[(0.0, 0.0), (1.0, 1.0)]), -5.0);
        assert_eq!(projection.side(), CANVAS_SIDE);
    }
}
