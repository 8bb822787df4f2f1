// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Bounding shape of a rendered sample visual, centered on its screen position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitShape {
    /// A circular marker with the given radius.
    Circle {
        /// Radius in screen pixels.
        radius: f64,
    },
    /// An axis-aligned box, for label-style visuals.
    Rect {
        /// Half the box width in screen pixels.
        half_width: f64,
        /// Half the box height in screen pixels.
        half_height: f64,
    },
}

impl HitShape {
    /// Convenience constructor for a circular shape.
    #[must_use]
    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    /// Convenience constructor for a box shape.
    #[must_use]
    pub fn rect(half_width: f64, half_height: f64) -> Self {
        Self::Rect {
            half_width,
            half_height,
        }
    }

    /// Returns `true` if `pt` lies within the shape centered at `center`.
    #[must_use]
    pub fn contains(&self, center: Point, pt: Point) -> bool {
        let dx = pt.x - center.x;
        let dy = pt.y - center.y;
        match *self {
            Self::Circle { radius } => dx * dx + dy * dy <= radius * radius,
            Self::Rect {
                half_width,
                half_height,
            } => dx >= -half_width && dx <= half_width && dy >= -half_height && dy <= half_height,
        }
    }
}

/// A selectable rendered visual: key, screen-space center, and bounding shape.
#[derive(Clone, Copy, Debug)]
pub struct HitTarget<K> {
    /// Application key identifying the sample.
    pub key: K,
    /// Screen-space center of the visual.
    pub center: Point,
    /// Bounding shape used for containment.
    pub shape: HitShape,
}

impl<K> HitTarget<K> {
    /// Creates a target from its parts.
    #[must_use]
    pub fn new(key: K, center: Point, shape: HitShape) -> Self {
        Self { key, center, shape }
    }
}

/// Finds the target whose center is nearest to `pointer` among all targets
/// whose bounding shape contains it.
///
/// Returns `None` when no shape contains the pointer; callers treat that as
/// "no selection change", not "clear selection". Ties on distance go to the
/// first target encountered, so the caller's iteration order over the
/// rendered set is the deterministic tie-break.
#[must_use]
pub fn hit_test<'a, K>(pointer: Point, targets: &'a [HitTarget<K>]) -> Option<&'a K> {
    let mut best: Option<(&'a K, f64)> = None;
    for target in targets {
        if !target.shape.contains(target.center, pointer) {
            continue;
        }
        let dx = pointer.x - target.center.x;
        let dy = pointer.y - target.center.y;
        let dist_sq = dx * dx + dy * dy;
        // Strict comparison keeps the first target on exact ties.
        if best.is_none_or(|(_, best_sq)| dist_sq < best_sq) {
            best = Some((&target.key, dist_sq));
        }
    }
    best.map(|(key, _)| key)
}
