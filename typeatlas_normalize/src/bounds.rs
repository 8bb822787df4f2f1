// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Axis-aligned bounds over the embedding vectors of a sample set.
///
/// Bounds are accumulated only from samples that actually carry a computed
/// vector; callers are expected to skip unpositioned samples before feeding
/// vectors in. An empty input has no meaningful bounds, so construction
/// returns `None` in that case rather than inventing a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    /// Minimum X over all contributing vectors.
    pub min_x: f64,
    /// Maximum X over all contributing vectors.
    pub max_x: f64,
    /// Minimum Y over all contributing vectors.
    pub min_y: f64,
    /// Maximum Y over all contributing vectors.
    pub max_y: f64,
}

impl CanvasBounds {
    /// Accumulates bounds from an iterator of embedding vectors.
    ///
    /// Returns `None` if the iterator yields no finite vectors. Non-finite
    /// vectors are skipped so a single malformed sample cannot poison the
    /// whole canvas.
    #[must_use]
    pub fn from_vectors<I>(vectors: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut bounds: Option<Self> = None;
        for (x, y) in vectors {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            match &mut bounds {
                Some(b) => b.include(x, y),
                None => {
                    bounds = Some(Self {
                        min_x: x,
                        max_x: x,
                        min_y: y,
                        max_y: y,
                    });
                }
            }
        }
        bounds
    }

    /// Extends the bounds to include the given vector.
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Returns the X extent. Zero when all vectors share one X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the Y extent. Zero when all vectors share one Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasBounds;

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(CanvasBounds::from_vectors([]), None);
    }

    #[test]
    fn single_vector_collapses_to_point() {
        let b = CanvasBounds::from_vectors([(3.0, -2.0)]).unwrap();
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
        assert_eq!(b.min_x, 3.0);
        assert_eq!(b.max_y, -2.0);
    }

    #[test]
    fn bounds_cover_all_vectors() {
        let b = CanvasBounds::from_vectors([(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]).unwrap();
        assert_eq!((b.min_x, b.max_x), (0.0, 10.0));
        assert_eq!((b.min_y, b.max_y), (0.0, 10.0));
    }

    #[test]
    fn non_finite_vectors_are_skipped() {
        let b =
            CanvasBounds::from_vectors([(f64::NAN, 1.0), (2.0, f64::INFINITY), (1.0, 1.0)])
                .unwrap();
        assert_eq!((b.min_x, b.max_x), (1.0, 1.0));
        assert_eq!((b.min_y, b.max_y), (1.0, 1.0));
    }

    #[test]
    fn all_non_finite_yields_none() {
        assert_eq!(
            CanvasBounds::from_vectors([(f64::NAN, f64::NAN)]),
            None
        );
    }
}
