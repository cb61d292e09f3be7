//! Integer grid coordinates.

use crate::primitives::Point2;
use num_traits::Float;
use std::ops::Add;

/// A cell on the integer raster grid.
///
/// Coordinates are relative to the raster's origin, so negative values are
/// valid; a [`RasterBuffer`](super::RasterBuffer) translates them by its
/// origin offset before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    /// Creates a new pixel coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight reflections of `(x, y)` across the axes and diagonals.
    #[inline]
    pub fn octant_reflections(self) -> [Pixel; 8] {
        let Pixel { x, y } = self;
        [
            Pixel::new(x, y),
            Pixel::new(-x, y),
            Pixel::new(x, -y),
            Pixel::new(-x, -y),
            Pixel::new(y, x),
            Pixel::new(-y, x),
            Pixel::new(y, -x),
            Pixel::new(-y, -x),
        ]
    }

    /// The four reflections of `(x, y)` across the axes.
    #[inline]
    pub fn quadrant_reflections(self) -> [Pixel; 4] {
        let Pixel { x, y } = self;
        [
            Pixel::new(x, y),
            Pixel::new(-x, y),
            Pixel::new(x, -y),
            Pixel::new(-x, -y),
        ]
    }

    /// Chebyshev distance to `other`.
    #[inline]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// Returns `true` if `other` is one of the eight neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Converts to a floating-point point at the same coordinates.
    #[inline]
    pub fn to_point<F: Float>(self) -> Point2<F> {
        Point2::new(
            F::from(self.x).unwrap_or_else(F::zero),
            F::from(self.y).unwrap_or_else(F::zero),
        )
    }
}

impl Add for Pixel {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Sorts and deduplicates a pixel set produced by a symmetric rasterizer.
pub(crate) fn normalize_set(mut pixels: Vec<Pixel>) -> Vec<Pixel> {
    pixels.sort_unstable();
    pixels.dedup();
    pixels
}

/// Converts a pixel set to floating-point points, e.g. for distance measures.
pub fn pixels_to_points<F: Float>(pixels: &[Pixel]) -> Vec<Point2<F>> {
    pixels.iter().map(|p| p.to_point()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octant_reflections() {
        let r = Pixel::new(1, 3).octant_reflections();
        assert!(r.contains(&Pixel::new(3, 1)));
        assert!(r.contains(&Pixel::new(-3, -1)));
        assert!(r.contains(&Pixel::new(-1, 3)));
        assert_eq!(r.len(), 8);
    }

    #[test]
    fn test_adjacency() {
        let p = Pixel::new(0, 0);
        assert!(p.is_adjacent(Pixel::new(1, 1)));
        assert!(p.is_adjacent(Pixel::new(0, -1)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Pixel::new(2, 0)));
    }

    #[test]
    fn test_normalize_set() {
        let set = normalize_set(vec![Pixel::new(1, 0), Pixel::new(0, 0), Pixel::new(1, 0)]);
        assert_eq!(set, vec![Pixel::new(0, 0), Pixel::new(1, 0)]);
    }

    #[test]
    fn test_to_point() {
        let p: Point2<f64> = Pixel::new(-3, 7).to_point();
        assert_eq!(p, Point2::new(-3.0, 7.0));
    }
}
