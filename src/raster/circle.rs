//! Circle rasterization: midpoint (Bresenham) and N-gon approximation.

use super::line::bresenham_line;
use super::pixel::{normalize_set, pixels_to_points};
use super::Pixel;
use crate::tolerance::hausdorff_distance;
use std::f64::consts::PI;

/// Rasterizes a circle with the Bresenham midpoint algorithm.
///
/// Walks the second octant from `(0, r)` with decision parameter
/// `d = 3 - 2r`, mirroring every computed cell into all eight octants.
/// Returns the sorted, deduplicated cell set translated to `center`.
///
/// # Example
///
/// ```
/// use pixelgeom::raster::{bresenham_circle, Pixel};
///
/// let circle = bresenham_circle(Pixel::new(0, 0), 5);
/// assert!(circle.contains(&Pixel::new(0, 5)));
/// assert!(circle.contains(&Pixel::new(-5, 0)));
/// ```
pub fn bresenham_circle(center: Pixel, radius: u32) -> Vec<Pixel> {
    let r = radius as i32;
    let mut x = 0i32;
    let mut y = r;
    let mut d = 3 - 2 * i64::from(r);
    let mut pixels = Vec::new();

    while x <= y {
        pixels.extend(
            Pixel::new(x, y)
                .octant_reflections()
                .into_iter()
                .map(|p| p + center),
        );

        if d < 0 {
            d += 4 * i64::from(x) + 6;
        } else {
            d += 4 * (i64::from(x) - i64::from(y)) + 10;
            y -= 1;
        }
        x += 1;
    }

    normalize_set(pixels)
}

/// Rasterizes a circle as a regular N-gon.
///
/// Vertex `i` sits at angle `2πi/N` on the circle and consecutive vertices
/// are joined with [`bresenham_line`]. A vertex snaps to a cell the way the
/// midpoint algorithm would: the coordinate along its octant's major axis is
/// rounded and the other one minimises `|x² + y² - r²|`. Once the chords are
/// shorter than a cell the result equals [`bresenham_circle`]. `sides == 0`
/// yields an empty set.
pub fn polygon_circle(center: Pixel, radius: u32, sides: usize) -> Vec<Pixel> {
    if sides == 0 {
        return Vec::new();
    }

    let r = f64::from(radius);
    let vertices: Vec<Pixel> = (0..sides)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / sides as f64;
            snap_to_circle(r * angle.cos(), r * angle.sin(), i64::from(radius)) + center
        })
        .collect();

    let mut pixels = Vec::new();
    for i in 0..sides {
        pixels.extend(bresenham_line(vertices[i], vertices[(i + 1) % sides]));
    }

    normalize_set(pixels)
}

fn snap_to_circle(px: f64, py: f64, r: i64) -> Pixel {
    let minor = |major: i64| -> i64 {
        let t = (r * r - major * major).max(0);
        let mut m = (t as f64).sqrt() as i64;
        while m * m > t {
            m -= 1;
        }
        while (m + 1) * (m + 1) <= t {
            m += 1;
        }
        let residual = |m: i64| (major * major + m * m - r * r).abs();
        if residual(m) <= residual(m + 1) {
            m
        } else {
            m + 1
        }
    };
    let signed = |v: i64, s: f64| if s < 0.0 { -v } else { v };

    let (x, y) = if py.abs() >= px.abs() {
        let x = px.round() as i64;
        (x, signed(minor(x), py))
    } else {
        let y = py.round() as i64;
        (signed(minor(y), px), y)
    };
    Pixel::new(x as i32, y as i32)
}

/// Hausdorff distance between the Bresenham circle and its N-gon approximation.
///
/// Measures how far the two cell sets disagree. It reaches exactly zero once
/// `sides` is large enough for every chord to join neighbouring cells.
pub fn circle_approximation_error(radius: u32, sides: usize) -> f64 {
    let origin = Pixel::default();
    let exact = pixels_to_points::<f64>(&bresenham_circle(origin, radius));
    let approx = pixels_to_points::<f64>(&polygon_circle(origin, radius, sides));
    hausdorff_distance(&exact, &approx)
}

/// Circle rasterization algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CircleAlgorithm {
    /// Midpoint circle with eight-way symmetry.
    #[default]
    Bresenham,
    /// Regular polygon with the given number of sides.
    Polygon { sides: usize },
}

impl CircleAlgorithm {
    /// Rasterizes a circle of `radius` around `center`.
    pub fn rasterize(self, center: Pixel, radius: u32) -> Vec<Pixel> {
        match self {
            CircleAlgorithm::Bresenham => bresenham_circle(center, radius),
            CircleAlgorithm::Polygon { sides } => polygon_circle(center, radius, sides),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn prop_circle_has_octant_symmetry(r in 0u32..60) {
            let set: HashSet<Pixel> = bresenham_circle(Pixel::default(), r).into_iter().collect();
            for p in &set {
                for q in p.octant_reflections() {
                    prop_assert!(set.contains(&q));
                }
            }
        }

        #[test]
        fn prop_dense_polygon_error_is_zero(r in 0u32..60) {
            prop_assert_eq!(circle_approximation_error(r, 8 * r as usize + 16), 0.0);
        }
    }
}
