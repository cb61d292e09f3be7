//! Line segment rasterization: DDA and Bresenham.
//!
//! Both algorithms return the visited cells in path order, starting at
//! `start` and ending exactly at `end`. Consecutive cells are 8-connected.
//!
//! # Example
//!
//! ```
//! use pixelgeom::raster::{bresenham_line, dda_line, Pixel};
//!
//! let a = Pixel::new(0, 0);
//! let b = Pixel::new(-8, -3);
//!
//! let line = bresenham_line(a, b);
//! assert_eq!(line.first(), Some(&a));
//! assert_eq!(line.last(), Some(&b));
//! assert_eq!(dda_line(a, b).len(), 9);
//! ```

use super::Pixel;

/// Rasterizes a segment with the digital differential analyzer.
///
/// Takes `steps = max(|dx|, |dy|)` unit steps along the major axis,
/// advancing the real-valued position by `(dx, dy) / steps` and rounding
/// each position to the nearest cell. A zero-length segment yields the
/// single start cell.
pub fn dda_line(start: Pixel, end: Pixel) -> Vec<Pixel> {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![start];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;

    let mut x = f64::from(start.x);
    let mut y = f64::from(start.y);
    let mut pixels = Vec::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        pixels.push(Pixel::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }

    pixels
}

/// Rasterizes a segment with Bresenham's integer error-term algorithm.
///
/// The major axis is x when `|dx| > |dy|`, otherwise y. The error
/// accumulator starts at half the major delta, is decremented by the minor
/// delta on each major step, and steps the minor axis (adding back the major
/// delta) when it goes negative. The path has `max(|dx|, |dy|) + 1` cells.
pub fn bresenham_line(start: Pixel, end: Pixel) -> Vec<Pixel> {
    BresenhamLine::new(start, end).collect()
}

/// Lazy form of [`bresenham_line`].
///
/// Deltas and the error term are kept in `i64`, so any pair of `i32`
/// endpoints works without overflow.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    step_x: i64,
    step_y: i64,
    major: i64,
    minor: i64,
    x_major: bool,
    err: i64,
    remaining: u64,
}

impl BresenhamLine {
    pub fn new(start: Pixel, end: Pixel) -> Self {
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();
        let x_major = dx > dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

        Self {
            x: i64::from(start.x),
            y: i64::from(start.y),
            step_x: if end.x > start.x { 1 } else { -1 },
            step_y: if end.y > start.y { 1 } else { -1 },
            major,
            minor,
            x_major,
            err: major / 2,
            remaining: major.unsigned_abs() + 1,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.remaining == 0 {
            return None;
        }
        // Every visited coordinate lies between two i32 endpoints.
        let cell = Pixel::new(self.x as i32, self.y as i32);
        self.remaining -= 1;

        if self.remaining > 0 {
            self.err -= self.minor;
            let carry = self.err < 0;
            if carry {
                self.err += self.major;
            }
            if self.x_major {
                self.x += self.step_x;
                if carry {
                    self.y += self.step_y;
                }
            } else {
                self.y += self.step_y;
                if carry {
                    self.x += self.step_x;
                }
            }
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Line rasterization algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineAlgorithm {
    /// Floating-point digital differential analyzer.
    Dda,
    /// Integer-only Bresenham.
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    /// Rasterizes `start -> end` with the selected algorithm.
    pub fn rasterize(self, start: Pixel, end: Pixel) -> Vec<Pixel> {
        match self {
            LineAlgorithm::Dda => dda_line(start, end),
            LineAlgorithm::Bresenham => bresenham_line(start, end),
        }
    }
}
