//! Fixed-size intensity grid.

use super::Pixel;
use num_traits::Float;

/// A fixed-size 2D grid of intensities in `[0, 1]`.
///
/// Cells are indexed by `(row, column)`. Pixel coordinates are translated by
/// the buffer's origin offset before indexing (the origin defaults to the
/// grid centre), and coordinates that land outside `[0, width) x [0, height)`
/// are silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBuffer<F> {
    width: usize,
    height: usize,
    origin: Pixel,
    cells: Vec<F>,
}

impl<F: Float> RasterBuffer<F> {
    /// Creates a zeroed buffer with its origin at the grid centre.
    pub fn new(width: usize, height: usize) -> Self {
        let origin = Pixel::new((width / 2) as i32, (height / 2) as i32);
        Self::with_origin(width, height, origin)
    }

    /// Creates a zeroed buffer with an explicit origin offset.
    pub fn with_origin(width: usize, height: usize, origin: Pixel) -> Self {
        Self {
            width,
            height,
            origin,
            cells: vec![F::zero(); width * height],
        }
    }

    /// Creates a zeroed buffer with the same dimensions and origin as `self`.
    pub fn blank_like(&self) -> Self {
        Self::with_origin(self.width, self.height, self.origin)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The grid cell that pixel `(0, 0)` maps to, as `(column, row)`.
    #[inline]
    pub fn origin(&self) -> Pixel {
        self.origin
    }

    /// Row-major cell intensities.
    #[inline]
    pub fn cells(&self) -> &[F] {
        &self.cells
    }

    /// Maps a pixel to `(row, column)`, or `None` if it falls outside the grid.
    pub fn cell_of(&self, p: Pixel) -> Option<(usize, usize)> {
        let col = i64::from(p.x) + i64::from(self.origin.x);
        let row = i64::from(p.y) + i64::from(self.origin.y);
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Maps a `(row, column)` cell back to pixel coordinates.
    pub fn pixel_of(&self, row: usize, col: usize) -> Pixel {
        Pixel::new(col as i32 - self.origin.x, row as i32 - self.origin.y)
    }

    /// Sets a pixel's intensity, clamped to `[0, 1]`.
    ///
    /// Returns `false` if the pixel was outside the grid and was dropped.
    pub fn set(&mut self, p: Pixel, value: F) -> bool {
        match self.cell_of(p) {
            Some((row, col)) => self.set_cell(row, col, value),
            None => false,
        }
    }

    /// Sets a pixel to full intensity.
    #[inline]
    pub fn plot(&mut self, p: Pixel) -> bool {
        self.set(p, F::one())
    }

    /// Plots every pixel, returning how many landed inside the grid.
    pub fn plot_all<I: IntoIterator<Item = Pixel>>(&mut self, pixels: I) -> usize {
        pixels.into_iter().filter(|&p| self.plot(p)).count()
    }

    /// Reads a pixel's intensity; pixels outside the grid read as zero.
    pub fn get(&self, p: Pixel) -> F {
        self.cell_of(p)
            .and_then(|(row, col)| self.get_cell(row, col))
            .unwrap_or_else(F::zero)
    }

    /// Reads a cell by `(row, column)`.
    #[inline]
    pub fn get_cell(&self, row: usize, col: usize) -> Option<F> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Writes a cell by `(row, column)`, clamping the value to `[0, 1]`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: F) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        self.cells[row * self.width + col] = value.max(F::zero()).min(F::one());
        true
    }

    /// Resets every cell to zero.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = F::zero());
    }

    /// Pixels with non-zero intensity, in row-major order.
    pub fn lit_pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > F::zero())
            .map(move |(i, _)| self.pixel_of(i / self.width.max(1), i % self.width.max(1)))
    }

    /// Sum of all intensities.
    pub fn total_intensity(&self) -> F {
        self.cells.iter().fold(F::zero(), |acc, &v| acc + v)
    }
}
