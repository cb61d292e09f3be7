//! Supersampled rendering with box or tent-weighted downsampling.
//!
//! A [`Supersampler`] owns a fine grid `factor` times larger than the
//! output raster in each direction. Coarse pixel `p` covers the continuous
//! square `[p, p + 1)²`, which maps to the `factor × factor` block of fine
//! cells starting at `p · factor`. Downsampling collapses each block back to
//! one intensity.

use super::ellipse::bresenham_ellipse;
use super::line::bresenham_line;
use super::{Pixel, RasterBuffer};
use crate::error::GeomError;
use crate::primitives::Point2;
use log::debug;
use num_traits::Float;

/// How a block of sub-cells collapses to one output intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DownsampleFilter {
    /// Unweighted mean of the sub-cells (fractional coverage).
    #[default]
    Box,
    /// Separable tent weights peaking at the block centre.
    ///
    /// Sub-cell `i` of `f` gets weight `min(i + 1, f - i)` along each axis;
    /// for `f = 4` this is `[1, 2, 2, 1] ⊗ [1, 2, 2, 1] / 36`.
    Weighted,
}

impl DownsampleFilter {
    /// Normalised `factor × factor` kernel, row-major.
    pub fn kernel<F: Float>(self, factor: usize) -> Vec<F> {
        let axis: Vec<F> = (0..factor)
            .map(|i| match self {
                DownsampleFilter::Box => F::one(),
                DownsampleFilter::Weighted => F::from((i + 1).min(factor - i)).unwrap(),
            })
            .collect();
        let sum = axis.iter().fold(F::zero(), |acc, &w| acc + w);
        let norm = sum * sum;

        let mut kernel = Vec::with_capacity(factor * factor);
        for &wy in &axis {
            for &wx in &axis {
                kernel.push(wy * wx / norm);
            }
        }
        kernel
    }
}

/// A fine-resolution drawing surface paired with its coarse output size.
#[derive(Debug, Clone)]
pub struct Supersampler<F> {
    factor: usize,
    width: usize,
    height: usize,
    origin: Pixel,
    fine: RasterBuffer<F>,
}

impl<F: Float> Supersampler<F> {
    /// Creates a supersampler for a `width × height` output with the origin
    /// at the grid centre.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::InvalidFactor`] if `factor` is zero.
    pub fn new(width: usize, height: usize, factor: usize) -> Result<Self, GeomError> {
        let origin = Pixel::new((width / 2) as i32, (height / 2) as i32);
        Self::with_origin(width, height, origin, factor)
    }

    /// Creates a supersampler whose output raster uses `origin`.
    pub fn with_origin(
        width: usize,
        height: usize,
        origin: Pixel,
        factor: usize,
    ) -> Result<Self, GeomError> {
        if factor == 0 {
            return Err(GeomError::InvalidFactor { factor });
        }
        let f = factor as i32;
        let fine = RasterBuffer::with_origin(
            width * factor,
            height * factor,
            Pixel::new(origin.x * f, origin.y * f),
        );
        Ok(Self {
            factor,
            width,
            height,
            origin,
            fine,
        })
    }

    #[inline]
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// The fine-resolution buffer.
    #[inline]
    pub fn fine(&self) -> &RasterBuffer<F> {
        &self.fine
    }

    #[inline]
    pub fn fine_mut(&mut self) -> &mut RasterBuffer<F> {
        &mut self.fine
    }

    /// The fine cell containing the continuous coarse-space point `p`.
    pub fn fine_pixel(&self, p: Point2<F>) -> Pixel {
        let f = F::from(self.factor).unwrap();
        Pixel::new(
            (p.x * f).floor().to_i32().unwrap_or(0),
            (p.y * f).floor().to_i32().unwrap_or(0),
        )
    }

    /// Plots the fine cell containing `p`.
    pub fn plot_point(&mut self, p: Point2<F>) -> bool {
        let cell = self.fine_pixel(p);
        self.fine.plot(cell)
    }

    /// Collapses every `factor × factor` block of the fine buffer into one
    /// output cell.
    pub fn downsample(&self, filter: DownsampleFilter) -> RasterBuffer<F> {
        let f = self.factor;
        let kernel = filter.kernel::<F>(f);
        let mut out = RasterBuffer::with_origin(self.width, self.height, self.origin);

        for row in 0..self.height {
            for col in 0..self.width {
                let mut acc = F::zero();
                for sy in 0..f {
                    for sx in 0..f {
                        let v = self
                            .fine
                            .get_cell(row * f + sy, col * f + sx)
                            .unwrap_or_else(F::zero);
                        acc = acc + v * kernel[sy * f + sx];
                    }
                }
                out.set_cell(row, col, acc);
            }
        }

        debug!(
            "downsampled {}x{} by {} with {:?}",
            self.width, self.height, f, filter
        );
        out
    }
}

/// Renders an origin-centred ellipse with fractional coverage.
///
/// The ellipse is drawn with [`bresenham_ellipse`] at `factor`-scaled
/// semi-axes around the centre of coarse pixel `(0, 0)`, then box-filtered.
pub fn supersampled_ellipse<F: Float>(
    width: usize,
    height: usize,
    a: u32,
    b: u32,
    factor: usize,
) -> Result<RasterBuffer<F>, GeomError> {
    let mut ss = Supersampler::new(width, height, factor)?;
    let f = factor as u32;
    let half = (f / 2) as i32;
    let plotted = ss
        .fine_mut()
        .plot_all(bresenham_ellipse(Pixel::new(half, half), a * f, b * f));
    debug!("supersampled ellipse a={} b={}: {} fine cells", a, b, plotted);
    Ok(ss.downsample(DownsampleFilter::Box))
}

/// Renders a segment between continuous coarse-space points with
/// fractional coverage.
pub fn supersampled_line<F: Float>(
    width: usize,
    height: usize,
    start: Point2<F>,
    end: Point2<F>,
    factor: usize,
    filter: DownsampleFilter,
) -> Result<RasterBuffer<F>, GeomError> {
    let mut ss = Supersampler::new(width, height, factor)?;
    let a = ss.fine_pixel(start);
    let b = ss.fine_pixel(end);
    let plotted = ss.fine_mut().plot_all(bresenham_line(a, b));
    debug!("supersampled line {:?} -> {:?}: {} fine cells", a, b, plotted);
    Ok(ss.downsample(filter))
}
