//! Rasterization of analytic curves onto an integer grid.
//!
//! This module provides:
//! - DDA and Bresenham line rasterization
//! - Bresenham midpoint circles and N-gon circle approximations
//! - Region-split Bresenham ellipses
//! - A fixed-size intensity buffer with a centred origin
//! - Supersampled (antialiased) rendering and post-filters
//! - Ordered, error-diffusion and random dithering
//!
//! # Example
//!
//! ```
//! use pixelgeom::raster::{bresenham_circle, Pixel, RasterBuffer};
//!
//! let mut buf: RasterBuffer<f64> = RasterBuffer::new(32, 32);
//! let circle = bresenham_circle(Pixel::new(0, 0), 10);
//! assert_eq!(buf.plot_all(circle.iter().copied()), circle.len());
//! assert_eq!(buf.get(Pixel::new(10, 0)), 1.0);
//!
//! // A radius-20 circle spills over the 32x32 grid; the overflow is dropped.
//! let big = bresenham_circle(Pixel::new(0, 0), 20);
//! assert!(buf.plot_all(big.iter().copied()) < big.len());
//! ```

mod buffer;
mod circle;
mod dither;
mod ellipse;
mod filter;
mod line;
mod pixel;
mod supersample;

pub use buffer::RasterBuffer;
pub use circle::{bresenham_circle, circle_approximation_error, polygon_circle, CircleAlgorithm};
pub use dither::{
    floyd_steinberg, gradient, ordered_dither, random_dither, DitherMethod, ThresholdMatrix,
};
pub use ellipse::bresenham_ellipse;
pub use filter::{box_filter, recursive_filter};
pub use line::{bresenham_line, dda_line, BresenhamLine, LineAlgorithm};
pub use pixel::{pixels_to_points, Pixel};
pub use supersample::{supersampled_ellipse, supersampled_line, DownsampleFilter, Supersampler};
