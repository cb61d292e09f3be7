//! Wall-clock averaging for quick algorithm comparisons.
//!
//! The criterion benches in `benches/` are the precise measurement path;
//! this is the lightweight in-process variant.

use log::debug;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Runs `f` `iterations` times and returns the mean wall-clock duration.
///
/// Each result passes through [`black_box`], so a closure that only returns
/// its output is still timed. Zero iterations yields [`Duration::ZERO`]
/// without calling `f`.
///
/// # Example
///
/// ```
/// use pixelgeom::raster::{bresenham_line, Pixel};
/// use pixelgeom::timing::measure_average;
///
/// let mean = measure_average(100, || bresenham_line(Pixel::new(0, 0), Pixel::new(120, 45)));
/// assert!(mean.as_secs() < 1);
/// ```
pub fn measure_average<R, Func: FnMut() -> R>(iterations: u32, mut f: Func) -> Duration {
    if iterations == 0 {
        return Duration::ZERO;
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let mean = start.elapsed() / iterations;
    debug!("{} iterations, mean {:?}", iterations, mean);
    mean
}
