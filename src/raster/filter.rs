//! Post-filters for antialiasing a coverage raster.

use super::RasterBuffer;
use crate::error::GeomError;
use num_traits::Float;

/// Forward first-order recursive (IIR) smoothing filter.
///
/// Processes cells in row-major order:
///
/// - `out[0][0] = in[0][0]`
/// - first column: `out[y][0] = α·out[y−1][0] + (1−α)·in[y][0]`
/// - elsewhere: `out[y][x] = α·(out[y][x−1] + out[y−1][x])/2 + (1−α)·in[y][x]`
///
/// On the first row the missing upper neighbour reads as zero.
pub fn recursive_filter<F: Float>(input: &RasterBuffer<F>, alpha: F) -> RasterBuffer<F> {
    let mut out = input.blank_like();
    let one_minus = F::one() - alpha;
    let half = F::from(0.5).unwrap();

    for row in 0..input.height() {
        for col in 0..input.width() {
            let current = input.get_cell(row, col).unwrap_or_else(F::zero);
            let up = if row > 0 {
                out.get_cell(row - 1, col).unwrap_or_else(F::zero)
            } else {
                F::zero()
            };

            let value = match (row, col) {
                (0, 0) => current,
                (_, 0) => alpha * up + one_minus * current,
                _ => {
                    let left = out.get_cell(row, col - 1).unwrap_or_else(F::zero);
                    alpha * (left + up) * half + one_minus * current
                }
            };
            out.set_cell(row, col, value);
        }
    }

    out
}

/// Zero-padded "same"-size convolution with a `size × size` averaging kernel.
///
/// For even sizes the window around cell `i` spans `i − size/2` through
/// `i + (size − 1)/2`.
///
/// # Errors
///
/// Returns [`GeomError::InvalidKernel`] if `size` is zero.
pub fn box_filter<F: Float>(
    input: &RasterBuffer<F>,
    size: usize,
) -> Result<RasterBuffer<F>, GeomError> {
    if size == 0 {
        return Err(GeomError::InvalidKernel { size });
    }

    let weight = F::one() / F::from(size * size).unwrap();
    let before = (size / 2) as isize;
    let after = ((size - 1) / 2) as isize;
    let (w, h) = (input.width() as isize, input.height() as isize);
    let mut out = input.blank_like();

    for row in 0..h {
        for col in 0..w {
            let mut acc = F::zero();
            for r in (row - before).max(0)..=(row + after).min(h - 1) {
                for c in (col - before).max(0)..=(col + after).min(w - 1) {
                    acc = acc + input.get_cell(r as usize, c as usize).unwrap_or_else(F::zero);
                }
            }
            out.set_cell(row as usize, col as usize, acc * weight);
        }
    }

    Ok(out)
}
