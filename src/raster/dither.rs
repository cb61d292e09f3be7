//! Binary dithering of intensity rasters: ordered (Bayer), error diffusion
//! and random-threshold.

use super::RasterBuffer;
use log::debug;
use num_traits::Float;

/// Horizontal grey ramp: cell `(row, col)` holds `col / width`.
pub fn gradient<F: Float>(width: usize, height: usize) -> RasterBuffer<F> {
    let mut buf = RasterBuffer::with_origin(width, height, Default::default());
    let w = F::from(width.max(1)).unwrap();
    for row in 0..height {
        for col in 0..width {
            buf.set_cell(row, col, F::from(col).unwrap() / w);
        }
    }
    buf
}

/// Square threshold matrix tiled over the raster.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdMatrix<F> {
    size: usize,
    values: Vec<F>,
}

impl<F: Float> ThresholdMatrix<F> {
    /// Recursive Bayer matrix of side `2^levels`.
    ///
    /// Level 1 is `[[0, 2], [3, 1]] / 4`; each further level expands index
    /// `i` into the block `[[4i, 4i + 2], [4i + 3, 4i + 1]]`. Level 0 is the
    /// single threshold `0`.
    pub fn bayer(levels: u32) -> Self {
        let mut size = 1usize;
        let mut index = vec![0usize];

        for _ in 0..levels {
            let next_size = size * 2;
            let mut next = vec![0usize; next_size * next_size];
            for row in 0..size {
                for col in 0..size {
                    let i = 4 * index[row * size + col];
                    next[(2 * row) * next_size + 2 * col] = i;
                    next[(2 * row) * next_size + 2 * col + 1] = i + 2;
                    next[(2 * row + 1) * next_size + 2 * col] = i + 3;
                    next[(2 * row + 1) * next_size + 2 * col + 1] = i + 1;
                }
            }
            size = next_size;
            index = next;
        }

        let n = F::from(size * size).unwrap();
        let values = index
            .into_iter()
            .map(|i| F::from(i).unwrap() / n)
            .collect();
        Self { size, values }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Threshold for raster cell `(row, col)`, tiling the matrix.
    #[inline]
    pub fn threshold(&self, row: usize, col: usize) -> F {
        self.values[(row % self.size) * self.size + (col % self.size)]
    }
}

/// Ordered dithering: a cell is lit when its value exceeds the tiled threshold.
pub fn ordered_dither<F: Float>(
    input: &RasterBuffer<F>,
    matrix: &ThresholdMatrix<F>,
) -> RasterBuffer<F> {
    let mut out = input.blank_like();
    for row in 0..input.height() {
        for col in 0..input.width() {
            let v = input.get_cell(row, col).unwrap_or_else(F::zero);
            if v > matrix.threshold(row, col) {
                out.set_cell(row, col, F::one());
            }
        }
    }
    out
}

/// Floyd-Steinberg error diffusion at threshold 0.5.
///
/// Quantisation error is pushed to the unvisited neighbours with weights
/// 7/16 (right), 3/16 (below left), 5/16 (below) and 1/16 (below right);
/// shares that would leave the grid are dropped.
pub fn floyd_steinberg<F: Float>(input: &RasterBuffer<F>) -> RasterBuffer<F> {
    let (w, h) = (input.width(), input.height());
    let mut work: Vec<F> = input.cells().to_vec();
    let mut out = input.blank_like();
    let half = F::from(0.5).unwrap();
    let sixteenth = F::one() / F::from(16.0).unwrap();
    let share = |k: f64| F::from(k).unwrap() * sixteenth;

    for row in 0..h {
        for col in 0..w {
            let old = work[row * w + col];
            let new = if old > half { F::one() } else { F::zero() };
            out.set_cell(row, col, new);
            let err = old - new;

            if col + 1 < w {
                work[row * w + col + 1] = work[row * w + col + 1] + err * share(7.0);
            }
            if row + 1 < h {
                let below = (row + 1) * w;
                if col > 0 {
                    work[below + col - 1] = work[below + col - 1] + err * share(3.0);
                }
                work[below + col] = work[below + col] + err * share(5.0);
                if col + 1 < w {
                    work[below + col + 1] = work[below + col + 1] + err * share(1.0);
                }
            }
        }
    }

    out
}

/// Random-threshold dithering.
///
/// Adds uniform noise in `[-amplitude, amplitude]` to every cell, clamps to
/// `[0, 1]` and thresholds at 0.5. The noise comes from a xorshift64
/// generator seeded with `seed`, so results are reproducible.
pub fn random_dither<F: Float>(input: &RasterBuffer<F>, amplitude: F, seed: u64) -> RasterBuffer<F> {
    let mut rng = XorShift64::new(seed);
    let half = F::from(0.5).unwrap();
    let two = F::from(2.0).unwrap();
    let mut out = input.blank_like();

    for row in 0..input.height() {
        for col in 0..input.width() {
            let noise = (rng.next_unit::<F>() * two - F::one()) * amplitude;
            let v = input.get_cell(row, col).unwrap_or_else(F::zero) + noise;
            let v = v.max(F::zero()).min(F::one());
            if v > half {
                out.set_cell(row, col, F::one());
            }
        }
    }

    out
}

/// Dithering method selector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DitherMethod<F> {
    /// Bayer matrix of side `2^levels`.
    Ordered { levels: u32 },
    FloydSteinberg,
    Random { amplitude: F, seed: u64 },
}

impl<F: Float> DitherMethod<F> {
    /// Dithers `input` to a binary raster.
    pub fn apply(&self, input: &RasterBuffer<F>) -> RasterBuffer<F> {
        let out = match *self {
            DitherMethod::Ordered { levels } => {
                ordered_dither(input, &ThresholdMatrix::bayer(levels))
            }
            DitherMethod::FloydSteinberg => floyd_steinberg(input),
            DitherMethod::Random { amplitude, seed } => random_dither(input, amplitude, seed),
        };
        debug!(
            "dithered {}x{}: {} cells lit",
            input.width(),
            input.height(),
            out.lit_pixels().count()
        );
        out
    }
}

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Returns a value in [0, 1].
    fn next_unit<F: Float>(&mut self) -> F {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        F::from(self.state as f64 / u64::MAX as f64).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn constant(size: usize, v: f64) -> RasterBuffer<f64> {
        let mut buf = RasterBuffer::new(size, size);
        for row in 0..size {
            for col in 0..size {
                buf.set_cell(row, col, v);
            }
        }
        buf
    }

    fn is_binary(buf: &RasterBuffer<f64>) -> bool {
        buf.cells().iter().all(|&v| v == 0.0 || v == 1.0)
    }

    #[test]
    fn test_gradient_ramp() {
        let g: RasterBuffer<f64> = gradient(8, 2);
        assert_eq!(g.get_cell(0, 0), Some(0.0));
        assert_relative_eq!(g.get_cell(1, 4).unwrap(), 0.5);
        assert_relative_eq!(g.get_cell(1, 7).unwrap(), 0.875);
    }

    #[test]
    fn test_bayer_level_one() {
        let m: ThresholdMatrix<f64> = ThresholdMatrix::bayer(1);
        assert_eq!(m.size(), 2);
        assert_eq!(m.threshold(0, 0), 0.0);
        assert_eq!(m.threshold(0, 1), 0.5);
        assert_eq!(m.threshold(1, 0), 0.75);
        assert_eq!(m.threshold(1, 1), 0.25);
        // Tiles.
        assert_eq!(m.threshold(3, 2), 0.75);
    }

    #[test]
    fn test_bayer_level_two_is_permutation() {
        let m: ThresholdMatrix<f64> = ThresholdMatrix::bayer(2);
        let mut seen: Vec<usize> = (0..4)
            .flat_map(|r| (0..4).map(move |c| (r, c)))
            .map(|(r, c)| (m.threshold(r, c) * 16.0) as usize)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_ordered_dither_density() {
        let out = ordered_dither(&constant(4, 0.6), &ThresholdMatrix::bayer(1));
        assert!(is_binary(&out));
        // 0.6 exceeds thresholds 0, 0.25 and 0.5 in every 2x2 block.
        assert_eq!(out.lit_pixels().count(), 12);
    }

    #[test]
    fn test_floyd_steinberg_preserves_mean() {
        let out = floyd_steinberg(&constant(16, 0.25));
        assert!(is_binary(&out));
        let lit = out.lit_pixels().count();
        assert!((48..=72).contains(&lit), "lit {lit}");
    }

    #[test]
    fn test_floyd_steinberg_follows_gradient() {
        let out = floyd_steinberg(&gradient::<f64>(32, 32));
        let column_sum = |cols: std::ops::Range<usize>| -> f64 {
            cols.flat_map(|c| (0..32).map(move |r| (r, c)))
                .map(|(r, c)| out.get_cell(r, c).unwrap())
                .sum()
        };
        assert!(column_sum(0..8) < column_sum(24..32));
    }

    #[test]
    fn test_random_dither_is_seeded() {
        let input = gradient::<f64>(16, 16);
        let a = random_dither(&input, 0.2, 42);
        let b = random_dither(&input, 0.2, 42);
        assert_eq!(a, b);
        assert!(is_binary(&a));
    }

    #[test]
    fn test_random_dither_zero_amplitude_thresholds() {
        let input = gradient::<f64>(8, 1);
        let out = random_dither(&input, 0.0, 0);
        let lit: Vec<usize> = (0..8).filter(|&c| out.get_cell(0, c) == Some(1.0)).collect();
        assert_eq!(lit, vec![5, 6, 7]);
    }

    #[test]
    fn test_method_dispatch() {
        let input = gradient::<f64>(8, 8);
        assert_eq!(
            DitherMethod::FloydSteinberg.apply(&input),
            floyd_steinberg(&input)
        );
        assert_eq!(
            DitherMethod::Ordered { levels: 2 }.apply(&input),
            ordered_dither(&input, &ThresholdMatrix::bayer(2))
        );
    }
}
