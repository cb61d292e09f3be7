//! Hausdorff distance between point sets.
//!
//! Used to compare two rasterizations of the same curve, e.g. a true
//! Bresenham circle against its N-gon approximation.
//!
//! For point sets A and B:
//! - **Directed Hausdorff**: h(A,B) = max_{a∈A} min_{b∈B} d(a,b)
//! - **Hausdorff distance**: H(A,B) = max(h(A,B), h(B,A))
//!
//! # Example
//!
//! ```
//! use pixelgeom::tolerance::hausdorff_distance;
//! use pixelgeom::Point2;
//!
//! let a = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
//! let b = vec![Point2::new(0.0_f64, 0.5), Point2::new(1.0, 0.5)];
//!
//! let dist = hausdorff_distance(&a, &b);
//! assert!((dist - 0.5).abs() < 1e-10);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// Computes the directed Hausdorff distance from point set A to point set B.
///
/// Returns 0 if either set is empty. O(n*m).
pub fn directed_hausdorff<F: Float>(a: &[Point2<F>], b: &[Point2<F>]) -> F {
    if a.is_empty() || b.is_empty() {
        return F::zero();
    }

    let mut max_dist_sq = F::zero();

    for pa in a {
        let min_dist_sq = b
            .iter()
            .map(|pb| pa.distance_squared(*pb))
            .fold(F::infinity(), F::min);

        if min_dist_sq > max_dist_sq {
            max_dist_sq = min_dist_sq;
        }
    }

    max_dist_sq.sqrt()
}

/// Computes the symmetric Hausdorff distance between two point sets.
///
/// Returns 0 if either set is empty. O(n*m).
pub fn hausdorff_distance<F: Float>(a: &[Point2<F>], b: &[Point2<F>]) -> F {
    directed_hausdorff(a, b).max(directed_hausdorff(b, a))
}
