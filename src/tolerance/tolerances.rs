//! Bundled tolerance configuration.

use num_traits::Float;

/// The tolerances used across the clipping algorithms.
///
/// Every algorithm takes its tolerance as an explicit argument; this bundle
/// exists for callers that dispatch through an algorithm enum and want one
/// configuration value to carry around.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances<F> {
    /// Magnitude below which a denominator or `D·n` counts as zero (parallel lines).
    pub parallel: F,
    /// Extent below which midpoint subdivision stops bisecting.
    pub subdivision: F,
    /// Distance within which a point counts as lying on an edge; feeds
    /// Sutherland-Hodgman's inside test.
    pub on_edge: F,
}

impl<F: Float> Tolerances<F> {
    /// Creates a tolerance bundle.
    pub fn new(parallel: F, subdivision: F, on_edge: F) -> Self {
        Self {
            parallel,
            subdivision,
            on_edge,
        }
    }

    /// Returns a copy with a different subdivision tolerance.
    pub fn with_subdivision(self, subdivision: F) -> Self {
        Self {
            subdivision,
            ..self
        }
    }
}

impl<F: Float> Default for Tolerances<F> {
    /// `1e-9` for parallel and on-edge tests, one unit for subdivision.
    fn default() -> Self {
        let tiny = F::from(1e-9).unwrap_or_else(F::epsilon);
        Self {
            parallel: tiny,
            subdivision: F::one(),
            on_edge: tiny,
        }
    }
}
