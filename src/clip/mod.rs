//! Line clipping against rectangles and convex windows.
//!
//! This module provides:
//! - Outcodes and axis-aligned clip rectangles
//! - Cohen-Sutherland clipping
//! - Midpoint subdivision clipping
//! - Cyrus-Beck clipping against any convex window, keeping either the
//!   inside or the outside, with a per-edge diagnostic table
//!
//! # Example
//!
//! ```
//! use pixelgeom::clip::{ClipRect, LineClip, LineClipAlgorithm};
//! use pixelgeom::tolerance::Tolerances;
//! use pixelgeom::Segment2;
//!
//! let rect = ClipRect::new(0.0, 0.0, 10.0, 10.0);
//! let outside = Segment2::from_coords(11.0, 0.0, 20.0, 5.0);
//!
//! for algorithm in [LineClipAlgorithm::CohenSutherland, LineClipAlgorithm::MidpointSubdivision] {
//!     assert_eq!(algorithm.clip(outside, &rect, &Tolerances::default()), LineClip::Rejected);
//! }
//! ```

mod cohen_sutherland;
mod cyrus_beck;
mod midpoint;
mod rect;

pub use cohen_sutherland::cohen_sutherland;
pub use cyrus_beck::{cyrus_beck, ClipMode, CrossingKind, CyrusBeckReport, EdgeDiagnostic};
pub use midpoint::midpoint_subdivision;
pub use rect::{ClipRect, LineClip, Outcode};

use crate::primitives::Segment2;
use crate::tolerance::Tolerances;
use num_traits::Float;

/// Rectangle line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineClipAlgorithm {
    #[default]
    CohenSutherland,
    /// Uses [`Tolerances::subdivision`] as the bisection tolerance.
    MidpointSubdivision,
}

impl LineClipAlgorithm {
    pub fn clip<F: Float>(
        self,
        segment: Segment2<F>,
        rect: &ClipRect<F>,
        tolerances: &Tolerances<F>,
    ) -> LineClip<F> {
        match self {
            LineClipAlgorithm::CohenSutherland => cohen_sutherland(segment, rect),
            LineClipAlgorithm::MidpointSubdivision => {
                midpoint_subdivision(segment, rect, tolerances.subdivision)
            }
        }
    }
}
