//! Midpoint subdivision line clipping.

use super::rect::{ClipRect, LineClip};
use crate::primitives::Segment2;
use log::debug;
use num_traits::Float;

/// Recursion depth at which a still-undecided piece is dropped.
const MAX_DEPTH: u32 = 64;

/// Clips `segment` to `rect` by recursive bisection.
///
/// A piece is accepted when both endpoint outcodes are zero and rejected
/// when they share a bit. An undecided piece whose extent along both axes is
/// below `tolerance` is accepted as is, so accepted endpoints may lie up to
/// `tolerance` outside the rectangle. Any other piece is split at its
/// midpoint and the visible halves are joined.
///
/// Recursion stops at 64 levels, which also bounds the work for a
/// non-positive `tolerance`.
///
/// # Example
///
/// ```
/// use pixelgeom::clip::{midpoint_subdivision, ClipRect};
/// use pixelgeom::Segment2;
///
/// let rect = ClipRect::new(0.0, 0.0, 10.0, 10.0);
/// let clipped = midpoint_subdivision(Segment2::from_coords(-5.0, 5.0, 15.0, 5.0), &rect, 0.01)
///     .segment()
///     .unwrap();
/// assert!((clipped.start.x - 0.0_f64).abs() < 0.01);
/// assert!((clipped.end.x - 10.0_f64).abs() < 0.01);
/// ```
pub fn midpoint_subdivision<F: Float>(
    segment: Segment2<F>,
    rect: &ClipRect<F>,
    tolerance: F,
) -> LineClip<F> {
    let mut calls = 0usize;
    let result = subdivide(segment, rect, tolerance, 0, &mut calls);
    debug!(
        "midpoint subdivision: {} after {} subdivisions",
        if result.is_accepted() { "accepted" } else { "rejected" },
        calls
    );
    result
}

fn subdivide<F: Float>(
    segment: Segment2<F>,
    rect: &ClipRect<F>,
    tolerance: F,
    depth: u32,
    calls: &mut usize,
) -> LineClip<F> {
    *calls += 1;
    let code1 = rect.outcode(segment.start);
    let code2 = rect.outcode(segment.end);

    if code1.is_inside() && code2.is_inside() {
        return LineClip::Accepted(segment);
    }
    if code1.shares_side(code2) {
        return LineClip::Rejected;
    }

    let d = segment.direction();
    if d.x.abs() < tolerance && d.y.abs() < tolerance {
        return LineClip::Accepted(segment);
    }
    if depth >= MAX_DEPTH {
        return LineClip::Rejected;
    }

    let mid = segment.midpoint();
    let first = subdivide(Segment2::new(segment.start, mid), rect, tolerance, depth + 1, calls);
    let second = subdivide(Segment2::new(mid, segment.end), rect, tolerance, depth + 1, calls);

    match (first, second) {
        (LineClip::Accepted(a), LineClip::Accepted(b)) => LineClip::Accepted(Segment2::new(a.start, b.end)),
        (LineClip::Accepted(a), LineClip::Rejected) => LineClip::Accepted(a),
        (LineClip::Rejected, accepted) => accepted,
    }
}
