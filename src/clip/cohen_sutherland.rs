//! Cohen-Sutherland line clipping.

use super::rect::{ClipRect, LineClip, Outcode};
use crate::primitives::{Point2, Segment2};
use log::{debug, trace, warn};
use num_traits::Float;

/// Each pass moves one endpoint onto a boundary line, and a point can
/// violate at most two boundaries, so four passes per endpoint suffice.
/// The cap only guards against NaN input.
const MAX_ITERATIONS: usize = 16;

/// Clips `segment` to `rect` using outcodes.
///
/// Trivially accepts when both outcodes are zero and trivially rejects when
/// they share a bit. Otherwise the endpoint with a nonzero code is moved to
/// the first boundary it violates, checked in the order left, right, bottom,
/// top, and the loop repeats.
///
/// The accepted segment keeps the input direction.
///
/// # Example
///
/// ```
/// use pixelgeom::clip::{cohen_sutherland, ClipRect};
/// use pixelgeom::Segment2;
///
/// let rect = ClipRect::new(0.0, 0.0, 10.0, 10.0);
/// let clipped = cohen_sutherland(Segment2::from_coords(-5.0, 5.0, 15.0, 5.0), &rect);
/// assert_eq!(clipped.segment(), Some(Segment2::from_coords(0.0, 5.0, 10.0, 5.0)));
/// ```
pub fn cohen_sutherland<F: Float>(segment: Segment2<F>, rect: &ClipRect<F>) -> LineClip<F> {
    let mut p1 = segment.start;
    let mut p2 = segment.end;
    let mut code1 = rect.outcode(p1);
    let mut code2 = rect.outcode(p2);

    for iteration in 0..MAX_ITERATIONS {
        trace!("iteration {}: codes {:?} {:?}", iteration, code1, code2);

        if code1.is_inside() && code2.is_inside() {
            debug!("cohen-sutherland: accepted after {} iterations", iteration);
            return LineClip::Accepted(Segment2::new(p1, p2));
        }
        if code1.shares_side(code2) {
            debug!("cohen-sutherland: rejected after {} iterations", iteration);
            return LineClip::Rejected;
        }

        let clip_first = !code1.is_inside();
        let code = if clip_first { code1 } else { code2 };
        let moved = boundary_point(p1, p2, code, rect);

        if clip_first {
            p1 = moved;
            code1 = rect.outcode(p1);
        } else {
            p2 = moved;
            code2 = rect.outcode(p2);
        }
    }

    warn!("cohen-sutherland: no verdict after {} iterations", MAX_ITERATIONS);
    LineClip::Rejected
}

/// Where the line through `p1` and `p2` meets the first boundary in `code`.
///
/// The caller guarantees the endpoints lie on opposite sides of that
/// boundary, so the divisor is nonzero.
fn boundary_point<F: Float>(p1: Point2<F>, p2: Point2<F>, code: Outcode, rect: &ClipRect<F>) -> Point2<F> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if code.contains(Outcode::LEFT) {
        Point2::new(rect.xmin, p1.y + dy * (rect.xmin - p1.x) / dx)
    } else if code.contains(Outcode::RIGHT) {
        Point2::new(rect.xmax, p1.y + dy * (rect.xmax - p1.x) / dx)
    } else if code.contains(Outcode::BOTTOM) {
        Point2::new(p1.x + dx * (rect.ymin - p1.y) / dy, rect.ymin)
    } else {
        Point2::new(p1.x + dx * (rect.ymax - p1.y) / dy, rect.ymax)
    }
}
