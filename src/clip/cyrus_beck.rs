//! Cyrus-Beck parametric clipping against a convex window.
//!
//! Besides the verdict, every call reports the per-edge quantities the
//! algorithm is built from, so a viewer can tabulate them.

use super::rect::LineClip;
use crate::polygon::ConvexWindow;
use crate::primitives::{Point2, Segment2, Vec2};
use log::debug;
use num_traits::Float;

/// Which side of the window is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipMode {
    /// Keep the part of the segment inside the window.
    #[default]
    Inside,
    /// Keep the parts of the segment outside the window.
    Outside,
}

/// How an edge constrains the segment parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossingKind {
    /// `D·n < 0`: the segment crosses into the kept half-plane at `t`.
    Entering,
    /// `D·n > 0`: the segment crosses out of the kept half-plane at `t`.
    Leaving,
    /// `D·n` is within the parallel tolerance of zero.
    Parallel,
}

/// One row of the Cyrus-Beck table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeDiagnostic<F> {
    /// First vertex of the edge.
    pub anchor: Point2<F>,
    /// Unit normal, outward in [`ClipMode::Inside`] and inverted in
    /// [`ClipMode::Outside`].
    pub normal: Vec2<F>,
    /// `(w − p1)·n`.
    pub w_dot_n: F,
    /// `D·n`.
    pub d_dot_n: F,
    /// Where the segment crosses the edge line; `None` when parallel.
    pub t: Option<F>,
    pub kind: CrossingKind,
}

impl<F: Float> EdgeDiagnostic<F> {
    fn new(anchor: Point2<F>, normal: Vec2<F>, p1: Point2<F>, d: Vec2<F>, parallel_eps: F) -> Self {
        let w_dot_n = (anchor - p1).dot(normal);
        let d_dot_n = d.dot(normal);
        let (t, kind) = if d_dot_n.abs() <= parallel_eps {
            (None, CrossingKind::Parallel)
        } else if d_dot_n < F::zero() {
            (Some(w_dot_n / d_dot_n), CrossingKind::Entering)
        } else {
            (Some(w_dot_n / d_dot_n), CrossingKind::Leaving)
        };
        Self {
            anchor,
            normal,
            w_dot_n,
            d_dot_n,
            t,
            kind,
        }
    }

    /// The same row seen from the exterior: both products change sign, `t`
    /// is unchanged and entering and leaving swap.
    fn inverted(self) -> Self {
        let kind = match self.kind {
            CrossingKind::Entering => CrossingKind::Leaving,
            CrossingKind::Leaving => CrossingKind::Entering,
            CrossingKind::Parallel => CrossingKind::Parallel,
        };
        Self {
            normal: -self.normal,
            w_dot_n: -self.w_dot_n,
            d_dot_n: -self.d_dot_n,
            kind,
            ..self
        }
    }
}

/// Everything a Cyrus-Beck run computed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CyrusBeckReport<F> {
    pub segment: Segment2<F>,
    pub mode: ClipMode,
    /// One row per window edge, in window (counter-clockwise) order.
    pub edges: Vec<EdgeDiagnostic<F>>,
    /// `(t_enter, t_exit)` of the part inside the window, or `None` if the
    /// segment misses the window. Independent of the mode.
    pub interval: Option<(F, F)>,
    /// The kept parts of the segment, in order along it.
    pub pieces: Vec<Segment2<F>>,
}

impl<F: Float> CyrusBeckReport<F> {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The first kept piece as a [`LineClip`]. In [`ClipMode::Inside`] this
    /// is the whole result.
    pub fn to_line_clip(&self) -> LineClip<F> {
        match self.pieces.first() {
            Some(&s) => LineClip::Accepted(s),
            None => LineClip::Rejected,
        }
    }
}

/// Clips `segment` against a convex window, reporting every edge.
///
/// With `D = p2 − p1`, outward normal `n` and edge anchor `w`, a point
/// `p1 + tD` is inside edge `i` when `(p1 + tD − w)·n ≤ 0`. Each
/// non-parallel edge therefore bounds `t` at `(w − p1)·n / (D·n)`: from
/// below when `D·n < 0`, from above when `D·n > 0`. A parallel edge rejects
/// the segment when `(w − p1)·n < 0`. The interval starts as `[0, 1]` and
/// is empty once `t_enter > t_exit`.
///
/// All edges are tabulated even after the verdict is known.
///
/// In [`ClipMode::Outside`] the table holds the inverted normals and the
/// pieces are what remains of `[0, 1]` after removing the inside interval:
/// up to two pieces, or the whole segment when it misses the window.
///
/// `|D·n| ≤ parallel_eps` counts as parallel.
///
/// # Example
///
/// ```
/// use pixelgeom::clip::{cyrus_beck, ClipMode};
/// use pixelgeom::polygon::ConvexWindow;
/// use pixelgeom::Segment2;
///
/// let window = ConvexWindow::rectangle(0.0, 0.0, 4.0, 4.0).unwrap();
/// let segment = Segment2::from_coords(-1.0, 1.0, 5.0, 1.0);
///
/// let inside = cyrus_beck(segment, &window, ClipMode::Inside, 1e-9);
/// assert_eq!(inside.pieces, vec![Segment2::from_coords(0.0, 1.0, 4.0, 1.0)]);
///
/// let outside = cyrus_beck(segment, &window, ClipMode::Outside, 1e-9);
/// assert_eq!(outside.pieces.len(), 2);
/// ```
pub fn cyrus_beck<F: Float>(
    segment: Segment2<F>,
    window: &ConvexWindow<F>,
    mode: ClipMode,
    parallel_eps: F,
) -> CyrusBeckReport<F> {
    let p1 = segment.start;
    let d = segment.direction();

    let mut t_enter = F::zero();
    let mut t_exit = F::one();
    let mut rejected = false;
    let mut edges = Vec::with_capacity(window.len());

    for (&anchor, &normal) in window.vertices().iter().zip(window.normals()) {
        let row = EdgeDiagnostic::new(anchor, normal, p1, d, parallel_eps);
        match (row.kind, row.t) {
            (CrossingKind::Parallel, _) => {
                if row.w_dot_n < F::zero() {
                    rejected = true;
                }
            }
            (CrossingKind::Entering, Some(t)) => t_enter = t_enter.max(t),
            (CrossingKind::Leaving, Some(t)) => t_exit = t_exit.min(t),
            _ => {}
        }
        if t_enter > t_exit {
            rejected = true;
        }
        edges.push(row);
    }

    let interval = if rejected { None } else { Some((t_enter, t_exit)) };

    let pieces = match mode {
        ClipMode::Inside => interval
            .map(|(a, b)| vec![segment.sub_segment(a, b)])
            .unwrap_or_default(),
        ClipMode::Outside => {
            edges = edges.into_iter().map(EdgeDiagnostic::inverted).collect();
            match interval {
                None => vec![segment],
                Some((a, b)) => {
                    let mut pieces = Vec::with_capacity(2);
                    if a > F::zero() {
                        pieces.push(segment.sub_segment(F::zero(), a));
                    }
                    if b < F::one() {
                        pieces.push(segment.sub_segment(b, F::one()));
                    }
                    pieces
                }
            }
        }
    };

    debug!(
        "cyrus-beck {:?}: {} edges, interval {}, {} pieces",
        mode,
        edges.len(),
        if interval.is_some() { "non-empty" } else { "empty" },
        pieces.len()
    );

    CyrusBeckReport {
        segment,
        mode,
        edges,
        interval,
        pieces,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_inside_piece_lies_in_window(
            x1 in -10.0f64..10.0, y1 in -10.0f64..10.0,
            x2 in -10.0f64..10.0, y2 in -10.0f64..10.0,
        ) {
            let window = ConvexWindow::rectangle(-3.0, -2.0, 4.0, 5.0).unwrap();
            let report = cyrus_beck(Segment2::from_coords(x1, y1, x2, y2), &window, ClipMode::Inside, 1e-9);
            for piece in &report.pieces {
                prop_assert!(window.contains(piece.start, 1e-9));
                prop_assert!(window.contains(piece.end, 1e-9));
            }
        }

        #[test]
        fn prop_fully_inside_or_outside_is_exclusive(
            x1 in -10.0f64..10.0, y1 in -10.0f64..10.0,
            x2 in -10.0f64..10.0, y2 in -10.0f64..10.0,
        ) {
            let window = ConvexWindow::rectangle(-3.0, -2.0, 4.0, 5.0).unwrap();
            let segment = Segment2::from_coords(x1, y1, x2, y2);
            let inside = cyrus_beck(segment, &window, ClipMode::Inside, 1e-9);
            let outside = cyrus_beck(segment, &window, ClipMode::Outside, 1e-9);
            let both_ends_in = window.contains(segment.start, 0.0) && window.contains(segment.end, 0.0);
            if both_ends_in {
                prop_assert!(outside.is_rejected());
                prop_assert!(!inside.is_rejected());
            }
            if inside.is_rejected() {
                prop_assert_eq!(outside.pieces, vec![segment]);
            }
        }
    }
}
