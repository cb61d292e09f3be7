//! Edge-selection intersection for boundaries that touch or overlap.
//!
//! Every edge is split wherever the other boundary meets it, so two pieces
//! either coincide or meet only at endpoints. A piece bounds the
//! intersection when its midpoint lies inside the other region. A piece
//! shared by both boundaries is taken once, from the subject, and only when
//! both regions lie on its left. The kept pieces are chained into rings.

use super::core::{Polygon, PolygonWithHoles};
use crate::primitives::{Segment2, Vec2};
use crate::tolerance::{point_on_segment, segments_intersect, SegmentIntersection};
use log::{trace, warn};
use num_traits::Float;
use std::cmp::Ordering;

/// Boundary rings of `subject ∩ clip`, oriented with the region on the left.
pub(super) fn intersect_by_edge_selection<F: Float>(
    subject: &PolygonWithHoles<F>,
    clip: &PolygonWithHoles<F>,
    eps: F,
) -> Vec<Polygon<F>> {
    let mut pieces = select(subject, clip, eps, true);
    pieces.extend(select(clip, subject, eps, false));
    trace!("edge selection kept {} boundary pieces", pieces.len());
    chain(&pieces, eps)
}

fn split<F: Float>(
    own: &PolygonWithHoles<F>,
    other: &PolygonWithHoles<F>,
    eps: F,
) -> Vec<Segment2<F>> {
    let mut pieces = Vec::new();

    for edge in own.rings().flat_map(|r| r.edges()) {
        let mut cuts = Vec::new();
        for f in other.rings().flat_map(|r| r.edges()) {
            match segments_intersect(edge, f, eps) {
                SegmentIntersection::Point { t1, .. } => cuts.push(t1),
                SegmentIntersection::Overlapping { start, end } => {
                    cuts.push(edge.closest_point(start).1);
                    cuts.push(edge.closest_point(end).1);
                }
                SegmentIntersection::None => {}
            }
        }
        cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mut from = edge.start;
        for t in cuts {
            let p = edge.point_at(t);
            if p.approx_eq(from, eps) || p.approx_eq(edge.end, eps) {
                continue;
            }
            pieces.push(Segment2::new(from, p));
            from = p;
        }
        pieces.push(Segment2::new(from, edge.end));
    }

    pieces
}

fn select<F: Float>(
    own: &PolygonWithHoles<F>,
    other: &PolygonWithHoles<F>,
    eps: F,
    from_subject: bool,
) -> Vec<Segment2<F>> {
    split(own, other, eps)
        .into_iter()
        .filter(|piece| {
            let mid = piece.midpoint();
            let shared = other
                .rings()
                .flat_map(|r| r.edges())
                .find(|&f| point_on_segment(mid, f, eps));
            match shared {
                Some(f) => from_subject && piece.direction().dot(f.direction()) > F::zero(),
                None => other.contains(mid),
            }
        })
        .collect()
}

fn chain<F: Float>(pieces: &[Segment2<F>], eps: F) -> Vec<Polygon<F>> {
    let mut used = vec![false; pieces.len()];
    let mut rings = Vec::new();

    for first in 0..pieces.len() {
        if used[first] {
            continue;
        }
        used[first] = true;
        let origin = pieces[first].start;
        let mut current = pieces[first];
        let mut ring = vec![origin];

        loop {
            if current.end.approx_eq(origin, eps) {
                rings.push(Polygon::new(ring));
                break;
            }
            ring.push(current.end);

            // At a pinch vertex take the most clockwise continuation.
            let incoming = current.direction();
            let next = (0..pieces.len())
                .filter(|&j| !used[j] && pieces[j].start.approx_eq(current.end, eps))
                .min_by(|&a, &b| {
                    turn(incoming, pieces[a].direction())
                        .partial_cmp(&turn(incoming, pieces[b].direction()))
                        .unwrap_or(Ordering::Equal)
                });

            match next {
                Some(j) => {
                    used[j] = true;
                    current = pieces[j];
                }
                None => {
                    warn!(
                        "dropping open chain of {} vertices ending at ({:?}, {:?})",
                        ring.len(),
                        current.end.x.to_f64(),
                        current.end.y.to_f64()
                    );
                    break;
                }
            }
        }
    }

    rings
}

fn turn<F: Float>(incoming: Vec2<F>, outgoing: Vec2<F>) -> F {
    incoming.cross(outgoing).atan2(incoming.dot(outgoing))
}
