//! Weiler-Atherton intersection of polygons with holes.
//!
//! Both inputs are [`PolygonWithHoles`], whose rings are oriented so the
//! region lies to the left of every edge (outer counter-clockwise, holes
//! clockwise). With that convention the intersection boundary is traced by
//! walking forward on both ring sets and switching sets at every crossing.
//!
//! The walk needs boundaries in general position. When a vertex of one
//! polygon lies on the other's boundary, or edges overlap, the result is
//! assembled by edge selection instead; the crossings and augmented rings are
//! still reported.

use super::core::{Polygon, PolygonWithHoles};
use super::overlay::intersect_by_edge_selection;
use crate::primitives::Point2;
use crate::tolerance::{segments_intersect, SegmentIntersection};
use log::{debug, trace, warn};
use num_traits::Float;
use std::cmp::Ordering;

/// A crossing between a subject edge and a clip edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing<F> {
    pub point: Point2<F>,
    /// `true` when the subject boundary enters the clip region here.
    pub entering: bool,
}

/// An entry of an augmented ring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingNode<F> {
    /// An original ring vertex.
    Vertex(Point2<F>),
    /// A crossing, indexing into [`WeilerAtherton::intersections`].
    Intersection { point: Point2<F>, id: usize },
}

impl<F: Float> RingNode<F> {
    pub fn point(&self) -> Point2<F> {
        match *self {
            RingNode::Vertex(p) => p,
            RingNode::Intersection { point, .. } => point,
        }
    }

    pub fn intersection_id(&self) -> Option<usize> {
        match *self {
            RingNode::Vertex(_) => None,
            RingNode::Intersection { id, .. } => Some(id),
        }
    }
}

/// A ring with its crossings spliced in, in edge order then edge parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AugmentedRing<F> {
    pub nodes: Vec<RingNode<F>>,
}

impl<F: Float> AugmentedRing<F> {
    pub fn has_intersections(&self) -> bool {
        self.nodes.iter().any(|n| n.intersection_id().is_some())
    }
}

/// Full output of a Weiler-Atherton run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeilerAtherton<F> {
    /// Every crossing, in discovery order.
    pub intersections: Vec<Crossing<F>>,
    /// Augmented subject rings: outer first, then holes.
    pub subject: Vec<AugmentedRing<F>>,
    /// Augmented clip rings: outer first, then holes.
    pub clip: Vec<AugmentedRing<F>>,
    /// The intersection region, one entry per connected component.
    pub polygons: Vec<PolygonWithHoles<F>>,
}

/// Intersects two polygons with holes.
///
/// 1. Every subject edge is tested against every clip edge; single-point
///    crossings with both edge parameters in `[0, 1)` are recorded, and the
///    crossing is entering when the subject edge turns left of the clip edge.
/// 2. Crossings are spliced into both ring sets.
/// 3. From each unvisited entering crossing the boundary is traced forward
///    on the subject rings, switching to the clip rings at the next crossing
///    and back again, until the start is reached.
/// 4. Rings without crossings are kept when they lie inside the other region.
/// 5. Counter-clockwise result rings become outer boundaries; clockwise
///    rings become holes of the smallest enclosing outer.
///
/// Steps 3 and 4 are replaced by edge selection when any crossing falls
/// within `eps` of an edge endpoint or any pair of edges overlaps. Identical
/// polygons therefore intersect to one copy, and shared edges bound the
/// result once.
///
/// `eps` is the parallelism tolerance for the edge intersection test.
///
/// # Example
///
/// ```
/// use pixelgeom::polygon::{weiler_atherton, Polygon, PolygonWithHoles};
///
/// let a = PolygonWithHoles::simple(Polygon::from_coords(&[
///     (0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0),
/// ]));
/// let b = PolygonWithHoles::simple(Polygon::from_coords(&[
///     (2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0),
/// ]));
///
/// let result = weiler_atherton(&a, &b, 1e-9);
/// assert_eq!(result.intersections.len(), 2);
/// assert_eq!(result.polygons.len(), 1);
/// assert!((result.polygons[0].area() - 4.0_f64).abs() < 1e-9);
/// ```
pub fn weiler_atherton<F: Float>(
    subject: &PolygonWithHoles<F>,
    clip: &PolygonWithHoles<F>,
    eps: F,
) -> WeilerAtherton<F> {
    let subject_rings: Vec<&Polygon<F>> = subject.rings().collect();
    let clip_rings: Vec<&Polygon<F>> = clip.rings().collect();

    let mut intersections = Vec::new();
    let mut on_subject = edge_slots(&subject_rings);
    let mut on_clip = edge_slots(&clip_rings);
    let mut touching = false;

    for (si, s_ring) in subject_rings.iter().enumerate() {
        for (a, s_edge) in s_ring.edges().enumerate() {
            for (ci, c_ring) in clip_rings.iter().enumerate() {
                for (b, c_edge) in c_ring.edges().enumerate() {
                    let (point, t1, t2) = match segments_intersect(s_edge, c_edge, eps) {
                        SegmentIntersection::Point { point, t1, t2 } => (point, t1, t2),
                        SegmentIntersection::Overlapping { .. } => {
                            touching = true;
                            continue;
                        }
                        SegmentIntersection::None => continue,
                    };
                    if at_endpoint(t1, eps) || at_endpoint(t2, eps) {
                        touching = true;
                    }
                    if t1 >= F::one() || t2 >= F::one() {
                        continue;
                    }

                    let id = intersections.len();
                    let entering = c_edge.direction().cross(s_edge.direction()) > F::zero();
                    trace!(
                        "crossing {} at ({:?}, {:?}), entering: {}",
                        id,
                        point.x.to_f64(),
                        point.y.to_f64(),
                        entering
                    );
                    intersections.push(Crossing { point, entering });
                    on_subject[si][a].push((t1, id));
                    on_clip[ci][b].push((t2, id));
                }
            }
        }
    }

    let subject_aug = augment(&subject_rings, on_subject, &intersections);
    let clip_aug = augment(&clip_rings, on_clip, &intersections);

    let rings = if touching {
        debug!("weiler-atherton: boundaries touch or overlap, selecting edges");
        intersect_by_edge_selection(subject, clip, eps)
    } else {
        let mut rings = trace_boundaries(&intersections, &subject_aug, &clip_aug);
        for (ring, aug) in subject_rings.iter().zip(&subject_aug) {
            if !aug.has_intersections() && lies_within(ring, clip) {
                rings.push((*ring).clone());
            }
        }
        for (ring, aug) in clip_rings.iter().zip(&clip_aug) {
            if !aug.has_intersections() && lies_within(ring, subject) {
                rings.push((*ring).clone());
            }
        }
        rings
    };

    let polygons = assemble(rings, eps);
    debug!(
        "weiler-atherton: {} crossings, {} result polygons",
        intersections.len(),
        polygons.len()
    );

    WeilerAtherton {
        intersections,
        subject: subject_aug,
        clip: clip_aug,
        polygons,
    }
}

#[inline]
fn at_endpoint<F: Float>(t: F, eps: F) -> bool {
    t <= eps || t >= F::one() - eps
}

type EdgeHits<F> = Vec<Vec<Vec<(F, usize)>>>;

fn edge_slots<F: Float>(rings: &[&Polygon<F>]) -> EdgeHits<F> {
    rings.iter().map(|r| vec![Vec::new(); r.len()]).collect()
}

fn augment<F: Float>(
    rings: &[&Polygon<F>],
    hits: EdgeHits<F>,
    intersections: &[Crossing<F>],
) -> Vec<AugmentedRing<F>> {
    rings
        .iter()
        .zip(hits)
        .map(|(ring, edges)| {
            let mut nodes = Vec::with_capacity(ring.len());
            for (&v, mut on_edge) in ring.vertices.iter().zip(edges) {
                nodes.push(RingNode::Vertex(v));
                on_edge.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
                nodes.extend(on_edge.into_iter().map(|(_, id)| RingNode::Intersection {
                    point: intersections[id].point,
                    id,
                }));
            }
            AugmentedRing { nodes }
        })
        .collect()
}

/// `(ring, node)` position of every crossing id.
fn locate<F: Float>(rings: &[AugmentedRing<F>], count: usize) -> Vec<(usize, usize)> {
    let mut at = vec![(0, 0); count];
    for (ri, ring) in rings.iter().enumerate() {
        for (ni, node) in ring.nodes.iter().enumerate() {
            if let Some(id) = node.intersection_id() {
                at[id] = (ri, ni);
            }
        }
    }
    at
}

fn trace_boundaries<F: Float>(
    crossings: &[Crossing<F>],
    subject: &[AugmentedRing<F>],
    clip: &[AugmentedRing<F>],
) -> Vec<Polygon<F>> {
    let count = crossings.len();
    let subject_at = locate(subject, count);
    let clip_at = locate(clip, count);
    let total_nodes: usize = subject
        .iter()
        .chain(clip)
        .map(|r| r.nodes.len())
        .sum();

    let mut visited = vec![false; count];
    let mut out = Vec::new();

    for start in 0..count {
        if visited[start] || !crossings[start].entering {
            continue;
        }

        let mut ring = Vec::new();
        let mut current = start;
        let mut on_subject = true;
        let mut steps = 0usize;

        let closed = loop {
            visited[current] = true;
            ring.push(crossings[current].point);

            let (rings, at) = if on_subject {
                (subject, &subject_at)
            } else {
                (clip, &clip_at)
            };
            let (ri, mut ni) = at[current];
            let nodes = &rings[ri].nodes;

            // The ring holds `current` itself, so this finds a crossing
            // within one lap.
            let next = loop {
                ni = (ni + 1) % nodes.len();
                steps += 1;
                match nodes[ni] {
                    RingNode::Vertex(p) => ring.push(p),
                    RingNode::Intersection { id, .. } => break id,
                }
            };

            current = next;
            on_subject = !on_subject;
            if current == start {
                break true;
            }
            if steps > total_nodes {
                break false;
            }
        };

        if closed {
            trace!("traced ring of {} vertices from crossing {}", ring.len(), start);
            out.push(Polygon::new(ring));
        } else {
            warn!(
                "abandoning boundary trace from crossing {} after {} steps",
                start, steps
            );
        }
    }

    out
}

fn lies_within<F: Float>(ring: &Polygon<F>, region: &PolygonWithHoles<F>) -> bool {
    ring.len() >= 3
        && ring
            .vertices
            .first()
            .map_or(false, |&v| region.contains(v))
}

fn assemble<F: Float>(rings: Vec<Polygon<F>>, eps: F) -> Vec<PolygonWithHoles<F>> {
    let (outers, holes): (Vec<_>, Vec<_>) = rings
        .into_iter()
        .filter(|r| r.area() > eps)
        .partition(|r| r.signed_area() > F::zero());

    let mut polygons: Vec<PolygonWithHoles<F>> =
        outers.into_iter().map(PolygonWithHoles::simple).collect();

    for hole in holes {
        let host = polygons
            .iter_mut()
            .filter(|p| hole.vertices.iter().any(|&v| p.outer().contains(v)))
            .min_by(|a, b| {
                a.outer()
                    .area()
                    .partial_cmp(&b.outer().area())
                    .unwrap_or(Ordering::Equal)
            });
        match host {
            Some(p) => p.push_hole(hole),
            None => warn!("dropping hole of {} vertices with no enclosing ring", hole.len()),
        }
    }

    polygons
}
