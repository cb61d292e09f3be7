//! Geometric predicates and intersection primitives with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` lies to the left of `a -> b`.
    CounterClockwise,
    /// `c` lies to the right of `a -> b`.
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// The sign of the cross product `(b - a) x (c - a)` decides the result;
/// magnitudes not exceeding `eps` count as collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if a point lies within distance `eps` of a line segment.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Intersects the infinite lines through `p1 -> p2` and `p3 -> p4`.
///
/// Returns `None` when the lines are parallel or collinear, i.e. when the
/// denominator's magnitude does not exceed `eps`.
pub fn line_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
    eps: F,
) -> Option<Point2<F>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denom = d1.cross(d2);
    if denom.abs() <= eps {
        return None;
    }

    let t = (p3 - p1).cross(d2) / denom;
    Some(p1 + d1 * t)
}

/// Intersects segment `p1 -> p2` with the infinite line through `p3 -> p4`.
///
/// The intersection is reported only when it falls within the first segment
/// (`0 <= t <= 1`). Parallel or collinear inputs yield `None`.
pub fn segment_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
    eps: F,
) -> Option<Point2<F>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denom = d1.cross(d2);
    if denom.abs() <= eps {
        return None;
    }

    let t = (p3 - p1).cross(d2) / denom;
    if t < F::zero() || t > F::one() {
        return None;
    }
    Some(p1 + d1 * t)
}

/// Result of a segment intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not intersect.
    None,
    /// Segments intersect at a single point.
    Point {
        /// The intersection point.
        point: Point2<F>,
        /// Parameter along first segment (0 = start, 1 = end).
        t1: F,
        /// Parameter along second segment (0 = start, 1 = end).
        t2: F,
    },
    /// Segments are collinear and overlap along a range.
    Overlapping {
        /// Start of the overlapping region.
        start: Point2<F>,
        /// End of the overlapping region.
        end: Point2<F>,
    },
}

/// Tests if two line segments intersect, with tolerance.
///
/// `eps` is used both as the parallelism threshold on the cross product of
/// the directions and as the slack allowed on the segment parameters.
pub fn segments_intersect<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);

    if cross.abs() <= eps {
        return collinear_overlap(s1, s2, eps);
    }

    // Cramer's rule on s1.start + t1 * d1 = s2.start + t2 * d2
    let d = s2.start - s1.start;
    let t1 = d.cross(d2) / cross;
    let t2 = d.cross(d1) / cross;

    let lo = -eps;
    let hi = F::one() + eps;
    if t1 < lo || t1 > hi || t2 < lo || t2 > hi {
        return SegmentIntersection::None;
    }

    let t1 = clamp_unit(t1);
    SegmentIntersection::Point {
        point: s1.point_at(t1),
        t1,
        t2: clamp_unit(t2),
    }
}

fn collinear_overlap<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    if s1.distance_squared_to_point(s2.start) > eps * eps {
        return SegmentIntersection::None;
    }

    let d1 = s1.direction();
    let len_sq = d1.magnitude_squared();
    if len_sq <= eps * eps {
        if point_on_segment(s1.start, s2, eps) {
            let (_, t2) = s2.closest_point(s1.start);
            return SegmentIntersection::Point {
                point: s1.start,
                t1: F::zero(),
                t2,
            };
        }
        return SegmentIntersection::None;
    }

    // Project s2 onto s1's parameter line and intersect with [0, 1]
    let a = (s2.start - s1.start).dot(d1) / len_sq;
    let b = (s2.end - s1.start).dot(d1) / len_sq;
    let lo = a.min(b).max(F::zero());
    let hi = a.max(b).min(F::one());

    if lo > hi + eps {
        return SegmentIntersection::None;
    }
    if (hi - lo).abs() <= eps {
        return SegmentIntersection::Point {
            point: s1.point_at(lo),
            t1: lo,
            t2: if a <= b { lo } else { F::one() - lo },
        };
    }

    SegmentIntersection::Overlapping {
        start: s1.point_at(lo),
        end: s1.point_at(hi),
    }
}

#[inline]
fn clamp_unit<F: Float>(t: F) -> F {
    t.max(F::zero()).min(F::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_orient2d() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert_eq!(orient2d(a, b, Point2::new(0.5, 1.0), 1e-10), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, Point2::new(0.5, -1.0), 1e-10), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, Point2::new(2.0, 0.0), 1e-10), Orientation::Collinear);
        assert_eq!(orient2d(a, b, Point2::new(0.5, 1e-12), 1e-10), Orientation::Collinear);
    }

    #[test]
    fn test_point_on_segment() {
        let seg: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(point_on_segment(Point2::new(5.0, 0.0), seg, 1e-10));
        assert!(point_on_segment(Point2::new(5.0, 0.5), seg, 1.0));
        assert!(!point_on_segment(Point2::new(5.0, 0.5), seg, 0.1));
        assert!(!point_on_segment(Point2::new(15.0, 0.0), seg, 1e-10));
    }

    #[test]
    fn test_line_intersection_extends_beyond_segments() {
        let p = line_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 1.0),
            1e-12,
        )
        .unwrap();
        assert_relative_eq!(p.x, 4.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_line_intersection_parallel() {
        let p = line_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            1e-12,
        );
        assert!(p.is_none());
    }

    #[test]
    fn test_segment_intersection_within_first_segment() {
        let p = segment_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 0.0),
            1e-12,
        )
        .unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-10);

        // Crossing lies beyond the end of the first segment
        let miss = segment_intersection(
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 0.0),
            1e-12,
        );
        assert!(miss.is_none());
    }

    #[test]
    fn test_segments_intersect_crossing() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 10.0);
        let s2 = Segment2::from_coords(0.0, 10.0, 10.0, 0.0);

        match segments_intersect(s1, s2, 1e-10) {
            SegmentIntersection::Point { point, t1, t2 } => {
                assert_relative_eq!(point.x, 5.0, epsilon = 1e-10);
                assert_relative_eq!(point.y, 5.0, epsilon = 1e-10);
                assert_relative_eq!(t1, 0.5, epsilon = 1e-10);
                assert_relative_eq!(t2, 0.5, epsilon = 1e-10);
            }
            other => panic!("Expected point intersection, got {other:?}"),
        }
    }

    #[test]
    fn test_segments_parallel_no_intersection() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(0.0, 1.0, 10.0, 1.0);
        assert_eq!(segments_intersect(s1, s2, 1e-10), SegmentIntersection::None);
    }

    #[test]
    fn test_segments_collinear_overlapping() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(5.0, 0.0, 15.0, 0.0);

        match segments_intersect(s1, s2, 1e-10) {
            SegmentIntersection::Overlapping { start, end } => {
                assert_relative_eq!(start.x, 5.0, epsilon = 1e-10);
                assert_relative_eq!(end.x, 10.0, epsilon = 1e-10);
            }
            other => panic!("Expected overlap, got {other:?}"),
        }
    }

    #[test]
    fn test_segments_collinear_touching() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 5.0, 0.0);
        let s2 = Segment2::from_coords(5.0, 0.0, 10.0, 0.0);

        match segments_intersect(s1, s2, 1e-10) {
            SegmentIntersection::Point { point, .. } => {
                assert_relative_eq!(point.x, 5.0, epsilon = 1e-10);
            }
            other => panic!("Expected touching point, got {other:?}"),
        }
    }

    #[test]
    fn test_segments_almost_intersecting() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let s2 = Segment2::from_coords(6.0, 4.0, 10.0, 0.0);
        assert_eq!(segments_intersect(s1, s2, 1e-10), SegmentIntersection::None);
    }
}
