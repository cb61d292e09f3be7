//! Directed segments.

use super::{Point2, Vec2};
use num_traits::Float;

/// A directed 2D segment.
///
/// Clipping parameterizes it as `P(t) = start + t * (end - start)`, so
/// `t = 0` is `start` and `t = 1` is `end`. Swapping the endpoints changes
/// every `t` a clipper reports.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// `D = end - start`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// `P(t)`; parameters outside `[0, 1]` extrapolate.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// The part between `P(t0)` and `P(t1)`, keeping the direction when
    /// `t0 < t1`.
    #[inline]
    pub fn sub_segment(self, t0: F, t1: F) -> Self {
        Self::new(self.point_at(t0), self.point_at(t1))
    }

    /// Nearest point to `p` and its parameter, clamped to `[0, 1]`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let d = self.direction();
        let len_sq = d.magnitude_squared();
        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(d) / len_sq).max(F::zero()).min(F::one());
        (self.point_at(t), t)
    }

    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.closest_point(p).0)
    }

    /// Both endpoints within `eps` of each other.
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.direction().magnitude_squared() <= eps * eps
    }

    /// Endpoint-wise [`Point2::approx_eq`].
    #[inline]
    pub fn approx_eq(self, other: Self, eps: F) -> bool {
        self.start.approx_eq(other.start, eps) && self.end.approx_eq(other.end, eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parameterization() {
        let s: Segment2<f64> = Segment2::from_coords(-1.0, 1.0, 3.0, 3.0);
        assert_eq!(s.direction(), Vec2::new(4.0, 2.0));
        assert_eq!(s.point_at(0.0), s.start);
        assert_eq!(s.point_at(0.25), Point2::new(0.0, 1.5));
        assert_eq!(s.midpoint(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_sub_segment_keeps_direction() {
        let s: Segment2<f64> = Segment2::from_coords(8.0, 4.0, 0.0, 0.0);
        let sub = s.sub_segment(0.25, 0.75);
        assert_relative_eq!(sub.start.x, 6.0);
        assert_relative_eq!(sub.start.y, 3.0);
        assert_relative_eq!(sub.end.x, 2.0);
        assert_relative_eq!(sub.end.y, 1.0);
    }

    #[test]
    fn test_closest_point_clamps() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let (p, t) = s.closest_point(Point2::new(4.0, 3.0));
        assert_eq!(p, Point2::new(4.0, 0.0));
        assert_relative_eq!(t, 0.4);

        let (p, t) = s.closest_point(Point2::new(12.0, -1.0));
        assert_eq!(p, s.end);
        assert_eq!(t, 1.0);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(12.0, -1.0)), 5.0);
    }

    #[test]
    fn test_degenerate() {
        assert!(Segment2::from_coords(2.0, 2.0, 2.0, 2.0 + 1e-12).is_degenerate(1e-9));
        assert!(!Segment2::from_coords(0.0, 0.0, 0.0, 1e-6).is_degenerate(1e-9));
    }
}
