//! Core polygon types and basic operations.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygon represented as a closed sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Winding is not enforced; counter-clockwise rings have positive area.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `(x, y)` pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates the closing edges `v[i] -> v[i + 1 mod n]`.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if a point is inside the polygon (even-odd rule).
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Tests if the polygon is convex; turns with `|cross| <= eps` are ignored.
    pub fn is_convex(&self, eps: F) -> bool {
        polygon_is_convex(&self.vertices, eps)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices[1..].iter().fold((first, first), |(lo, hi), v| {
            (
                Point2::new(lo.x.min(v.x), lo.y.min(v.y)),
                Point2::new(hi.x.max(v.x), hi.y.max(v.y)),
            )
        }))
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Ensures the polygon has CW winding order.
    pub fn ensure_cw(&mut self) {
        if self.signed_area() > F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

/// A polygon region bounded by an outer ring with zero or more holes.
///
/// The outer ring is stored counter-clockwise and every hole clockwise, so
/// the region always lies to the left of each ring's edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonWithHoles<F> {
    outer: Polygon<F>,
    holes: Vec<Polygon<F>>,
}

impl<F: Float> PolygonWithHoles<F> {
    /// Creates a region, normalising ring orientations.
    pub fn new(mut outer: Polygon<F>, holes: Vec<Polygon<F>>) -> Self {
        outer.ensure_ccw();
        let holes = holes
            .into_iter()
            .map(|mut h| {
                h.ensure_cw();
                h
            })
            .collect();
        Self { outer, holes }
    }

    /// A region with no holes.
    pub fn simple(outer: Polygon<F>) -> Self {
        Self::new(outer, Vec::new())
    }

    #[inline]
    pub fn outer(&self) -> &Polygon<F> {
        &self.outer
    }

    #[inline]
    pub fn holes(&self) -> &[Polygon<F>] {
        &self.holes
    }

    pub(crate) fn push_hole(&mut self, mut hole: Polygon<F>) {
        hole.ensure_cw();
        self.holes.push(hole);
    }

    /// The outer ring followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &Polygon<F>> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Area of the outer ring minus the holes.
    pub fn area(&self) -> F {
        self.holes
            .iter()
            .fold(self.outer.area(), |acc, h| acc - h.area())
    }

    /// Even-odd containment over all rings.
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.rings()
            .filter(|ring| ring.contains(point))
            .count()
            % 2
            == 1
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y
    });

    twice / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Tests if a point is inside a polygon using the even-odd (ray casting) rule.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex.
///
/// Every non-negligible turn (`|cross| > eps`) must have the same sign and
/// the turning angles must add up to one full revolution, which rules out
/// self-intersecting stars and back-tracking spikes. Fewer than three
/// vertices, or all-collinear vertices, count as convex.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>], eps: F) -> bool {
    if vertices.len() < 3 {
        return true;
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;
    let mut turning = F::zero();

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let (d_in, d_out) = (b - a, c - b);
        let cross = d_in.cross(d_out);
        turning = turning + cross.atan2(d_in.dot(d_out));

        if cross.abs() > eps {
            let is_positive = cross > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    // Closed rings turn by a multiple of 2π; a simple convex one by exactly 2π.
    let pi = F::from(std::f64::consts::PI).unwrap();
    let two = F::one() + F::one();
    sign.is_none() || (turning.abs() - two * pi).abs() < pi / two
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Polygon::from_coords(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
    }

    #[test]
    fn test_polygon_new() {
        let poly: Polygon<f64> = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(poly.len(), 3);
        assert!(!poly.is_empty());
        assert!(Polygon::<f64>::empty().is_empty());
    }

    #[test]
    fn test_polygon_area_and_winding() {
        let poly = square(0.0, 0.0, 2.0, 2.0);
        assert_relative_eq!(poly.signed_area(), 4.0);
        assert_relative_eq!(poly.reversed().signed_area(), -4.0);

        let mut cw = poly.reversed();
        cw.ensure_ccw();
        assert!(cw.signed_area() > 0.0);
        cw.ensure_cw();
        assert!(cw.signed_area() < 0.0);
    }

    #[test]
    fn test_polygon_edges_close_the_ring() {
        let poly = square(0.0, 0.0, 1.0, 1.0);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].end, poly.vertices[0]);
    }

    #[test]
    fn test_polygon_contains() {
        let poly = square(0.0, 0.0, 2.0, 2.0);
        assert!(poly.contains(Point2::new(1.0, 1.0)));
        assert!(!poly.contains(Point2::new(3.0, 3.0)));
        assert!(!poly.contains(Point2::new(-1.0, 1.0)));
    }

    #[test]
    fn test_polygon_is_convex() {
        assert!(square(0.0, 0.0, 1.0, 1.0).is_convex(1e-12));
        let l_shape = Polygon::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert!(!l_shape.is_convex(1e-12));
        // A collinear midpoint does not break convexity.
        let with_midpoint =
            Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(with_midpoint.is_convex(1e-12));
    }

    #[test]
    fn test_star_is_not_convex() {
        // Every turn of a pentagram is a left turn, but it winds twice.
        let corners: Vec<Point2<f64>> = (0..5)
            .map(|k| {
                let a = std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * k as f64 / 5.0;
                Point2::new(10.0 * a.cos(), 10.0 * a.sin())
            })
            .collect();
        let star: Vec<_> = [0, 2, 4, 1, 3].iter().map(|&k| corners[k]).collect();
        assert!(!polygon_is_convex(&star, 1e-12));
        assert!(polygon_is_convex(&corners, 1e-12));
    }

    #[test]
    fn test_polygon_bounding_box() {
        let poly = Polygon::from_coords(&[(1.0, 2.0), (3.0, 1.0), (4.0, 3.0), (2.0, 4.0)]);
        let (min, max) = poly.bounding_box().unwrap();
        assert_eq!(min, Point2::new(1.0, 1.0));
        assert_eq!(max, Point2::new(4.0, 4.0));
        assert!(Polygon::<f64>::empty().bounding_box().is_none());
    }

    #[test]
    fn test_with_holes_normalises_and_contains() {
        let region = PolygonWithHoles::new(
            square(0.0, 0.0, 10.0, 10.0).reversed(),
            vec![square(3.0, 3.0, 7.0, 7.0)],
        );
        assert!(region.outer().signed_area() > 0.0);
        assert!(region.holes()[0].signed_area() < 0.0);
        assert_relative_eq!(region.area(), 84.0);

        assert!(region.contains(Point2::new(1.0, 1.0)));
        assert!(!region.contains(Point2::new(5.0, 5.0)));
        assert!(!region.contains(Point2::new(11.0, 5.0)));
        assert_eq!(region.rings().count(), 2);
    }

    #[test]
    fn test_polygon_f32() {
        let poly: Polygon<f32> = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!((poly.area() - 1.0).abs() < 0.001);
    }
}
