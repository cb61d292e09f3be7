//! Validated convex clip windows.

use super::core::Polygon;
use crate::error::GeomError;
use crate::primitives::{Point2, Segment2, Vec2};
use crate::tolerance::Tolerances;
use num_traits::Float;

/// A convex polygon prepared for clipping.
///
/// Construction validates the polygon and normalises it to counter-clockwise
/// order, so edge `i` runs from vertex `i` to vertex `i + 1` with the
/// interior on its left. The outward unit normal of every edge is
/// precomputed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexWindow<F> {
    polygon: Polygon<F>,
    normals: Vec<Vec2<F>>,
}

impl<F: Float> ConvexWindow<F> {
    /// Validates `polygon` with the default parallel tolerance.
    ///
    /// # Errors
    ///
    /// - [`GeomError::TooFewVertices`] for fewer than three vertices
    /// - [`GeomError::DegenerateEdge`] for a zero-length edge
    /// - [`GeomError::NonConvexWindow`] if the turns change sign or the
    ///   boundary winds more than once
    /// - [`GeomError::ZeroAreaWindow`] if every vertex is collinear
    pub fn new(polygon: Polygon<F>) -> Result<Self, GeomError> {
        Self::with_tolerance(polygon, Tolerances::default().parallel)
    }

    /// Validates `polygon`, treating lengths and cross products within `eps`
    /// as zero.
    pub fn with_tolerance(mut polygon: Polygon<F>, eps: F) -> Result<Self, GeomError> {
        let count = polygon.len();
        if count < 3 {
            return Err(GeomError::TooFewVertices { count });
        }
        if let Some(index) = polygon.edges().position(|e| e.is_degenerate(eps)) {
            return Err(GeomError::DegenerateEdge { index });
        }
        if !polygon.is_convex(eps) {
            return Err(GeomError::NonConvexWindow);
        }
        if polygon.area() <= eps {
            return Err(GeomError::ZeroAreaWindow);
        }

        polygon.ensure_ccw();
        let normals = polygon
            .edges()
            .map(|e| e.direction().right_normal().normalize())
            .collect::<Option<Vec<_>>>()
            .ok_or(GeomError::DegenerateEdge { index: 0 })?;

        Ok(Self { polygon, normals })
    }

    /// Axis-aligned rectangle window.
    pub fn rectangle(xmin: F, ymin: F, xmax: F, ymax: F) -> Result<Self, GeomError> {
        Self::new(Polygon::from_coords(&[
            (xmin, ymin),
            (xmax, ymin),
            (xmax, ymax),
            (xmin, ymax),
        ]))
    }

    /// The window polygon, counter-clockwise.
    #[inline]
    pub fn polygon(&self) -> &Polygon<F> {
        &self.polygon
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.polygon.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygon.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// Outward unit normals, one per edge.
    #[inline]
    pub fn normals(&self) -> &[Vec2<F>] {
        &self.normals
    }

    /// Edge `i`, from vertex `i` to vertex `i + 1`.
    pub fn edge(&self, i: usize) -> Segment2<F> {
        let v = &self.polygon.vertices;
        Segment2::new(v[i], v[(i + 1) % v.len()])
    }

    /// Tests whether `p` lies inside or within `eps` of the window.
    pub fn contains(&self, p: Point2<F>, eps: F) -> bool {
        self.polygon
            .vertices
            .iter()
            .zip(&self.normals)
            .all(|(&w, &n)| (p - w).dot(n) <= eps)
    }
}
