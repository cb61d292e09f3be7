//! Axis-aligned clip rectangles, outcodes and line clip results.

use crate::error::GeomError;
use crate::polygon::ConvexWindow;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// 4-bit region code of a point relative to a [`ClipRect`].
///
/// One bit per violated boundary; zero means inside.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const BOTTOM: Outcode = Outcode(4);
    pub const TOP: Outcode = Outcode(8);

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `flag` is set.
    #[inline]
    pub fn contains(self, flag: Outcode) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Returns `true` if both codes share a violated boundary, which puts
    /// the whole segment between them outside the rectangle.
    #[inline]
    pub fn shares_side(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Outcode(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Outcode(self.0 & rhs.0)
    }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcode({:04b})", self.0)
    }
}

/// An axis-aligned clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipRect<F> {
    pub xmin: F,
    pub ymin: F,
    pub xmax: F,
    pub ymax: F,
}

impl<F: Float> ClipRect<F> {
    /// Creates a rectangle; swapped bounds are reordered.
    pub fn new(xmin: F, ymin: F, xmax: F, ymax: F) -> Self {
        Self {
            xmin: xmin.min(xmax),
            ymin: ymin.min(ymax),
            xmax: xmin.max(xmax),
            ymax: ymin.max(ymax),
        }
    }

    /// Classifies `p`. Left/right and bottom/top are mutually exclusive.
    pub fn outcode(&self, p: Point2<F>) -> Outcode {
        let mut code = Outcode::INSIDE;
        if p.x < self.xmin {
            code = code | Outcode::LEFT;
        } else if p.x > self.xmax {
            code = code | Outcode::RIGHT;
        }
        if p.y < self.ymin {
            code = code | Outcode::BOTTOM;
        } else if p.y > self.ymax {
            code = code | Outcode::TOP;
        }
        code
    }

    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        self.outcode(p).is_inside()
    }

    /// The same rectangle as a convex window, for Cyrus-Beck or
    /// Sutherland-Hodgman.
    pub fn to_window(&self) -> Result<ConvexWindow<F>, GeomError> {
        ConvexWindow::rectangle(self.xmin, self.ymin, self.xmax, self.ymax)
    }
}

/// Result of clipping a segment to a region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineClip<F> {
    /// No part of the segment is visible.
    Rejected,
    /// The visible part of the segment.
    Accepted(Segment2<F>),
}

impl<F: Float> LineClip<F> {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, LineClip::Accepted(_))
    }

    #[inline]
    pub fn segment(&self) -> Option<Segment2<F>> {
        match *self {
            LineClip::Accepted(s) => Some(s),
            LineClip::Rejected => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcodes() {
        let rect = ClipRect::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(rect.outcode(Point2::new(5.0, 2.0)), Outcode::INSIDE);
        assert_eq!(rect.outcode(Point2::new(-1.0, 2.0)), Outcode::LEFT);
        assert_eq!(rect.outcode(Point2::new(11.0, 6.0)), Outcode::RIGHT | Outcode::TOP);
        assert_eq!(rect.outcode(Point2::new(-1.0, -1.0)).bits(), 5);
        // Boundary points are inside.
        assert!(rect.contains(Point2::new(10.0, 5.0)));
    }

    #[test]
    fn test_shares_side() {
        let a = Outcode::LEFT | Outcode::TOP;
        assert!(a.shares_side(Outcode::TOP));
        assert!(!a.shares_side(Outcode::RIGHT | Outcode::BOTTOM));
        assert!(a.contains(Outcode::LEFT));
        assert!(!a.contains(Outcode::LEFT | Outcode::RIGHT));
        assert_eq!(format!("{:?}", a), "Outcode(1001)");
    }

    #[test]
    fn test_swapped_bounds() {
        let rect = ClipRect::new(4.0, 3.0, -4.0, -3.0);
        assert_eq!(rect, ClipRect::new(-4.0, -3.0, 4.0, 3.0));
        assert_eq!(rect.to_window().unwrap().len(), 4);
    }

    #[test]
    fn test_line_clip_accessors() {
        let seg = Segment2::from_coords(0.0, 0.0, 1.0, 1.0);
        assert_eq!(LineClip::Accepted(seg).segment(), Some(seg));
        assert!(!LineClip::<f64>::Rejected.is_accepted());
    }
}
