//! pixelgeom - Classical raster graphics and clipping algorithms
//!
//! Scan conversion of lines, circles and ellipses onto integer grids,
//! antialiasing and dithering of intensity buffers, line clipping against
//! rectangles and convex windows, and polygon clipping with holes. Every
//! algorithm is a pure function of its inputs and returns its intermediate
//! results alongside the answer, so a viewer can show each step.

pub mod clip;
pub mod color;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod raster;
pub mod timing;
pub mod tolerance;

pub use error::GeomError;
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{
    line_intersection, orient2d, point_on_segment, segment_intersection, segments_intersect,
    Orientation, SegmentIntersection, Tolerances,
};
