//! Polygon types and polygon clipping.
//!
//! This module provides:
//! - Area, winding and even-odd containment for simple polygons
//! - Polygons with holes
//! - Validated convex clip windows with outward edge normals
//! - Sutherland-Hodgman clipping with per-edge stage history
//! - Weiler-Atherton intersection of polygons with holes
//!
//! # Example
//!
//! ```
//! use pixelgeom::polygon::{clip_polygon_by_convex, ConvexWindow, Polygon};
//!
//! let triangle = Polygon::from_coords(&[(-2.0, 1.0), (6.0, 1.0), (2.0, 5.0)]);
//! let window = ConvexWindow::rectangle(0.0, 0.0, 4.0, 4.0).unwrap();
//!
//! let clipped = clip_polygon_by_convex(&triangle, &window, 1e-9);
//! assert!(clipped.vertices.iter().all(|v| window.contains(*v, 1e-9)));
//! ```

mod clip;
mod core;
mod overlay;
mod weiler_atherton;
mod window;

pub use clip::{clip_polygon_by_convex, sutherland_hodgman, ClipHistory};
pub use core::{
    polygon_area, polygon_contains, polygon_is_convex, polygon_signed_area, Polygon,
    PolygonWithHoles,
};
pub use weiler_atherton::{weiler_atherton, AugmentedRing, Crossing, RingNode, WeilerAtherton};
pub use window::ConvexWindow;
