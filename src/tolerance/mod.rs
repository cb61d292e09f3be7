//! Epsilon-aware geometric predicates, intersection primitives and distances.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod hausdorff;
mod predicates;
mod tolerances;

pub use hausdorff::{directed_hausdorff, hausdorff_distance};
pub use predicates::{
    line_intersection, orient2d, point_on_segment, segment_intersection, segments_intersect,
    Orientation, SegmentIntersection,
};
pub use tolerances::Tolerances;
