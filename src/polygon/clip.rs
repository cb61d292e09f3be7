//! Sutherland-Hodgman polygon clipping against a convex window.

use super::core::Polygon;
use super::window::ConvexWindow;
use crate::primitives::Point2;
use log::{debug, trace};
use num_traits::Float;

/// Every intermediate vertex list of a Sutherland-Hodgman run.
///
/// `stages[0]` is the subject polygon and `stages[k]` is the working list
/// after clipping against window edge `k - 1`. Clipping stops early once a
/// stage is empty, so there are at most `window.len() + 1` stages.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipHistory<F> {
    pub stages: Vec<Polygon<F>>,
}

impl<F: Float> ClipHistory<F> {
    /// The final clipped polygon; empty if the subject was fully outside.
    pub fn result(&self) -> Polygon<F> {
        self.stages.last().cloned().unwrap_or_else(Polygon::empty)
    }

    /// Consumes the history, keeping only the final polygon.
    pub fn into_result(mut self) -> Polygon<F> {
        self.stages.pop().unwrap_or_else(Polygon::empty)
    }

    /// Number of window edges that were applied.
    pub fn edges_applied(&self) -> usize {
        self.stages.len().saturating_sub(1)
    }
}

/// Clips a polygon against a convex window, recording every stage.
///
/// For each window edge in order, walks the working list pairing each vertex
/// with its cyclic predecessor. A vertex is inside when its signed distance
/// past the (counter-clockwise) window edge is at most `eps`:
///
/// - both inside: keep the current vertex
/// - entering: emit the intersection, then the current vertex
/// - leaving: emit the intersection only
/// - both outside: emit nothing
///
/// An intersection within `eps` of the inside vertex is not emitted, so a
/// vertex on a window edge appears once.
///
/// # Example
///
/// ```
/// use pixelgeom::polygon::{sutherland_hodgman, ConvexWindow, Polygon};
///
/// let subject = Polygon::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
/// let window = ConvexWindow::rectangle(1.0, 1.0, 2.0, 2.0).unwrap();
///
/// let history = sutherland_hodgman(&subject, &window, 1e-9);
/// assert_eq!(history.stages.len(), 5);
/// assert!((history.result().area() - 1.0_f64).abs() < 1e-12);
/// ```
pub fn sutherland_hodgman<F: Float>(
    subject: &Polygon<F>,
    window: &ConvexWindow<F>,
    eps: F,
) -> ClipHistory<F> {
    let mut stages = vec![subject.clone()];
    let mut output = subject.vertices.clone();

    for (i, (&anchor, &normal)) in window.vertices().iter().zip(window.normals()).enumerate() {
        if output.is_empty() {
            break;
        }

        let distance = |p: Point2<F>| (p - anchor).dot(normal);
        let input = output;
        output = Vec::with_capacity(input.len() + 1);

        let n = input.len();
        for j in 0..n {
            let current = input[j];
            let prev = input[(j + n - 1) % n];
            let (d_current, d_prev) = (distance(current), distance(prev));

            if d_current <= eps {
                if d_prev > eps {
                    let x = crossing(prev, current, d_prev, d_current);
                    if !x.approx_eq(current, eps) {
                        output.push(x);
                    }
                }
                output.push(current);
            } else if d_prev <= eps {
                let x = crossing(prev, current, d_prev, d_current);
                if !x.approx_eq(prev, eps) {
                    output.push(x);
                }
            }
        }

        trace!("edge {}: {} -> {} vertices", i, n, output.len());
        stages.push(Polygon::new(output.clone()));
    }

    debug!(
        "sutherland-hodgman: {} vertices against {} edges -> {} vertices",
        subject.len(),
        window.len(),
        output.len()
    );
    ClipHistory { stages }
}

/// Clips a polygon against a convex window, returning only the result.
///
/// `eps` is the on-edge tolerance, usually [`Tolerances::on_edge`].
///
/// [`Tolerances::on_edge`]: crate::Tolerances::on_edge
pub fn clip_polygon_by_convex<F: Float>(
    subject: &Polygon<F>,
    window: &ConvexWindow<F>,
    eps: F,
) -> Polygon<F> {
    sutherland_hodgman(subject, window, eps).into_result()
}

/// Where `prev -> current` meets the edge line, from the signed distances of
/// the endpoints. Clamped to the segment when one endpoint sits in the
/// tolerance band on the outer side.
#[inline]
fn crossing<F: Float>(prev: Point2<F>, current: Point2<F>, d_prev: F, d_current: F) -> Point2<F> {
    let t = d_prev / (d_prev - d_current);
    prev.lerp(current, t.max(F::zero()).min(F::one()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_result_lies_in_window(
            pts in prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0), 3..9)
        ) {
            let subject = Polygon::from_coords(&pts);
            let window = ConvexWindow::rectangle(-5.0, -5.0, 5.0, 5.0).unwrap();
            let history = sutherland_hodgman(&subject, &window, 1e-9);
            prop_assert!(history.stages.len() <= 5);
            for v in &history.result().vertices {
                prop_assert!(window.contains(*v, 1e-9));
            }
        }
    }
}
