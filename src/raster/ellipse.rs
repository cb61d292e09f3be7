//! Region-split midpoint ellipse.

use super::pixel::normalize_set;
use super::Pixel;

/// Rasterizes an axis-aligned ellipse with semi-axes `a` (x) and `b` (y).
///
/// Region 1 starts at `(0, b)` and steps x while the tangent slope has
/// magnitude below one (`2b²x < 2a²y`); region 2 then steps y down to zero.
/// Every cell is mirrored into the four quadrants. For very flat ellipses the
/// region-2 walk can stop short of the x-axis tip, so the remaining run along
/// `y = 0` is filled out to `(±a, 0)`.
///
/// Returns the sorted, deduplicated cell set translated to `center`.
pub fn bresenham_ellipse(center: Pixel, a: u32, b: u32) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    let (ai, bi) = (a as i32, b as i32);

    if b == 0 {
        pixels.extend((-ai..=ai).map(|x| Pixel::new(x, 0) + center));
        return normalize_set(pixels);
    }

    let aa = f64::from(a) * f64::from(a);
    let bb = f64::from(b) * f64::from(b);

    let plot = |x: i32, y: i32, pixels: &mut Vec<Pixel>| {
        pixels.extend(
            Pixel::new(x, y)
                .quadrant_reflections()
                .into_iter()
                .map(|p| p + center),
        );
    };

    let mut x = 0i32;
    let mut y = bi;
    let mut dx = 0.0;
    let mut dy = 2.0 * aa * f64::from(y);

    // Region 1
    let mut d1 = bb - aa * f64::from(b) + 0.25 * aa;
    while dx < dy {
        plot(x, y, &mut pixels);
        x += 1;
        dx += 2.0 * bb;
        if d1 < 0.0 {
            d1 += dx + bb;
        } else {
            y -= 1;
            dy -= 2.0 * aa;
            d1 += dx - dy + bb;
        }
    }

    // Region 2
    let xf = f64::from(x) + 0.5;
    let yf = f64::from(y - 1);
    let mut d2 = bb * xf * xf + aa * yf * yf - aa * bb;
    let mut tip = 0;
    while y >= 0 {
        plot(x, y, &mut pixels);
        if y == 0 {
            tip = x;
        }
        y -= 1;
        dy -= 2.0 * aa;
        if d2 > 0.0 {
            d2 += aa - dy;
        } else {
            x += 1;
            dx += 2.0 * bb;
            d2 += dx - dy + aa;
        }
    }

    for x in tip + 1..=ai {
        plot(x, 0, &mut pixels);
    }

    normalize_set(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_small_ellipse_exact() {
        let got = bresenham_ellipse(Pixel::default(), 3, 2);
        let expected: Vec<Pixel> = [
            (-3, 0),
            (-2, -1),
            (-2, 1),
            (-1, -2),
            (-1, 2),
            (0, -2),
            (0, 2),
            (1, -2),
            (1, 2),
            (2, -1),
            (2, 1),
            (3, 0),
        ]
        .into_iter()
        .map(Pixel::from)
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_axis_extremes_present() {
        let set: HashSet<Pixel> = bresenham_ellipse(Pixel::default(), 15, 20)
            .into_iter()
            .collect();
        for p in [(15, 0), (-15, 0), (0, 20), (0, -20)] {
            assert!(set.contains(&Pixel::from(p)), "missing {p:?}");
        }
    }

    #[test]
    fn test_flat_ellipse_reaches_tips() {
        let set: HashSet<Pixel> = bresenham_ellipse(Pixel::default(), 10, 1)
            .into_iter()
            .collect();
        assert!(set.contains(&Pixel::new(10, 0)));
        assert!(set.contains(&Pixel::new(-9, 0)));
        assert!(set.contains(&Pixel::new(8, 1)));
    }

    #[test]
    fn test_degenerate_axes() {
        let span = bresenham_ellipse(Pixel::default(), 2, 0);
        assert_eq!(span, (-2..=2).map(|x| Pixel::new(x, 0)).collect::<Vec<_>>());

        let column = bresenham_ellipse(Pixel::default(), 0, 3);
        assert_eq!(column, (-3..=3).map(|y| Pixel::new(0, y)).collect::<Vec<_>>());
    }

    #[test]
    fn test_circle_case_hugs_radius() {
        for p in bresenham_ellipse(Pixel::new(5, -5), 12, 12) {
            let (x, y) = (f64::from(p.x - 5), f64::from(p.y + 5));
            assert!(((x * x + y * y).sqrt() - 12.0).abs() < 1.0);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn prop_ellipse_quadrant_symmetric_and_connected(a in 1u32..40, b in 1u32..40) {
            let set: HashSet<Pixel> = bresenham_ellipse(Pixel::default(), a, b)
                .into_iter()
                .collect();
            prop_assert!(set.contains(&Pixel::new(a as i32, 0)));
            prop_assert!(set.contains(&Pixel::new(0, b as i32)));
            for p in &set {
                for q in p.quadrant_reflections() {
                    prop_assert!(set.contains(&q));
                }
                let has_neighbour = set.iter().any(|q| p.is_adjacent(*q));
                prop_assert!(has_neighbour, "isolated cell {:?}", p);
            }
        }
    }
}
