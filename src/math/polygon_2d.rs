use super::Point2;

/// Computes the signed area of an ordered point chain (shoelace formula)
/// without the closing last-to-first term.
///
/// Positive for counter-clockwise, negative for clockwise. The closing edge of
/// a deduplicated section loop is the short trailing-edge face, so leaving it
/// out does not change the sign for well-formed sections.
#[must_use]
pub fn signed_area_open(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let sum: f64 = points
        .windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum();
    sum * 0.5
}

/// Returns the running polyline length at each point, starting at 0.
#[must_use]
pub fn cumulative_length(points: &[Point2]) -> Vec<f64> {
    let mut total = 0.0;
    let mut lengths = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += (p - points[i - 1]).norm();
        }
        lengths.push(total);
    }
    lengths
}

/// Returns a copy of a cyclic sequence rotated so that `start` becomes
/// position 0.
#[must_use]
pub fn rotate_to_start<T: Clone>(items: &[T], start: usize) -> Vec<T> {
    if items.is_empty() || start % items.len() == 0 {
        return items.to_vec();
    }
    let start = start % items.len();
    let mut rotated = Vec::with_capacity(items.len());
    rotated.extend_from_slice(&items[start..]);
    rotated.extend_from_slice(&items[..start]);
    rotated
}

/// Computes the interior angle (radians, in `[0, pi]`) at vertex `at` between
/// the edges towards `prev` and `next`.
///
/// Returns `None` if either edge has zero length.
#[must_use]
pub fn interior_angle(prev: &Point2, at: &Point2, next: &Point2) -> Option<f64> {
    let a = prev - at;
    let b = next - at;
    let denom = a.norm() * b.norm();
    if denom <= 0.0 {
        return None;
    }
    // Rounding can push the ratio just past +-1.
    Some((a.dot(&b) / denom).clamp(-1.0, 1.0).acos())
}

/// Returns the index of the point farthest from `target`, ignoring the first
/// `skip` points. Ties keep the earliest index.
#[must_use]
pub fn farthest_from(points: &[Point2], target: &Point2, skip: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate().skip(skip) {
        let d = (p - target).norm();
        if best.map_or(true, |(_, bd)| d > bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Returns the position of the first sample at which `xs` fails to strictly
/// increase, or `None` if the sequence is strictly increasing.
#[must_use]
pub fn first_non_increasing(xs: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut prev: Option<f64> = None;
    for (i, x) in xs.into_iter().enumerate() {
        if let Some(p) = prev {
            if x.is_nan() || x <= p {
                return Some(i);
            }
        }
        prev = Some(x);
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::math::TOLERANCE;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn open_area_ccw_square() {
        // The missing closing edge (0,1)->(0,0) contributes nothing here.
        let area = signed_area_open(&square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn open_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert!(signed_area_open(&pts) < 0.0);
    }

    #[test]
    fn open_area_degenerate() {
        assert!(signed_area_open(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_open(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn rotation_moves_start() {
        let rotated = rotate_to_start(&[10, 11, 12, 13], 2);
        assert_eq!(rotated, vec![12, 13, 10, 11]);
        assert_eq!(rotate_to_start(&[1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(rotate_to_start(&[1, 2, 3], 3), vec![1, 2, 3]);
    }

    #[test]
    fn interior_angle_right_and_straight() {
        let right = interior_angle(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 1.0),
        )
        .unwrap();
        assert!((right - FRAC_PI_2).abs() < TOLERANCE);

        let straight = interior_angle(
            &Point2::new(-1.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        )
        .unwrap();
        assert!((straight - PI).abs() < TOLERANCE);
    }

    #[test]
    fn interior_angle_zero_edge() {
        let p = Point2::new(0.5, 0.5);
        assert!(interior_angle(&p, &p, &Point2::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn farthest_skips_leading_points() {
        let pts = vec![
            Point2::new(10.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let origin = Point2::origin();
        assert_eq!(farthest_from(&pts, &origin, 0), Some(0));
        assert_eq!(farthest_from(&pts, &origin, 1), Some(2));
        assert_eq!(farthest_from(&pts, &origin, 4), None);
    }

    #[test]
    fn monotonic_check() {
        assert_eq!(first_non_increasing([0.0, 0.5, 1.0]), None);
        assert_eq!(first_non_increasing([0.0, 0.5, 0.5]), Some(2));
        assert_eq!(first_non_increasing([0.0, -1.0]), Some(1));
        assert_eq!(first_non_increasing([0.0, f64::NAN]), Some(1));
    }
}
