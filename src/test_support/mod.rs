//! Synthetic sections shared by unit tests.
#![allow(clippy::unwrap_used)]

mod sections;

pub(crate) use sections::{naca_half_thickness, naca_symmetric, place_section};

use crate::geometry::RawSegment;
use crate::math::Point2;

/// Splits a canonical loop of `2n + 1` points into its upper surface (0),
/// lower surface (1), and trailing-edge face (2), then concatenates them in
/// the given order and direction into one raw array.
///
/// Joint points appear in both neighbouring pieces and every piece restarts
/// its arclength at zero.
pub(crate) fn split_into_chains(canonical: &[Point2], order: &[(usize, bool)]) -> RawSegment {
    let n = canonical.len() / 2;
    let pieces = [
        canonical[..=n].to_vec(),
        canonical[n..].to_vec(),
        vec![canonical[2 * n], canonical[0]],
    ];
    let mut points = Vec::new();
    let mut arclength = Vec::new();
    for &(piece, forward) in order {
        let mut chain = pieces[piece].clone();
        if !forward {
            chain.reverse();
        }
        let seg = RawSegment::from_points(chain);
        points.extend_from_slice(seg.points());
        arclength.extend_from_slice(seg.arclength());
    }
    RawSegment::new(points, arclength).unwrap()
}
