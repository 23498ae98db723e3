//! Synthetic sections and slicers for integration tests and demos.
#![allow(dead_code, clippy::unwrap_used)]

use foilsect::geometry::RawSegment;
use foilsect::math::{Point2, Point3, Vector2};
use foilsect::sweep::{Direction, RawSegment3, Slicer};

#[path = "../../src/test_support/sections.rs"]
mod sections;

pub use sections::{naca_half_thickness, naca_symmetric, place_section};

/// Cuts a canonical loop into upper surface, lower surface and
/// trailing-edge face, each a separate raw array in the given order, the
/// surfaces reversed when `reverse` is set.
pub fn as_raw_pieces(canonical: &[Point2], reverse: bool) -> Vec<RawSegment> {
    let n = canonical.len() / 2;
    let mut upper = canonical[..=n].to_vec();
    let mut lower = canonical[n..].to_vec();
    if reverse {
        upper.reverse();
        lower.reverse();
    }
    vec![
        RawSegment::from_points(lower),
        RawSegment::from_points(vec![canonical[2 * n], canonical[0]]),
        RawSegment::from_points(upper),
    ]
}

/// Concatenates pieces into one raw array, restarting arclength per piece.
pub fn concatenated(pieces: &[RawSegment]) -> RawSegment {
    let points = pieces.iter().flat_map(|p| p.points().to_vec()).collect();
    let arclength = pieces.iter().flat_map(|p| p.arclength().to_vec()).collect();
    RawSegment::new(points, arclength).unwrap()
}

/// Surface pressure the synthetic wing reports at a model-space point.
pub fn surface_pressure(p: &Point3) -> f64 {
    101_325.0 - 250.0 * (p.x - 0.1 * p.z) + 40.0 * p.y
}

/// Straight tapered wing along +Z: NACA 0012 with linear twist and chord,
/// carrying [`surface_pressure`] on every slice point.
pub struct TaperedWing {
    pub root_chord: f64,
    pub tip_chord: f64,
    pub root_twist: f64,
    pub tip_twist: f64,
    pub span: f64,
}

impl TaperedWing {
    pub fn chord_at(&self, z: f64) -> f64 {
        self.root_chord + (self.tip_chord - self.root_chord) * z / self.span
    }

    pub fn twist_at(&self, z: f64) -> f64 {
        self.root_twist + (self.tip_twist - self.root_twist) * z / self.span
    }
}

impl Slicer for TaperedWing {
    type Error = String;

    fn slice(&mut self, origin: &Point3, _normal: &Direction) -> Result<Vec<RawSegment3>, String> {
        let z = origin.z;
        if !(0.0..=self.span).contains(&z) {
            return Err(format!("z = {z} is off the wing"));
        }
        let section = place_section(
            &naca_symmetric(0.12, 80),
            self.twist_at(z),
            self.chord_at(z),
            Vector2::new(0.1 * z, 0.0),
        );
        Ok(as_raw_pieces(&section, true)
            .into_iter()
            .map(|piece| {
                let points: Vec<Point3> = piece
                    .points()
                    .iter()
                    .map(|p| Point3::new(p.x, p.y, z))
                    .collect();
                let pressure = points.iter().map(surface_pressure).collect();
                RawSegment3 {
                    points,
                    arclength: piece.arclength().to_vec(),
                    pressure: Some(pressure),
                }
            })
            .collect())
    }
}
