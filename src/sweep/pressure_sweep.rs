use tracing::info;

use crate::config::{Freestream, SectionConfig};
use crate::error::Result;
use crate::math::Point3;
use crate::operations::{PressureRecord, PressureSlice};

use super::span_sweep::{fetch_slices, first_error, process_slices};
use super::{FlowFrame, Slicer, SpanStations};

/// Pressure-coefficient distribution around the section cut at one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationPressure {
    pub origin: Point3,
    /// Loop order: upper trailing-edge vertex first, counter-clockwise.
    pub records: Vec<PressureRecord>,
}

/// Computes the surface pressure coefficient around the section at every
/// station.
///
/// The slicer must attach pressure to every piece it returns. Fetching and
/// processing follow [`SpanSweep`](super::SpanSweep).
#[derive(Debug)]
pub struct PressureSweep<'a> {
    stations: &'a SpanStations,
    frame: FlowFrame,
    freestream: Freestream,
    config: SectionConfig,
}

impl<'a> PressureSweep<'a> {
    /// Creates a new pressure sweep.
    #[must_use]
    pub fn new(
        stations: &'a SpanStations,
        frame: FlowFrame,
        freestream: Freestream,
        config: SectionConfig,
    ) -> Self {
        Self {
            stations,
            frame,
            freestream,
            config,
        }
    }

    /// Executes the sweep.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` before slicing if the
    /// configuration or free stream is invalid, `InputError::Slicer` if the
    /// slicer fails, or the error of the first station (in span order) whose
    /// loop cannot be built.
    pub fn execute<S: Slicer>(&self, slicer: &mut S) -> Result<Vec<StationPressure>> {
        self.config.validate()?;
        self.freestream.validate()?;
        info!(
            stations = self.stations.len(),
            q0 = self.freestream.dynamic_pressure(),
            "starting pressure sweep"
        );

        let slices = fetch_slices(self.stations, &self.frame, slicer)?;
        let (freestream, config) = (self.freestream, self.config);
        let results = process_slices(&slices, move |segments| {
            PressureSlice::new(segments, freestream, config).execute()
        });

        let stations: Vec<StationPressure> = first_error(results)?
            .into_iter()
            .zip(self.stations.origins())
            .map(|(records, origin)| StationPressure {
                origin: *origin,
                records,
            })
            .collect();
        info!(stations = stations.len(), "pressure sweep finished");
        Ok(stations)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::{FoilError, InputError};
    use crate::math::{Point2, Vector2};
    use crate::sweep::{Direction, RawSegment3};
    use crate::test_support::{naca_symmetric, place_section, split_into_chains};

    const FREESTREAM: Freestream = Freestream {
        density: 1.0,
        velocity: 10.0,
        pressure: 0.0,
    };

    /// Serves a NACA 0012 in the x-y plane whose surface pressure gives
    /// `cp = x + z` at every point.
    struct PressurisedWing {
        with_pressure: bool,
    }

    impl Slicer for PressurisedWing {
        type Error = String;

        fn slice(
            &mut self,
            origin: &Point3,
            _normal: &Direction,
        ) -> std::result::Result<Vec<RawSegment3>, String> {
            let z = origin.z;
            let section = place_section(&naca_symmetric(0.12, 40), 3.0, 1.0, Vector2::zeros());
            let raw = split_into_chains(&section, &[(1, false), (2, true), (0, false)]);
            let points: Vec<Point3> = raw
                .points()
                .iter()
                .map(|p| Point3::new(p.x, p.y, z))
                .collect();
            let pressure = self.with_pressure.then(|| {
                points
                    .iter()
                    .map(|p| FREESTREAM.dynamic_pressure() * (p.x + p.z))
                    .collect()
            });
            Ok(vec![RawSegment3 {
                points,
                arclength: raw.arclength().to_vec(),
                pressure,
            }])
        }
    }

    #[test]
    fn cp_at_explicit_stations() {
        let origins = vec![Point3::new(0.0, 0.0, 0.5), Point3::new(0.0, 0.0, 2.0)];
        let stations = SpanStations::from_origins(origins.clone(), Direction::Z_POS);
        let mut wing = PressurisedWing {
            with_pressure: true,
        };
        let result = PressureSweep::new(
            &stations,
            FlowFrame::default(),
            FREESTREAM,
            SectionConfig::default(),
        )
        .execute(&mut wing)
        .unwrap();

        assert_eq!(result.len(), 2);
        let canonical = place_section(&naca_symmetric(0.12, 40), 3.0, 1.0, Vector2::zeros());
        for (station, origin) in result.iter().zip(&origins) {
            assert_eq!(station.origin, *origin);
            assert_eq!(station.records.len(), canonical.len());
            for (r, p) in station.records.iter().zip(&canonical) {
                assert_eq!(Point2::new(r.x, r.y), *p);
                assert_abs_diff_eq!(r.cp, r.x + origin.z, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn slices_without_pressure_are_rejected() {
        let stations = SpanStations::from_origins(vec![Point3::origin()], Direction::Z_POS);
        let mut wing = PressurisedWing {
            with_pressure: false,
        };
        let err = PressureSweep::new(
            &stations,
            FlowFrame::default(),
            FREESTREAM,
            SectionConfig::default(),
        )
        .execute(&mut wing)
        .unwrap_err();
        assert!(matches!(
            err,
            FoilError::Input(InputError::MissingPressure { segment: 0 })
        ));
    }

    #[test]
    fn zero_velocity_is_rejected_before_slicing() {
        struct Untouchable;
        impl Slicer for Untouchable {
            type Error = String;
            fn slice(
                &mut self,
                _origin: &Point3,
                _normal: &Direction,
            ) -> std::result::Result<Vec<RawSegment3>, String> {
                Err("slicer must not be called".to_owned())
            }
        }
        let stations = SpanStations::from_origins(vec![Point3::origin()], Direction::Z_POS);
        let err = PressureSweep::new(
            &stations,
            FlowFrame::default(),
            Freestream::new(1.0, 0.0, 0.0),
            SectionConfig::default(),
        )
        .execute(&mut Untouchable)
        .unwrap_err();
        assert!(matches!(err, FoilError::Input(InputError::InvalidConfig(_))));
    }
}
