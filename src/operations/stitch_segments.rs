use std::collections::HashSet;

use tracing::debug;

use crate::config::{DedupRule, SectionConfig};
use crate::error::{InputError, Result};
use crate::geometry::{RawSegment, StitchedLoop};
use crate::math::polygon_2d::{rotate_to_start, signed_area_open};
use crate::math::Point2;

use super::LocateTrailingEdge;

/// A contiguous polyline piece: a range into the flattened raw input.
#[derive(Debug, Clone, Copy)]
struct Chain {
    start: usize,
    end: usize,
}

/// A chain with the direction it is traversed in the assembled ring.
#[derive(Debug, Clone, Copy)]
struct OrientedChain {
    chain: Chain,
    forward: bool,
}

impl OrientedChain {
    /// Flat input positions in traversal order.
    fn flat_indices(self) -> impl Iterator<Item = usize> {
        let Chain { start, end } = self.chain;
        let forward = self.forward;
        (0..end - start).map(move |k| if forward { start + k } else { end - 1 - k })
    }
}

/// Parallel loop arrays under construction.
#[derive(Debug, Default)]
struct LoopArrays {
    points: Vec<Point2>,
    arclength: Vec<f64>,
    indices: Vec<Option<usize>>,
}

impl LoopArrays {
    fn push(&mut self, point: Point2, arclength: f64, index: usize) {
        self.points.push(point);
        self.arclength.push(arclength);
        self.indices.push(Some(index));
    }

    fn retain_mask(&mut self, keep: &[bool]) {
        let mut k = keep.iter();
        self.points.retain(|_| k.next().copied().unwrap_or(false));
        let mut k = keep.iter();
        self.arclength.retain(|_| k.next().copied().unwrap_or(false));
        let mut k = keep.iter();
        self.indices.retain(|_| k.next().copied().unwrap_or(false));
    }

    fn reverse(&mut self) {
        self.points.reverse();
        self.arclength.reverse();
        self.indices.reverse();
    }

    fn rotate(self, start: usize) -> StitchedLoop {
        StitchedLoop::from_parts(
            rotate_to_start(&self.points, start),
            rotate_to_start(&self.arclength, start),
            rotate_to_start(&self.indices, start),
        )
    }
}

/// Assembles raw slice segments into one canonical section loop.
///
/// Raw arrays are split into chains wherever arclength decreases, chains are
/// joined end to end into a ring, duplicate points are dropped, the ring is
/// made counter-clockwise, and the loop is rotated to start at the upper
/// trailing-edge vertex.
#[derive(Debug)]
pub struct StitchSegments<'a> {
    segments: &'a [RawSegment],
    config: SectionConfig,
}

impl<'a> StitchSegments<'a> {
    /// Creates a new stitch operation.
    #[must_use]
    pub fn new(segments: &'a [RawSegment], config: SectionConfig) -> Self {
        Self { segments, config }
    }

    /// Executes the stitch.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ChainNotFound` if the chains do not join into a
    /// closed ring, `InputError::DegenerateChain` if too few points remain,
    /// or any error of [`LocateTrailingEdge::execute`].
    ///
    /// The loop carries pressure only when every segment does.
    pub fn execute(&self) -> Result<StitchedLoop> {
        self.config.validate()?;

        let (points, arclength) = self.flatten();
        let chains = split_chains(self.segments);
        if chains.is_empty() {
            return Err(InputError::DegenerateChain("no points in input".to_owned()).into());
        }
        debug!(chains = chains.len(), points = points.len(), "split raw segments");

        let mut arrays = if chains.len() == 1 {
            concatenate(&points, &arclength, &[OrientedChain {
                chain: chains[0],
                forward: true,
            }])
        } else {
            self.link(&points, &arclength, &chains)?
        };

        let before = arrays.points.len();
        let keep = dedup_mask(&arrays.points, self.config.dedup);
        arrays.retain_mask(&keep);
        debug!(
            removed = before - arrays.points.len(),
            rule = ?self.config.dedup,
            "removed duplicate points"
        );

        if arrays.points.len() < 3 {
            return Err(InputError::DegenerateChain(format!(
                "{} unique points cannot form a loop",
                arrays.points.len()
            ))
            .into());
        }

        if signed_area_open(&arrays.points) < 0.0 {
            debug!("reversed clockwise loop");
            arrays.reverse();
        }

        let te = LocateTrailingEdge::new(&arrays.points, self.config.trailing_edge_angle_deg)
            .execute()?;
        let stitched = arrays.rotate(te.upper_index);
        Ok(match self.flatten_pressure() {
            Some(pressure) => stitched.with_raw_pressure(&pressure),
            None => stitched,
        })
    }

    /// Concatenates all raw arrays, in input order.
    fn flatten(&self) -> (Vec<Point2>, Vec<f64>) {
        let total = self.segments.iter().map(RawSegment::len).sum();
        let mut points = Vec::with_capacity(total);
        let mut arclength = Vec::with_capacity(total);
        for segment in self.segments {
            points.extend_from_slice(segment.points());
            arclength.extend_from_slice(segment.arclength());
        }
        (points, arclength)
    }

    /// Concatenates the pressure arrays, if every segment has one.
    fn flatten_pressure(&self) -> Option<Vec<f64>> {
        let mut pressure = Vec::new();
        for segment in self.segments {
            pressure.extend_from_slice(segment.pressure()?);
        }
        Some(pressure)
    }

    /// Joins chains end to end starting from chain 0, then checks that the
    /// ring closes.
    fn link(&self, points: &[Point2], arclength: &[f64], chains: &[Chain]) -> Result<LoopArrays> {
        let tol = self.config.coincidence_tolerance;
        let coincident = |a: &Point2, b: &Point2| (a - b).norm() <= tol;

        let mut arrays = concatenate(points, arclength, &[OrientedChain {
            chain: chains[0],
            forward: true,
        }]);
        let origin = points[chains[0].start];
        let mut pool: Vec<Chain> = chains[1..].to_vec();

        while !pool.is_empty() {
            let Some(&end) = arrays.points.last() else {
                break;
            };
            let found = pool.iter().enumerate().find_map(|(k, c)| {
                if coincident(&points[c.start], &end) {
                    Some((k, true))
                } else if coincident(&points[c.end - 1], &end) {
                    Some((k, false))
                } else {
                    None
                }
            });
            let Some((k, forward)) = found else {
                return Err(InputError::ChainNotFound { x: end.x, y: end.y }.into());
            };

            let next = OrientedChain {
                chain: pool.remove(k),
                forward,
            };
            for (n, i) in next.flat_indices().enumerate() {
                // Snap the joint so duplicate removal sees an exact match.
                let p = if n == 0 { end } else { points[i] };
                arrays.push(p, arclength[i], i);
            }
        }

        match arrays.points.last_mut() {
            Some(last) if coincident(last, &origin) => *last = origin,
            Some(last) => {
                return Err(InputError::ChainNotFound {
                    x: last.x,
                    y: last.y,
                }
                .into());
            }
            None => {}
        }
        debug!(points = arrays.points.len(), "linked chains into a ring");
        Ok(arrays)
    }
}

/// Splits each raw array into chains at every arclength decrease.
fn split_chains(segments: &[RawSegment]) -> Vec<Chain> {
    let mut chains = Vec::new();
    let mut offset = 0;
    for segment in segments {
        let arc = segment.arclength();
        if arc.is_empty() {
            continue;
        }
        let mut start = 0;
        for i in 1..arc.len() {
            if arc[i] < arc[i - 1] {
                chains.push(Chain {
                    start: offset + start,
                    end: offset + i,
                });
                start = i;
            }
        }
        chains.push(Chain {
            start: offset + start,
            end: offset + arc.len(),
        });
        offset += arc.len();
    }
    chains
}

fn concatenate(points: &[Point2], arclength: &[f64], order: &[OrientedChain]) -> LoopArrays {
    let mut arrays = LoopArrays::default();
    for oc in order {
        for i in oc.flat_indices() {
            arrays.push(points[i], arclength[i], i);
        }
    }
    arrays
}

/// Bit key of a coordinate with `-0.0` folded onto `0.0`.
fn coord_key(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

/// Returns, per point, whether it survives the duplicate rule.
fn dedup_mask(points: &[Point2], rule: DedupRule) -> Vec<bool> {
    match rule {
        DedupRule::FirstOccurrenceXOrY => {
            let mut seen_x = HashSet::with_capacity(points.len());
            let mut seen_y = HashSet::with_capacity(points.len());
            points
                .iter()
                .map(|p| {
                    let new_x = seen_x.insert(coord_key(p.x));
                    let new_y = seen_y.insert(coord_key(p.y));
                    new_x || new_y
                })
                .collect()
        }
        DedupRule::ExactPoint => {
            let mut seen = HashSet::with_capacity(points.len());
            points
                .iter()
                .map(|p| seen.insert((coord_key(p.x), coord_key(p.y))))
                .collect()
        }
    }
}
