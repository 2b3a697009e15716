//! Traverse output: depth-ordered records at every segment boundary.

use serde::Serialize;
use wf_core::units::{Fahrenheit, Feet, LbmPerFt3, Psia, ScfPerStb};

/// Conditions at one segment boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub depth: Feet,
    pub pressure: Psia,
    pub temperature: Fahrenheit,
    /// Mixture density at the boundary [lbm/ft³]
    pub density: LbmPerFt3,
    /// Gas in solution [scf/stb]
    pub solution_gor: ScfPerStb,
}

/// Pressure traverse from the wellhead (depth 0) to the tubing shoe.
///
/// Holds `number_of_segments + 1` points. Segment quantities (average
/// density, iterations) have one entry per segment and are keyed to the
/// lower boundary of the segment, i.e. they line up with `points()[1..]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraverseProfile {
    segment_length: Feet,
    points: Vec<ProfilePoint>,
    average_density: Vec<LbmPerFt3>,
    iterations: Vec<usize>,
}

impl TraverseProfile {
    pub(crate) fn start(wellhead: ProfilePoint, segment_length: Feet, segments: usize) -> Self {
        let mut points = Vec::with_capacity(segments + 1);
        points.push(wellhead);
        Self {
            segment_length,
            points,
            average_density: Vec::with_capacity(segments),
            iterations: Vec::with_capacity(segments),
        }
    }

    pub(crate) fn push_segment(
        &mut self,
        point: ProfilePoint,
        average_density: LbmPerFt3,
        iterations: usize,
    ) {
        self.points.push(point);
        self.average_density.push(average_density);
        self.iterations.push(iterations);
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Number of records (segment boundaries).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn number_of_segments(&self) -> usize {
        self.average_density.len()
    }

    pub fn segment_length(&self) -> Feet {
        self.segment_length
    }

    pub fn wellhead(&self) -> &ProfilePoint {
        &self.points[0]
    }

    pub fn bottomhole(&self) -> &ProfilePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn depths(&self) -> Vec<Feet> {
        self.points.iter().map(|p| p.depth).collect()
    }

    pub fn pressures(&self) -> Vec<Psia> {
        self.points.iter().map(|p| p.pressure).collect()
    }

    pub fn temperatures(&self) -> Vec<Fahrenheit> {
        self.points.iter().map(|p| p.temperature).collect()
    }

    pub fn densities(&self) -> Vec<LbmPerFt3> {
        self.points.iter().map(|p| p.density).collect()
    }

    pub fn solution_gor(&self) -> Vec<ScfPerStb> {
        self.points.iter().map(|p| p.solution_gor).collect()
    }

    /// Average density per segment, one shorter than the point series.
    pub fn average_densities(&self) -> &[LbmPerFt3] {
        &self.average_density
    }

    /// Fixed-point iterations used per segment.
    pub fn iterations(&self) -> &[usize] {
        &self.iterations
    }

    pub fn max_iterations(&self) -> usize {
        self.iterations.iter().copied().max().unwrap_or(0)
    }

    /// Overall pressure gradient wellhead → bottomhole [psi/ft].
    pub fn mean_pressure_gradient(&self) -> f64 {
        let top = self.wellhead();
        let bottom = self.bottomhole();
        if bottom.depth == top.depth {
            return 0.0;
        }
        (bottom.pressure - top.pressure) / (bottom.depth - top.depth)
    }
}
