//! PVT property sweeps.
//!
//! Evaluates a model over a range of pressures at fixed temperature to build
//! the classic black-oil curves (Rs, Bo, Z, gas viscosity versus pressure).

use crate::error::{PvtError, PvtResult};
use crate::fluid::FluidCharacterization;
use crate::model::PvtModel;
use crate::state::ThermodynamicState;
use wf_core::units::{Centipoise, Fahrenheit, Psia, ScfPerStb};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SweepSpacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    start: f64,
    end: f64,
    num_points: usize,
    spacing: SweepSpacing,
}

impl SweepDefinition {
    pub fn new(start: f64, end: f64, num_points: usize, spacing: SweepSpacing) -> PvtResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PvtError::InvalidArg {
                what: "sweep bounds must be finite",
            });
        }
        if num_points < 2 {
            return Err(PvtError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(PvtError::InvalidArg {
                what: "sweep start and end must be different",
            });
        }
        if spacing == SweepSpacing::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(PvtError::InvalidArg {
                what: "logarithmic sweep bounds must be positive",
            });
        }
        Ok(Self {
            start,
            end,
            num_points,
            spacing,
        })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut points: Vec<f64> = match self.spacing {
            SweepSpacing::Linear => {
                let delta = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + i as f64 * delta).collect()
            }
            SweepSpacing::Logarithmic => {
                let log_start = self.start.ln();
                let log_delta = (self.end.ln() - log_start) / (n - 1) as f64;
                (0..n).map(|i| (log_start + i as f64 * log_delta).exp()).collect()
            }
        };

        // Ensure exact endpoints
        points[0] = self.start;
        points[n - 1] = self.end;
        points
    }
}

/// Properties at one pressure of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvtPoint {
    pub pressure: Psia,
    pub bubble_point: Psia,
    pub solution_gor: ScfPerStb,
    pub oil_fvf: f64,
    pub z: f64,
    pub gas_viscosity: Centipoise,
}

impl PvtPoint {
    /// Oil is saturated (no free gas) at this point.
    pub fn is_saturated(&self) -> bool {
        self.pressure >= self.bubble_point
    }
}

/// Result of a pressure sweep at fixed temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub temperature: Fahrenheit,
    pub points: Vec<PvtPoint>,
}

impl SweepResult {
    pub fn pressures(&self) -> Vec<Psia> {
        self.points.iter().map(|p| p.pressure).collect()
    }

    pub fn solution_gor(&self) -> Vec<ScfPerStb> {
        self.points.iter().map(|p| p.solution_gor).collect()
    }

    pub fn oil_fvf(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.oil_fvf).collect()
    }

    pub fn z(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.z).collect()
    }

    pub fn gas_viscosity(&self) -> Vec<Centipoise> {
        self.points.iter().map(|p| p.gas_viscosity).collect()
    }
}

/// Evaluate `model` at every pressure of `definition` at temperature `t`.
///
/// Stops at the first failing point.
pub fn pressure_sweep<M: PvtModel + ?Sized>(
    model: &M,
    fluid: &FluidCharacterization,
    definition: &SweepDefinition,
    t: Fahrenheit,
) -> PvtResult<SweepResult> {
    let bubble_point = model.bubble_point(fluid, t)?;
    let points = definition
        .generate_points()
        .into_iter()
        .enumerate()
        .map(|(point_index, p)| {
            evaluate_point(model, fluid, p, t, bubble_point).map_err(|e| PvtError::Sweep {
                point_index,
                source: Box::new(e),
            })
        })
        .collect::<PvtResult<Vec<_>>>()?;

    Ok(SweepResult {
        temperature: t,
        points,
    })
}

fn evaluate_point<M: PvtModel + ?Sized>(
    model: &M,
    fluid: &FluidCharacterization,
    p: Psia,
    t: Fahrenheit,
    bubble_point: Psia,
) -> PvtResult<PvtPoint> {
    let state = ThermodynamicState::new(p, t)?;
    Ok(PvtPoint {
        pressure: p,
        bubble_point,
        solution_gor: model.solution_gor(fluid, &state)?,
        oil_fvf: model.oil_fvf(fluid, &state)?,
        z: model.z_factor(fluid, &state)?,
        gas_viscosity: model.gas_viscosity(fluid, &state)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_points() {
        let def = SweepDefinition::new(100.0, 500.0, 5, SweepSpacing::Linear).unwrap();
        assert_eq!(def.generate_points(), vec![100.0, 200.0, 300.0, 400.0, 500.0]);
    }

    #[test]
    fn logarithmic_points() {
        let def = SweepDefinition::new(10.0, 1000.0, 3, SweepSpacing::Logarithmic).unwrap();
        let pts = def.generate_points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], 10.0);
        assert!((pts[1] - 100.0).abs() < 1e-9);
        assert_eq!(pts[2], 1000.0);
    }

    #[test]
    fn reject_degenerate_definitions() {
        assert!(SweepDefinition::new(100.0, 500.0, 1, SweepSpacing::Linear).is_err());
        assert!(SweepDefinition::new(100.0, 100.0, 5, SweepSpacing::Linear).is_err());
        assert!(SweepDefinition::new(0.0, 100.0, 5, SweepSpacing::Logarithmic).is_err());
        assert!(SweepDefinition::new(f64::NAN, 100.0, 5, SweepSpacing::Linear).is_err());
    }

    #[test]
    fn descending_sweep_is_allowed() {
        let def = SweepDefinition::new(300.0, 100.0, 3, SweepSpacing::Linear).unwrap();
        assert_eq!(def.generate_points(), vec![300.0, 200.0, 100.0]);
    }
}
