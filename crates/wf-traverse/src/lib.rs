//! Multiphase pressure traverse for a vertical well.
//!
//! This crate marches down the tubing in fixed-length segments and solves
//! the pressure at each segment boundary by fixed-point iteration, using the
//! black-oil correlations from `wf-pvt` for the in-situ mixture density.

pub mod config;
pub mod error;
pub mod fixed_point;
pub mod production;
pub mod profile;
pub mod traverse;

pub use config::WellConfiguration;
pub use error::{TraverseError, TraverseResult};
pub use fixed_point::{FixedPointConfig, FixedPointSolution};
pub use production::{FrictionParameters, ProductionRates};
pub use profile::{ProfilePoint, TraverseProfile};
pub use traverse::{
    TraverseOptions, TraverseProgressEvent, pressure_gradient, run_traverse, run_traverse_with,
    run_traverse_with_model,
};
