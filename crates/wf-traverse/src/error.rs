//! Error types for traverse operations.

use thiserror::Error;
use wf_core::WfError;
use wf_pvt::PvtError;

/// Errors that abort a pressure traverse. No partial profile is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraverseError {
    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Equation of state failed at depth {depth} ft: {source}")]
    EquationOfState { depth: f64, source: PvtError },

    #[error("Fluid property evaluation failed at depth {depth} ft: {source}")]
    Fluid { depth: f64, source: PvtError },

    #[error(
        "Pressure did not converge at depth {depth} ft after {iterations} iterations \
         (relative error {relative_error:.3e})"
    )]
    NonConvergence {
        depth: f64,
        iterations: usize,
        relative_error: f64,
    },
}

pub type TraverseResult<T> = Result<T, TraverseError>;

impl TraverseError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        TraverseError::InvalidConfiguration { what: what.into() }
    }

    /// Attach a depth to a PVT failure, keeping equation-of-state failures distinct.
    pub(crate) fn at_depth(depth: f64, source: PvtError) -> Self {
        if source.is_equation_of_state() {
            TraverseError::EquationOfState { depth, source }
        } else {
            TraverseError::Fluid { depth, source }
        }
    }
}

impl From<WfError> for TraverseError {
    fn from(err: WfError) -> Self {
        TraverseError::invalid(err.to_string())
    }
}
