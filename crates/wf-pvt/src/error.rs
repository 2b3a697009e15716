//! PVT correlation errors.

use wf_core::WfError;
use thiserror::Error;

/// Result type for PVT operations.
pub type PvtResult<T> = Result<T, PvtError>;

/// Errors that can occur while evaluating fluid properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PvtError {
    /// Non-physical values (negative pressure, absolute temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The equation of state has no real, strictly positive root.
    #[error("No physical Z-factor root at P={pressure} psia, T={temperature} °F (roots: {roots:?})")]
    NoPhysicalRoot {
        pressure: f64,
        temperature: f64,
        roots: Vec<f64>,
    },

    /// More than one positive root and the root policy demands a unique one.
    #[error("Ambiguous Z-factor at P={pressure} psia, T={temperature} °F (positive roots: {roots:?})")]
    AmbiguousRoots {
        pressure: f64,
        temperature: f64,
        roots: Vec<f64>,
    },

    /// A property sweep failed at one of its points.
    #[error("Sweep failed at point {point_index}: {source}")]
    Sweep {
        point_index: usize,
        source: Box<PvtError>,
    },
}

impl PvtError {
    /// True for failures of the cubic equation of state.
    pub fn is_equation_of_state(&self) -> bool {
        matches!(
            self,
            PvtError::NoPhysicalRoot { .. } | PvtError::AmbiguousRoots { .. }
        )
    }
}

impl From<WfError> for PvtError {
    fn from(err: WfError) -> Self {
        PvtError::NonPhysical { what: err.what() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PvtError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = PvtError::NoPhysicalRoot {
            pressure: 50.0,
            temperature: 80.0,
            roots: vec![-0.2],
        };
        assert!(err.to_string().contains("No physical Z-factor root"));
        assert!(err.is_equation_of_state());
    }

    #[test]
    fn core_error_conversion() {
        let err: PvtError = WfError::NonFinite {
            what: "temperature",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, PvtError::NonPhysical { what: "temperature" });
        assert!(!err.is_equation_of_state());

        let err: PvtError = wf_core::ensure_positive(0.0, "water formation volume factor")
            .unwrap_err()
            .into();
        assert_eq!(
            err,
            PvtError::NonPhysical {
                what: "water formation volume factor"
            }
        );
    }
}
