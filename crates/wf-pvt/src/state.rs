//! Thermodynamic state definitions.

use crate::error::PvtResult;
use wf_core::{ensure_finite, ensure_positive};
use wf_core::units::{Fahrenheit, Psia, Rankine, rankine};

/// Pressure and temperature at which fluid properties are evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicState {
    p: Psia,
    t: Fahrenheit,
}

impl ThermodynamicState {
    /// Create a state from pressure [psia] and temperature [°F].
    ///
    /// Validates that pressure and absolute temperature are positive and finite.
    pub fn new(p: Psia, t: Fahrenheit) -> PvtResult<Self> {
        ensure_positive(p, "pressure")?;
        let t = ensure_finite(t, "temperature")?;
        ensure_positive(rankine(t), "absolute temperature")?;
        Ok(Self { p, t })
    }

    /// Pressure [psia].
    pub fn pressure(&self) -> Psia {
        self.p
    }

    /// Temperature [°F].
    pub fn temperature(&self) -> Fahrenheit {
        self.t
    }

    /// Absolute temperature [°R].
    pub fn rankine(&self) -> Rankine {
        rankine(self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PvtError;

    #[test]
    fn create_valid_state() {
        let state = ThermodynamicState::new(260.0, 80.0).unwrap();
        assert_eq!(state.pressure(), 260.0);
        assert_eq!(state.temperature(), 80.0);
        assert_eq!(state.rankine(), 540.0);
    }

    #[test]
    fn reject_non_positive_pressure() {
        assert!(ThermodynamicState::new(0.0, 80.0).is_err());
        assert!(ThermodynamicState::new(-14.7, 80.0).is_err());
    }

    #[test]
    fn reject_absolute_zero() {
        assert!(ThermodynamicState::new(100.0, -460.0).is_err());
        assert!(ThermodynamicState::new(100.0, -459.0).is_ok());
    }

    #[test]
    fn rejection_names_the_quantity() {
        assert_eq!(
            ThermodynamicState::new(-14.7, 80.0).unwrap_err(),
            PvtError::NonPhysical { what: "pressure" }
        );
        assert_eq!(
            ThermodynamicState::new(100.0, -500.0).unwrap_err(),
            PvtError::NonPhysical {
                what: "absolute temperature"
            }
        );
    }

    #[test]
    fn reject_non_finite() {
        assert!(ThermodynamicState::new(f64::NAN, 80.0).is_err());
        assert!(ThermodynamicState::new(100.0, f64::INFINITY).is_err());
    }
}
