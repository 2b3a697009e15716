//! Well configuration: everything a traverse needs, in field units.

use crate::error::{TraverseError, TraverseResult};
use serde::{Deserialize, Serialize};
use wf_core::units::constants::RANKINE_OFFSET;
use wf_core::{ensure_finite, ensure_non_negative, ensure_positive};
use wf_core::units::{BarrelsPerDay, Fahrenheit, Feet, Inches, Psia, ScfPerStb};
use wf_pvt::{NonHydrocarbons, SurfaceFluid};

/// Tubing geometry, wellhead conditions, well-test rates and fluid gravities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellConfiguration {
    /// Tubing inner diameter [in]
    pub tubing_inner_diameter: Inches,
    /// Flowing wellhead pressure [psia]
    pub wellhead_pressure: Psia,
    /// Total liquid rate [bbl/d]
    pub liquid_rate: BarrelsPerDay,
    /// Gas-liquid ratio [scf/stb]
    pub gas_liquid_ratio: ScfPerStb,
    /// Water cut [%]
    pub water_cut: f64,
    pub oil_api_gravity: f64,
    pub water_specific_gravity: f64,
    pub gas_specific_gravity: f64,
    #[serde(default)]
    pub non_hydrocarbons: NonHydrocarbons,
    /// Water formation volume factor [rb/stb]
    pub water_fvf: f64,
    /// Measured depth of the tubing shoe [ft]
    pub tubing_depth: Feet,
    /// Wellhead temperature [°F]
    pub wellhead_temperature: Fahrenheit,
    /// Geothermal gradient [°F/ft]
    pub temperature_gradient: f64,
    pub number_of_segments: usize,
}

impl WellConfiguration {
    /// 1.995 in tubing, 7500 ft, 2000 bbl/d at 10% water cut, 32 °API oil.
    pub fn reference() -> Self {
        Self {
            tubing_inner_diameter: 1.995,
            wellhead_pressure: 260.0,
            liquid_rate: 2000.0,
            gas_liquid_ratio: 150.0,
            water_cut: 10.0,
            oil_api_gravity: 32.0,
            water_specific_gravity: 1.05,
            gas_specific_gravity: 0.68,
            non_hydrocarbons: NonHydrocarbons::NONE,
            water_fvf: 1.02,
            tubing_depth: 7500.0,
            wellhead_temperature: 80.0,
            temperature_gradient: 0.013,
            number_of_segments: 5000,
        }
    }

    /// Length of one traverse segment [ft].
    pub fn segment_length(&self) -> Feet {
        self.tubing_depth / self.number_of_segments as f64
    }

    /// Temperature at `depth` from the linear geothermal gradient [°F].
    pub fn temperature_at(&self, depth: Feet) -> Fahrenheit {
        self.wellhead_temperature + depth * self.temperature_gradient
    }

    pub fn surface_fluid(&self) -> SurfaceFluid {
        SurfaceFluid {
            api_gravity: self.oil_api_gravity,
            gas_specific_gravity: self.gas_specific_gravity,
            water_specific_gravity: self.water_specific_gravity,
            water_fvf: self.water_fvf,
            non_hydrocarbons: self.non_hydrocarbons,
        }
    }

    /// Reject configurations that would divide by zero or leave the
    /// correlations' physical domain.
    pub fn validate(&self) -> TraverseResult<()> {
        ensure_positive(self.tubing_inner_diameter, "tubing inner diameter")?;
        ensure_positive(self.wellhead_pressure, "wellhead pressure")?;
        ensure_positive(self.liquid_rate, "liquid rate")?;
        ensure_non_negative(self.gas_liquid_ratio, "gas-liquid ratio")?;
        if !self.water_cut.is_finite() || !(0.0..=100.0).contains(&self.water_cut) {
            return Err(TraverseError::invalid(format!(
                "water cut must be within [0, 100] %, got {}",
                self.water_cut
            )));
        }
        if !self.oil_api_gravity.is_finite() || self.oil_api_gravity <= -131.5 {
            return Err(TraverseError::invalid(format!(
                "oil API gravity must be greater than -131.5, got {}",
                self.oil_api_gravity
            )));
        }
        ensure_positive(self.water_specific_gravity, "water specific gravity")?;
        ensure_positive(self.gas_specific_gravity, "gas specific gravity")?;
        ensure_positive(self.water_fvf, "water formation volume factor")?;
        self.non_hydrocarbons
            .validate()
            .map_err(|e| TraverseError::invalid(e.to_string()))?;
        ensure_positive(self.tubing_depth, "tubing depth")?;
        if self.number_of_segments == 0 {
            return Err(TraverseError::invalid("number of segments must be at least 1"));
        }
        ensure_finite(self.temperature_gradient, "temperature gradient")?;
        for (t, what) in [
            (self.wellhead_temperature, "wellhead temperature"),
            (self.temperature_at(self.tubing_depth), "bottomhole temperature"),
        ] {
            if !t.is_finite() || t + RANKINE_OFFSET <= 0.0 {
                return Err(TraverseError::invalid(format!(
                    "{what} must be above absolute zero, got {t} °F"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_valid() {
        let cfg = WellConfiguration::reference();
        cfg.validate().unwrap();
        assert_eq!(cfg.segment_length(), 1.5);
        assert!((cfg.temperature_at(7500.0) - 177.5).abs() < 1e-9);
    }

    #[test]
    fn reject_zero_segments() {
        let cfg = WellConfiguration {
            number_of_segments: 0,
            ..WellConfiguration::reference()
        };
        assert!(matches!(
            cfg.validate(),
            Err(TraverseError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn reject_non_positive_rates_and_gravities() {
        let base = WellConfiguration::reference();
        let cases = [
            WellConfiguration {
                liquid_rate: 0.0,
                ..base.clone()
            },
            WellConfiguration {
                gas_specific_gravity: 0.0,
                ..base.clone()
            },
            WellConfiguration {
                water_specific_gravity: -1.05,
                ..base.clone()
            },
            WellConfiguration {
                tubing_inner_diameter: 0.0,
                ..base.clone()
            },
            WellConfiguration {
                gas_liquid_ratio: -1.0,
                ..base.clone()
            },
            WellConfiguration {
                water_cut: 120.0,
                ..base.clone()
            },
            WellConfiguration {
                wellhead_pressure: f64::NAN,
                ..base.clone()
            },
        ];
        for cfg in cases {
            assert!(cfg.validate().is_err(), "accepted {cfg:?}");
        }
    }

    #[test]
    fn rejection_names_the_field() {
        let cfg = WellConfiguration {
            tubing_depth: 0.0,
            ..WellConfiguration::reference()
        };
        assert_eq!(
            cfg.validate().unwrap_err(),
            TraverseError::InvalidConfiguration {
                what: "tubing depth must be positive, got 0".to_string()
            }
        );

        let cfg = WellConfiguration {
            temperature_gradient: f64::INFINITY,
            ..WellConfiguration::reference()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("temperature gradient must be finite"));
    }

    #[test]
    fn reject_temperature_below_absolute_zero() {
        let cfg = WellConfiguration {
            temperature_gradient: -0.1,
            ..WellConfiguration::reference()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("bottomhole temperature"));
    }

    #[test]
    fn yaml_field_names_are_snake_case() {
        let json = serde_json::to_value(WellConfiguration::reference()).unwrap();
        assert_eq!(json["tubing_inner_diameter"], 1.995);
        assert_eq!(json["number_of_segments"], 5000);
        assert_eq!(json["non_hydrocarbons"]["co2"], 0.0);
    }

    #[test]
    fn non_hydrocarbons_default_when_missing() {
        let mut json = serde_json::to_value(WellConfiguration::reference()).unwrap();
        json.as_object_mut().unwrap().remove("non_hydrocarbons");
        let cfg: WellConfiguration = serde_json::from_value(json).unwrap();
        assert_eq!(cfg.non_hydrocarbons, NonHydrocarbons::NONE);
    }
}
