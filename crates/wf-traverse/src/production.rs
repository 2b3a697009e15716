//! Well-test rate splits and the two-phase friction parameter.

use crate::config::WellConfiguration;
use crate::error::{TraverseError, TraverseResult};
use wf_core::ensure_positive;
use wf_core::units::constants::IN_PER_FT;
use wf_core::units::{BarrelsPerDay, Inches, ScfPerStb};

/// Oil, water and gas rates derived from liquid rate, GLR and water cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionRates {
    /// [bbl/d]
    pub water_rate: BarrelsPerDay,
    /// [stb/d]
    pub oil_rate: BarrelsPerDay,
    /// [scf/d]
    pub gas_rate: f64,
    /// Gas per stock-tank barrel of oil [scf/stb]
    pub producing_gor: ScfPerStb,
    pub water_oil_ratio: f64,
}

impl ProductionRates {
    /// Split the well-test rates.
    ///
    /// Fails when the water cut leaves no oil, since both producing ratios
    /// are taken per barrel of oil.
    pub fn from_config(config: &WellConfiguration) -> TraverseResult<Self> {
        let gas_rate = config.gas_liquid_ratio * config.liquid_rate;
        let water_rate = config.water_cut / 100.0 * config.liquid_rate;
        let oil_rate = config.liquid_rate - water_rate;
        if oil_rate.is_nan() || oil_rate <= 0.0 {
            return Err(TraverseError::invalid(format!(
                "oil rate must be positive (liquid rate {} bbl/d, water rate {} bbl/d)",
                config.liquid_rate, water_rate
            )));
        }

        Ok(Self {
            water_rate,
            oil_rate,
            gas_rate,
            producing_gor: gas_rate / oil_rate,
            water_oil_ratio: water_rate / oil_rate,
        })
    }
}

/// Friction term of the pressure gradient, constant along the tubing since
/// mass flow and pipe geometry do not change with depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionParameters {
    /// Reynolds-number group `1.4737e-5 M qo / D` (D in ft).
    pub reynolds_group: f64,
    /// Fanning-type friction factor.
    pub friction_factor: f64,
    /// `K` in `dP/dz = (ρ + K/ρ) / 144` [lbm²/ft⁶].
    pub k: f64,
}

impl FrictionParameters {
    pub fn new(
        tubing_inner_diameter: Inches,
        oil_rate: BarrelsPerDay,
        mass_flow_constant: f64,
    ) -> TraverseResult<Self> {
        let diameter_ft = tubing_inner_diameter / IN_PER_FT;
        let reynolds_group = 1.4737e-5 * mass_flow_constant * oil_rate / diameter_ft;
        ensure_positive(reynolds_group, "Reynolds group")?;

        // Natural logarithm of the Reynolds group, as in the reference correlation.
        let friction_factor = 4.0 * 10f64.powf(1.444 - 2.5 * reynolds_group.ln());
        let k = friction_factor * oil_rate.powi(2) * mass_flow_constant.powi(2)
            / (7.4137e10 * diameter_ft.powi(5));

        Ok(Self {
            reynolds_group,
            friction_factor,
            k,
        })
    }
}
