//! Surface fluid characterization.

use crate::error::{PvtError, PvtResult};
use crate::oil::specific_gravity_of_oil;
use wf_core::units::ScfPerStb;
use wf_core::{ensure_non_negative, ensure_positive};

/// Mole fractions of the non-hydrocarbon gas components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonHydrocarbons {
    #[cfg_attr(feature = "serde", serde(default))]
    pub co2: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub h2s: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub n2: f64,
}

impl NonHydrocarbons {
    /// Sweet, nitrogen-free gas.
    pub const NONE: Self = Self {
        co2: 0.0,
        h2s: 0.0,
        n2: 0.0,
    };

    pub fn new(co2: f64, h2s: f64, n2: f64) -> PvtResult<Self> {
        let fractions = Self { co2, h2s, n2 };
        fractions.validate()?;
        Ok(fractions)
    }

    /// Each fraction in [0, 1] and their sum at most 1.
    pub fn validate(&self) -> PvtResult<()> {
        for (value, what) in [
            (self.co2, "CO2 mole fraction must be within [0, 1]"),
            (self.h2s, "H2S mole fraction must be within [0, 1]"),
            (self.n2, "N2 mole fraction must be within [0, 1]"),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PvtError::NonPhysical { what });
            }
        }
        if self.total() > 1.0 {
            return Err(PvtError::NonPhysical {
                what: "non-hydrocarbon mole fractions must sum to at most 1",
            });
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.co2 + self.h2s + self.n2
    }
}

/// Stock-tank description of the produced oil, gas and water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFluid {
    pub api_gravity: f64,
    pub gas_specific_gravity: f64,
    pub water_specific_gravity: f64,
    /// Water formation volume factor [rb/stb].
    pub water_fvf: f64,
    pub non_hydrocarbons: NonHydrocarbons,
}

/// Immutable fluid description shared by every PVT evaluation of a traverse.
///
/// Built from the surface fluid plus the producing ratios of a well test.
/// The total mass-flow constant `M` (lbm of produced mixture per stb of oil)
/// does not depend on pressure or temperature, so it is computed once here.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidCharacterization {
    surface: SurfaceFluid,
    producing_gor: ScfPerStb,
    water_oil_ratio: f64,
    oil_specific_gravity: f64,
    mass_flow_constant: f64,
}

impl FluidCharacterization {
    /// Validate the surface description and derive `M`.
    pub fn new(
        surface: SurfaceFluid,
        producing_gor: ScfPerStb,
        water_oil_ratio: f64,
    ) -> PvtResult<Self> {
        if !surface.api_gravity.is_finite() || surface.api_gravity <= -131.5 {
            return Err(PvtError::NonPhysical {
                what: "API gravity must be finite and greater than -131.5",
            });
        }
        ensure_positive(surface.gas_specific_gravity, "gas specific gravity")?;
        ensure_positive(surface.water_specific_gravity, "water specific gravity")?;
        ensure_positive(surface.water_fvf, "water formation volume factor")?;
        surface.non_hydrocarbons.validate()?;
        ensure_non_negative(producing_gor, "producing GOR")?;
        ensure_non_negative(water_oil_ratio, "water-oil ratio")?;

        let oil_specific_gravity = specific_gravity_of_oil(surface.api_gravity);
        let mass_flow_constant = 350.17
            * (oil_specific_gravity + water_oil_ratio * surface.water_specific_gravity)
            + producing_gor * surface.gas_specific_gravity * 0.0765;

        Ok(Self {
            surface,
            producing_gor,
            water_oil_ratio,
            oil_specific_gravity,
            mass_flow_constant,
        })
    }

    pub fn surface(&self) -> &SurfaceFluid {
        &self.surface
    }

    pub fn api_gravity(&self) -> f64 {
        self.surface.api_gravity
    }

    pub fn gas_specific_gravity(&self) -> f64 {
        self.surface.gas_specific_gravity
    }

    pub fn water_specific_gravity(&self) -> f64 {
        self.surface.water_specific_gravity
    }

    pub fn water_fvf(&self) -> f64 {
        self.surface.water_fvf
    }

    pub fn non_hydrocarbons(&self) -> &NonHydrocarbons {
        &self.surface.non_hydrocarbons
    }

    pub fn oil_specific_gravity(&self) -> f64 {
        self.oil_specific_gravity
    }

    /// Producing gas-oil ratio, also the bubble-point solution GOR [scf/stb].
    pub fn producing_gor(&self) -> ScfPerStb {
        self.producing_gor
    }

    pub fn water_oil_ratio(&self) -> f64 {
        self.water_oil_ratio
    }

    /// Total mass-flow constant `M` [lbm/stb oil].
    pub fn mass_flow_constant(&self) -> f64 {
        self.mass_flow_constant
    }
}
