//! PVT model trait and the black-oil implementation used by the traverse.

use crate::error::PvtResult;
use crate::fluid::FluidCharacterization;
use crate::gas::{self, CriticalPropertyMethod, PseudoCritical, ZRootPolicy};
use crate::oil;
use crate::state::ThermodynamicState;
use wf_core::ensure_positive;
use wf_core::units::constants::{FT3_PER_BBL, STANDARD_PRESSURE_PSIA, STANDARD_TEMPERATURE_R};
use wf_core::units::{Centipoise, Fahrenheit, LbmPerFt3, Psia, ScfPerStb};

/// Fluid properties of the produced mixture at one (P, T) state.
///
/// Recomputed fresh for every evaluation; never updated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidProperties {
    /// Pressure [psia]
    pub pressure: Psia,

    /// Temperature [°F]
    pub temperature: Fahrenheit,

    /// Solution gas-oil ratio [scf/stb]
    pub solution_gor: ScfPerStb,

    /// Oil formation volume factor [rb/stb]
    pub oil_fvf: f64,

    /// Gas compressibility factor
    pub z: f64,

    /// In-situ volume of oil, water and free gas per stb of oil [ft³/stb]
    pub mixture_volume: f64,

    /// Mixture density [lbm/ft³]
    pub density: LbmPerFt3,
}

impl FluidProperties {
    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Props(P={:.2}psia,T={:.2}F,Rs={:.2}scf/stb,Bo={:.4},Z={:.4},V={:.3}ft3/stb,rho={:.3}lbm/ft3)",
            self.pressure,
            self.temperature,
            self.solution_gor,
            self.oil_fvf,
            self.z,
            self.mixture_volume,
            self.density
        )
    }
}

/// Trait for PVT property models.
///
/// Implementations must be thread-safe (Send + Sync) so independent traverses
/// can share one model.
pub trait PvtModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Bubble-point pressure [psia] at temperature `t` [°F].
    fn bubble_point(&self, fluid: &FluidCharacterization, t: Fahrenheit) -> PvtResult<Psia>;

    /// Solution gas-oil ratio [scf/stb].
    fn solution_gor(
        &self,
        fluid: &FluidCharacterization,
        state: &ThermodynamicState,
    ) -> PvtResult<ScfPerStb>;

    /// Oil formation volume factor [rb/stb].
    fn oil_fvf(&self, fluid: &FluidCharacterization, state: &ThermodynamicState)
    -> PvtResult<f64>;

    /// Gas compressibility factor.
    fn z_factor(&self, fluid: &FluidCharacterization, state: &ThermodynamicState)
    -> PvtResult<f64>;

    /// Gas viscosity [cp].
    fn gas_viscosity(
        &self,
        fluid: &FluidCharacterization,
        state: &ThermodynamicState,
    ) -> PvtResult<Centipoise>;

    /// Everything the traverse needs at one state in a single call.
    ///
    /// Mixture volume per stb of oil is the oil and water in place plus the
    /// gas that has come out of solution, taken from standard to in-situ
    /// conditions:
    /// `V = 5.615 (Bo + WOR Bw) + (Rp - Rs)(14.7 / P)(T / 520) Z`.
    fn properties(
        &self,
        fluid: &FluidCharacterization,
        state: &ThermodynamicState,
    ) -> PvtResult<FluidProperties> {
        let p = state.pressure();
        let solution_gor = self.solution_gor(fluid, state)?;
        let oil_fvf = self.oil_fvf(fluid, state)?;
        let z = self.z_factor(fluid, state)?;

        let liquid_volume =
            FT3_PER_BBL * (oil_fvf + fluid.water_oil_ratio() * fluid.water_fvf());
        let free_gas_volume = (fluid.producing_gor() - solution_gor)
            * (STANDARD_PRESSURE_PSIA / p)
            * (state.rankine() / STANDARD_TEMPERATURE_R)
            * z;
        let mixture_volume = liquid_volume + free_gas_volume;
        ensure_positive(mixture_volume, "mixture volume")?;

        Ok(FluidProperties {
            pressure: p,
            temperature: state.temperature(),
            solution_gor,
            oil_fvf,
            z,
            mixture_volume,
            density: fluid.mass_flow_constant() / mixture_volume,
        })
    }
}

/// Standing oil correlations with a Redlich-Kwong gas phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackOilModel {
    pub critical_properties: CriticalPropertyMethod,
    pub z_root: ZRootPolicy,
}

impl BlackOilModel {
    pub fn new(critical_properties: CriticalPropertyMethod, z_root: ZRootPolicy) -> Self {
        Self {
            critical_properties,
            z_root,
        }
    }

    pub fn pseudo_critical(&self, fluid: &FluidCharacterization) -> PvtResult<PseudoCritical> {
        self.critical_properties
            .pseudo_critical(fluid.gas_specific_gravity(), fluid.non_hydrocarbons())
    }
}

impl PvtModel for BlackOilModel {
    fn name(&self) -> &str {
        match self.critical_properties {
            CriticalPropertyMethod::Sutton => "standing-rk-sutton",
            CriticalPropertyMethod::CarrKobayashi => "standing-rk-carr-kobayashi",
        }
    }

    fn bubble_point(&self, fluid: &FluidCharacterization, t: Fahrenheit) -> PvtResult<Psia> {
        Ok(oil::bubble_point_pressure(
            fluid.producing_gor(),
            fluid.gas_specific_gravity(),
            t,
            fluid.api_gravity(),
        ))
    }

    fn solution_gor(
        &self,
        fluid: &FluidCharacterization,
        state: &ThermodynamicState,
    ) -> PvtResult<ScfPerStb> {
        Ok(oil::solution_gor(
            fluid.producing_gor(),
            fluid.gas_specific_gravity(),
            state.pressure(),
            fluid.api_gravity(),
            state.temperature(),
        ))
    }

    fn oil_fvf(
        &self,
        fluid: &FluidCharacterization,
        state: &ThermodynamicState,
    ) -> PvtResult<f64> {
        Ok(oil::oil_formation_volume_factor(
            fluid.producing_gor(),
            fluid.gas_specific_gravity(),
            state.pressure(),
            fluid.api_gravity(),
            state.temperature(),
        ))
    }

    fn z_factor(
        &self,
        fluid: &FluidCharacterization,
        state: &ThermodynamicState,
    ) -> PvtResult<f64> {
        let pc = self.pseudo_critical(fluid)?;
        gas::z_factor(state.pressure(), state.temperature(), pc, self.z_root)
    }

    fn gas_viscosity(
        &self,
        fluid: &FluidCharacterization,
        state: &ThermodynamicState,
    ) -> PvtResult<Centipoise> {
        let z = self.z_factor(fluid, state)?;
        let mw = gas::gas_molecular_weight(fluid.gas_specific_gravity());
        Ok(gas::lee_gonzalez_eakin(
            state.pressure(),
            state.temperature(),
            mw,
            z,
        ))
    }
}
