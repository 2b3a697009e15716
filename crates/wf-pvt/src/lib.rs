//! wf-pvt: black-oil PVT correlations for wellflow.
//!
//! Provides:
//! - Standing oil correlations (bubble point, solution GOR, oil FVF)
//! - Sutton / Carr-Kobayashi pseudo-critical properties
//! - Redlich-Kwong gas compressibility factor with an explicit root policy
//! - Lee-Gonzalez-Eakin gas viscosity
//! - `PvtModel` trait and the `BlackOilModel` implementation
//! - Pressure sweeps for property tables
//!
//! All quantities are in oilfield units (psia, °F, scf/stb, lbm/ft³, cp).
//!
//! # Example
//!
//! ```
//! use wf_pvt::{BlackOilModel, FluidCharacterization, NonHydrocarbons, PvtModel, SurfaceFluid,
//!     ThermodynamicState};
//!
//! let surface = SurfaceFluid {
//!     api_gravity: 32.0,
//!     gas_specific_gravity: 0.68,
//!     water_specific_gravity: 1.05,
//!     water_fvf: 1.02,
//!     non_hydrocarbons: NonHydrocarbons::NONE,
//! };
//! let fluid = FluidCharacterization::new(surface, 166.7, 0.11).unwrap();
//! let state = ThermodynamicState::new(260.0, 80.0).unwrap();
//!
//! let props = BlackOilModel::default().properties(&fluid, &state).unwrap();
//! println!("Density: {} lbm/ft3", props.density);
//! ```

pub mod cubic;
pub mod error;
pub mod fluid;
pub mod gas;
pub mod model;
pub mod oil;
pub mod state;
pub mod sweep;

// Re-exports for ergonomics
pub use error::{PvtError, PvtResult};
pub use fluid::{FluidCharacterization, NonHydrocarbons, SurfaceFluid};
pub use gas::{
    CriticalPropertyMethod, PseudoCritical, ZRootPolicy, carr_kobayashi_corrected,
    critical_pressure_sutton, critical_temperature_sutton, gas_compressibility_factor,
    gas_density, gas_molecular_weight, gas_viscosity,
};
pub use model::{BlackOilModel, FluidProperties, PvtModel};
pub use oil::{
    bubble_point_pressure, oil_formation_volume_factor, solution_gor, specific_gravity_of_oil,
};
pub use state::ThermodynamicState;
pub use sweep::{PvtPoint, SweepDefinition, SweepResult, SweepSpacing, pressure_sweep};
