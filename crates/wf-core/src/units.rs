//! Field units.
//!
//! Every quantity in wellflow is carried as a plain `f64` in oilfield units.
//! The aliases below document which unit a value is in; no conversion
//! machinery is provided.

/// Pressure [psia].
pub type Psia = f64;

/// Temperature [°F].
pub type Fahrenheit = f64;

/// Absolute temperature [°R].
pub type Rankine = f64;

/// Length along the tubing [ft].
pub type Feet = f64;

/// Diameter [in].
pub type Inches = f64;

/// Liquid rate [bbl/d].
pub type BarrelsPerDay = f64;

/// Gas-oil or gas-liquid ratio [scf/stb].
pub type ScfPerStb = f64;

/// Density [lbm/ft³].
pub type LbmPerFt3 = f64;

/// Dynamic viscosity [cp].
pub type Centipoise = f64;

/// Convert °F to °R.
#[inline]
pub fn rankine(t: Fahrenheit) -> Rankine {
    t + constants::RANKINE_OFFSET
}

pub mod constants {
    /// °F → °R offset used by the correlations.
    pub const RANKINE_OFFSET: f64 = 460.0;

    /// Standard-condition pressure [psia].
    pub const STANDARD_PRESSURE_PSIA: f64 = 14.7;

    /// Standard-condition temperature [°R].
    pub const STANDARD_TEMPERATURE_R: f64 = 520.0;

    /// Universal gas constant [psia·ft³/(lb-mol·°R)].
    pub const GAS_CONSTANT: f64 = 10.73;

    /// Cubic feet per barrel.
    pub const FT3_PER_BBL: f64 = 5.615;

    /// Molecular weight of air [lb/lb-mol].
    pub const AIR_MOLECULAR_WEIGHT: f64 = 28.97;

    /// Density of fresh water [lbm/ft³].
    pub const WATER_DENSITY_LBM_FT3: f64 = 62.4;

    /// lbm/ft² → psi (in² per ft²).
    pub const IN2_PER_FT2: f64 = 144.0;

    /// Inches per foot.
    pub const IN_PER_FT: f64 = 12.0;
}
