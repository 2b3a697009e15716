//! Standing black-oil correlations.
//!
//! Temperatures are in °F, pressures in psia, gas-oil ratios in scf/stb.
//! These are total functions; callers validate their inputs up front
//! (see [`FluidCharacterization`](crate::FluidCharacterization)).

use wf_core::units::{Fahrenheit, Psia, ScfPerStb};

/// Oil specific gravity (water = 1) from API gravity.
pub fn specific_gravity_of_oil(api_gravity: f64) -> f64 {
    141.5 / (api_gravity + 131.5)
}

/// Standing bubble-point pressure for a given solution GOR at bubble point.
pub fn bubble_point_pressure(rsb: ScfPerStb, sg_gas: f64, t: Fahrenheit, api: f64) -> Psia {
    18.2 * ((rsb / sg_gas).powf(0.83) * 10f64.powf(0.00091 * t - 0.0125 * api) - 1.4)
}

/// Standing solution gas-oil ratio.
///
/// Below the bubble point (strictly) the oil holds the Standing amount of gas
/// for the current pressure; at or above it the oil is saturated with the
/// full producing GOR `rsb`.
pub fn solution_gor(rsb: ScfPerStb, sg_gas: f64, p: Psia, api: f64, t: Fahrenheit) -> ScfPerStb {
    if p < bubble_point_pressure(rsb, sg_gas, t, api) {
        sg_gas * ((p / 18.2 + 1.4) * 10f64.powf(0.0125 * api - 0.00091 * t)).powf(1.2048)
    } else {
        rsb
    }
}

/// Standing oil formation volume factor [rb/stb].
pub fn oil_formation_volume_factor(
    rsb: ScfPerStb,
    sg_gas: f64,
    p: Psia,
    api: f64,
    t: Fahrenheit,
) -> f64 {
    let rs = solution_gor(rsb, sg_gas, p, api, t);
    formation_volume_factor_from_gor(rs, sg_gas, api, t)
}

/// Standing FVF for an already known solution GOR.
pub fn formation_volume_factor_from_gor(rs: ScfPerStb, sg_gas: f64, api: f64, t: Fahrenheit) -> f64 {
    let sg_oil = specific_gravity_of_oil(api);
    0.972 + 0.000147 * (rs * (sg_gas / sg_oil).sqrt() + 1.25 * t).powf(1.175)
}
