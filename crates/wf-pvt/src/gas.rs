//! Natural-gas correlations: pseudo-critical properties, Redlich-Kwong
//! Z-factor and Lee-Gonzalez-Eakin viscosity.

use crate::cubic;
use crate::error::{PvtError, PvtResult};
use crate::fluid::NonHydrocarbons;
use crate::state::ThermodynamicState;
use wf_core::units::constants::{AIR_MOLECULAR_WEIGHT, GAS_CONSTANT, WATER_DENSITY_LBM_FT3};
use wf_core::ensure_positive;
use wf_core::units::{Centipoise, Fahrenheit, LbmPerFt3, Psia, Rankine, rankine};

/// Pseudo-critical pressure and temperature of a gas mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoCritical {
    /// [psia]
    pub pressure: Psia,
    /// [°R]
    pub temperature: Rankine,
}

/// Sutton pseudo-critical pressure [psia]. Intended for gas gravity 0.55-1.5.
pub fn critical_pressure_sutton(sg_gas: f64) -> Psia {
    756.8 - 131.0 * sg_gas - 3.6 * sg_gas.powi(2)
}

/// Sutton pseudo-critical temperature [°R]. Intended for gas gravity 0.55-1.5.
pub fn critical_temperature_sutton(sg_gas: f64) -> Rankine {
    169.2 + 349.0 * sg_gas - 74.0 * sg_gas.powi(2)
}

/// Sutton pseudo-critical properties with the Carr-Kobayashi-Burrows
/// corrections for CO2, H2S and N2.
pub fn carr_kobayashi_corrected(sg_gas: f64, co2: f64, h2s: f64, n2: f64) -> PseudoCritical {
    PseudoCritical {
        pressure: critical_pressure_sutton(sg_gas) + 440.0 * co2 + 600.0 * h2s - 170.0 * n2,
        temperature: critical_temperature_sutton(sg_gas) - 80.0 * co2 + 130.0 * h2s
            - 250.0 * n2,
    }
}

/// How pseudo-critical properties are obtained from gas gravity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CriticalPropertyMethod {
    /// Sutton, ignoring non-hydrocarbons.
    Sutton,
    /// Sutton plus Carr-Kobayashi-Burrows non-hydrocarbon corrections.
    #[default]
    CarrKobayashi,
}

impl CriticalPropertyMethod {
    pub fn pseudo_critical(
        self,
        sg_gas: f64,
        impurities: &NonHydrocarbons,
    ) -> PvtResult<PseudoCritical> {
        ensure_positive(sg_gas, "gas specific gravity")?;
        let pc = match self {
            CriticalPropertyMethod::Sutton => PseudoCritical {
                pressure: critical_pressure_sutton(sg_gas),
                temperature: critical_temperature_sutton(sg_gas),
            },
            CriticalPropertyMethod::CarrKobayashi => {
                carr_kobayashi_corrected(sg_gas, impurities.co2, impurities.h2s, impurities.n2)
            }
        };
        if !(pc.pressure > 0.0 && pc.temperature > 0.0) {
            return Err(PvtError::NonPhysical {
                what: "pseudo-critical properties must be positive",
            });
        }
        Ok(pc)
    }
}

/// Which root of the Redlich-Kwong cubic is reported as Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZRootPolicy {
    /// Smallest real positive root.
    #[default]
    Smallest,
    /// Largest real positive root (vapor-like branch).
    Largest,
    /// Exactly one real positive root, otherwise [`PvtError::AmbiguousRoots`].
    Unique,
}

/// Dimensionless Redlich-Kwong parameters `(A, B)` at (P, T).
pub fn redlich_kwong_coefficients(p: Psia, t_r: Rankine, pc: PseudoCritical) -> (f64, f64) {
    let r = GAS_CONSTANT;
    let a = 0.42727 * r.powi(2) * pc.temperature.powf(2.5) / pc.pressure;
    let b = 0.08664 * r * pc.temperature / pc.pressure;
    let big_a = a * p / (r.powi(2) * t_r.powf(2.5));
    let big_b = b * p / (r * t_r);
    (big_a, big_b)
}

/// All real roots of `Z³ - Z² + (A - B - B²) Z - A B = 0`, ascending.
pub fn redlich_kwong_roots(p: Psia, t: Fahrenheit, pc: PseudoCritical) -> Vec<f64> {
    let (a, b) = redlich_kwong_coefficients(p, rankine(t), pc);
    cubic::real_roots(-1.0, a - b - b * b, -a * b)
}

/// Pick Z among the real roots according to `policy`.
pub fn select_root(roots: &[f64], policy: ZRootPolicy, p: Psia, t: Fahrenheit) -> PvtResult<f64> {
    let positive: Vec<f64> = roots.iter().copied().filter(|z| *z > 0.0).collect();
    match positive.len() {
        0 => Err(PvtError::NoPhysicalRoot {
            pressure: p,
            temperature: t,
            roots: roots.to_vec(),
        }),
        1 => Ok(positive[0]),
        _ => match policy {
            ZRootPolicy::Smallest => Ok(positive.iter().copied().fold(f64::INFINITY, f64::min)),
            ZRootPolicy::Largest => Ok(positive.iter().copied().fold(0.0, f64::max)),
            ZRootPolicy::Unique => Err(PvtError::AmbiguousRoots {
                pressure: p,
                temperature: t,
                roots: positive,
            }),
        },
    }
}

/// Z-factor from known pseudo-critical properties.
pub fn z_factor(p: Psia, t: Fahrenheit, pc: PseudoCritical, policy: ZRootPolicy) -> PvtResult<f64> {
    ThermodynamicState::new(p, t)?;
    let roots = redlich_kwong_roots(p, t, pc);
    select_root(&roots, policy, p, t)
}

/// Gas compressibility factor via Redlich-Kwong with Carr-Kobayashi corrected
/// critical properties, smallest positive root.
pub fn gas_compressibility_factor(
    p: Psia,
    t: Fahrenheit,
    sg_gas: f64,
    co2: f64,
    h2s: f64,
    n2: f64,
) -> PvtResult<f64> {
    let impurities = NonHydrocarbons { co2, h2s, n2 };
    let pc = CriticalPropertyMethod::CarrKobayashi.pseudo_critical(sg_gas, &impurities)?;
    z_factor(p, t, pc, ZRootPolicy::default())
}

/// Apparent molecular weight of a gas from its specific gravity [lb/lb-mol].
pub fn gas_molecular_weight(sg_gas: f64) -> f64 {
    AIR_MOLECULAR_WEIGHT * sg_gas
}

/// Real-gas density `MW·P / (Z·R·T)` [lbm/ft³].
pub fn gas_density(p: Psia, t: Fahrenheit, molecular_weight: f64, z: f64) -> LbmPerFt3 {
    molecular_weight * p / (z * GAS_CONSTANT * rankine(t))
}

/// Lee-Gonzalez-Eakin gas viscosity [cp].
pub fn gas_viscosity(
    p: Psia,
    t: Fahrenheit,
    sg_gas: f64,
    co2: f64,
    h2s: f64,
    molecular_weight: f64,
    n2: f64,
) -> PvtResult<Centipoise> {
    ensure_positive(molecular_weight, "gas molecular weight")?;
    let z = gas_compressibility_factor(p, t, sg_gas, co2, h2s, n2)?;
    Ok(lee_gonzalez_eakin(p, t, molecular_weight, z))
}

/// Lee-Gonzalez-Eakin with a known Z-factor.
pub(crate) fn lee_gonzalez_eakin(p: Psia, t: Fahrenheit, molecular_weight: f64, z: f64) -> Centipoise {
    let t_r = rankine(t);
    let density = gas_density(p, t, molecular_weight, z);
    let x = 3.5 + 986.0 / t_r + 0.01 * molecular_weight;
    let y = 2.4 - 0.2 * x;
    let k = (9.4 + 0.02 * molecular_weight) * t_r.powf(1.5) * 1e-4
        / (209.0 + 19.0 * molecular_weight + t_r);
    k * (x * (density / WATER_DENSITY_LBM_FT3).powf(y)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sutton_reference_values() {
        assert!((critical_pressure_sutton(0.68) - 666.055_36).abs() < 1e-9);
        assert!((critical_temperature_sutton(0.68) - 372.3024).abs() < 1e-9);
    }

    #[test]
    fn carr_kobayashi_reduces_to_sutton_for_sweet_gas() {
        let pc = carr_kobayashi_corrected(0.7, 0.0, 0.0, 0.0);
        assert_eq!(pc.pressure, critical_pressure_sutton(0.7));
        assert_eq!(pc.temperature, critical_temperature_sutton(0.7));
    }

    #[test]
    fn carr_kobayashi_corrections_are_additive() {
        let base = carr_kobayashi_corrected(0.7, 0.0, 0.0, 0.0);
        let sour = carr_kobayashi_corrected(0.7, 0.1, 0.05, 0.02);
        assert!((sour.pressure - base.pressure - (44.0 + 30.0 - 3.4)).abs() < 1e-9);
        assert!((sour.temperature - base.temperature - (-8.0 + 6.5 - 5.0)).abs() < 1e-9);
    }

    #[test]
    fn ideal_gas_limit_at_low_pressure() {
        let z = gas_compressibility_factor(14.7, 60.0, 0.68, 0.0, 0.0, 0.0).unwrap();
        assert!((z - 1.0).abs() < 0.01, "z = {z}");
    }

    #[test]
    fn z_factor_reference_values() {
        let z = gas_compressibility_factor(2000.0, 200.0, 0.68, 0.0, 0.0, 0.0).unwrap();
        assert!((z - 0.901_944_8).abs() < 1e-6, "z = {z}");

        let sour = gas_compressibility_factor(1000.0, 100.0, 0.7, 0.05, 0.02, 0.01).unwrap();
        assert!((sour - 0.871_828_4).abs() < 1e-6, "z = {sour}");
    }

    #[test]
    fn three_positive_roots_follow_policy() {
        // Cold, light gas: the cubic has liquid-like, middle and vapor-like roots.
        let pc = CriticalPropertyMethod::CarrKobayashi
            .pseudo_critical(0.68, &NonHydrocarbons::NONE)
            .unwrap();
        let roots = redlich_kwong_roots(50.0, -150.0, pc);
        assert_eq!(roots.len(), 3);
        assert!(roots.iter().all(|r| *r > 0.0));

        let smallest = z_factor(50.0, -150.0, pc, ZRootPolicy::Smallest).unwrap();
        let largest = z_factor(50.0, -150.0, pc, ZRootPolicy::Largest).unwrap();
        assert!((smallest - 0.013_357_2).abs() < 1e-6, "smallest = {smallest}");
        assert!((largest - 0.955_618_0).abs() < 1e-6, "largest = {largest}");

        let err = z_factor(50.0, -150.0, pc, ZRootPolicy::Unique).unwrap_err();
        match err {
            PvtError::AmbiguousRoots { roots, .. } => assert_eq!(roots.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn no_positive_root_is_an_error() {
        let err = select_root(&[-0.5, -0.1], ZRootPolicy::Smallest, 100.0, 80.0).unwrap_err();
        assert!(matches!(err, PvtError::NoPhysicalRoot { .. }));
        assert!(select_root(&[], ZRootPolicy::Largest, 100.0, 80.0).is_err());
    }

    #[test]
    fn zero_root_is_not_physical() {
        let err = select_root(&[0.0], ZRootPolicy::Smallest, 100.0, 80.0).unwrap_err();
        assert!(err.is_equation_of_state());
    }

    #[test]
    fn reject_non_physical_inputs() {
        assert!(gas_compressibility_factor(0.0, 80.0, 0.68, 0.0, 0.0, 0.0).is_err());
        assert!(gas_compressibility_factor(100.0, -470.0, 0.68, 0.0, 0.0, 0.0).is_err());
        assert!(gas_compressibility_factor(100.0, 80.0, 0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn viscosity_reference_values() {
        let mw = gas_molecular_weight(0.68);
        let mu = gas_viscosity(2000.0, 200.0, 0.68, 0.0, 0.0, mw, 0.0).unwrap();
        assert!((mu - 0.016_679).abs() < 1e-5, "mu = {mu}");

        let mu_low = gas_viscosity(14.7, 200.0, 0.68, 0.0, 0.0, mw, 0.0).unwrap();
        assert!((mu_low - 0.013_360).abs() < 1e-5, "mu = {mu_low}");
        assert!(mu_low < mu);
    }

    #[test]
    fn viscosity_rejects_bad_molecular_weight() {
        assert!(gas_viscosity(1000.0, 100.0, 0.68, 0.0, 0.0, 0.0, 0.0).is_err());
    }
}
