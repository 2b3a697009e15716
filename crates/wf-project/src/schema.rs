//! Serializable project definitions.

use serde::{Deserialize, Serialize};
use wf_pvt::{CriticalPropertyMethod, ZRootPolicy};
use wf_traverse::{FixedPointConfig, TraverseOptions, WellConfiguration};

/// A single-well project: the well definition plus solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellProject {
    pub version: u32,
    pub name: String,
    pub well: WellConfiguration,
    #[serde(default)]
    pub solver: SolverDef,
}

impl WellProject {
    /// The 7500 ft reference well with default solver settings.
    pub fn reference() -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "Reference well".to_string(),
            well: WellConfiguration::reference(),
            solver: SolverDef::default(),
        }
    }

    pub fn options(&self) -> TraverseOptions {
        self.solver.to_options()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverDef {
    pub tolerance: f64,
    pub max_iterations: usize,
    pub critical_properties: CriticalPropertyMethod,
    pub z_root: ZRootPolicy,
}

impl Default for SolverDef {
    fn default() -> Self {
        let solver = FixedPointConfig::default();
        Self {
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
            critical_properties: CriticalPropertyMethod::default(),
            z_root: ZRootPolicy::default(),
        }
    }
}

impl SolverDef {
    pub fn to_options(&self) -> TraverseOptions {
        TraverseOptions {
            solver: FixedPointConfig {
                tolerance: self.tolerance,
                max_iterations: self.max_iterations,
            },
            critical_properties: self.critical_properties,
            z_root: self.z_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_solver_section_uses_defaults() {
        let mut yaml = serde_yaml::to_value(WellProject::reference()).unwrap();
        yaml.as_mapping_mut().unwrap().remove("solver");
        let project: WellProject = serde_yaml::from_value(yaml).unwrap();
        assert_eq!(project.solver, SolverDef::default());
        assert_eq!(project.options(), TraverseOptions::default());
    }

    #[test]
    fn partial_solver_section() {
        let yaml = "tolerance: 0.0001\nz_root: largest\n";
        let solver: SolverDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(solver.tolerance, 1e-4);
        assert_eq!(solver.max_iterations, 5000);
        assert_eq!(solver.z_root, ZRootPolicy::Largest);
        assert_eq!(solver.critical_properties, CriticalPropertyMethod::CarrKobayashi);
    }
}
