//! Text renderings of traverse profiles and PVT sweeps.

use std::fmt::Write as _;
use std::path::Path;
use wf_pvt::SweepResult;
use wf_traverse::TraverseProfile;

pub const PROFILE_CSV_HEADER: &str = "depth_ft,pressure_psia,temperature_f,density_lbm_ft3,solution_gor_scf_stb,average_density_lbm_ft3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` exports JSON, everything else CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// One row per profile point. The wellhead row has no segment average.
pub fn profile_csv(profile: &TraverseProfile) -> String {
    let mut csv = String::from(PROFILE_CSV_HEADER);
    csv.push('\n');
    let averages = profile.average_densities();
    for (i, point) in profile.points().iter().enumerate() {
        let average = match i.checked_sub(1).and_then(|s| averages.get(s)) {
            Some(avg) => avg.to_string(),
            None => String::new(),
        };
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{}",
            point.depth,
            point.pressure,
            point.temperature,
            point.density,
            point.solution_gor,
            average
        );
    }
    csv
}

pub fn profile_json(profile: &TraverseProfile) -> serde_json::Result<String> {
    serde_json::to_string_pretty(profile)
}

pub fn sweep_table(sweep: &SweepResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "T = {:.2} °F", sweep.temperature);
    let _ = writeln!(
        out,
        "{:>12} {:>12} {:>10} {:>10} {:>12}  state",
        "P [psia]", "Rs [scf/stb]", "Bo", "Z", "mu_g [cp]"
    );
    for p in &sweep.points {
        let _ = writeln!(
            out,
            "{:>12.2} {:>12.3} {:>10.5} {:>10.5} {:>12.6}  {}",
            p.pressure,
            p.solution_gor,
            p.oil_fvf,
            p.z,
            p.gas_viscosity,
            if p.is_saturated() { "saturated" } else { "free gas" }
        );
    }
    out
}
