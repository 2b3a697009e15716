//! Marching pressure traverse from the wellhead down to the tubing shoe.
//!
//! The tubing is split into equal segments. For each segment the pressure at
//! its lower boundary is found by fixed-point iteration: fluid properties are
//! evaluated at the trial pressure, averaged with the density at the upper
//! boundary, and the hydrostatic-plus-friction gradient over one segment is
//! added to the trial pressure until the relative change drops below the
//! tolerance. Temperature follows the geothermal gradient and is not iterated.

use crate::config::WellConfiguration;
use crate::error::{TraverseError, TraverseResult};
use crate::fixed_point::{self, FixedPointConfig};
use crate::production::{FrictionParameters, ProductionRates};
use crate::profile::{ProfilePoint, TraverseProfile};
use tracing::{debug, info, warn};
use wf_core::units::constants::IN2_PER_FT2;
use wf_core::units::{Fahrenheit, Feet, LbmPerFt3, Psia};
use wf_pvt::{
    BlackOilModel, CriticalPropertyMethod, FluidCharacterization, FluidProperties, PvtError,
    PvtModel, ThermodynamicState, ZRootPolicy,
};

/// Solver and fluid-model options of a traverse.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraverseOptions {
    pub solver: FixedPointConfig,
    pub critical_properties: CriticalPropertyMethod,
    pub z_root: ZRootPolicy,
}

impl TraverseOptions {
    pub fn model(&self) -> BlackOilModel {
        BlackOilModel::new(self.critical_properties, self.z_root)
    }
}

/// Emitted after each converged segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraverseProgressEvent {
    /// 1-based segment index
    pub segment: usize,
    pub number_of_segments: usize,
    pub depth: Feet,
    pub pressure: Psia,
    pub iterations: usize,
    pub fraction_complete: f64,
}

/// Run a traverse with the default black-oil model and solver settings.
pub fn run_traverse(config: &WellConfiguration) -> TraverseResult<TraverseProfile> {
    run_traverse_with(config, &TraverseOptions::default(), None)
}

/// Run a traverse with explicit options and an optional progress callback.
pub fn run_traverse_with(
    config: &WellConfiguration,
    options: &TraverseOptions,
    progress_cb: Option<&mut dyn FnMut(TraverseProgressEvent)>,
) -> TraverseResult<TraverseProfile> {
    let model = options.model();
    run_traverse_with_model(&model, config, &options.solver, progress_cb)
}

/// Run a traverse against any PVT model.
///
/// Returns the complete profile or the first error; nothing partial.
pub fn run_traverse_with_model<M: PvtModel + ?Sized>(
    model: &M,
    config: &WellConfiguration,
    solver: &FixedPointConfig,
    mut progress_cb: Option<&mut dyn FnMut(TraverseProgressEvent)>,
) -> TraverseResult<TraverseProfile> {
    config.validate()?;
    solver.validate()?;

    let rates = ProductionRates::from_config(config)?;
    let fluid = FluidCharacterization::new(
        config.surface_fluid(),
        rates.producing_gor,
        rates.water_oil_ratio,
    )
    .map_err(|e| TraverseError::invalid(e.to_string()))?;
    let friction = FrictionParameters::new(
        config.tubing_inner_diameter,
        rates.oil_rate,
        fluid.mass_flow_constant(),
    )?;

    let segments = config.number_of_segments;
    let segment_length = config.segment_length();
    info!(
        model = model.name(),
        segments,
        segment_length,
        oil_rate = rates.oil_rate,
        producing_gor = rates.producing_gor,
        mass_flow_constant = fluid.mass_flow_constant(),
        friction_k = friction.k,
        "starting pressure traverse"
    );

    let wellhead = evaluate(
        model,
        &fluid,
        config.wellhead_pressure,
        config.wellhead_temperature,
        0.0,
    )?;
    let mut profile = TraverseProfile::start(
        ProfilePoint {
            depth: 0.0,
            pressure: config.wellhead_pressure,
            temperature: config.wellhead_temperature,
            density: wellhead.density,
            solution_gor: wellhead.solution_gor,
        },
        segment_length,
        segments,
    );

    let mut previous_pressure = config.wellhead_pressure;
    let mut previous_density = wellhead.density;

    for segment in 1..=segments {
        let depth = segment as f64 * segment_length;
        let temperature = config.temperature_at(depth);

        let solution = fixed_point::solve(
            previous_pressure,
            |trial_pressure| {
                let props = evaluate(model, &fluid, trial_pressure, temperature, depth)?;
                let average_density = 0.5 * (props.density + previous_density);
                let estimated = trial_pressure
                    + pressure_gradient(average_density, friction.k) * segment_length
                        / IN2_PER_FT2;
                if !estimated.is_finite() {
                    return Err(TraverseError::at_depth(
                        depth,
                        PvtError::NonPhysical {
                            what: "estimated pressure must be finite",
                        },
                    ));
                }
                Ok((estimated, (props, average_density)))
            },
            solver,
        )?;

        if !solution.converged {
            warn!(
                depth,
                iterations = solution.iterations,
                relative_error = solution.relative_error,
                "pressure iteration did not converge"
            );
            return Err(TraverseError::NonConvergence {
                depth,
                iterations: solution.iterations,
                relative_error: solution.relative_error,
            });
        }

        let (props, average_density) = solution.state;
        debug!(
            segment,
            depth,
            pressure = solution.value,
            density = props.density,
            iterations = solution.iterations,
            "segment converged"
        );

        profile.push_segment(
            ProfilePoint {
                depth,
                pressure: solution.value,
                temperature,
                density: props.density,
                solution_gor: props.solution_gor,
            },
            average_density,
            solution.iterations,
        );

        if let Some(cb) = progress_cb.as_mut() {
            cb(TraverseProgressEvent {
                segment,
                number_of_segments: segments,
                depth,
                pressure: solution.value,
                iterations: solution.iterations,
                fraction_complete: segment as f64 / segments as f64,
            });
        }

        previous_pressure = solution.value;
        previous_density = props.density;
    }

    let bottom = profile.bottomhole();
    info!(
        depth = bottom.depth,
        pressure = bottom.pressure,
        temperature = bottom.temperature,
        max_iterations = profile.max_iterations(),
        "pressure traverse complete"
    );

    Ok(profile)
}

/// Hydrostatic plus friction gradient `ρ + K/ρ` [lbm/ft² per ft].
pub fn pressure_gradient(average_density: LbmPerFt3, k: f64) -> f64 {
    average_density + k / average_density
}

fn evaluate<M: PvtModel + ?Sized>(
    model: &M,
    fluid: &FluidCharacterization,
    p: Psia,
    t: Fahrenheit,
    depth: Feet,
) -> TraverseResult<FluidProperties> {
    let state = ThermodynamicState::new(p, t).map_err(|e| TraverseError::at_depth(depth, e))?;
    model
        .properties(fluid, &state)
        .map_err(|e| TraverseError::at_depth(depth, e))
}
