//! Fixed-point (Picard) iteration with a relative-change stopping rule.

use crate::error::{TraverseError, TraverseResult};
use wf_core::numeric::relative_change;

/// Fixed-point solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointConfig {
    /// Converged when `|x_next - x| / |x_next| <= tolerance`
    pub tolerance: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for FixedPointConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 5000,
        }
    }
}

impl FixedPointConfig {
    pub fn validate(&self) -> TraverseResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(TraverseError::invalid(format!(
                "solver tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(TraverseError::invalid(
                "solver max iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Fixed-point iteration result.
#[derive(Debug, Clone)]
pub struct FixedPointSolution<S> {
    /// Last iterate produced by the step function
    pub value: f64,
    /// Side data returned with `value`
    pub state: S,
    /// Number of step evaluations
    pub iterations: usize,
    /// Relative change of the last step
    pub relative_error: f64,
    /// Converged flag
    pub converged: bool,
}

/// Iterate `x ← step(x)` from `x0` until the relative change meets the tolerance.
///
/// `step` returns the next iterate plus whatever it computed on the way, so
/// callers can keep the properties belonging to the accepted value. Hitting
/// `max_iterations` is reported through `converged == false`.
pub fn solve<S, F>(x0: f64, mut step: F, config: &FixedPointConfig) -> TraverseResult<FixedPointSolution<S>>
where
    F: FnMut(f64) -> TraverseResult<(f64, S)>,
{
    let mut x = x0;
    let mut iteration = 0;
    loop {
        iteration += 1;
        let (next, state) = step(x)?;
        let relative_error = relative_change(x, next);
        let converged = relative_error <= config.tolerance;
        if converged || iteration >= config.max_iterations {
            return Ok(FixedPointSolution {
                value: next,
                state,
                iterations: iteration,
                relative_error,
                converged,
            });
        }
        x = next;
    }
}
