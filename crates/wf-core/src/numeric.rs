use crate::{WfError, WfResult};

pub fn ensure_finite(v: f64, what: &'static str) -> WfResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: f64, what: &'static str) -> WfResult<f64> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(WfError::NotPositive { what, value: v })
    }
}

/// Finite and not below zero.
pub fn ensure_non_negative(v: f64, what: &'static str) -> WfResult<f64> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(WfError::Negative { what, value: v })
    }
}

/// Relative change `|new - old| / |new|`, measured against the new iterate.
///
/// Returns infinity when `new` is zero so callers never treat it as converged.
pub fn relative_change(old: f64, new: f64) -> f64 {
    if new == 0.0 {
        return f64::INFINITY;
    }
    ((new - old) / new).abs()
}
