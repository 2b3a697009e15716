use thiserror::Error;

pub type WfResult<T> = Result<T, WfError>;

/// Rejected scalar input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WfError {
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },
}

impl WfError {
    /// Name of the offending quantity.
    pub fn what(&self) -> &'static str {
        match self {
            WfError::NonFinite { what, .. }
            | WfError::NotPositive { what, .. }
            | WfError::Negative { what, .. } => what,
        }
    }
}
