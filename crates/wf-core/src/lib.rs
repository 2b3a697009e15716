//! wf-core: stable foundation for wellflow.
//!
//! Contains:
//! - units (field-unit aliases + physical constants)
//! - numeric (input checks + convergence measure)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WfError, WfResult};
pub use numeric::*;
pub use units::*;
