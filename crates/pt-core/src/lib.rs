//! pt-core: stable foundation for presstest.
//!
//! Contains:
//! - units (pressure/temperature/volume unit enums + base-unit conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PtError, PtResult};
pub use numeric::*;
pub use units::*;
