//! pt-calc: the presstest compliance-calculator kernel.
//!
//! Provides:
//! - Raw-input validation and parsing (`RawInput` -> `CalculationInput`)
//! - The pressure-drop metric per GOST 32569-2013
//! - Tolerance-band classification against the FNiP limits
//!
//! # Architecture
//!
//! The kernel is a single stateless call chain: validate -> convert to base
//! units -> compute ΔP -> classify. Frontends own all mutable widget state
//! and call in with plain values; the kernel returns structured data
//! (`CalculationResult`), never display text.
//!
//! # Example
//!
//! ```
//! use pt_calc::{CalculationInput, compute};
//! use pt_core::{PressureUnit, TemperatureUnit, VolumeUnit};
//!
//! let input = CalculationInput {
//!     initial_pressure: 1.0,
//!     final_pressure: 0.99,
//!     temperature: 20.0,
//!     volume: 2.5,
//!     pressure_unit: PressureUnit::Mpa,
//!     temperature_unit: TemperatureUnit::Celsius,
//!     volume_unit: VolumeUnit::CubicMeter,
//! };
//!
//! let result = compute(&input).unwrap();
//! assert!((result.delta_percent - 1.0).abs() < 1e-12);
//! ```

pub mod compliance;
pub mod compute;
pub mod error;
pub mod input;

// Re-exports for ergonomics
pub use compliance::{ToleranceBand, is_compliant};
pub use compute::{CalculationResult, compute, compute_indexed, pressure_drop};
pub use error::{CalcError, CalcResult};
pub use input::{CalculationInput, Field, RawInput};
