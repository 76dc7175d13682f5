//! Raw form input: field-level validation and number parsing.
//!
//! `RawInput` mirrors a test-report entry form: four readings as raw text
//! plus three unit selectors. `parse` is the text boundary of the kernel;
//! everything past it works with typed, finite values.

use crate::error::{CalcError, CalcResult};
use pt_core::{PressureUnit, Real, TemperatureUnit, VolumeUnit};
use serde::Serialize;
use std::fmt;

/// Input form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    InitialPressure,
    FinalPressure,
    Temperature,
    Volume,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::InitialPressure => "initial pressure",
            Self::FinalPressure => "final pressure",
            Self::Temperature => "temperature",
            Self::Volume => "system volume",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four readings exactly as entered, plus the unit selectors.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub initial_pressure: String,
    pub final_pressure: String,
    pub temperature: String,
    pub volume: String,
    pub pressure_unit: PressureUnit,
    pub temperature_unit: TemperatureUnit,
    pub volume_unit: VolumeUnit,
}

impl RawInput {
    /// Validate and parse into a typed input.
    ///
    /// Empty fields are reported first, in form order, so a missing value
    /// never surfaces as a format error and nothing is parsed or converted
    /// until every field is present. Both pressures share one unit selector.
    pub fn parse(&self) -> CalcResult<CalculationInput> {
        let fields: [(Field, &str); 4] = [
            (Field::InitialPressure, &self.initial_pressure),
            (Field::FinalPressure, &self.final_pressure),
            (Field::Temperature, &self.temperature),
            (Field::Volume, &self.volume),
        ];
        for (field, text) in fields {
            if text.trim().is_empty() {
                return Err(CalcError::MissingField { field });
            }
        }

        Ok(CalculationInput {
            initial_pressure: parse_number(&self.initial_pressure)?,
            final_pressure: parse_number(&self.final_pressure)?,
            temperature: parse_number(&self.temperature)?,
            volume: parse_number(&self.volume)?,
            pressure_unit: self.pressure_unit,
            temperature_unit: self.temperature_unit,
            volume_unit: self.volume_unit,
        })
    }
}

/// Typed, validated input for one calculation. Values are still in the
/// units the selectors name; conversion to base units happens in `compute`.
/// No physical-plausibility checks: a negative pressure is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInput {
    pub initial_pressure: Real,
    pub final_pressure: Real,
    pub temperature: Real,
    pub volume: Real,
    pub pressure_unit: PressureUnit,
    pub temperature_unit: TemperatureUnit,
    pub volume_unit: VolumeUnit,
}

fn parse_number(text: &str) -> CalcResult<Real> {
    let value: Real = text.trim().parse().map_err(|_| CalcError::InputFormat)?;
    // "inf"/"NaN" parse as f64 but violate the finite-input invariant.
    if !value.is_finite() {
        return Err(CalcError::InputFormat);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RawInput {
        RawInput {
            initial_pressure: "1.0".into(),
            final_pressure: "0.99".into(),
            temperature: "20".into(),
            volume: "2.5".into(),
            ..RawInput::default()
        }
    }

    #[test]
    fn parse_happy_path() {
        let input = filled().parse().unwrap();
        assert_eq!(input.initial_pressure, 1.0);
        assert_eq!(input.final_pressure, 0.99);
        assert_eq!(input.temperature, 20.0);
        assert_eq!(input.volume, 2.5);
        assert_eq!(input.pressure_unit, PressureUnit::Mpa);
    }

    #[test]
    fn missing_fields_reported_in_form_order() {
        let mut raw = filled();
        raw.initial_pressure.clear();
        raw.temperature.clear();
        // Initial pressure comes first even though temperature is also empty.
        assert_eq!(
            raw.parse().unwrap_err(),
            CalcError::MissingField {
                field: Field::InitialPressure
            }
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut raw = filled();
        raw.volume = "   ".into();
        assert_eq!(
            raw.parse().unwrap_err(),
            CalcError::MissingField {
                field: Field::Volume
            }
        );
    }

    #[test]
    fn missing_field_wins_over_format_error() {
        let mut raw = filled();
        raw.initial_pressure = "abc".into();
        raw.final_pressure.clear();
        assert_eq!(
            raw.parse().unwrap_err(),
            CalcError::MissingField {
                field: Field::FinalPressure
            }
        );
    }

    #[test]
    fn non_numeric_rejected() {
        let mut raw = filled();
        raw.temperature = "abc".into();
        assert_eq!(raw.parse().unwrap_err(), CalcError::InputFormat);
    }

    #[test]
    fn non_finite_text_rejected() {
        let mut raw = filled();
        raw.volume = "inf".into();
        assert_eq!(raw.parse().unwrap_err(), CalcError::InputFormat);
    }

    #[test]
    fn negative_pressure_accepted() {
        let mut raw = filled();
        raw.initial_pressure = "-0.5".into();
        assert_eq!(raw.parse().unwrap().initial_pressure, -0.5);
    }
}
