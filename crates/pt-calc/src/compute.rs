//! The calculation chain: convert to base units, compute ΔP, classify.

use crate::compliance::{ToleranceBand, is_compliant};
use crate::error::CalcResult;
use crate::input::CalculationInput;
use pt_core::{PressureUnit, Real, TemperatureUnit, VolumeUnit, ensure_finite};
use serde::Serialize;

/// Outcome of one leak-test calculation. Stateless; recomputed fresh per
/// invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Signed pressure drop on the percent scale: (P1 - P2) * 100, with
    /// both pressures in MPa.
    pub delta_percent: Real,
    /// Tolerance band selected from the initial pressure.
    pub band: ToleranceBand,
    /// Limit applied to |delta_percent| for the verdict.
    pub max_drop_percent: Real,
    /// Whether the drop stays within the band limit.
    pub compliant: bool,
}

/// Pressure-drop metric per GOST 32569-2013, percent scale.
///
/// `temperature_k` and `volume_m3` are accepted for interface stability but
/// do not enter the formula: the isochoric temperature compensation
/// (P1 - P2 * T1/T2) the standard describes is not implemented, and the
/// simplified form (P1 - P2) * 100 is used instead.
pub fn pressure_drop(p1_mpa: Real, p2_mpa: Real, _temperature_k: Real, _volume_m3: Real) -> Real {
    (p1_mpa - p2_mpa) * 100.0
}

/// Run the full calculation chain on a typed input.
///
/// Fails only on non-finite values; text-level problems are caught earlier
/// by [`RawInput::parse`](crate::input::RawInput::parse).
pub fn compute(input: &CalculationInput) -> CalcResult<CalculationResult> {
    let p1 = ensure_finite(input.initial_pressure, "initial pressure")?;
    let p2 = ensure_finite(input.final_pressure, "final pressure")?;
    let t = ensure_finite(input.temperature, "temperature")?;
    let v = ensure_finite(input.volume, "system volume")?;

    let p1_mpa = input.pressure_unit.to_mpa(p1);
    let p2_mpa = input.pressure_unit.to_mpa(p2);
    let t_k = input.temperature_unit.to_kelvin(t);
    let v_m3 = input.volume_unit.to_cubic_meters(v);

    let delta_percent = pressure_drop(p1_mpa, p2_mpa, t_k, v_m3);
    let band = ToleranceBand::for_initial_pressure(p1_mpa);
    let compliant = is_compliant(delta_percent, band);

    tracing::debug!(
        p1_mpa,
        p2_mpa,
        t_k,
        v_m3,
        delta_percent,
        ?band,
        compliant,
        "leak-test calculation"
    );

    Ok(CalculationResult {
        delta_percent,
        band,
        max_drop_percent: band.max_drop_percent(),
        compliant,
    })
}

/// Index-based boundary contract for untyped callers: the four readings
/// plus the unit selector positions straight off an input form.
///
/// Out-of-range indices degrade to the default unit per the selector
/// contract in `pt-core`; they are never an error.
pub fn compute_indexed(
    initial_pressure: Real,
    final_pressure: Real,
    temperature: Real,
    volume: Real,
    pressure_unit_index: usize,
    temperature_unit_index: usize,
    volume_unit_index: usize,
) -> CalcResult<CalculationResult> {
    compute(&CalculationInput {
        initial_pressure,
        final_pressure,
        temperature,
        volume,
        pressure_unit: PressureUnit::from_index(pressure_unit_index),
        temperature_unit: TemperatureUnit::from_index(temperature_unit_index),
        volume_unit: VolumeUnit::from_index(volume_unit_index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    fn input_mpa(p1: Real, p2: Real) -> CalculationInput {
        CalculationInput {
            initial_pressure: p1,
            final_pressure: p2,
            temperature: 20.0,
            volume: 1.0,
            pressure_unit: PressureUnit::Mpa,
            temperature_unit: TemperatureUnit::Celsius,
            volume_unit: VolumeUnit::CubicMeter,
        }
    }

    #[test]
    fn one_percent_drop_metric() {
        let result = compute(&input_mpa(1.0, 0.99)).unwrap();
        assert!((result.delta_percent - 1.0).abs() < 1e-12);
        assert_eq!(result.band, ToleranceBand::Medium);
        assert_eq!(result.max_drop_percent, 1.0);
    }

    #[test]
    fn small_drop_within_limit_passes() {
        // 1% lost against the low band's 2% limit.
        let result = compute(&input_mpa(0.5, 0.495)).unwrap();
        assert_eq!(result.band, ToleranceBand::Low);
        assert!((result.delta_percent - 0.5).abs() < 1e-12);
        assert!(result.compliant);
    }

    #[test]
    fn zero_drop_is_compliant_in_every_band() {
        for p in [0.5, 1.0, 5.0, 10.0, 50.0] {
            let result = compute(&input_mpa(p, p)).unwrap();
            assert_eq!(result.delta_percent, 0.0);
            assert!(result.compliant);
        }
    }

    #[test]
    fn equal_bar_readings_are_compliant() {
        let mut input = input_mpa(1.0, 1.0);
        input.pressure_unit = PressureUnit::Bar;
        let result = compute(&input).unwrap();
        assert_eq!(result.delta_percent, 0.0);
        assert!(result.compliant);
        // 1 bar = 0.1 MPa: low band.
        assert_eq!(result.band, ToleranceBand::Low);
    }

    #[test]
    fn band_selected_from_converted_initial_pressure() {
        // 150 psi ≈ 1.034 MPa: medium band despite the raw value being > 10.
        let mut input = input_mpa(150.0, 150.0);
        input.pressure_unit = PressureUnit::Psi;
        let result = compute(&input).unwrap();
        assert_eq!(result.band, ToleranceBand::Medium);
    }

    #[test]
    fn pressure_rise_fails_like_a_drop() {
        let drop = compute(&input_mpa(0.5, 0.47)).unwrap();
        let rise = compute(&input_mpa(0.47, 0.5)).unwrap();
        assert_eq!(drop.delta_percent, -rise.delta_percent);
        assert!(!drop.compliant);
        // The rise is classified in the same (low) band and fails too.
        assert!(!rise.compliant);
    }

    #[test]
    fn temperature_and_volume_are_inert() {
        let a = compute(&input_mpa(1.0, 0.99)).unwrap();
        let mut input = input_mpa(1.0, 0.99);
        input.temperature = -40.0;
        input.temperature_unit = TemperatureUnit::Fahrenheit;
        input.volume = 9000.0;
        input.volume_unit = VolumeUnit::Liter;
        let b = compute(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_rejected() {
        let mut input = input_mpa(1.0, 0.99);
        input.volume = f64::INFINITY;
        assert_eq!(
            compute(&input).unwrap_err(),
            CalcError::NonFinite {
                what: "system volume"
            }
        );
    }

    #[test]
    fn indexed_boundary_matches_typed_api() {
        let typed = compute(&input_mpa(1.0, 0.99)).unwrap();
        let indexed = compute_indexed(1.0, 0.99, 20.0, 1.0, 0, 0, 0).unwrap();
        assert_eq!(typed, indexed);
    }

    #[test]
    fn indexed_boundary_degrades_bad_indices() {
        // Index 99 falls back to MPa / Celsius / m³.
        let fallback = compute_indexed(1.0, 0.99, 20.0, 1.0, 99, 99, 99).unwrap();
        let default = compute_indexed(1.0, 0.99, 20.0, 1.0, 0, 0, 0).unwrap();
        assert_eq!(fallback, default);
    }
}
