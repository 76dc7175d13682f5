//! FNiP tolerance bands for the leak-test verdict.

use pt_core::Real;
use serde::Serialize;
use std::fmt;

/// Allowed-drop band, selected from the initial test pressure in MPa.
///
/// The band table is evaluated in order, first match wins; the 10 MPa
/// boundary is inclusive on the high side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceBand {
    /// Initial pressure below 1 MPa: 2% allowed.
    Low,
    /// Initial pressure below 10 MPa: 1% allowed.
    Medium,
    /// Initial pressure 10 MPa and above: 0.5% allowed.
    High,
}

impl ToleranceBand {
    pub fn for_initial_pressure(p1_mpa: Real) -> Self {
        if p1_mpa < 1.0 {
            Self::Low
        } else if p1_mpa < 10.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Allowed drop as a fraction of nominal (0.02 = 2%).
    pub fn max_drop_fraction(self) -> Real {
        match self {
            Self::Low => 0.02,
            Self::Medium => 0.01,
            Self::High => 0.005,
        }
    }

    /// Allowed drop on the percent scale the ΔP metric uses.
    pub fn max_drop_percent(self) -> Real {
        self.max_drop_fraction() * 100.0
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low pressure (< 1 MPa)",
            Self::Medium => "medium pressure (1 to 10 MPa)",
            Self::High => "high pressure (10 MPa and above)",
        }
    }
}

impl fmt::Display for ToleranceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict for one drop measurement: the magnitude of ΔP must stay within
/// the band limit, so a pressure rise of equal size fails the same way a
/// drop does.
pub fn is_compliant(delta_percent: Real, band: ToleranceBand) -> bool {
    delta_percent.abs() <= band.max_drop_percent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_table() {
        assert_eq!(
            ToleranceBand::for_initial_pressure(0.5),
            ToleranceBand::Low
        );
        assert_eq!(
            ToleranceBand::for_initial_pressure(5.0),
            ToleranceBand::Medium
        );
        assert_eq!(
            ToleranceBand::for_initial_pressure(25.0),
            ToleranceBand::High
        );
    }

    #[test]
    fn band_boundaries() {
        // Exactly 1 MPa is medium, exactly 10 MPa is high.
        assert_eq!(
            ToleranceBand::for_initial_pressure(1.0),
            ToleranceBand::Medium
        );
        assert_eq!(
            ToleranceBand::for_initial_pressure(10.0),
            ToleranceBand::High
        );
    }

    #[test]
    fn allowed_drops() {
        assert_eq!(ToleranceBand::Low.max_drop_fraction(), 0.02);
        assert_eq!(ToleranceBand::Medium.max_drop_fraction(), 0.01);
        assert_eq!(ToleranceBand::High.max_drop_fraction(), 0.005);
        assert_eq!(ToleranceBand::Low.max_drop_percent(), 2.0);
    }

    #[test]
    fn verdict_uses_magnitude() {
        assert!(is_compliant(1.5, ToleranceBand::Low));
        assert!(is_compliant(-1.5, ToleranceBand::Low));
        assert!(!is_compliant(2.5, ToleranceBand::Low));
        assert!(!is_compliant(-2.5, ToleranceBand::Low));
    }

    #[test]
    fn verdict_boundary_inclusive() {
        assert!(is_compliant(2.0, ToleranceBand::Low));
        assert!(is_compliant(0.5, ToleranceBand::High));
    }
}
