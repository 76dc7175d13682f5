//! Unit selectors and base-unit conversions.
//!
//! Every calculation runs in a fixed base unit per quantity:
//! MPa for pressure, Kelvin for temperature, m³ for volume.
//! The enums carry a stable selector order for form-style frontends, so
//! `from_index` is the wire contract for index-based callers: an
//! out-of-range index degrades to the default variant instead of failing.

use crate::{PtError, Real};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pressure unit selector. Base unit: MPa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PressureUnit {
    #[default]
    Mpa,
    Bar,
    Atm,
    Psi,
}

impl PressureUnit {
    pub const ALL: [Self; 4] = [Self::Mpa, Self::Bar, Self::Atm, Self::Psi];

    /// Selector-index constructor; out-of-range falls back to MPa.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Mpa => "MPa",
            Self::Bar => "bar",
            Self::Atm => "atm",
            Self::Psi => "psi",
        }
    }

    /// Convert a reading in this unit to MPa.
    pub fn to_mpa(self, value: Real) -> Real {
        match self {
            Self::Mpa => value,
            Self::Bar => value * 0.1,
            Self::Atm => value * 0.101325,
            Self::Psi => value * 0.00689476,
        }
    }

    /// Convert a base-unit value back into this unit.
    pub fn from_mpa(self, value: Real) -> Real {
        match self {
            Self::Mpa => value,
            Self::Bar => value / 0.1,
            Self::Atm => value / 0.101325,
            Self::Psi => value / 0.00689476,
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = PtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mpa" => Ok(Self::Mpa),
            "bar" => Ok(Self::Bar),
            "atm" => Ok(Self::Atm),
            "psi" => Ok(Self::Psi),
            _ => Err(PtError::UnknownUnit {
                symbol: s.to_string(),
            }),
        }
    }
}

/// Temperature unit selector. Base unit: Kelvin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [Self; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Selector-index constructor; out-of-range falls back to Celsius.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Convert a reading in this unit to Kelvin.
    pub fn to_kelvin(self, value: Real) -> Real {
        match self {
            Self::Celsius => value + 273.15,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
            Self::Kelvin => value,
        }
    }

    /// Convert a Kelvin value back into this unit.
    pub fn from_kelvin(self, value: Real) -> Real {
        match self {
            Self::Celsius => value - 273.15,
            Self::Fahrenheit => (value - 273.15) * 9.0 / 5.0 + 32.0,
            Self::Kelvin => value,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = PtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(Self::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(PtError::UnknownUnit {
                symbol: s.to_string(),
            }),
        }
    }
}

/// Volume unit selector. Base unit: m³.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VolumeUnit {
    #[default]
    CubicMeter,
    Liter,
    CubicFoot,
}

impl VolumeUnit {
    pub const ALL: [Self; 3] = [Self::CubicMeter, Self::Liter, Self::CubicFoot];

    /// Selector-index constructor; out-of-range falls back to m³.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::CubicMeter => "m³",
            Self::Liter => "L",
            Self::CubicFoot => "ft³",
        }
    }

    /// Convert a reading in this unit to m³.
    pub fn to_cubic_meters(self, value: Real) -> Real {
        match self {
            Self::CubicMeter => value,
            Self::Liter => value / 1000.0,
            Self::CubicFoot => value * 0.0283168,
        }
    }

    /// Convert a m³ value back into this unit.
    pub fn from_cubic_meters(self, value: Real) -> Real {
        match self {
            Self::CubicMeter => value,
            Self::Liter => value * 1000.0,
            Self::CubicFoot => value / 0.0283168,
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for VolumeUnit {
    type Err = PtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m3" | "m^3" | "m³" => Ok(Self::CubicMeter),
            "l" | "liter" | "litre" => Ok(Self::Liter),
            "ft3" | "ft^3" | "ft³" => Ok(Self::CubicFoot),
            _ => Err(PtError::UnknownUnit {
                symbol: s.to_string(),
            }),
        }
    }
}
