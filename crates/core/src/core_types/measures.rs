//! Unit enumerations for the convertible quantities
//!
//! Each enum follows the [`EnumeratedUnit`] contract: lowercase canonical
//! tokens, case-insensitive parsing, and a designated default.

use super::constants::{
    METERS_PER_CENTIMETER, METERS_PER_FOOT, METERS_PER_INCH, METERS_PER_KILOMETER,
    METERS_PER_MILE, METERS_PER_MILLIMETER, METERS_PER_YARD,
};
use crate::enumerated::{canonical_string_impls, AbbreviatedUnit, EnumeratedUnit};
use std::fmt;

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    /// Absolute scale, the canonical storage unit
    #[default]
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl EnumeratedUnit for TemperatureUnit {
    const TYPE_NAME: &'static str = "TemperatureUnit";
    const VARIANTS: &'static [Self] = &[Self::Kelvin, Self::Celsius, Self::Fahrenheit];

    fn default_value() -> Self {
        Self::default()
    }

    fn to_canonical_string(self) -> &'static str {
        match self {
            Self::Kelvin => "kelvin",
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

impl AbbreviatedUnit for TemperatureUnit {
    fn to_abbreviated_string(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl TemperatureUnit {
    #[must_use]
    pub fn to_presentation_string(self) -> &'static str {
        self.to_abbreviated_string()
    }
}

// ============================================================================
// PRESSURE
// ============================================================================

/// Pressure unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressureUnit {
    Kilopascals,
    /// SI unit, the canonical storage unit
    #[default]
    Pascals,
    Millibars,
    Atmospheres,
}

impl EnumeratedUnit for PressureUnit {
    const TYPE_NAME: &'static str = "PressureUnit";
    const VARIANTS: &'static [Self] = &[
        Self::Kilopascals,
        Self::Pascals,
        Self::Millibars,
        Self::Atmospheres,
    ];

    fn default_value() -> Self {
        Self::default()
    }

    fn to_canonical_string(self) -> &'static str {
        match self {
            Self::Kilopascals => "kilopascals",
            Self::Pascals => "pascals",
            Self::Millibars => "millibars",
            Self::Atmospheres => "atmospheres",
        }
    }
}

impl AbbreviatedUnit for PressureUnit {
    fn to_abbreviated_string(self) -> &'static str {
        match self {
            Self::Kilopascals => "kPa",
            Self::Pascals => "Pa",
            Self::Millibars => "mb",
            Self::Atmospheres => "atm",
        }
    }
}

impl PressureUnit {
    #[must_use]
    pub fn to_presentation_string(self) -> &'static str {
        self.to_abbreviated_string()
    }
}

// ============================================================================
// HUMIDITY
// ============================================================================

/// Humidity measure
///
/// Only relative humidity has a conversion today; `Molar` is accepted as a
/// value but setters ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HumidityUnit {
    #[default]
    Relative,
    Molar,
}

impl EnumeratedUnit for HumidityUnit {
    const TYPE_NAME: &'static str = "HumidityUnit";
    const VARIANTS: &'static [Self] = &[Self::Relative, Self::Molar];

    fn default_value() -> Self {
        Self::default()
    }

    fn to_canonical_string(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Molar => "molar",
        }
    }
}

impl AbbreviatedUnit for HumidityUnit {
    fn to_abbreviated_string(self) -> &'static str {
        match self {
            Self::Relative => "%",
            Self::Molar => "mol/mol",
        }
    }
}

impl HumidityUnit {
    #[must_use]
    pub fn to_presentation_string(self) -> &'static str {
        self.to_abbreviated_string()
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Distance unit, metric and imperial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Feet,
    Inches,
    Yards,
    Miles,
}

impl EnumeratedUnit for DistanceUnit {
    const TYPE_NAME: &'static str = "DistanceUnit";
    const VARIANTS: &'static [Self] = &[
        Self::Meters,
        Self::Kilometers,
        Self::Centimeters,
        Self::Millimeters,
        Self::Feet,
        Self::Inches,
        Self::Yards,
        Self::Miles,
    ];

    fn default_value() -> Self {
        Self::default()
    }

    fn to_canonical_string(self) -> &'static str {
        match self {
            Self::Meters => "meters",
            Self::Kilometers => "kilometers",
            Self::Centimeters => "centimeters",
            Self::Millimeters => "millimeters",
            Self::Feet => "feet",
            Self::Inches => "inches",
            Self::Yards => "yards",
            Self::Miles => "miles",
        }
    }
}

impl AbbreviatedUnit for DistanceUnit {
    fn to_abbreviated_string(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Feet => "ft",
            Self::Inches => "in",
            Self::Yards => "yd",
            Self::Miles => "mi",
        }
    }
}

impl DistanceUnit {
    #[must_use]
    pub fn to_presentation_string(self) -> &'static str {
        self.to_abbreviated_string()
    }

    /// Length of one unit in meters
    #[must_use]
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => METERS_PER_KILOMETER,
            Self::Centimeters => METERS_PER_CENTIMETER,
            Self::Millimeters => METERS_PER_MILLIMETER,
            Self::Feet => METERS_PER_FOOT,
            Self::Inches => METERS_PER_INCH,
            Self::Yards => METERS_PER_YARD,
            Self::Miles => METERS_PER_MILE,
        }
    }
}

canonical_string_impls!(TemperatureUnit, PressureUnit, HumidityUnit, DistanceUnit);

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}

impl fmt::Display for HumidityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical_storage_units() {
        assert_eq!(TemperatureUnit::default_value(), TemperatureUnit::Kelvin);
        assert_eq!(PressureUnit::default_value(), PressureUnit::Pascals);
        assert_eq!(HumidityUnit::default_value(), HumidityUnit::Relative);
        assert_eq!(DistanceUnit::default_value(), DistanceUnit::Meters);
    }

    #[test]
    fn test_abbreviated_parse_is_forgiving() {
        assert_eq!(
            TemperatureUnit::abbreviated_value_of(Some("°c")),
            TemperatureUnit::Celsius
        );
        assert_eq!(
            PressureUnit::abbreviated_value_of(Some("KPA")),
            PressureUnit::Kilopascals
        );
        assert_eq!(
            PressureUnit::abbreviated_value_of(Some("torr")),
            PressureUnit::Pascals
        );
        assert_eq!(DistanceUnit::abbreviated_value_of(None), DistanceUnit::Meters);
    }

    #[test]
    fn test_from_str_uses_canonical_tokens() {
        assert_eq!("Fahrenheit".parse(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("MILES".parse(), Ok(DistanceUnit::Miles));
        assert!("°F".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(PressureUnit::Millibars.to_string(), "millibars");
        assert_eq!(DistanceUnit::Feet.to_string(), "feet");
    }

    #[test]
    fn test_presentation_is_abbreviated() {
        assert_eq!(TemperatureUnit::Celsius.to_presentation_string(), "°C");
        assert_eq!(PressureUnit::Kilopascals.to_presentation_string(), "kPa");
        assert_eq!(HumidityUnit::Relative.to_presentation_string(), "%");
        assert_eq!(DistanceUnit::Yards.to_presentation_string(), "yd");
    }

    #[test]
    fn test_serde_uses_canonical_tokens() {
        let json = serde_json::to_string(&PressureUnit::Atmospheres).unwrap();
        assert_eq!(json, "\"atmospheres\"");
        let unit: HumidityUnit = serde_json::from_str("\"MOLAR\"").unwrap();
        assert_eq!(unit, HumidityUnit::Molar);
        assert!(serde_json::from_str::<DistanceUnit>("\"furlongs\"").is_err());
    }
}
