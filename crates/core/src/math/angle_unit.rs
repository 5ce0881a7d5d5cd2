//! Angle unit enumeration

use crate::core_types::conversion;
use crate::enumerated::{canonical_string_impls, AbbreviatedUnit, EnumeratedUnit};
use std::fmt;

/// Degree sign used as the abbreviated degrees token
pub const DEGREES_SYMBOL: &str = "°";

/// Radian suffix; the leading space is part of the token
pub const RADIANS_SUFFIX: &str = " rad";

/// Unit in which an angle is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl EnumeratedUnit for AngleUnit {
    const TYPE_NAME: &'static str = "AngleUnit";
    const VARIANTS: &'static [Self] = &[Self::Degrees, Self::Radians];

    fn default_value() -> Self {
        Self::default()
    }

    fn to_canonical_string(self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Radians => "radians",
        }
    }
}

impl AbbreviatedUnit for AngleUnit {
    fn to_abbreviated_string(self) -> &'static str {
        match self {
            Self::Degrees => DEGREES_SYMBOL,
            Self::Radians => RADIANS_SUFFIX,
        }
    }
}

impl AngleUnit {
    /// Presentation form is the abbreviation, ready to append to a number
    #[must_use]
    pub fn to_presentation_string(self) -> &'static str {
        self.to_abbreviated_string()
    }

    /// Convert `value`, expressed in `self`, into `to`
    #[must_use]
    pub fn convert(self, value: f64, to: AngleUnit) -> f64 {
        conversion::convert_angle(value, self, to)
    }
}

canonical_string_impls!(AngleUnit);

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}
