//! Altitude bands
//!
//! Three ordered bands split at two fixed thresholds:
//! - **Low**: below 1000 m
//! - **Medium**: between 1000 m and 5000 m
//! - **High**: above 5000 m
//!
//! The thresholds are physical constants rather than per-instance state; only
//! their presentation depends on the caller's distance unit.

use crate::core_types::constants::{ALTITUDE_HIGH_METERS, ALTITUDE_LOW_METERS};
use crate::core_types::conversion::convert_distance;
use crate::core_types::DistanceUnit;
use crate::enumerated::{canonical_string_impls, EnumeratedUnit};
use std::fmt;

/// Coarse altitude band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Altitude {
    #[default]
    Low,
    Medium,
    High,
}

impl EnumeratedUnit for Altitude {
    const TYPE_NAME: &'static str = "Altitude";
    const VARIANTS: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn default_value() -> Self {
        Self::default()
    }

    fn to_canonical_string(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Round a threshold to the nearest whole value in `distance_unit`
fn threshold_in(meters: f64, distance_unit: DistanceUnit) -> i64 {
    convert_distance(meters, DistanceUnit::Meters, distance_unit).round() as i64
}

impl Altitude {
    /// Human-readable band description with thresholds in `distance_unit`
    ///
    /// # Example
    /// ```
    /// use physkit_core::core_types::DistanceUnit;
    /// use physkit_core::physics::Altitude;
    ///
    /// assert_eq!(
    ///     Altitude::Medium.to_presentation_string(DistanceUnit::Meters),
    ///     "Between 1000 and 5000 meters"
    /// );
    /// ```
    #[must_use]
    pub fn to_presentation_string(self, distance_unit: DistanceUnit) -> String {
        let unit = distance_unit.to_canonical_string();
        let low = threshold_in(ALTITUDE_LOW_METERS, distance_unit);
        let high = threshold_in(ALTITUDE_HIGH_METERS, distance_unit);

        match self {
            Self::Low => format!("Below {low} {unit}"),
            Self::Medium => format!("Between {low} and {high} {unit}"),
            Self::High => format!("Above {high} {unit}"),
        }
    }
}

canonical_string_impls!(Altitude);

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_canonical_string())
    }
}
