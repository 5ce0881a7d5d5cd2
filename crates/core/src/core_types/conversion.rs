//! Pure unit conversion functions
//!
//! All functions are total: they never fail and never clamp. Physical range
//! checks (e.g. below absolute zero) are the caller's concern.

use super::constants::{
    CELSIUS_KELVIN_OFFSET, FAHRENHEIT_OFFSET, FAHRENHEIT_PER_KELVIN, PASCALS_PER_ATMOSPHERE,
    PASCALS_PER_KILOPASCAL, PASCALS_PER_MILLIBAR,
};
use super::measures::DistanceUnit;
use crate::math::AngleUnit;

// ============================================================================
// TEMPERATURE
// ============================================================================

#[inline]
#[must_use]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + CELSIUS_KELVIN_OFFSET
}

#[inline]
#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_KELVIN_OFFSET
}

#[inline]
#[must_use]
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_KELVIN + CELSIUS_KELVIN_OFFSET
}

#[inline]
#[must_use]
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - CELSIUS_KELVIN_OFFSET) * FAHRENHEIT_PER_KELVIN + FAHRENHEIT_OFFSET
}

// ============================================================================
// PRESSURE
// ============================================================================

#[inline]
#[must_use]
pub fn pascals_to_atmospheres(pascals: f64) -> f64 {
    pascals / PASCALS_PER_ATMOSPHERE
}

#[inline]
#[must_use]
pub fn pascals_to_kilopascals(pascals: f64) -> f64 {
    pascals / PASCALS_PER_KILOPASCAL
}

#[inline]
#[must_use]
pub fn pascals_to_millibars(pascals: f64) -> f64 {
    pascals / PASCALS_PER_MILLIBAR
}

#[inline]
#[must_use]
pub fn atmospheres_to_pascals(atmospheres: f64) -> f64 {
    atmospheres * PASCALS_PER_ATMOSPHERE
}

#[inline]
#[must_use]
pub fn kilopascals_to_pascals(kilopascals: f64) -> f64 {
    kilopascals * PASCALS_PER_KILOPASCAL
}

#[inline]
#[must_use]
pub fn millibars_to_pascals(millibars: f64) -> f64 {
    millibars * PASCALS_PER_MILLIBAR
}

// ============================================================================
// DISTANCE AND ANGLE
// ============================================================================

/// Convert a distance between any two supported units, going through meters
#[must_use]
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.meters_per_unit() / to.meters_per_unit()
}

#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[inline]
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Convert an angle between degrees and radians
#[must_use]
pub fn convert_angle(value: f64, from: AngleUnit, to: AngleUnit) -> f64 {
    match (from, to) {
        (AngleUnit::Degrees, AngleUnit::Radians) => degrees_to_radians(value),
        (AngleUnit::Radians, AngleUnit::Degrees) => radians_to_degrees(value),
        (AngleUnit::Degrees, AngleUnit::Degrees) | (AngleUnit::Radians, AngleUnit::Radians) => {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_celsius_kelvin() {
        assert_abs_diff_eq!(celsius_to_kelvin(25.0), 298.15, epsilon = 1e-9);
        assert_abs_diff_eq!(kelvin_to_celsius(273.15), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fahrenheit_kelvin() {
        assert_abs_diff_eq!(fahrenheit_to_kelvin(32.0), 273.15, epsilon = 1e-9);
        assert_abs_diff_eq!(kelvin_to_fahrenheit(373.15), 212.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            kelvin_to_fahrenheit(fahrenheit_to_kelvin(-40.0)),
            -40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_pressure_conversions() {
        assert_abs_diff_eq!(pascals_to_atmospheres(101_325.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pascals_to_kilopascals(101_325.0), 101.325, epsilon = 1e-9);
        assert_abs_diff_eq!(pascals_to_millibars(101_325.0), 1013.25, epsilon = 1e-9);
        assert_abs_diff_eq!(atmospheres_to_pascals(2.0), 202_650.0, epsilon = 1e-9);
        assert_abs_diff_eq!(kilopascals_to_pascals(1.5), 1500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(millibars_to_pascals(1013.25), 101_325.0, epsilon = 1e-9);
    }

    #[test]
    fn test_convert_distance() {
        assert_abs_diff_eq!(
            convert_distance(1000.0, DistanceUnit::Meters, DistanceUnit::Feet),
            3280.839_895,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            convert_distance(1.0, DistanceUnit::Miles, DistanceUnit::Kilometers),
            1.609_344,
            epsilon = 1e-9
        );
        assert_eq!(
            convert_distance(42.0, DistanceUnit::Yards, DistanceUnit::Yards),
            42.0
        );
    }

    #[test]
    fn test_convert_angle() {
        assert_abs_diff_eq!(
            convert_angle(180.0, AngleUnit::Degrees, AngleUnit::Radians),
            std::f64::consts::PI,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            convert_angle(std::f64::consts::FRAC_PI_2, AngleUnit::Radians, AngleUnit::Degrees),
            90.0,
            epsilon = 1e-12
        );
    }
}
