//! Semantic unit types for type-safe physical quantity handling
//!
//! Newtype wrappers keep incompatible units (Celsius vs Kelvin, Pascals vs
//! millibars) from being mixed by accident.
//!
//! # Design Philosophy
//! - All quantities are `f64`; conversions go through [`super::conversion`]
//! - Total ordering via `Ord` (NaN sorts above every other value)
//! - Constructors never clamp or assert; range policy belongs to the caller
//! - Explicit `to_*` conversions plus `From` impls between related types
//!
//! # Usage
//! ```
//! use physkit_core::core_types::units::{Celsius, Kelvin};
//!
//! let temp = Celsius::new(25.0);
//! let kelvin: Kelvin = temp.into();
//! assert!((*kelvin - 298.15).abs() < 0.01);
//! ```

use super::conversion;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Shared boilerplate: total ordering, raw access, and `f64` conversions.
macro_rules! quantity_newtype {
    ($($name:ident),+ $(,)?) => {
        $(
            impl Eq for $name {}

            impl PartialOrd for $name {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for $name {
                fn cmp(&self, other: &Self) -> Ordering {
                    self.0.total_cmp(&other.0)
                }
            }

            impl Deref for $name {
                type Target = f64;
                #[inline]
                fn deref(&self) -> &f64 {
                    &self.0
                }
            }

            impl $name {
                #[inline]
                #[must_use]
                pub const fn new(value: f64) -> Self {
                    $name(value)
                }

                /// Get the raw f64 value
                #[inline]
                #[must_use]
                pub fn value(self) -> f64 {
                    self.0
                }
            }

            impl From<f64> for $name {
                fn from(v: f64) -> Self {
                    $name(v)
                }
            }

            impl From<$name> for f64 {
                fn from(q: $name) -> f64 {
                    q.0
                }
            }
        )+
    };
}

// ============================================================================
// TEMPERATURE TYPES
// ============================================================================

/// Temperature in Kelvin (absolute scale)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(f64);

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fahrenheit(f64);

quantity_newtype!(Kelvin, Celsius, Fahrenheit);

impl Kelvin {
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius(conversion::kelvin_to_celsius(self.0))
    }

    #[inline]
    #[must_use]
    pub fn to_fahrenheit(self) -> Fahrenheit {
        Fahrenheit(conversion::kelvin_to_fahrenheit(self.0))
    }
}

impl Celsius {
    #[inline]
    #[must_use]
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(conversion::celsius_to_kelvin(self.0))
    }
}

impl Fahrenheit {
    #[inline]
    #[must_use]
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(conversion::fahrenheit_to_kelvin(self.0))
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Kelvin {
        c.to_kelvin()
    }
}

impl From<Fahrenheit> for Kelvin {
    fn from(f: Fahrenheit) -> Kelvin {
        f.to_kelvin()
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Celsius {
        k.to_celsius()
    }
}

impl From<Kelvin> for Fahrenheit {
    fn from(k: Kelvin) -> Fahrenheit {
        k.to_fahrenheit()
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} K", self.0)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°F", self.0)
    }
}

// ============================================================================
// PRESSURE TYPES
// ============================================================================

/// Pressure in Pascals (SI)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pascals(f64);

/// Pressure in kilopascals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilopascals(f64);

/// Pressure in millibars (hectopascals)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Millibars(f64);

/// Pressure in standard atmospheres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Atmospheres(f64);

quantity_newtype!(Pascals, Kilopascals, Millibars, Atmospheres);

impl Pascals {
    #[inline]
    #[must_use]
    pub fn to_kilopascals(self) -> Kilopascals {
        Kilopascals(conversion::pascals_to_kilopascals(self.0))
    }

    #[inline]
    #[must_use]
    pub fn to_millibars(self) -> Millibars {
        Millibars(conversion::pascals_to_millibars(self.0))
    }

    #[inline]
    #[must_use]
    pub fn to_atmospheres(self) -> Atmospheres {
        Atmospheres(conversion::pascals_to_atmospheres(self.0))
    }
}

impl Kilopascals {
    #[inline]
    #[must_use]
    pub fn to_pascals(self) -> Pascals {
        Pascals(conversion::kilopascals_to_pascals(self.0))
    }
}

impl Millibars {
    #[inline]
    #[must_use]
    pub fn to_pascals(self) -> Pascals {
        Pascals(conversion::millibars_to_pascals(self.0))
    }
}

impl Atmospheres {
    #[inline]
    #[must_use]
    pub fn to_pascals(self) -> Pascals {
        Pascals(conversion::atmospheres_to_pascals(self.0))
    }
}

impl From<Kilopascals> for Pascals {
    fn from(p: Kilopascals) -> Pascals {
        p.to_pascals()
    }
}

impl From<Millibars> for Pascals {
    fn from(p: Millibars) -> Pascals {
        p.to_pascals()
    }
}

impl From<Atmospheres> for Pascals {
    fn from(p: Atmospheres) -> Pascals {
        p.to_pascals()
    }
}

impl fmt::Display for Pascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} Pa", self.0)
    }
}

impl fmt::Display for Kilopascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} kPa", self.0)
    }
}

impl fmt::Display for Millibars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mb", self.0)
    }
}

impl fmt::Display for Atmospheres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} atm", self.0)
    }
}

// ============================================================================
// RATIO TYPES
// ============================================================================

/// A percentage, nominally 0-100
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f64);

quantity_newtype!(Percent);

impl Percent {
    /// Convert to a 0-1 fraction
    #[inline]
    #[must_use]
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Build from a 0-1 fraction
    #[inline]
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        Percent(fraction * 100.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_kelvin() {
        let k = Celsius(25.0).to_kelvin();
        assert!((k.0 - 298.15).abs() < 0.01);
    }

    #[test]
    fn test_kelvin_to_fahrenheit() {
        let f = Kelvin(373.15).to_fahrenheit();
        assert!((f.0 - 212.0).abs() < 0.01);
    }

    #[test]
    fn test_fahrenheit_into_kelvin() {
        let k: Kelvin = Fahrenheit(32.0).into();
        assert!((k.0 - 273.15).abs() < 0.01);
    }

    #[test]
    fn test_pascals_to_atmospheres() {
        let atm = Pascals(101_325.0).to_atmospheres();
        assert!((atm.0 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_millibars_into_pascals() {
        let pa: Pascals = Millibars(1013.25).into();
        assert!((pa.0 - 101_325.0).abs() < 1e-6);
    }

    #[test]
    fn test_total_ordering_places_nan_last() {
        let mut temps = vec![Kelvin(f64::NAN), Kelvin(300.0), Kelvin(250.0)];
        temps.sort();
        assert_eq!(temps[0], Kelvin(250.0));
        assert_eq!(temps[1], Kelvin(300.0));
        assert!(temps[2].is_nan());
    }

    #[test]
    fn test_percent_fraction() {
        assert!((Percent(75.0).to_fraction() - 0.75).abs() < 1e-12);
        assert_eq!(Percent::from_fraction(0.5), Percent(50.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Celsius(21.04).to_string(), "21.0°C");
        assert_eq!(Pascals(101_325.0).to_string(), "101325 Pa");
        assert_eq!(Percent(50.0).to_string(), "50.0%");
    }
}
