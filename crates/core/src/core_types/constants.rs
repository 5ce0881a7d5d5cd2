//! Physical constants and unit factors

/// Room temperature (20 °C) in Kelvin
pub const ROOM_TEMPERATURE_K: f64 = 293.15;

/// Standard sea-level reference pressure in Pascals (1 atm)
pub const PRESSURE_REFERENCE_PA: f64 = 101_325.0;

/// Upper bound of the low altitude band, in meters
pub const ALTITUDE_LOW_METERS: f64 = 1000.0;

/// Lower bound of the high altitude band, in meters
pub const ALTITUDE_HIGH_METERS: f64 = 5000.0;

/// Offset between the Celsius and Kelvin scales
pub const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Offset between the Fahrenheit scale and Celsius zero
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Fahrenheit degrees per Kelvin (or Celsius) degree
pub const FAHRENHEIT_PER_KELVIN: f64 = 1.8;

/// Pascals per kilopascal
pub const PASCALS_PER_KILOPASCAL: f64 = 1000.0;

/// Pascals per millibar
pub const PASCALS_PER_MILLIBAR: f64 = 100.0;

/// Pascals per standard atmosphere
pub const PASCALS_PER_ATMOSPHERE: f64 = PRESSURE_REFERENCE_PA;

// Distance factors, meters per unit
pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_CENTIMETER: f64 = 0.01;
pub const METERS_PER_MILLIMETER: f64 = 0.001;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const METERS_PER_YARD: f64 = 0.9144;
pub const METERS_PER_MILE: f64 = 1609.344;
