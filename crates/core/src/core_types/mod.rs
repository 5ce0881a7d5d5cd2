//! Core types and utilities

pub mod constants;
pub mod conversion;
pub mod measures;
pub mod units;

pub use measures::{DistanceUnit, HumidityUnit, PressureUnit, TemperatureUnit};
pub use units::*;
