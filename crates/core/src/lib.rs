//! Physics Toolkit Core Library
//!
//! Small value types and helpers shared by simulation and presentation code:
//! - Enumerated units with canonical, abbreviated and presentation strings
//!   (angles, temperature, pressure, humidity, distance, altitude bands,
//!   security classification)
//! - Typed quantities and unit conversion
//! - Pattern-driven number formatting
//! - A mutable natural-environment value object with change notification
//!
//! ## Example
//!
//! ```
//! use physkit_core::{Celsius, EnvironmentField, NaturalEnvironment};
//!
//! let mut env = NaturalEnvironment::default();
//! env.subscribe(|field| assert_eq!(field, EnvironmentField::Temperature));
//! env.set_temperature_c(Celsius::new(25.0));
//! assert!((*env.temperature_k() - 298.15).abs() < 1e-9);
//! ```

// Core types and utilities
pub mod core_types;
pub mod enumerated;
pub mod error;

pub mod lang;
pub mod math;
pub mod physics;
pub mod security;
pub mod text;

// Re-export core types
pub use core_types::{
    Atmospheres, Celsius, DistanceUnit, Fahrenheit, HumidityUnit, Kelvin, Kilopascals,
    Millibars, Pascals, Percent, PressureUnit, TemperatureUnit,
};
pub use enumerated::{AbbreviatedUnit, EnumeratedUnit};
pub use error::{ToolkitError, ToolkitResult};

pub use lang::{Comparator, LongComparator};
pub use math::AngleUnit;
pub use physics::{Altitude, EnvironmentField, EnvironmentSettings, ListenerId, NaturalEnvironment};
pub use security::ClassificationLevel;
pub use text::{uniquefier_number_format, unit_decorated_decimal_format, NumberFormat};
