//! Mathematical unit types

pub mod angle_unit;

pub use angle_unit::AngleUnit;
