//! Text formatting

pub mod number_format;

pub use number_format::{
    uniquefier_number_format, unit_decorated_decimal_format, NumberFormat, NumberSymbols,
};
