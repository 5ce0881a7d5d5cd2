//! Security classification

pub mod classification;

pub use classification::ClassificationLevel;
