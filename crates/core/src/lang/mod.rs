//! Language-level helpers

pub mod comparator;

pub use comparator::{Comparator, LongComparator, Reversed};
