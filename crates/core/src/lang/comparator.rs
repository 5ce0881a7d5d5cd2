//! Stateless comparison functions

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A total order over `T`, usable where a closure is not convenient
/// (stored in a struct, serialized, passed across an API).
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Same comparator with the order inverted
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

/// Comparator adapter returned by [`Comparator::reversed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reversed<C>(C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Natural ascending order of 64-bit integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LongComparator;

impl Comparator<i64> for LongComparator {
    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }
}
