// src/core/order.rs
//! Comparators shared by the ranking code. `Ordering::Less` sorts first.
use std::cmp::Ordering;

pub fn compare_numbers<T: Ord>(left: T, right: T) -> Ordering {
    left.cmp(&right)
}

/// Present values sort before absent ones; two present values defer to `compare`.
pub fn compare_nullable<T, F>(left: Option<&T>, right: Option<&T>, compare: F) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match (left, right) {
        (Some(left), Some(right)) => compare(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
