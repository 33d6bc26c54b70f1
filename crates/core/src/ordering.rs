//! Placement order applied before shelf packing.
//!
//! Tall parts go first so each shelf is opened by its tallest member and the
//! following parts of similar height fill it. Ties break on width, then on
//! original position (the sort is stable), so identical input always yields
//! the same order.

use std::cmp::Ordering;

use crate::part::PartInstance;

/// Compares two instances: height descending, then width descending.
pub fn compare(a: &PartInstance, b: &PartInstance) -> Ordering {
    b.height
        .total_cmp(&a.height)
        .then_with(|| b.width.total_cmp(&a.width))
}

/// Sorts instances into placement order.
pub fn order(mut instances: Vec<PartInstance>) -> Vec<PartInstance> {
    instances.sort_by(compare);
    instances
}
