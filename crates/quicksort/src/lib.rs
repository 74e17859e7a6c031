//! In-place randomized quicksort for `i32` sequences.
//!
//! Ranges above the insertion threshold are partitioned (Lomuto) around a
//! uniformly chosen pivot; smaller ranges are finished with insertion sort.
//! The sort is not stable.

mod algorithms;
mod render;

use log::trace;
use rand::Rng;

pub use render::{EMPTY_SEQUENCE, Rendered, render};

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 10,
};

/// Ranges of at most this many elements are sorted by insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = TUNED_PARAMS.insertion_threshold;

/// Sorts `data` in non-decreasing order using the thread-local RNG for pivots.
pub fn sort(data: &mut [i32]) {
    sort_with_rng(data, &mut rand::rng());
}

/// Sorts `data` in non-decreasing order, drawing pivots from `rng`.
///
/// A fixed-seed generator makes the sequence of swaps reproducible.
pub fn sort_with_rng<R: Rng + ?Sized>(data: &mut [i32], rng: &mut R) {
    trace!("sort: len={}", data.len());
    algorithms::hybrid_quick_sort::sort(data, rng);
}

/// Sorts the inclusive range `data[low..=high]`, leaving the rest untouched.
///
/// `low >= high` is a no-op.
///
/// # Panics
///
/// Panics if `high >= data.len()` while `low < high`.
pub fn sort_range_with_rng<R: Rng + ?Sized>(
    data: &mut [i32],
    low: usize,
    high: usize,
    rng: &mut R,
) {
    if low >= high {
        return;
    }
    trace!("sort_range: low={low} high={high} len={}", high - low + 1);
    algorithms::hybrid_quick_sort::sort(&mut data[low..=high], rng);
}

pub fn is_sorted(data: &[i32]) -> bool {
    algorithms::common::is_sorted_non_decreasing(data)
}
