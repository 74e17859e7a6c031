use rand::Rng;

#[inline]
pub fn swap(data: &mut [i32], a: usize, b: usize) {
    data.swap(a, b);
}

/// Stable in-place insertion sort over the whole slice.
///
/// Callers restrict it to a range by passing the sub-slice.
#[inline]
pub fn insertion_sort(data: &mut [i32]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            if prev <= key {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}

/// Moves a uniformly chosen element into the last slot, where
/// [`partition_lomuto`] expects the pivot.
#[inline]
pub fn randomize_pivot<R: Rng + ?Sized>(data: &mut [i32], rng: &mut R) {
    debug_assert!(!data.is_empty());

    let last = data.len() - 1;
    let index = rng.random_range(0..=last);
    swap(data, index, last);
}

/// Lomuto partition around the value in the last slot.
///
/// Returns the pivot's final index `p`: everything in `..=p` is `<= pivot`,
/// everything after `p` is `> pivot`.
#[inline]
pub fn partition_lomuto(data: &mut [i32]) -> usize {
    debug_assert!(!data.is_empty());

    let last = data.len() - 1;
    let pivot = data[last];
    // First slot not yet known to hold a value <= pivot.
    let mut store = 0usize;

    for j in 0..last {
        if data[j] <= pivot {
            swap(data, store, j);
            store += 1;
        }
    }

    swap(data, store, last);
    store
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
