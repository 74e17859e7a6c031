use rand::Rng;

use crate::TUNED_PARAMS;

use super::common;

pub fn sort<R: Rng + ?Sized>(data: &mut [i32], rng: &mut R) {
    if data.len() < 2 {
        return;
    }
    quick_sort_recursive(data, rng);
}

fn quick_sort_recursive<R: Rng + ?Sized>(mut data: &mut [i32], rng: &mut R) {
    while data.len() > TUNED_PARAMS.insertion_threshold {
        common::randomize_pivot(data, rng);
        let pivot_pos = common::partition_lomuto(data);

        // The pivot is already in its final slot and stays out of both halves.
        let (left, rest) = data.split_at_mut(pivot_pos);
        let right = &mut rest[1..];

        // Recurse into the smaller half, keep looping on the larger one.
        if left.len() < right.len() {
            quick_sort_recursive(left, rng);
            data = right;
        } else {
            quick_sort_recursive(right, rng);
            data = left;
        }
    }

    common::insertion_sort(data);
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn check(data: &[i32], seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut actual = data.to_vec();
        sort(&mut actual, &mut rng);

        let mut expected = data.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected, "input_len={} seed={seed}", data.len());
    }

    #[test]
    fn sizes_around_threshold() {
        let threshold = TUNED_PARAMS.insertion_threshold;
        for size in [threshold - 1, threshold, threshold + 1, threshold + 2] {
            let descending: Vec<i32> = (0..size as i32).rev().collect();
            check(&descending, 7);
        }
    }

    #[test]
    fn worst_case_shapes_for_last_element_pivot() {
        let ascending: Vec<i32> = (0..5000).collect();
        let descending: Vec<i32> = (0..5000).rev().collect();
        let organ_pipe: Vec<i32> = (0..2500).chain((0..2500).rev()).collect();

        check(&ascending, 11);
        check(&descending, 12);
        check(&organ_pipe, 13);
    }

    #[test]
    fn all_equal_values() {
        check(&[5; 1000], 21);
    }

    #[test]
    fn same_seed_same_result() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let data: Vec<i32> = (0..300).map(|_| rng.random_range(-50..=50)).collect();

        let mut a = data.clone();
        let mut b = data;
        sort(&mut a, &mut StdRng::seed_from_u64(99));
        sort(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
