//! Triangular weight shapes: a linear ramp from 1 up to a peak and back down to 1.
//!
//! The output is meant to be fed straight into a table factory:
//!
//! ```rust
//! use game_dice::{DynamicProbabilityTable, StaticProbabilityTable, triangle_array, triangle_distribution};
//!
//! let weights = triangle_distribution(7, 4, 10);
//! assert_eq!(weights, [1, 3, 6, 8, 10, 6, 1]);
//! let table = DynamicProbabilityTable::make(weights).unwrap();
//! assert_eq!(table.total_weight(), 35);
//!
//! const FIXED: [i32; 7] = triangle_array::<7>(4, 10);
//! let fixed = StaticProbabilityTable::make(FIXED).unwrap();
//! assert_eq!(fixed.total_weight(), 35);
//! ```

use crate::rounding::{RoundingPolicy, StandardRounding, round_half_away_from_zero};

/// Triangle of `desired_size` weights peaking at `peak_index` with `peak_weight`,
/// quantized with [`StandardRounding`].
///
/// * `desired_size <= 0` gives an empty vector.
/// * `peak_weight` is floored to 1.
/// * `peak_index` is clamped into `0..desired_size`.
pub fn triangle_distribution(desired_size: i32, peak_index: i32, peak_weight: i32) -> Vec<i32> {
    triangle_distribution_with::<StandardRounding>(desired_size, peak_index, peak_weight)
}

/// [`triangle_distribution`] with a caller-chosen rounding policy.
pub fn triangle_distribution_with<R: RoundingPolicy>(
    desired_size: i32,
    peak_index: i32,
    peak_weight: i32,
) -> Vec<i32> {
    if desired_size <= 0 {
        return Vec::new();
    }
    let len = desired_size as usize;
    let peak = peak_index.clamp(0, desired_size - 1) as usize;
    let peak_weight = safe_peak_weight(peak_weight);
    (0..len)
        .map(|i| R::round(ramp_value(i, peak, len, peak_weight)))
        .collect()
}

/// Statically sized triangle, evaluable in `const` context.
///
/// Same shape rules as [`triangle_distribution`]; an `N` of zero yields `[]`.
pub const fn triangle_array<const N: usize>(peak_index: usize, peak_weight: i32) -> [i32; N] {
    let mut out = [0i32; N];
    if N == 0 {
        return out;
    }
    let peak = safe_peak_index(peak_index, N);
    let peak_weight = safe_peak_weight(peak_weight);
    let mut i = 0;
    while i < N {
        out[i] = round_half_away_from_zero(ramp_value(i, peak, N, peak_weight));
        i += 1;
    }
    out
}

/// [`triangle_array`] with a caller-chosen rounding policy (not `const`).
pub fn triangle_array_with<const N: usize, R: RoundingPolicy>(
    peak_index: usize,
    peak_weight: i32,
) -> [i32; N] {
    let peak = safe_peak_index(peak_index, N);
    let peak_weight = safe_peak_weight(peak_weight);
    std::array::from_fn(|i| R::round(ramp_value(i, peak, N, peak_weight)))
}

const fn safe_peak_weight(peak_weight: i32) -> i32 {
    if peak_weight < 1 { 1 } else { peak_weight }
}

const fn safe_peak_index(peak_index: usize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if peak_index > last { last } else { peak_index }
}

/// Un-rounded weight at position `i`. The branches guarantee the rising
/// divisor (`peak`) and the falling divisor (`len - 1 - peak`) are non-zero.
const fn ramp_value(i: usize, peak: usize, len: usize, peak_weight: i32) -> f64 {
    let top = peak_weight as f64;
    if i == peak {
        top
    } else if i < peak {
        let ratio = i as f64 / peak as f64;
        1.0 + (top - 1.0) * ratio
    } else {
        let ratio = (i - peak) as f64 / (len - 1 - peak) as f64;
        top - (top - 1.0) * ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Floor;

    impl RoundingPolicy for Floor {
        fn round(value: f64) -> i32 {
            value.floor() as i32
        }
    }

    #[test]
    fn non_positive_size_is_empty() {
        assert!(triangle_distribution(-10, -20, 100).is_empty());
        assert!(triangle_distribution(0, -10, 100).is_empty());
        assert!(triangle_distribution(-1, -1, -1).is_empty());
        assert!(triangle_distribution(0, 0, 0).is_empty());
    }

    #[test]
    fn any_positive_size_has_that_length() {
        for size in 1..100 {
            assert_eq!(triangle_distribution(size, size, size).len(), size as usize);
        }
    }

    #[test]
    fn reference_shapes() {
        assert_eq!(triangle_distribution(7, 4, 10), [1, 3, 6, 8, 10, 6, 1]);
        assert_eq!(triangle_distribution(1, 5, 5), [5]);
        assert_eq!(triangle_distribution(9, 5, 5), [1, 2, 3, 3, 4, 5, 4, 2, 1]);
        assert_eq!(triangle_distribution(10, 5, 5), [1, 2, 3, 3, 4, 5, 4, 3, 2, 1]);
        assert_eq!(
            triangle_distribution(15, 5, 5),
            [1, 2, 3, 3, 4, 5, 5, 4, 4, 3, 3, 2, 2, 1, 1]
        );
    }

    #[test]
    fn flat_when_peak_weight_at_most_one() {
        assert_eq!(triangle_distribution(7, 4, 0), [1; 7]);
        assert_eq!(triangle_distribution(7, 4, 1), [1; 7]);
        assert_eq!(triangle_distribution(7, 4, -50), [1; 7]);
    }

    #[test]
    fn peak_index_is_clamped() {
        // past the end: purely rising
        assert_eq!(triangle_distribution(5, 99, 5), [1, 2, 3, 4, 5]);
        assert_eq!(triangle_distribution(5, i32::MAX, 5), [1, 2, 3, 4, 5]);
        // before the start: purely falling
        assert_eq!(triangle_distribution(5, -3, 5), [5, 4, 3, 2, 1]);
        assert_eq!(triangle_array::<5>(usize::MAX, 5), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_entry_at_least_one_and_unimodal() {
        for size in 1..40 {
            for peak in -2..size + 2 {
                for weight in [-3, 0, 1, 2, 7, 100, 10_000] {
                    let w = triangle_distribution(size, peak, weight);
                    assert!(w.iter().all(|&x| x >= 1), "{size} {peak} {weight}: {w:?}");
                    let top = w.iter().position(|&x| x == *w.iter().max().unwrap()).unwrap();
                    assert!(w[..=top].windows(2).all(|p| p[0] <= p[1]), "{w:?}");
                    assert!(w[top..].windows(2).all(|p| p[0] >= p[1]), "{w:?}");
                }
            }
        }
    }

    #[test]
    fn array_matches_vec() {
        assert_eq!(triangle_array::<7>(4, 10).to_vec(), triangle_distribution(7, 4, 10));
        assert_eq!(triangle_array::<15>(5, 5).to_vec(), triangle_distribution(15, 5, 5));
        assert_eq!(triangle_array::<1>(0, 0), [1]);
        assert_eq!(triangle_array::<0>(3, 3), [0i32; 0]);
        assert_eq!(
            triangle_array_with::<9, StandardRounding>(5, 5),
            triangle_array::<9>(5, 5)
        );
    }

    #[test]
    fn array_evaluates_in_const() {
        const SHAPE: [i32; 7] = triangle_array::<7>(4, 10);
        assert_eq!(SHAPE, [1, 3, 6, 8, 10, 6, 1]);
    }

    #[test]
    fn custom_rounding_policy() {
        assert_eq!(
            triangle_distribution_with::<Floor>(7, 4, 10),
            [1, 3, 5, 7, 10, 5, 1]
        );
        assert_eq!(triangle_array_with::<7, Floor>(4, 10), [1, 3, 5, 7, 10, 5, 1]);
    }
}
