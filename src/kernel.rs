//! Construction and lookup primitives shared by both table flavours.
//!
//! Everything here is a `const fn` so [`StaticProbabilityTable`](crate::StaticProbabilityTable)
//! can be built and queried at compile time.

use crate::error::TableError;

/// Tables with at most this many outcomes are searched linearly.
pub const LINEAR_SCAN_MAX: usize = 16;

/// Negative weights count as zero.
#[inline]
pub(crate) const fn sanitize(weight: i32) -> i32 {
    if weight < 0 { 0 } else { weight }
}

/// Adds one sanitized weight to the running total, refusing to wrap.
#[inline]
pub(crate) const fn accumulate(total: i32, weight: i32, index: usize) -> Result<i32, TableError> {
    let weight = sanitize(weight);
    if weight > i32::MAX - total {
        return Err(TableError::Overflow { index });
    }
    Ok(total + weight)
}

/// Final check once every weight has been accumulated.
#[inline]
pub(crate) const fn validate(len: usize, total: i32) -> Result<i32, TableError> {
    if len == 0 {
        Err(TableError::Empty)
    } else if total <= 0 {
        Err(TableError::ZeroSum)
    } else {
        Ok(total)
    }
}

#[inline]
pub(crate) const fn total_of(thresholds: &[i32]) -> i32 {
    match thresholds.last() {
        Some(&total) => total,
        None => 0,
    }
}

/// First index whose threshold is `>= value`, clamped to the last index.
/// Zero outcomes map to 0.
pub(crate) const fn binary_search(thresholds: &[i32], value: i32) -> usize {
    let mut lo = 0;
    let mut hi = thresholds.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if thresholds[mid] < value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    clamp_index(lo, thresholds.len())
}

/// Same result as [`binary_search`], scanning front to back.
pub(crate) const fn linear_scan(thresholds: &[i32], value: i32) -> usize {
    let mut i = 0;
    while i < thresholds.len() {
        if thresholds[i] >= value {
            return i;
        }
        i += 1;
    }
    clamp_index(i, thresholds.len())
}

#[inline]
const fn clamp_index(found: usize, len: usize) -> usize {
    if found >= len { len.saturating_sub(1) } else { found }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn accumulate_detects_overflow_before_adding() {
        assert_eq!(accumulate(i32::MAX - 1, 1, 0), Ok(i32::MAX));
        assert_eq!(accumulate(i32::MAX, 1, 3), Err(TableError::Overflow { index: 3 }));
        assert_eq!(accumulate(i32::MAX, -9, 3), Ok(i32::MAX));
        assert_eq!(accumulate(5, -9, 0), Ok(5));
    }

    #[test]
    fn validate_rejects_degenerate_totals() {
        assert_eq!(validate(0, 0), Err(TableError::Empty));
        assert_eq!(validate(3, 0), Err(TableError::ZeroSum));
        assert_eq!(validate(3, 6), Ok(6));
    }

    #[test]
    fn searches_clamp_and_handle_empty() {
        let t = [1, 3, 6];
        for search in [binary_search, linear_scan] {
            assert_eq!(search(&t, i32::MIN), 0);
            assert_eq!(search(&t, 0), 0);
            assert_eq!(search(&t, 6), 2);
            assert_eq!(search(&t, 7), 2);
            assert_eq!(search(&t, i32::MAX), 2);
            assert_eq!(search(&[], 4), 0);
        }
        assert_eq!(total_of(&[]), 0);
        assert_eq!(total_of(&t), 6);
    }

    #[test]
    fn searches_agree_on_random_thresholds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(1..64);
            let mut total = 0;
            let thresholds: Vec<i32> = (0..n)
                .map(|_| {
                    total += rng.random_range(0..5);
                    total
                })
                .collect();
            for value in -2..=total + 2 {
                assert_eq!(
                    binary_search(&thresholds, value),
                    linear_scan(&thresholds, value),
                    "value={value} thresholds={thresholds:?}"
                );
            }
        }
    }
}
