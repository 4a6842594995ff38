//! Stack-resident probability table with a compile-time outcome count.

use crate::ProbabilityTable;
use crate::error::TableError;
use crate::kernel::{self, LINEAR_SCAN_MAX};

/// Maps a value in `[1, total_weight]` to one of `N` outcome indexes.
///
/// Same mapping as [`DynamicProbabilityTable`](crate::DynamicProbabilityTable),
/// but the thresholds live in a `[i32; N]` and every operation is a
/// `const fn`, so a table built from constant weights can be evaluated
/// entirely at compile time:
///
/// ```rust
/// use game_dice::{StaticProbabilityTable, TableError};
///
/// const TABLE: Result<StaticProbabilityTable<3>, TableError> =
///     StaticProbabilityTable::make([1, 2, 3]);
/// const OUTCOME: usize = match TABLE {
///     Ok(table) => table.at(4),
///     Err(_) => usize::MAX,
/// };
/// assert_eq!(OUTCOME, 2);
/// ```
///
/// Lookups scan linearly while `N <= LINEAR_SCAN_MAX` and binary search above that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticProbabilityTable<const N: usize> {
    thresholds: [i32; N],
}

impl<const N: usize> StaticProbabilityTable<N> {
    /// Build from `N` integer weights. Negative weights count as zero.
    ///
    /// # Errors
    /// * [`TableError::Empty`] if `N == 0`.
    /// * [`TableError::ZeroSum`] if no weight is positive.
    /// * [`TableError::Overflow`] as soon as the running total would exceed `i32::MAX`.
    pub const fn make(weights: [i32; N]) -> Result<Self, TableError> {
        let mut thresholds = [0i32; N];
        let mut total = 0;
        let mut i = 0;
        while i < N {
            total = match kernel::accumulate(total, weights[i], i) {
                Ok(total) => total,
                Err(err) => return Err(err),
            };
            thresholds[i] = total;
            i += 1;
        }
        match kernel::validate(N, total) {
            Ok(_) => Ok(Self { thresholds }),
            Err(err) => Err(err),
        }
    }

    /// Size of the die needed to drive this table.
    #[inline]
    pub const fn total_weight(&self) -> i32 {
        kernel::total_of(&self.thresholds)
    }

    /// Outcome index for `value`, clamped into `0..N`.
    #[inline]
    pub const fn at(&self, value: i32) -> usize {
        if N <= LINEAR_SCAN_MAX {
            kernel::linear_scan(&self.thresholds, value)
        } else {
            kernel::binary_search(&self.thresholds, value)
        }
    }

    #[inline]
    pub const fn thresholds(&self) -> &[i32; N] {
        &self.thresholds
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }
}

impl<const N: usize> ProbabilityTable for StaticProbabilityTable<N> {
    #[inline]
    fn thresholds(&self) -> &[i32] {
        StaticProbabilityTable::thresholds(self)
    }
    #[inline]
    fn at(&self, value: i32) -> usize {
        StaticProbabilityTable::at(self, value)
    }
}
