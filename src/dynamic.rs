//! Heap-backed probability table, sized at runtime.

use crate::ProbabilityTable;
use crate::error::TableError;
use crate::kernel;

/// Maps a value in `[1, total_weight]` to an outcome index.
///
/// Choose this table when the number of outcomes is only known at runtime
/// (data files, modding, variable mechanics). For a count fixed at compile
/// time see [`StaticProbabilityTable`](crate::StaticProbabilityTable).
///
/// `Default` is the empty table: `total_weight()` and `at(_)` both answer 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicProbabilityTable {
    thresholds: Vec<i32>,
}

impl DynamicProbabilityTable {
    /// Build from integer weights. Negative weights count as zero.
    ///
    /// # Errors
    /// * [`TableError::Empty`] if there are no weights.
    /// * [`TableError::ZeroSum`] if no weight is positive.
    /// * [`TableError::Overflow`] if the total exceeds `i32::MAX`.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn make<I>(weights: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = i32>,
    {
        let weights = weights.into_iter();
        let mut thresholds = Vec::with_capacity(weights.size_hint().0);
        let mut total = 0;
        for (index, weight) in weights.enumerate() {
            total = kernel::accumulate(total, weight, index).inspect_err(|err| {
                log::debug!("rejecting probability table: {err}");
            })?;
            thresholds.push(total);
        }
        if let Err(err) = kernel::validate(thresholds.len(), total) {
            log::debug!("rejecting probability table: {err}");
            return Err(err);
        }
        Ok(Self { thresholds })
    }

    /// Size of the die needed to drive this table.
    #[inline]
    pub fn total_weight(&self) -> i32 {
        kernel::total_of(&self.thresholds)
    }

    /// Outcome index for `value`. Values below 1 map to the first outcome,
    /// values above [`total_weight`](Self::total_weight) to the last one.
    #[inline]
    pub fn at(&self, value: i32) -> usize {
        kernel::binary_search(&self.thresholds, value)
    }

    /// Cumulative upper bound of each outcome.
    #[inline]
    pub fn thresholds(&self) -> &[i32] {
        &self.thresholds
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

impl ProbabilityTable for DynamicProbabilityTable {
    #[inline]
    fn thresholds(&self) -> &[i32] {
        DynamicProbabilityTable::thresholds(self)
    }
    #[inline]
    fn at(&self, value: i32) -> usize {
        DynamicProbabilityTable::at(self, value)
    }
}
