use rand::Rng;

use crate::ProbabilityTable;

/// Outcome table backed by any [`ProbabilityTable`] and a **static slice** of items.
///
/// - No per-table `Vec<T>` allocation.
/// - Great for enums (the derive emits a `&'static [T]`).
/// - Pair it with a [`StaticProbabilityTable`](crate::StaticProbabilityTable)
///   and the whole thing can be a `const`.
#[derive(Debug, Clone, Copy)]
pub struct StaticOutcomeTable<S: ProbabilityTable, T: 'static> {
    table: S,
    items: &'static [T],
}

impl<S: ProbabilityTable, T: 'static> StaticOutcomeTable<S, T> {
    /// `items` must line up with the table's outcomes, one item per index.
    ///
    /// # Panics
    /// Nothing is checked here. If `items` is shorter than the table,
    /// [`get`](Self::get) and the samplers panic on the missing indexes.
    /// Use [`try_new`](Self::try_new) when the pairing is not known to be exact.
    pub const fn new(table: S, items: &'static [T]) -> Self {
        Self { table, items }
    }

    /// Like [`new`](Self::new), but `None` unless there is exactly one item per outcome.
    pub fn try_new(table: S, items: &'static [T]) -> Option<Self> {
        if table.len() != items.len() {
            log::debug!(
                "outcome table has {} outcomes but {} items",
                table.len(),
                items.len()
            );
            return None;
        }
        Some(Self { table, items })
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn total_weight(&self) -> i32 {
        self.table.total_weight()
    }

    /// Item selected by an already-rolled `value`.
    #[inline]
    pub fn get(&self, value: i32) -> &'static T {
        &self.items[self.table.at(value)]
    }

    /// Borrowed sample (zero clone).
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static T {
        &self.items[self.table.sample_index(rng)]
    }

    /// Owned sample (requires `T: Copy`).
    #[inline]
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Copy,
    {
        self.items[self.table.sample_index(rng)]
    }

    #[inline]
    pub const fn table(&self) -> &S {
        &self.table
    }

    /// Access the backing slice.
    #[inline]
    pub const fn items(&self) -> &'static [T] {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticProbabilityTable;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    static FACES: [&str; 3] = ["miss", "hit", "crit"];

    #[test]
    fn get_follows_thresholds() {
        let table = StaticProbabilityTable::make([3, 2, 1]).unwrap();
        let outcomes = StaticOutcomeTable::new(table, &FACES);
        let got: Vec<&str> = (1..=6).map(|v| *outcomes.get(v)).collect();
        assert_eq!(got, ["miss", "miss", "miss", "hit", "hit", "crit"]);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes.total_weight(), 6);
    }

    #[test]
    fn zero_weight_item_is_never_sampled() {
        let table = StaticProbabilityTable::make([5, 0, 5]).unwrap();
        let outcomes = StaticOutcomeTable::new(table, &FACES);
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..1_000 {
            assert_ne!(outcomes.sample_owned(&mut rng), "hit");
        }
    }

    #[test]
    fn try_new_requires_one_item_per_outcome() {
        static ONE: [&str; 1] = ["only"];
        let table = StaticProbabilityTable::make([1, 1, 1]).unwrap();
        assert!(StaticOutcomeTable::try_new(table, &ONE).is_none());
        assert!(StaticOutcomeTable::try_new(table, &FACES[..2]).is_none());

        let outcomes = StaticOutcomeTable::try_new(table, &FACES).unwrap();
        assert_eq!(*outcomes.get(3), "crit");
        assert_eq!(*outcomes.get(99), "crit");
    }
}
