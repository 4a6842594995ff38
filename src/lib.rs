//! # game_dice
//!
//! Integer-weighted outcome tables for dice-driven games.
//!
//! A table turns a uniform roll in `[1, total_weight]` into an outcome index
//! according to integer weights. Weights are exact: no outcome with a
//! positive weight can be rounded out of existence.
//!
//! There are two table flavours sharing the [`ProbabilityTable`] contract:
//!
//! 1. [`DynamicProbabilityTable`]: outcome count known at runtime, heap-backed.
//! 2. [`StaticProbabilityTable`]: outcome count known at compile time,
//!    stack-resident, fully `const`.
//!
//! Weight shapes come from [`triangle_distribution`] / [`triangle_array`],
//! and the [`WeightedEnum`] derive (from the companion `game_dice_macros`
//! crate) turns an annotated enum into a ready-to-roll table.
//!
//! ## Quick start (weights)
//!
//! ```rust
//! use game_dice::{Dice, DynamicProbabilityTable, roll, triangle_distribution};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = DynamicProbabilityTable::make(triangle_distribution(7, 4, 10))?;
//! let die = Dice::new(table.total_weight()); // a d35
//!
//! let mut rng = rand::rng();
//! let outcome = table.at(roll(&die, &mut rng)); // 0..7, most often 4
//! assert!(outcome < 7);
//! # Ok(()) }
//! ```
//!
//! ## Quick start (enum + derive)
//!
//! ```rust
//! use game_dice::WeightedEnum;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, WeightedEnum)]
//! enum Attack {
//!     #[weight(12)] Miss,
//!     #[weight(7)]  Hit,
//!     #[weight(1)]  Critical,
//! }
//!
//! # fn main() -> Result<(), game_dice::TableError> {
//! let table = Attack::fixed_table()?;
//! assert_eq!(table.total_weight(), 20);
//! assert_eq!(*table.get(20), Attack::Critical);
//!
//! let mut rng = rand::rng();
//! let _swing = table.sample_owned(&mut rng);
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Build**: O(n), with overflow checked per weight.
//! * **Lookup**: O(log n) binary search; static tables with at most
//!   [`LINEAR_SCAN_MAX`] outcomes scan linearly instead.
//! * **Space**: one `i32` per outcome.
//!
//! ## Gotchas
//! * Negative weights count as zero. Empty, all-zero, or overflowing
//!   weights are rejected with [`TableError`].
//! * Values outside `[1, total_weight]` are clamped: `<= 0` maps to the
//!   first outcome, anything above the total to the last one.

mod dice;
mod dynamic;
mod error;
mod fixed;
mod kernel;
mod rounding;
mod static_outcome;
mod triangle;

/// The lookup contract shared by [`DynamicProbabilityTable`] and
/// [`StaticProbabilityTable`].
#[allow(clippy::len_without_is_empty)]
pub trait ProbabilityTable {
    /// Cumulative upper bound of each outcome.
    fn thresholds(&self) -> &[i32];

    /// First outcome whose threshold is `>= value`, clamped to the last outcome.
    fn at(&self, value: i32) -> usize;

    /// Upper bound of the valid roll domain `[1, total_weight]`; 0 for an empty table.
    fn total_weight(&self) -> i32 {
        kernel::total_of(self.thresholds())
    }

    fn len(&self) -> usize {
        self.thresholds().len()
    }

    /// Roll uniformly in `[1, total_weight]` and look the value up.
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let total = self.total_weight();
        if total <= 0 {
            return 0;
        }
        self.at(rng.random_range(1..=total))
    }
}

pub use dice::{Dice, roll};
pub use dynamic::DynamicProbabilityTable;
pub use error::TableError;
pub use fixed::StaticProbabilityTable;
pub use kernel::LINEAR_SCAN_MAX;
pub use rounding::{RoundingPolicy, StandardRounding, round_half_away_from_zero};
pub use static_outcome::StaticOutcomeTable;
pub use triangle::{
    triangle_array, triangle_array_with, triangle_distribution, triangle_distribution_with,
};

use rand::Rng;

/// Associates items with integer weights and selects them through an
/// internal [`DynamicProbabilityTable`].
#[derive(Debug, Clone)]
pub struct OutcomeTable<T> {
    table: DynamicProbabilityTable,
    items: Vec<T>,
}

/// Derive macro imported from `game_dice_macros`.
/// See the crate-level example for usage.
pub use game_dice_macros::WeightedEnum;

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its weight is exposed via [`WeightedEnum::ENTRIES`].
/// The derive also emits inherent `VARIANTS`, `WEIGHTS` and a `const fn
/// fixed_table()` returning a [`StaticOutcomeTable`].
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs, in declaration order.
    const ENTRIES: &'static [(Self, i32)];

    /// Builds a heap-backed [`OutcomeTable`] from the enum entries.
    ///
    /// # Errors
    /// See [`DynamicProbabilityTable::make`].
    fn outcome_table() -> Result<OutcomeTable<Self>, TableError>
    where
        Self: Copy,
    {
        OutcomeTable::from_pairs(Self::ENTRIES.iter().copied())
    }
}

impl<T> OutcomeTable<T> {
    /// Build from any `(item, weight)` iterator. Negative weights count as zero.
    ///
    /// # Errors
    /// * [`TableError::Empty`] if there are no items.
    /// * [`TableError::ZeroSum`] if no weight is positive.
    /// * [`TableError::Overflow`] if the weights sum past `i32::MAX`.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (T, i32)>,
    {
        let (items, weights): (Vec<T>, Vec<i32>) = pairs.into_iter().unzip();
        let table = DynamicProbabilityTable::make(weights).inspect_err(|err| {
            log::debug!("cannot build outcome table over {} items: {err}", items.len());
        })?;
        Ok(Self { table, items })
    }

    /// Item selected by an already-rolled `value` (see [`DynamicProbabilityTable::at`]).
    pub fn get(&self, value: i32) -> &T {
        &self.items[self.table.at(value)]
    }

    /// Sample an item **by reference** (no `Clone` bound).
    ///
    /// # Examples
    /// ```rust
    /// # use game_dice::OutcomeTable;
    /// # let table = OutcomeTable::from_pairs([("a", 1), ("b", 3)]).unwrap();
    /// let mut rng = rand::rng();
    /// let s = table.sample(&mut rng); // &&str
    /// ```
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a T {
        &self.items[self.table.sample_index(rng)]
    }

    /// Sample an item **by value** (clones the chosen element).
    ///
    /// Prefer [`sample`](Self::sample) if you don’t need ownership.
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        self.items[self.table.sample_index(rng)].clone()
    }

    /// Size of the die needed to drive [`get`](Self::get).
    pub fn total_weight(&self) -> i32 {
        self.table.total_weight()
    }

    pub fn table(&self) -> &DynamicProbabilityTable {
        &self.table
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the table.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
