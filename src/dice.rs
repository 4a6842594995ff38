use rand::Rng;

/// Die geometry: how many faces it has. Holds no rolling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    sides: i32,
}

impl Dice {
    /// Sides are clamped to `[2, i32::MAX - 1]`; a coin is the smallest die.
    pub const fn new(sides: i32) -> Self {
        let sides = if sides < 2 {
            2
        } else if sides >= i32::MAX {
            i32::MAX - 1
        } else {
            sides
        };
        Self { sides }
    }

    #[inline]
    pub const fn sides(&self) -> i32 {
        self.sides
    }
}

/// Roll `die` once: uniform in `[1, sides]`.
#[inline]
pub fn roll<R: Rng + ?Sized>(die: &Dice, rng: &mut R) -> i32 {
    rng.random_range(1..=die.sides)
}
