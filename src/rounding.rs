//! Quantizing interpolated weights back to integers.

/// Converts a real-valued weight to an integer weight.
pub trait RoundingPolicy {
    fn round(value: f64) -> i32;
}

/// Round to nearest, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRounding;

impl RoundingPolicy for StandardRounding {
    #[inline]
    fn round(value: f64) -> i32 {
        round_half_away_from_zero(value)
    }
}

/// `const` rounding used by [`StandardRounding`] and by
/// [`triangle_array`](crate::triangle_array). Saturates at the `i32` bounds.
pub const fn round_half_away_from_zero(value: f64) -> i32 {
    if value >= i32::MAX as f64 {
        return i32::MAX;
    }
    if value <= i32::MIN as f64 {
        return i32::MIN;
    }
    // |truncated| < 2^31 from here on, so the +/- 1 below cannot overflow.
    let truncated = value as i64;
    let fraction = value - truncated as f64;
    let rounded = if fraction >= 0.5 {
        truncated + 1
    } else if fraction <= -0.5 {
        truncated - 1
    } else {
        truncated
    };
    rounded as i32
}
