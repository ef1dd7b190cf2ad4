// ============================================================================
// Division Precision
// Significant-digit and rounding rule applied to decimal quotients
// ============================================================================

use bigdecimal::{BigDecimal, RoundingMode};
use std::num::NonZeroU64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant digits kept by default, matching the 34-digit decimal used
/// by subgraph hosts.
pub const DEFAULT_SIGNIFICANT_DIGITS: u64 = 34;

/// Rounding applied when a quotient has more digits than allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivisionRounding {
    /// Ties away from zero (0.5 -> 1, -0.5 -> -1)
    #[default]
    HalfUp,
    /// Ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Truncate toward zero
    Down,
}

impl DivisionRounding {
    fn mode(self) -> RoundingMode {
        match self {
            DivisionRounding::HalfUp => RoundingMode::HalfUp,
            DivisionRounding::HalfEven => RoundingMode::HalfEven,
            DivisionRounding::Down => RoundingMode::Down,
        }
    }
}

/// Precision rule for decimal division.
///
/// The quotient is computed by `bigdecimal`'s long division and then
/// rounded to `significant_digits` with `rounding`. Exact quotients that
/// fit the digit budget are returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DivisionPrecision {
    /// Maximum number of significant digits in a quotient
    pub significant_digits: u64,
    /// Tie-breaking rule
    pub rounding: DivisionRounding,
}

impl DivisionPrecision {
    pub const fn new(significant_digits: u64, rounding: DivisionRounding) -> Self {
        Self {
            significant_digits,
            rounding,
        }
    }

    /// Round `value` to this precision.
    ///
    /// A zero digit budget leaves the value untouched; configurations are
    /// expected to reject it up front.
    pub fn apply(&self, value: BigDecimal) -> BigDecimal {
        match NonZeroU64::new(self.significant_digits) {
            Some(digits) if value.digits() > digits.get() => {
                value.with_precision_round(digits, self.rounding.mode())
            },
            _ => value,
        }
    }
}

impl Default for DivisionPrecision {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANT_DIGITS, DivisionRounding::HalfUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_precision() {
        let precision = DivisionPrecision::default();
        assert_eq!(precision.significant_digits, 34);
        assert_eq!(precision.rounding, DivisionRounding::HalfUp);
    }

    #[test]
    fn test_apply_rounds_long_values() {
        let precision = DivisionPrecision::new(4, DivisionRounding::HalfUp);
        let value = BigDecimal::from_str("1.23456").unwrap();
        assert_eq!(
            precision.apply(value),
            BigDecimal::from_str("1.235").unwrap()
        );
    }

    #[test]
    fn test_apply_rounding_modes() {
        let tie = BigDecimal::from_str("2.5").unwrap();
        let half_up = DivisionPrecision::new(1, DivisionRounding::HalfUp);
        let half_even = DivisionPrecision::new(1, DivisionRounding::HalfEven);
        let down = DivisionPrecision::new(1, DivisionRounding::Down);

        assert_eq!(half_up.apply(tie.clone()), BigDecimal::from(3));
        assert_eq!(half_even.apply(tie.clone()), BigDecimal::from(2));
        assert_eq!(down.apply(tie), BigDecimal::from(2));
    }

    #[test]
    fn test_apply_keeps_short_values() {
        let precision = DivisionPrecision::default();
        let value = BigDecimal::from_str("0.003").unwrap();
        assert_eq!(precision.apply(value.clone()), value);
    }
}
