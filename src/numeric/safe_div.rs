// ============================================================================
// Safe Division
// Zero-guarded division for decimal and integer operands
// ============================================================================
//
// Denominators in an indexer come from reserves, supplies and liquidity
// that are legitimately zero for empty pools. A zero denominator yields a
// zero result instead of an error.

use super::precision::DivisionPrecision;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

/// Divide two decimals, returning zero when the denominator is exactly zero.
///
/// The quotient is rounded with [`DivisionPrecision::default`]
/// (34 significant digits, half-up).
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use token_units::numeric::safe_divide_decimal;
///
/// let q = safe_divide_decimal(&BigDecimal::from(10), &BigDecimal::from(4));
/// assert_eq!(q, "2.5".parse::<BigDecimal>().unwrap());
///
/// let z = safe_divide_decimal(&BigDecimal::from(10), &BigDecimal::from(0));
/// assert_eq!(z, BigDecimal::from(0));
/// ```
pub fn safe_divide_decimal(numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    safe_divide_decimal_with(numerator, denominator, &DivisionPrecision::default())
}

/// Divide two decimals with an explicit precision rule.
pub fn safe_divide_decimal_with(
    numerator: &BigDecimal,
    denominator: &BigDecimal,
    precision: &DivisionPrecision,
) -> BigDecimal {
    if denominator.is_zero() {
        tracing::trace!(%numerator, "zero decimal denominator, substituting zero");
        return BigDecimal::zero();
    }
    precision.apply(numerator / denominator)
}

/// Divide two integers, returning zero when the denominator is zero.
///
/// Non-zero division truncates toward zero, as `num-bigint` defines it
/// (`-7 / 2 == -3`, not floor division).
pub fn safe_divide_integer(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    if denominator.is_zero() {
        tracing::trace!(%numerator, "zero integer denominator, substituting zero");
        return BigInt::zero();
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::DivisionRounding;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_decimal_zero_denominator() {
        assert_eq!(
            safe_divide_decimal(&dec("123.45"), &BigDecimal::zero()),
            BigDecimal::zero()
        );
        // 0.000 compares equal to zero
        assert_eq!(
            safe_divide_decimal(&dec("1"), &dec("0.000")),
            BigDecimal::zero()
        );
    }

    #[test]
    fn test_decimal_division() {
        assert_eq!(safe_divide_decimal(&dec("1000"), &dec("8")), dec("125"));
        assert_eq!(safe_divide_decimal(&dec("1"), &dec("0.25")), dec("4"));
    }

    #[test]
    fn test_decimal_tiny_denominator_is_not_zero() {
        let q = safe_divide_decimal(&dec("1"), &dec("0.000000000000000001"));
        assert_eq!(q, dec("1000000000000000000"));
    }

    #[test]
    fn test_decimal_repeating_quotient_is_rounded() {
        let q = safe_divide_decimal(&dec("1"), &dec("3"));
        assert_eq!(q, dec("0.3333333333333333333333333333333333"));
        assert_eq!(q.digits(), 34);

        let q = safe_divide_decimal(&dec("2"), &dec("3"));
        assert_eq!(q, dec("0.6666666666666666666666666666666667"));
    }

    #[test]
    fn test_decimal_custom_precision() {
        let precision = DivisionPrecision::new(5, DivisionRounding::Down);
        let q = safe_divide_decimal_with(&dec("2"), &dec("3"), &precision);
        assert_eq!(q, dec("0.66666"));
    }

    #[test]
    fn test_integer_zero_denominator() {
        assert_eq!(
            safe_divide_integer(&BigInt::from(42), &BigInt::zero()),
            BigInt::zero()
        );
    }

    #[test]
    fn test_integer_truncates_toward_zero() {
        assert_eq!(
            safe_divide_integer(&BigInt::from(7), &BigInt::from(2)),
            BigInt::from(3)
        );
        assert_eq!(
            safe_divide_integer(&BigInt::from(-7), &BigInt::from(2)),
            BigInt::from(-3)
        );
    }

    #[test]
    fn test_integer_large_operands() {
        let numerator = BigInt::from_str("340282366920938463463374607431768211456000").unwrap();
        let denominator = BigInt::from(1000);
        assert_eq!(
            safe_divide_integer(&numerator, &denominator),
            BigInt::from_str("340282366920938463463374607431768211456").unwrap()
        );
    }
}
