// ============================================================================
// Token Amount Conversion
// Raw on-chain integers <-> human-readable decimals, percentages, fee units
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::exponent::DecimalsExponent;
use super::safe_div::safe_divide_decimal;
use super::scale::{pow10, shift_right};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;

/// Denominator for integer fee units (30 units = 0.003 = 0.3%).
pub const FEE_UNITS_DENOMINATOR: i64 = 10_000;

/// Largest scale representable by `rust_decimal::Decimal`.
const RUST_DECIMAL_MAX_SCALE: i64 = 28;

// ============================================================================
// Raw <-> Decimal
// ============================================================================

/// Convert a raw token amount into its human-readable decimal value.
///
/// Computes `amount / 10^decimals`. The division only moves the decimal
/// point, so the result is exact for any amount and any decimals count.
///
/// # Errors
/// Propagates the decimals validation of [`DecimalsExponent`].
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use num_bigint::BigInt;
/// use token_units::numeric::raw_to_decimal;
///
/// let usdc = raw_to_decimal(&BigInt::from(1_500_000), 6u8).unwrap();
/// assert_eq!(usdc, "1.5".parse::<BigDecimal>().unwrap());
/// ```
pub fn raw_to_decimal<D: DecimalsExponent>(amount: &BigInt, decimals: D) -> NumericResult<BigDecimal> {
    let exponent = decimals.to_exponent()?;
    let value = BigDecimal::from(amount.clone());
    if exponent == 0 {
        return Ok(value);
    }
    Ok(shift_right(&value, exponent))
}

/// Convert a human-readable decimal back into a raw token amount.
///
/// Multiplies by `10^decimals` and truncates toward zero, so sub-unit dust
/// is dropped.
///
/// # Errors
/// Propagates the decimals validation of [`DecimalsExponent`].
pub fn decimal_to_raw<D: DecimalsExponent>(value: &BigDecimal, decimals: D) -> NumericResult<BigInt> {
    let exponent = decimals.to_exponent()?;
    let (digits, scale) = value.as_bigint_and_exponent();
    let scaled = BigDecimal::new(digits, scale - i64::from(exponent));
    let (raw, _) = scaled.with_scale(0).as_bigint_and_exponent();
    Ok(raw)
}

// ============================================================================
// Percentages and Fee Units
// ============================================================================

/// Convert a 0-100 percentage into a 0-1 fraction. Exact.
pub fn percent_to_fraction(percentage: &BigDecimal) -> BigDecimal {
    shift_right(percentage, 2)
}

/// Convert integer fee units into a fraction using the 10 000 denominator.
///
/// Not to be confused with [`percent_to_fraction`]: fee units are on a
/// 0-10 000 scale, percentages on a 0-100 scale.
pub fn fee_units_to_fraction(fee_units: i64) -> BigDecimal {
    fee_units_to_fraction_with(&BigInt::from(fee_units), &BigInt::from(FEE_UNITS_DENOMINATOR))
}

/// Convert integer fee units into a fraction with a custom denominator.
///
/// A zero denominator yields zero, like every other division in the crate.
pub fn fee_units_to_fraction_with(fee_units: &BigInt, denominator: &BigInt) -> BigDecimal {
    safe_divide_decimal(
        &BigDecimal::from(fee_units.clone()),
        &BigDecimal::from(denominator.clone()),
    )
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

/// Convert from `rust_decimal::Decimal`. Always exact.
pub fn from_rust_decimal(value: Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
}

/// Convert to `rust_decimal::Decimal`.
///
/// Trailing zeros beyond the 28-digit scale limit are dropped; any other
/// digit beyond it is an error rather than a silent rounding.
///
/// # Errors
/// - `PrecisionLoss` if significant digits lie beyond scale 28
/// - `Overflow` if the mantissa does not fit 96 bits
pub fn to_rust_decimal(value: &BigDecimal) -> NumericResult<Decimal> {
    let (mut digits, mut scale) = value.as_bigint_and_exponent();

    if scale < 0 {
        let shift = u32::try_from(-scale).map_err(|_| NumericError::Overflow)?;
        digits *= pow10(shift);
        scale = 0;
    }

    let ten = BigInt::from(10u8);
    while scale > RUST_DECIMAL_MAX_SCALE {
        if !(&digits % &ten).is_zero() {
            return Err(NumericError::PrecisionLoss);
        }
        digits /= &ten;
        scale -= 1;
    }

    let mantissa = digits.to_i128().ok_or(NumericError::Overflow)?;
    // scale is within 0..=28 here
    Decimal::try_from_i128_with_scale(mantissa, scale as u32).map_err(|_| NumericError::Overflow)
}
