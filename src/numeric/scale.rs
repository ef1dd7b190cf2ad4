// ============================================================================
// Power-of-Ten Scaling
// Exact 10^decimals as arbitrary-precision integer and decimal
// ============================================================================

use super::errors::NumericResult;
use super::exponent::DecimalsExponent;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Compute 10^decimals as an arbitrary-precision integer.
///
/// # Errors
/// Propagates the decimals validation of [`DecimalsExponent`].
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use token_units::numeric::scale_factor_int;
///
/// assert_eq!(scale_factor_int(6u8).unwrap(), BigInt::from(1_000_000));
/// ```
pub fn scale_factor_int<D: DecimalsExponent>(decimals: D) -> NumericResult<BigInt> {
    let exponent = decimals.to_exponent()?;
    Ok(pow10(exponent))
}

/// Compute 10^decimals as an arbitrary-precision decimal.
///
/// The result is exact for every exponent: it is built from the integer
/// power, never from repeated floating-point multiplication.
///
/// # Errors
/// Propagates the decimals validation of [`DecimalsExponent`].
pub fn scale_factor<D: DecimalsExponent>(decimals: D) -> NumericResult<BigDecimal> {
    scale_factor_int(decimals).map(BigDecimal::from)
}

#[inline]
pub(crate) fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

/// Divide by 10^places by moving the decimal point. Always exact.
#[inline]
pub(crate) fn shift_right(value: &BigDecimal, places: u32) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, scale + i64::from(places))
}
