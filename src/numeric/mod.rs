// ============================================================================
// Numeric Module
// Arbitrary-precision arithmetic for token amounts
// ============================================================================
//
// This module provides:
// - DecimalsExponent: one decimals input for native and big integers
// - scale_factor / scale_factor_int: exact 10^decimals
// - raw_to_decimal / decimal_to_raw: on-chain integer <-> decimal amount
// - percent_to_fraction / fee_units_to_fraction: fee scales
// - safe_divide_*: zero-guarded division
// - NumericError: error type for the fallible conversions
//
// Design principles:
// - No floating-point operations
// - Raw amount conversion is exact (decimal point shift, no rounding)
// - Only decimal division rounds, under an explicit DivisionPrecision

mod convert;
mod errors;
mod exponent;
mod precision;
mod safe_div;
mod scale;

pub use convert::{
    decimal_to_raw, fee_units_to_fraction, fee_units_to_fraction_with, from_rust_decimal,
    percent_to_fraction, raw_to_decimal, to_rust_decimal, FEE_UNITS_DENOMINATOR,
};
pub use errors::{NumericError, NumericResult};
pub use exponent::DecimalsExponent;
pub use precision::{DivisionPrecision, DivisionRounding, DEFAULT_SIGNIFICANT_DIGITS};
pub use safe_div::{safe_divide_decimal, safe_divide_decimal_with, safe_divide_integer};
pub use scale::{scale_factor, scale_factor_int};
