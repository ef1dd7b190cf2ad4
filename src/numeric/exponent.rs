// ============================================================================
// Decimals Exponent
// Uniform decimals-count input across native and arbitrary-precision integers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive};

/// A token decimals count, usable as a power-of-ten exponent.
///
/// Call sites pass decimals either as a native integer (ERC-20 `uint8`
/// decimals read from a contract) or as a `BigInt` taken straight from
/// event data. Both go through this trait so there is a single scaling
/// path.
///
/// Negative counts are rejected with [`NumericError::NegativeDecimals`] and
/// counts beyond `u32::MAX` with [`NumericError::DecimalsOutOfRange`].
pub trait DecimalsExponent {
    /// Validate and return the exponent.
    fn to_exponent(&self) -> NumericResult<u32>;
}

macro_rules! impl_unsigned_exponent {
    ($($t:ty),*) => {
        $(
            impl DecimalsExponent for $t {
                #[inline]
                fn to_exponent(&self) -> NumericResult<u32> {
                    u32::try_from(*self).map_err(|_| NumericError::DecimalsOutOfRange)
                }
            }
        )*
    };
}

macro_rules! impl_signed_exponent {
    ($($t:ty),*) => {
        $(
            impl DecimalsExponent for $t {
                #[inline]
                fn to_exponent(&self) -> NumericResult<u32> {
                    if *self < 0 {
                        tracing::trace!(decimals = *self, "rejecting negative decimals");
                        return Err(NumericError::NegativeDecimals);
                    }
                    u32::try_from(*self).map_err(|_| NumericError::DecimalsOutOfRange)
                }
            }
        )*
    };
}

impl_unsigned_exponent!(u8, u16, u32, u64, usize);
impl_signed_exponent!(i8, i16, i32, i64, isize);

impl DecimalsExponent for BigInt {
    fn to_exponent(&self) -> NumericResult<u32> {
        if self.is_negative() {
            tracing::trace!(decimals = %self, "rejecting negative decimals");
            return Err(NumericError::NegativeDecimals);
        }
        self.to_u32().ok_or(NumericError::DecimalsOutOfRange)
    }
}

impl DecimalsExponent for BigUint {
    fn to_exponent(&self) -> NumericResult<u32> {
        self.to_u32().ok_or(NumericError::DecimalsOutOfRange)
    }
}

impl<T: DecimalsExponent + ?Sized> DecimalsExponent for &T {
    #[inline]
    fn to_exponent(&self) -> NumericResult<u32> {
        (**self).to_exponent()
    }
}
