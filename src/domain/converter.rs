// ============================================================================
// Token Converter
// Configuration-bound entry point for the numeric operations
// ============================================================================

use super::config::NumericConfig;
use super::fee::{FeeSchedule, FeeSplit};
use crate::numeric::{
    self, safe_divide_decimal_with, DecimalsExponent, NumericError, NumericResult,
};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Applies a [`NumericConfig`] to conversions and divisions.
///
/// The free functions in [`crate::numeric`] use the default configuration;
/// a converter is for hosts that need another precision, a tighter
/// decimals cap or a different fee denominator.
#[derive(Debug, Clone, Default)]
pub struct TokenConverter {
    config: NumericConfig,
}

impl TokenConverter {
    /// Create a converter from a configuration.
    ///
    /// # Errors
    /// Returns the validation message if the configuration is invalid.
    pub fn new(config: NumericConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NumericConfig {
        &self.config
    }

    fn checked_exponent<D: DecimalsExponent>(&self, decimals: D) -> NumericResult<u32> {
        let exponent = decimals.to_exponent()?;
        if exponent > self.config.max_decimals {
            tracing::trace!(
                exponent,
                max = self.config.max_decimals,
                "decimals above configured cap"
            );
            return Err(NumericError::DecimalsOutOfRange);
        }
        Ok(exponent)
    }

    /// 10^decimals, bounded by the configured cap.
    pub fn scale_factor<D: DecimalsExponent>(&self, decimals: D) -> NumericResult<BigDecimal> {
        numeric::scale_factor(self.checked_exponent(decimals)?)
    }

    /// Raw amount to decimal, bounded by the configured cap.
    pub fn raw_to_decimal<D: DecimalsExponent>(
        &self,
        amount: &BigInt,
        decimals: D,
    ) -> NumericResult<BigDecimal> {
        numeric::raw_to_decimal(amount, self.checked_exponent(decimals)?)
    }

    /// Decimal amount back to raw, bounded by the configured cap.
    pub fn decimal_to_raw<D: DecimalsExponent>(
        &self,
        value: &BigDecimal,
        decimals: D,
    ) -> NumericResult<BigInt> {
        numeric::decimal_to_raw(value, self.checked_exponent(decimals)?)
    }

    /// Zero-guarded division at the configured precision.
    pub fn safe_divide(&self, numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
        safe_divide_decimal_with(numerator, denominator, &self.config.division)
    }

    /// Fee units over the configured denominator.
    pub fn fee_units_to_fraction(&self, fee_units: &BigInt) -> BigDecimal {
        self.safe_divide(
            &BigDecimal::from(fee_units.clone()),
            &BigDecimal::from(self.config.fee_denominator.clone()),
        )
    }

    /// Convert a raw traded amount and split its fees.
    pub fn split_raw_fees<D: DecimalsExponent>(
        &self,
        schedule: &FeeSchedule,
        raw_amount: &BigInt,
        decimals: D,
    ) -> NumericResult<FeeSplit> {
        let amount = self.raw_to_decimal(raw_amount, decimals)?;
        Ok(schedule.split(&amount))
    }
}
