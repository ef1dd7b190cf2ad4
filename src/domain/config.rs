// ============================================================================
// Numeric Configuration
// Division precision, decimals cap and fee denominator
// ============================================================================

use crate::numeric::{DivisionPrecision, DivisionRounding, FEE_UNITS_DENOMINATOR};
use num_bigint::BigInt;
use num_traits::Signed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ERC-20 decimals are a `uint8`.
pub const DEFAULT_MAX_DECIMALS: u32 = u8::MAX as u32;

/// Settings applied by a [`TokenConverter`](super::TokenConverter).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericConfig {
    /// Precision rule for decimal division
    pub division: DivisionPrecision,

    /// Largest accepted decimals count
    pub max_decimals: u32,

    /// Denominator for integer fee units
    pub fee_denominator: BigInt,
}

impl NumericConfig {
    /// Create a configuration with the given division precision and the
    /// default decimals cap and fee denominator.
    pub fn new(division: DivisionPrecision) -> Self {
        Self {
            division,
            max_decimals: DEFAULT_MAX_DECIMALS,
            fee_denominator: BigInt::from(FEE_UNITS_DENOMINATOR),
        }
    }

    /// Builder method: Set division precision
    pub fn with_division_precision(mut self, division: DivisionPrecision) -> Self {
        self.division = division;
        self
    }

    /// Builder method: Set the decimals cap
    pub fn with_max_decimals(mut self, max_decimals: u32) -> Self {
        self.max_decimals = max_decimals;
        self
    }

    /// Builder method: Set fee unit denominator
    pub fn with_fee_denominator(mut self, denominator: impl Into<BigInt>) -> Self {
        self.fee_denominator = denominator.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.division.significant_digits == 0 {
            return Err("Division precision must keep at least one digit".to_string());
        }

        if self.max_decimals == 0 {
            return Err("Max decimals must be positive".to_string());
        }

        if !self.fee_denominator.is_positive() {
            return Err("Fee denominator must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self::new(DivisionPrecision::default())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl NumericConfig {
    /// Subgraph-host compatible settings
    /// - 34 significant digits, half-up
    /// - Fee units over 10 000
    pub fn subgraph() -> Self {
        Self::default()
    }

    /// Settings for offline analytics
    /// - 100 significant digits, banker's rounding
    pub fn high_precision() -> Self {
        Self::new(DivisionPrecision::new(100, DivisionRounding::HalfEven))
    }
}
