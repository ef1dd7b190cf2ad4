// ============================================================================
// Fee Tiers and Fee Splitting
// Trading/protocol fee amounts from percentage fee tiers
// ============================================================================

use crate::numeric::{percent_to_fraction, NumericError, NumericResult};
use bigdecimal::BigDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fee tier as configured for a liquidity pool.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeeTier {
    /// Tier identifier (e.g. "trading-fee-0x..")
    pub id: String,
    /// Fee percentage on the 0-100 scale
    pub fee_percentage: BigDecimal,
}

impl FeeTier {
    pub fn new(id: impl Into<String>, fee_percentage: BigDecimal) -> Self {
        Self {
            id: id.into(),
            fee_percentage,
        }
    }

    /// The tier's fee as a 0-1 fraction.
    pub fn fraction(&self) -> BigDecimal {
        percent_to_fraction(&self.fee_percentage)
    }
}

/// The two fee tiers of a pool, named instead of indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeeSchedule {
    pub trading: FeeTier,
    pub protocol: FeeTier,
}

impl FeeSchedule {
    pub fn new(trading: FeeTier, protocol: FeeTier) -> Self {
        Self { trading, protocol }
    }

    /// Build from a positional tier list: index 0 is the trading tier,
    /// index 1 the protocol tier. Extra tiers are ignored.
    ///
    /// # Errors
    /// Returns `MissingFeeTier` if fewer than two tiers are given.
    pub fn from_ordered(tiers: &[FeeTier]) -> NumericResult<Self> {
        match tiers {
            [trading, protocol, ..] => Ok(Self::new(trading.clone(), protocol.clone())),
            _ => Err(NumericError::MissingFeeTier),
        }
    }

    /// Split a traded amount into its trading and protocol fees.
    pub fn split(&self, total_amount: &BigDecimal) -> FeeSplit {
        compute_fee_split(
            total_amount,
            &self.trading.fee_percentage,
            &self.protocol.fee_percentage,
        )
    }
}

/// Fee amounts charged on a single trade.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeeSplit {
    pub trading_fee: BigDecimal,
    pub protocol_fee: BigDecimal,
}

impl FeeSplit {
    /// Trading fee plus protocol fee.
    pub fn total(&self) -> BigDecimal {
        &self.trading_fee + &self.protocol_fee
    }

    /// The fees as an ordered pair: `(trading, protocol)`.
    pub fn into_pair(self) -> (BigDecimal, BigDecimal) {
        (self.trading_fee, self.protocol_fee)
    }
}

/// Compute trading and protocol fee amounts for a traded amount.
///
/// Both percentages are on the 0-100 scale. Multiplication is exact.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use token_units::domain::compute_fee_split;
///
/// let split = compute_fee_split(
///     &BigDecimal::from(1000),
///     &BigDecimal::from(30),
///     &BigDecimal::from(5),
/// );
/// assert_eq!(split.into_pair(), (BigDecimal::from(300), BigDecimal::from(50)));
/// ```
pub fn compute_fee_split(
    total_amount: &BigDecimal,
    trading_fee_percent: &BigDecimal,
    protocol_fee_percent: &BigDecimal,
) -> FeeSplit {
    FeeSplit {
        trading_fee: total_amount * percent_to_fraction(trading_fee_percent),
        protocol_fee: total_amount * percent_to_fraction(protocol_fee_percent),
    }
}
