// ============================================================================
// Token Units Library
// Arbitrary-precision token amount conversion and fee arithmetic
// ============================================================================

//! # Token Units
//!
//! Numeric helpers for blockchain indexers: raw on-chain token amounts to
//! human-readable decimals, fee splitting, and division that never fails on
//! a zero denominator.
//!
//! ## Features
//!
//! - **Exact conversions** between raw integers and decimals (`bigdecimal`)
//! - **One decimals input** for native and big integers ([`numeric::DecimalsExponent`])
//! - **Safe division** returning zero for zero denominators
//! - **Named fee tiers** instead of positional indexing
//! - **Transaction store seam** for host persistence
//!
//! ## Example
//!
//! ```rust
//! use token_units::prelude::*;
//! use bigdecimal::BigDecimal;
//! use num_bigint::BigInt;
//!
//! // 1,250.5 USDC traded
//! let amount = raw_to_decimal(&BigInt::from(1_250_500_000u64), 6u8).unwrap();
//!
//! let schedule = FeeSchedule::new(
//!     FeeTier::new("trading", BigDecimal::from(1) / BigDecimal::from(4)), // 0.25%
//!     FeeTier::new("protocol", BigDecimal::from(5) / BigDecimal::from(100)), // 0.05%
//! );
//! let split = schedule.split(&amount);
//! println!("Trading fee: {}", split.trading_fee);
//! println!("Protocol fee: {}", split.protocol_fee);
//!
//! // Empty pool: price falls back to zero instead of failing
//! let price = safe_divide_decimal(&amount, &BigDecimal::from(0));
//! assert_eq!(price, BigDecimal::from(0));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        compute_fee_split, BlockContext, FeeSchedule, FeeSplit, FeeTier, NumericConfig,
        TokenConverter, TransactionRecord,
    };
    pub use crate::interfaces::{upsert_transaction, InMemoryTransactionStore, TransactionStore};
    pub use crate::numeric::{
        decimal_to_raw, fee_units_to_fraction, percent_to_fraction, raw_to_decimal,
        safe_divide_decimal, safe_divide_integer, scale_factor, scale_factor_int,
        DecimalsExponent, DivisionPrecision, DivisionRounding, NumericError, NumericResult,
    };
    pub use crate::utils::{is_null_eth_value, normalize_case};
}
