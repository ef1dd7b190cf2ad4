// ============================================================================
// Domain Models Module
// Fee tiers, numeric configuration and transaction records
// ============================================================================

pub mod config;
pub mod converter;
pub mod fee;
pub mod transaction;

pub use config::{NumericConfig, DEFAULT_MAX_DECIMALS};
pub use converter::TokenConverter;
pub use fee::{compute_fee_split, FeeSchedule, FeeSplit, FeeTier};
pub use transaction::{BlockContext, TransactionRecord};
