// ============================================================================
// Utilities Module
// String helpers and logging setup
// ============================================================================

mod text;

#[cfg(feature = "logging")]
pub mod logging;

pub use text::{is_null_eth_value, normalize_case, normalize_case_in_place, NULL_ETH_VALUE};
