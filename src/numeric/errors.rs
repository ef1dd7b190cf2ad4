// ============================================================================
// Numeric Errors
// Error types for token amount conversion and fee arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while converting or scaling token amounts.
///
/// Division by zero is deliberately absent: the safe division helpers
/// substitute zero instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// Decimals count was negative
    NegativeDecimals,
    /// Decimals count exceeds the supported maximum
    DecimalsOutOfRange,
    /// Fewer fee tiers than the trading/protocol pair requires
    MissingFeeTier,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded target range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NegativeDecimals => {
                write!(f, "invalid decimals: count must not be negative")
            },
            NumericError::DecimalsOutOfRange => {
                write!(f, "invalid decimals: count exceeds supported maximum")
            },
            NumericError::MissingFeeTier => {
                write!(f, "fee schedule requires a trading and a protocol tier")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
