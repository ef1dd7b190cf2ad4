// ============================================================================
// Transaction Records
// Per-transaction block metadata persisted by the host indexer
// ============================================================================

use chrono::{DateTime, Utc};
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Block and transaction data carried by an on-chain event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockContext {
    /// Transaction hash as a 0x-prefixed hex string
    pub tx_hash: String,
    pub block_number: u64,
    /// Block timestamp in unix seconds
    pub timestamp: u64,
    /// Gas price in wei
    pub gas_price: BigInt,
}

impl BlockContext {
    pub fn new(
        tx_hash: impl Into<String>,
        block_number: u64,
        timestamp: u64,
        gas_price: impl Into<BigInt>,
    ) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            block_number,
            timestamp,
            gas_price: gas_price.into(),
        }
    }
}

/// A stored transaction, keyed by its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransactionRecord {
    pub id: String,
    pub block_number: u64,
    pub timestamp: u64,
    pub gas_price: BigInt,
}

impl TransactionRecord {
    /// A fresh record with zeroed block fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block_number: 0,
            timestamp: 0,
            gas_price: BigInt::default(),
        }
    }

    /// Overwrite the block fields from an event's context.
    pub fn apply_block(&mut self, context: &BlockContext) {
        self.block_number = context.block_number;
        self.timestamp = context.timestamp;
        self.gas_price = context.gas_price.clone();
    }

    /// Block timestamp as UTC, `None` if it is outside chrono's range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.timestamp).ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}
