// ============================================================================
// Transaction Store Interface
// Defines the contract for persisting transaction records
// ============================================================================

use crate::domain::{BlockContext, TransactionRecord};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Key-value storage for transaction records, keyed by transaction hash.
/// Hosts implement this over their own entity store.
pub trait TransactionStore: Send + Sync {
    /// Load a record by id
    fn load(&self, id: &str) -> Option<TransactionRecord>;

    /// Insert or replace a record
    fn save(&self, record: TransactionRecord);
}

/// Load the record for the context's transaction (creating it if absent),
/// refresh its block fields, save it and return it.
pub fn upsert_transaction<S>(store: &S, context: &BlockContext) -> TransactionRecord
where
    S: TransactionStore + ?Sized,
{
    let mut record = store.load(&context.tx_hash).unwrap_or_else(|| {
        tracing::debug!(tx_hash = %context.tx_hash, "creating transaction record");
        TransactionRecord::new(context.tx_hash.clone())
    });
    record.apply_block(context);
    store.save(record.clone());
    tracing::debug!(
        tx_hash = %record.id,
        block_number = record.block_number,
        "transaction record saved"
    );
    record
}

/// In-memory store for tests and embedded use
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    records: RwLock<HashMap<String, TransactionRecord>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn load(&self, id: &str) -> Option<TransactionRecord> {
        self.records.read().get(id).cloned()
    }

    fn save(&self, record: TransactionRecord) {
        self.records.write().insert(record.id.clone(), record);
    }
}
