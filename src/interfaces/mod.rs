// ============================================================================
// Interfaces Module
// Seams for host-provided storage
// ============================================================================

pub mod transaction_store;

pub use transaction_store::{upsert_transaction, InMemoryTransactionStore, TransactionStore};
