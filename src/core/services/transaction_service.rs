//! Business logic helpers for managing transactions.

use crate::core::services::ServiceResult;
use crate::ledger::{
    Ledger, Transaction, TransactionDraft, TransactionFilter, TransactionId, TransactionStatus,
};
use crate::time::Clock;

/// Provides validated construction, storage, and status helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates `draft` and builds a record with a fresh id. The ledger's records are not touched.
    pub fn construct(
        ledger: &mut Ledger,
        draft: TransactionDraft,
        clock: &dyn Clock,
    ) -> ServiceResult<Transaction> {
        match draft.build(ledger.id_sequence(), clock) {
            Ok(transaction) => Ok(transaction),
            Err(err) => {
                tracing::warn!(ledger = %ledger.name, error = %err, "transaction rejected");
                Err(err.into())
            }
        }
    }

    /// Stores a constructed transaction and returns its identifier.
    pub fn append(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<TransactionId> {
        ledger.append(transaction)
    }

    /// Constructs and appends in one step.
    pub fn record(
        ledger: &mut Ledger,
        draft: TransactionDraft,
        clock: &dyn Clock,
    ) -> ServiceResult<TransactionId> {
        let transaction = Self::construct(ledger, draft, clock)?;
        Self::append(ledger, transaction)
    }

    /// Flips the status of `id` and returns a copy of the updated record.
    pub fn toggle_status(ledger: &mut Ledger, id: TransactionId) -> ServiceResult<Transaction> {
        ledger.toggle_status(id).cloned()
    }

    pub fn set_status(
        ledger: &mut Ledger,
        id: TransactionId,
        status: TransactionStatus,
    ) -> ServiceResult<Transaction> {
        ledger.set_status(id, status).cloned()
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.all().iter().collect()
    }

    pub fn filtered<'a>(ledger: &'a Ledger, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        filter.apply(ledger.all())
    }
}
