use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::transaction::{IdSequence, Transaction, TransactionId, TransactionStatus};

/// Ordered, in-memory transaction store. The only owner allowed to mutate its records.
///
/// Transaction ids are unique within a ledger; deserialization rejects snapshots that repeat one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LedgerSnapshot")]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    transactions: Vec<Transaction>,
    ids: IdSequence,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            ids: IdSequence::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a validated record at the end of the store.
    ///
    /// Fails with [`LedgerError::DuplicateTransactionId`] when the ledger already holds the id.
    pub fn append(&mut self, transaction: Transaction) -> Result<TransactionId, LedgerError> {
        let id = transaction.id;
        if self.transaction(id).is_some() {
            tracing::warn!(ledger = %self.name, %id, "duplicate transaction id rejected");
            return Err(LedgerError::DuplicateTransactionId(id));
        }
        self.ids.observe(id);
        tracing::debug!(
            %id,
            kind = %transaction.kind,
            amount = transaction.amount,
            "transaction appended"
        );
        self.transactions.push(transaction);
        self.touch();
        Ok(id)
    }

    pub fn set_status(
        &mut self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Result<&Transaction, LedgerError> {
        let index = self.position(id)?;
        self.transactions[index].status = status;
        tracing::debug!(%id, %status, "transaction status set");
        self.touch();
        Ok(&self.transactions[index])
    }

    /// Flips Pending and Paid. The record's timestamps are left untouched.
    pub fn toggle_status(&mut self, id: TransactionId) -> Result<&Transaction, LedgerError> {
        let index = self.position(id)?;
        let next = self.transactions[index].status.toggled();
        self.set_status(id, next)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Id sequence used by construction; always ahead of every stored id.
    pub(crate) fn id_sequence(&mut self) -> &mut IdSequence {
        &mut self.ids
    }

    #[cfg(test)]
    pub(crate) fn next_id(&mut self) -> TransactionId {
        self.ids.allocate()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn position(&self, id: TransactionId) -> Result<usize, LedgerError> {
        self.transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or_else(|| {
                tracing::warn!(%id, "transaction not found");
                LedgerError::TransactionNotFound(id)
            })
    }
}

/// Wire shape of a [`Ledger`], checked before it becomes one.
#[derive(Deserialize)]
struct LedgerSnapshot {
    id: Uuid,
    name: String,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    ids: IdSequence,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LedgerSnapshot> for Ledger {
    type Error = LedgerError;

    fn try_from(snapshot: LedgerSnapshot) -> Result<Self, Self::Error> {
        let mut ids = snapshot.ids;
        let mut seen = HashSet::with_capacity(snapshot.transactions.len());
        for txn in &snapshot.transactions {
            if !seen.insert(txn.id) {
                return Err(LedgerError::DuplicateTransactionId(txn.id));
            }
            ids.observe(txn.id);
        }
        Ok(Self {
            id: snapshot.id,
            name: snapshot.name,
            transactions: snapshot.transactions,
            ids,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new("Personal")
    }
}
