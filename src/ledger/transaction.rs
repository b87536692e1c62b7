use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Sequence-derived identifier, unique within a ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl TransactionId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id allocator owned by a ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hands out the next id and advances the sequence.
    pub fn allocate(&mut self) -> TransactionId {
        let id = TransactionId(self.next);
        self.next += 1;
        id
    }

    /// Keeps the sequence strictly above an id that entered the ledger from elsewhere.
    pub fn observe(&mut self, id: TransactionId) {
        if id.0 >= self.next {
            self.next = id.0 + 1;
        }
    }

    pub fn peek(&self) -> TransactionId {
        TransactionId(self.next)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Payment state. Changes only through an explicit set or toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Paid,
}

impl TransactionStatus {
    pub fn toggled(self) -> Self {
        match self {
            TransactionStatus::Pending => TransactionStatus::Paid,
            TransactionStatus::Paid => TransactionStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TransactionStatus::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Paid => "Paid",
        };
        f.write_str(label)
    }
}

/// A validated ledger record. Build one through [`TransactionDraft`](super::TransactionDraft).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign the ledger balance applies to it.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "txn:{} {} {:.2} [{}] {}",
            self.id, self.kind, self.amount, self.category, self.status
        )
    }
}
