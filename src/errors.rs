use std::fmt;

use thiserror::Error;

use crate::ledger::TransactionId;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransactionId(TransactionId),
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Required draft fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Description,
    Amount,
    Category,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Description => "description",
            DraftField::Amount => "amount",
            DraftField::Category => "category",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a transaction draft is missing required fields or carries malformed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing or invalid fields: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<DraftField>,
}

impl ValidationError {
    pub fn new(fields: Vec<DraftField>) -> Self {
        Self { fields }
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.fields.contains(&field)
    }
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(DraftField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
