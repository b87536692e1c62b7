//! Validation and construction of new transactions from untrusted input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{DraftField, ValidationError};
use crate::time::Clock;

use super::category::Category;
use super::transaction::{IdSequence, Transaction, TransactionKind, TransactionStatus};

/// Candidate transaction as entered by the user. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Checks required fields and returns every failing one at once.
    pub fn validate(&self) -> Result<ValidatedFields, ValidationError> {
        let mut failures = Vec::new();

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty());
        if description.is_none() {
            failures.push(DraftField::Description);
        }

        let amount = self.amount.as_deref().and_then(parse_amount);
        if amount.is_none() {
            failures.push(DraftField::Amount);
        }

        let category = self.category.as_deref().and_then(Category::from_label);
        if category.is_none() {
            failures.push(DraftField::Category);
        }

        match (description, amount, category) {
            (Some(description), Some(amount), Some(category)) => Ok(ValidatedFields {
                description: description.to_string(),
                amount,
                category,
            }),
            _ => Err(ValidationError::new(failures)),
        }
    }

    /// Validates the draft and produces a finished record.
    ///
    /// An id is drawn from `ids` only when validation succeeds.
    pub fn build(
        self,
        ids: &mut IdSequence,
        clock: &dyn Clock,
    ) -> Result<Transaction, ValidationError> {
        let fields = self.validate()?;
        let created_at = clock.now();
        Ok(Transaction {
            id: ids.allocate(),
            kind: self.kind.unwrap_or(TransactionKind::Expense),
            description: fields.description,
            amount: fields.amount,
            category: fields.category,
            date: self.date.unwrap_or_else(|| clock.today()),
            status: self.status.unwrap_or_default(),
            due_date: self.due_date,
            created_at,
        })
    }
}

/// Required fields narrowed to their validated form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}
