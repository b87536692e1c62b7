//! Demonstration records for seeding a fresh ledger.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::errors::LedgerError;

use super::category::Category;
use super::ledger::Ledger;
use super::transaction::{Transaction, TransactionId, TransactionKind, TransactionStatus};

struct SampleRow {
    id: u64,
    kind: TransactionKind,
    description: &'static str,
    amount: f64,
    category: Category,
    date: (u32, u32),
    status: TransactionStatus,
    due_date: Option<(u32, u32)>,
    created_at: (u32, u32, u32, u32),
}

const SAMPLE_YEAR: i32 = 2024;

const SAMPLE_ROWS: [SampleRow; 5] = [
    SampleRow {
        id: 1,
        kind: TransactionKind::Income,
        description: "Venta de servicios",
        amount: 5000.0,
        category: Category::Services,
        date: (6, 20),
        status: TransactionStatus::Paid,
        due_date: None,
        created_at: (6, 20, 10, 0),
    },
    SampleRow {
        id: 2,
        kind: TransactionKind::Expense,
        description: "Compra de equipos",
        amount: 1200.0,
        category: Category::Technology,
        date: (6, 21),
        status: TransactionStatus::Pending,
        due_date: Some((6, 30)),
        created_at: (6, 21, 14, 30),
    },
    SampleRow {
        id: 3,
        kind: TransactionKind::Expense,
        description: "Publicidad online",
        amount: 800.0,
        category: Category::Marketing,
        date: (6, 22),
        status: TransactionStatus::Paid,
        due_date: None,
        created_at: (6, 22, 9, 15),
    },
    SampleRow {
        id: 4,
        kind: TransactionKind::Income,
        description: "Consultoría",
        amount: 3000.0,
        category: Category::Services,
        date: (6, 23),
        status: TransactionStatus::Paid,
        due_date: None,
        created_at: (6, 23, 16, 45),
    },
    SampleRow {
        id: 5,
        kind: TransactionKind::Expense,
        description: "Arriendo oficina",
        amount: 2000.0,
        category: Category::Office,
        date: (6, 24),
        status: TransactionStatus::Pending,
        due_date: Some((7, 1)),
        created_at: (6, 24, 8, 0),
    },
];

/// Returns the demonstration transactions in insertion order.
pub fn transactions() -> Vec<Transaction> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|row| {
            let txn = row.to_transaction();
            if txn.is_none() {
                tracing::warn!(id = row.id, "sample row has an invalid date, skipped");
            }
            txn
        })
        .collect()
}

/// Appends the demonstration transactions to `ledger`.
///
/// The rows carry fixed ids 1 through 5, so seeding a ledger that already holds one fails.
pub fn seed(ledger: &mut Ledger) -> Result<(), LedgerError> {
    let rows = transactions();
    if let Some(clash) = rows.iter().find(|txn| ledger.transaction(txn.id).is_some()) {
        return Err(LedgerError::DuplicateTransactionId(clash.id));
    }
    let count = rows.len();
    for txn in rows {
        ledger.append(txn)?;
    }
    tracing::info!(ledger = %ledger.name, count, "seeded sample transactions");
    Ok(())
}

impl SampleRow {
    fn to_transaction(&self) -> Option<Transaction> {
        Some(Transaction {
            id: TransactionId(self.id),
            kind: self.kind,
            description: self.description.to_string(),
            amount: self.amount,
            category: self.category,
            date: day(self.date)?,
            status: self.status,
            due_date: match self.due_date {
                Some(due) => Some(day(due)?),
                None => None,
            },
            created_at: instant(self.created_at)?,
        })
    }
}

fn day((month, day): (u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(SAMPLE_YEAR, month, day)
}

fn instant((month, day, hour, minute): (u32, u32, u32, u32)) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(SAMPLE_YEAR, month, day, hour, minute, 0)
        .single()
}
