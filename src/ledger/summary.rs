//! Derived figures computed fresh from a ledger snapshot.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::transaction::{Transaction, TransactionKind};

/// Expense total for one category, scaled against the largest category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
    pub relative_magnitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub pending_count: usize,
    pub expense_by_category: Vec<CategoryTotal>,
    pub max_category_amount: f64,
}

impl LedgerSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_income(transactions);
        let total_expense = total_expense(transactions);
        let sums = category_sums(transactions);
        let max_category_amount = max_of(&sums);
        let expense_by_category = sums
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                amount,
                relative_magnitude: amount / max_category_amount,
            })
            .collect();
        tracing::trace!(
            records = transactions.len(),
            total_income,
            total_expense,
            "ledger summary computed"
        );
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            pending_count: pending_count(transactions),
            expense_by_category,
            max_category_amount,
        }
    }

    /// Share of the largest category, or `None` when the category has no expenses.
    pub fn relative_magnitude(&self, category: Category) -> Option<f64> {
        self.category_total(category)
            .map(|entry| entry.relative_magnitude)
    }

    pub fn category_total(&self, category: Category) -> Option<&CategoryTotal> {
        self.expense_by_category
            .iter()
            .find(|entry| entry.category == category)
    }
}

pub fn total_income(transactions: &[Transaction]) -> f64 {
    sum_kind(transactions, TransactionKind::Income)
}

pub fn total_expense(transactions: &[Transaction]) -> f64 {
    sum_kind(transactions, TransactionKind::Expense)
}

pub fn balance(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expense(transactions)
}

pub fn pending_count(transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|txn| txn.status.is_pending())
        .count()
}

/// Expense sums in registry order. Categories summing to exactly zero are left out.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<(Category, f64)> {
    category_sums(transactions)
}

/// Largest per-category expense sum, floored at 1 so ratios never divide by zero.
pub fn max_category_amount(transactions: &[Transaction]) -> f64 {
    max_of(&category_sums(transactions))
}

pub fn relative_magnitude(transactions: &[Transaction], category: Category) -> Option<f64> {
    let sums = category_sums(transactions);
    let max = max_of(&sums);
    sums.iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, amount)| amount / max)
}

/// Last `limit` records, most recent first.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(limit).collect()
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}

fn category_sums(transactions: &[Transaction]) -> Vec<(Category, f64)> {
    Category::ALL
        .iter()
        .map(|category| {
            let amount: f64 = transactions
                .iter()
                .filter(|txn| txn.is_expense() && txn.category == *category)
                .map(|txn| txn.amount)
                .sum();
            (*category, amount)
        })
        .filter(|(_, amount)| *amount != 0.0)
        .collect()
}

fn max_of(sums: &[(Category, f64)]) -> f64 {
    sums.iter().map(|(_, amount)| *amount).fold(1.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{sample, Ledger, TransactionId};

    fn seeded() -> Ledger {
        let mut ledger = Ledger::new("Summary");
        sample::seed(&mut ledger).unwrap();
        ledger
    }

    #[test]
    fn summarizes_sample_ledger() {
        let ledger = seeded();
        let summary = LedgerSummary::from_transactions(ledger.all());

        assert_eq!(summary.total_income, 8000.0);
        assert_eq!(summary.total_expense, 4000.0);
        assert_eq!(summary.balance, 4000.0);
        assert_eq!(summary.pending_count, 2);
        assert_eq!(summary.max_category_amount, 2000.0);

        let breakdown: Vec<(Category, f64)> = summary
            .expense_by_category
            .iter()
            .map(|entry| (entry.category, entry.amount))
            .collect();
        assert_eq!(
            breakdown,
            vec![
                (Category::Office, 2000.0),
                (Category::Marketing, 800.0),
                (Category::Technology, 1200.0),
            ]
        );
    }

    #[test]
    fn breakdown_sums_to_total_expense() {
        let ledger = seeded();
        let summary = LedgerSummary::from_transactions(ledger.all());
        let sum: f64 = summary.expense_by_category.iter().map(|e| e.amount).sum();
        assert_eq!(sum, summary.total_expense);
        assert!(summary.expense_by_category.iter().all(|e| e.amount != 0.0));
    }

    #[test]
    fn relative_magnitude_is_scaled_to_largest_category() {
        let ledger = seeded();
        let summary = LedgerSummary::from_transactions(ledger.all());

        assert_eq!(summary.relative_magnitude(Category::Office), Some(1.0));
        assert_eq!(summary.relative_magnitude(Category::Marketing), Some(0.4));
        assert_eq!(summary.relative_magnitude(Category::Technology), Some(0.6));
        assert_eq!(summary.relative_magnitude(Category::Services), None);
        assert_eq!(
            relative_magnitude(ledger.all(), Category::Technology),
            Some(0.6)
        );
    }

    #[test]
    fn empty_ledger_uses_unit_floor() {
        let summary = LedgerSummary::from_transactions(&[]);
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 0.0);
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.pending_count, 0);
        assert!(summary.expense_by_category.is_empty());
        assert_eq!(summary.max_category_amount, 1.0);
    }

    #[test]
    fn small_expenses_scale_against_floor() {
        let mut ledger = Ledger::new("Small");
        sample::seed(&mut ledger).unwrap();
        let mut txns = ledger.all().to_vec();
        txns.retain(|txn| txn.is_income());
        let mut tiny = ledger.all()[1].clone();
        tiny.amount = 0.25;
        txns.push(tiny);

        assert_eq!(max_category_amount(&txns), 1.0);
        assert_eq!(relative_magnitude(&txns, Category::Technology), Some(0.25));
    }

    #[test]
    fn balance_may_go_negative() {
        let ledger = seeded();
        let expenses: Vec<Transaction> = ledger
            .all()
            .iter()
            .filter(|txn| txn.is_expense())
            .cloned()
            .collect();
        assert_eq!(balance(&expenses), -4000.0);
        assert_eq!(total_income(&expenses) - total_expense(&expenses), balance(&expenses));
    }

    #[test]
    fn recent_transactions_are_reversed() {
        let ledger = seeded();
        let recent: Vec<TransactionId> = recent_transactions(ledger.all(), 3)
            .iter()
            .map(|txn| txn.id)
            .collect();
        assert_eq!(
            recent,
            vec![TransactionId(5), TransactionId(3), TransactionId(2)]
        );
        assert_eq!(recent_transactions(ledger.all(), 10).len(), 5);
        assert!(recent_transactions(ledger.all(), 0).is_empty());
    }

    #[test]
    fn toggling_changes_only_pending_count() {
        let mut ledger = seeded();
        let before = LedgerSummary::from_transactions(ledger.all());
        ledger.toggle_status(TransactionId(2)).unwrap();
        let after = LedgerSummary::from_transactions(ledger.all());

        assert_eq!(before.pending_count, 2);
        assert_eq!(after.pending_count, 1);
        assert_eq!(after.total_income, before.total_income);
        assert_eq!(after.total_expense, before.total_expense);
        assert_eq!(after.balance, before.balance);
        assert_eq!(after.expense_by_category, before.expense_by_category);
    }

    #[test]
    fn expense_breakdown_helper_matches_summary() {
        let ledger = seeded();
        let summary = LedgerSummary::from_transactions(ledger.all());
        let helper = expense_by_category(ledger.all());
        assert_eq!(helper.len(), summary.expense_by_category.len());
        assert_eq!(helper[0], (Category::Office, 2000.0));
    }
}
