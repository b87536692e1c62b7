//! Selector pair used to derive the visible subset of the ledger.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::category::Category;
use super::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionKind::Income,
            TypeFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl From<TransactionKind> for TypeFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => TypeFilter::Income,
            TransactionKind::Expense => TypeFilter::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            _ => Err(LedgerError::InvalidFilter(format!(
                "unknown transaction type `{trimmed}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_label(s).map(CategoryFilter::Only).ok_or_else(|| {
            LedgerError::InvalidFilter(format!("unknown category `{}`", s.trim()))
        })
    }
}

/// Type and category selectors combined with AND.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    pub kind: TypeFilter,
    pub category: CategoryFilter,
}

impl TransactionFilter {
    pub fn new(kind: TypeFilter, category: CategoryFilter) -> Self {
        Self { kind, category }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.kind.matches(transaction.kind) && self.category.matches(transaction.category)
    }

    /// Ordered subsequence of `transactions` accepted by both selectors.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|txn| self.matches(txn)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{sample, Ledger, TransactionId};

    fn ids(found: &[&Transaction]) -> Vec<u64> {
        found.iter().map(|txn| txn.id.value()).collect()
    }

    fn seeded() -> Ledger {
        let mut ledger = Ledger::new("Filters");
        sample::seed(&mut ledger).unwrap();
        ledger
    }

    #[test]
    fn all_all_returns_full_store_in_order() {
        let ledger = seeded();
        let found = TransactionFilter::default().apply(ledger.all());
        assert_eq!(ids(&found), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn type_filter_selects_kind() {
        let ledger = seeded();
        let income = TransactionFilter::new(TypeFilter::Income, CategoryFilter::All);
        assert_eq!(ids(&income.apply(ledger.all())), vec![1, 4]);
        let expense = TransactionFilter::new(TypeFilter::Expense, CategoryFilter::All);
        assert_eq!(ids(&expense.apply(ledger.all())), vec![2, 3, 5]);
    }

    #[test]
    fn selectors_combine_with_and() {
        let ledger = seeded();
        let filter = TransactionFilter::new(TypeFilter::Income, Category::Services.into());
        assert_eq!(ids(&filter.apply(ledger.all())), vec![1, 4]);

        let none = TransactionFilter::new(TypeFilter::Expense, Category::Services.into());
        assert!(none.apply(ledger.all()).is_empty());
    }

    #[test]
    fn category_filter_alone() {
        let ledger = seeded();
        let filter = TransactionFilter::new(TypeFilter::All, Category::Office.into());
        let found = filter.apply(ledger.all());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, TransactionId(5));
    }

    #[test]
    fn selectors_parse_from_control_values() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!("Income".parse::<TypeFilter>().unwrap(), TypeFilter::Income);
        assert_eq!(" expense".parse::<TypeFilter>().unwrap(), TypeFilter::Expense);
        assert!(matches!(
            "transfer".parse::<TypeFilter>(),
            Err(LedgerError::InvalidFilter(_))
        ));

        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Transporte".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Transport)
        );
        assert!("Viajes".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn invalid_selectors_echo_caller_input() {
        let err = " Transfer ".parse::<TypeFilter>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid filter: unknown transaction type `Transfer`"
        );
        let err = "Viajes".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid filter: unknown category `Viajes`");
    }
}
