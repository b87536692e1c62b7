//! Ledger domain models: the category registry, transaction records, and the store.

pub mod category;
pub mod draft;
pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod sample;
pub mod summary;
pub mod transaction;

pub use category::{Category, UnknownCategory};
pub use draft::{TransactionDraft, ValidatedFields};
pub use filter::{CategoryFilter, TransactionFilter, TypeFilter};
pub use ledger::Ledger;
pub use summary::{CategoryTotal, LedgerSummary};
pub use transaction::{
    IdSequence, Transaction, TransactionId, TransactionKind, TransactionStatus,
};
