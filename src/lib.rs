#![doc(test(attr(deny(warnings))))]

//! Expense Ledger offers the in-memory transaction store, validation, filtering,
//! and summary primitives behind a small income/expense tracker.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod time;
pub mod utils;

pub use errors::{DraftField, LedgerError, ValidationError};

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    if utils::init_tracing() {
        tracing::info!("Expense Ledger tracing initialized.");
    }
}

/// Initializes tracing using the log filter from `config`, if any.
///
/// Tracing is configured once per process. When [`init`] or an earlier `init_with`
/// already ran, `config.log_filter` has no effect and a debug event records that.
pub fn init_with(config: &config::Config) {
    if utils::init_tracing_with(config.log_filter.as_deref()) {
        tracing::info!(ledger = %config.ledger_name, "Expense Ledger tracing initialized.");
    } else if let Some(filter) = config.log_filter.as_deref() {
        tracing::debug!(filter, "tracing already initialized, log filter ignored");
    }
}
