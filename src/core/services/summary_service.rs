use crate::ledger::{summary, Ledger, LedgerSummary, Transaction};

/// Number of records shown in the recent-activity view unless configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger) -> LedgerSummary {
        LedgerSummary::from_transactions(ledger.all())
    }

    pub fn recent(ledger: &Ledger, limit: usize) -> Vec<&Transaction> {
        summary::recent_transactions(ledger.all(), limit)
    }
}
