use chrono::{TimeZone, Utc};
use expense_ledger::{
    ledger::{sample, Ledger},
    time::FixedClock,
};

/// Clock pinned to the day after the last sample record.
pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 25, 9, 0, 0).unwrap())
}

/// Ledger preloaded with the five demonstration transactions.
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new("Sample");
    sample::seed(&mut ledger).unwrap();
    ledger
}
