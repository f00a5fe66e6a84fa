#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fintrack::{fintrack_config::Config, AppContext};
use fintrack_core::FixedClock;
use fintrack_domain::{EntryKind, Transaction};
use rust_decimal::Decimal;

/// Instant every test session reports as "now".
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
}

pub fn start_of_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Creates an isolated context with default preferences and a frozen clock.
pub fn setup_context() -> AppContext {
    AppContext::with_clock(Config::default(), Box::new(FixedClock(test_now())))
}

pub fn transaction(kind: EntryKind, amount: Decimal, category: &str) -> Transaction {
    Transaction::new(kind, amount, category, test_now())
}
