//! Render-time formatting of monetary values and dates.
//!
//! Aggregations stay exact; rounding happens only here.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Renders a calendar date for list views, e.g. `Mar 5, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: Decimal) -> String;
}

/// Prefixes a currency symbol and rounds to a fixed number of decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPointFormatter {
    pub symbol: String,
    pub decimal_places: u32,
}

impl FixedPointFormatter {
    pub fn new(symbol: impl Into<String>, decimal_places: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_places,
        }
    }
}

impl Default for FixedPointFormatter {
    fn default() -> Self {
        Self::new("$", 2)
    }
}

impl CurrencyFormatter for FixedPointFormatter {
    fn format_amount(&self, amount: Decimal) -> String {
        let mut rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimal_places);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{}", self.symbol, rounded.abs())
        } else {
            format!("{}{}", self.symbol, rounded.abs())
        }
    }
}
