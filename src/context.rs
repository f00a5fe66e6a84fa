//! Per-session application context.
//!
//! An [`AppContext`] is built once per user session from the loaded config,
//! owns the [`FinanceSession`] and the currency formatter, and is consumed by
//! [`AppContext::close`] when the session ends. Nothing is kept in globals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use fintrack_config::{Config, ConfigManager};
use fintrack_core::{
    Clock, CurrencyFormatter, FinanceSession, FixedPointFormatter, LedgerService, SystemClock,
};

use crate::errors::Result;

/// Final collection sizes reported when a session is closed.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SessionStats {
    pub transactions: usize,
    pub recurring_transactions: usize,
    pub assets: usize,
    pub liabilities: usize,
}

pub struct AppContext {
    config: Config,
    session: FinanceSession,
    formatter: FixedPointFormatter,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        let formatter = FixedPointFormatter::new(config.currency_symbol(), config.decimal_places);
        info!(
            "opening session (currency {}, locale {})",
            config.currency, config.locale
        );
        Self {
            config,
            session: FinanceSession::with_clock(clock),
            formatter,
        }
    }

    /// Loads preferences through `manager` and opens a fresh session.
    pub fn from_manager(manager: &ConfigManager) -> Result<Self> {
        let config = manager.load()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &FinanceSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FinanceSession {
        &mut self.session
    }

    pub fn formatter(&self) -> &dyn CurrencyFormatter {
        &self.formatter
    }

    pub fn format_amount(&self, amount: Decimal) -> String {
        self.formatter.format_amount(amount)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        fintrack_core::format_date(date)
    }

    /// Ends the session, discarding its records.
    pub fn close(self) -> SessionStats {
        let [transactions, recurring, assets, liabilities] =
            LedgerService::counts(self.session.ledger()).map(|(_, count)| count);
        let stats = SessionStats {
            transactions,
            recurring_transactions: recurring,
            assets,
            liabilities,
        };
        info!(
            "closing session: {} transactions, {} recurring, {} assets, {} liabilities",
            stats.transactions, stats.recurring_transactions, stats.assets, stats.liabilities
        );
        stats
    }
}
