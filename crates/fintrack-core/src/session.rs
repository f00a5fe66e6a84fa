//! Stable, public-facing session API.
//!
//! A [`FinanceSession`] owns one ledger for the lifetime of a user session.
//! Frontends push records in through the `add_*`/`submit_*` calls and read
//! derived views back through the `get_*` calls; every read recomputes from
//! the current collections.

use fintrack_domain::{
    Asset, Ledger, Liability, RecurringTransaction, Transaction, ValidationError,
};

use crate::{
    drafts::{AssetDraft, LiabilityDraft, RecurringDraft, TransactionDraft},
    ledger_service::LedgerService,
    net_worth_service::{NetWorthService, NetWorthSummary},
    recurrence_service::{RecurrenceService, RecurringSummary},
    summary_service::{SummaryService, TransactionSummary},
    time::{Clock, SystemClock},
};

pub struct FinanceSession {
    ledger: Ledger,
    clock: Box<dyn Clock>,
}

impl Default for FinanceSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanceSession {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            ledger: LedgerService::create(),
            clock,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn add_transaction(&mut self, record: Transaction) -> Result<(), ValidationError> {
        LedgerService::add_transaction(&mut self.ledger, record)
    }

    pub fn add_recurring_transaction(
        &mut self,
        record: RecurringTransaction,
    ) -> Result<(), ValidationError> {
        LedgerService::add_recurring(&mut self.ledger, record)
    }

    pub fn add_asset(&mut self, record: Asset) -> Result<(), ValidationError> {
        LedgerService::add_asset(&mut self.ledger, record)
    }

    pub fn add_liability(&mut self, record: Liability) -> Result<(), ValidationError> {
        LedgerService::add_liability(&mut self.ledger, record)
    }

    /// Builds a transaction from form input and appends it, returning the new id.
    pub fn submit_transaction(&mut self, draft: &TransactionDraft) -> Result<String, ValidationError> {
        let record = draft.submit(self.clock.as_ref())?;
        let id = record.id.clone();
        self.add_transaction(record)?;
        Ok(id)
    }

    pub fn submit_recurring(&mut self, draft: &RecurringDraft) -> Result<String, ValidationError> {
        let record = draft.submit()?;
        let id = record.id.clone();
        self.add_recurring_transaction(record)?;
        Ok(id)
    }

    pub fn submit_asset(&mut self, draft: &AssetDraft) -> Result<String, ValidationError> {
        let record = draft.submit()?;
        let id = record.id.clone();
        self.add_asset(record)?;
        Ok(id)
    }

    pub fn submit_liability(&mut self, draft: &LiabilityDraft) -> Result<String, ValidationError> {
        let record = draft.submit()?;
        let id = record.id.clone();
        self.add_liability(record)?;
        Ok(id)
    }

    pub fn get_summary(&self) -> TransactionSummary {
        SummaryService::summarize(self.ledger.transactions())
    }

    pub fn get_recurring_summary(&self) -> RecurringSummary {
        RecurrenceService::summarize(self.ledger.recurring_transactions())
    }

    pub fn get_net_worth(&self) -> NetWorthSummary {
        NetWorthService::compute(self.ledger.assets(), self.ledger.liabilities())
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn recurring_transactions(&self) -> &[RecurringTransaction] {
        self.ledger.recurring_transactions()
    }

    pub fn assets(&self) -> &[Asset] {
        self.ledger.assets()
    }

    pub fn liabilities(&self) -> &[Liability] {
        self.ledger.liabilities()
    }
}
