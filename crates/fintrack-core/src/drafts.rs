//! Raw form input converted into ledger records.
//!
//! A draft holds exactly what a user typed. Submitting it checks required
//! fields, parses the amount text, assigns a fresh id, and stamps dates from
//! the injected [`Clock`]. Drafts never touch the ledger themselves.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fintrack_domain::{
    Asset, AssetKind, CollectionKind, EntryKind, Liability, LiabilityKind, RecurrenceInterval,
    RecurringTransaction, Transaction, ValidationError, require_amount,
};

use crate::time::Clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: EntryKind,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl TransactionDraft {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
        }
    }

    pub fn submit(&self, clock: &dyn Clock) -> Result<Transaction, ValidationError> {
        let collection = CollectionKind::Transactions;
        let amount = parse_amount(collection, &self.amount)?;
        let category = required(collection, "category", &self.category)?;
        Ok(
            Transaction::new(self.kind, amount, category, clock.now())
                .with_description(self.description.trim()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringDraft {
    pub kind: EntryKind,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub interval: RecurrenceInterval,
    pub start_date: Option<NaiveDate>,
}

impl RecurringDraft {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            interval: RecurrenceInterval::default(),
            start_date: None,
        }
    }

    /// Recurring entries need an explicit start date; the clock is not consulted.
    pub fn submit(&self) -> Result<RecurringTransaction, ValidationError> {
        let collection = CollectionKind::RecurringTransactions;
        let amount = parse_amount(collection, &self.amount)?;
        let category = required(collection, "category", &self.category)?;
        let start_date = self.start_date.ok_or(ValidationError::MissingField {
            collection,
            field: "start_date",
        })?;
        Ok(
            RecurringTransaction::new(self.kind, amount, category, self.interval, start_date)
                .with_description(self.description.trim()),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub name: String,
    pub value: String,
    pub kind: AssetKind,
}

impl AssetDraft {
    pub fn submit(&self) -> Result<Asset, ValidationError> {
        let collection = CollectionKind::Assets;
        let name = required(collection, "name", &self.name)?;
        let value = parse_amount(collection, &self.value)?;
        Ok(Asset::new(name, value, self.kind))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiabilityDraft {
    pub name: String,
    pub amount: String,
    pub kind: LiabilityKind,
}

impl LiabilityDraft {
    pub fn submit(&self) -> Result<Liability, ValidationError> {
        let collection = CollectionKind::Liabilities;
        let name = required(collection, "name", &self.name)?;
        let amount = parse_amount(collection, &self.amount)?;
        Ok(Liability::new(name, amount, self.kind))
    }
}

fn required<'a>(
    collection: CollectionKind,
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { collection, field });
    }
    Ok(trimmed)
}

fn parse_amount(collection: CollectionKind, raw: &str) -> Result<Decimal, ValidationError> {
    let field = match collection {
        CollectionKind::Assets => "value",
        _ => "amount",
    };
    let text = required(collection, field, raw)?;
    let amount = Decimal::from_str(text).map_err(|_| ValidationError::InvalidAmount {
        collection,
        input: text.to_string(),
    })?;
    require_amount(collection, field, amount)?;
    Ok(amount)
}
