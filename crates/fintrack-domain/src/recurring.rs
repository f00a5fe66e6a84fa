//! Recurring cash-flow templates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;
use crate::validation::{require_amount, require_text, CollectionKind, Validate, ValidationError};

/// A periodic income or expense, projected to a monthly equivalent for summaries.
///
/// `start_date` is carried for display; it does not gate inclusion in totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurringTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub interval: RecurrenceInterval,
    pub start_date: NaiveDate,
    #[serde(default = "RecurringTransaction::default_active")]
    pub is_active: bool,
}

impl RecurringTransaction {
    pub fn new(
        kind: EntryKind,
        amount: Decimal,
        category: impl Into<String>,
        interval: RecurrenceInterval,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: new_record_id(),
            kind,
            amount,
            category: category.into(),
            description: String::new(),
            interval,
            start_date,
            is_active: Self::default_active(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Monthly contribution of this entry; zero while inactive.
    pub fn monthly_equivalent(&self) -> Decimal {
        if !self.is_active {
            return Decimal::ZERO;
        }
        self.interval.to_monthly(self.amount)
    }

    pub fn display_label(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.category
        } else {
            &self.description
        }
    }

    pub fn default_active() -> bool {
        true
    }
}

impl Identifiable for RecurringTransaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for RecurringTransaction {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Validate for RecurringTransaction {
    fn validate(&self) -> Result<(), ValidationError> {
        let collection = CollectionKind::RecurringTransactions;
        require_text(collection, "id", &self.id)?;
        require_text(collection, "category", &self.category)?;
        require_amount(collection, "amount", self.amount)
    }
}
