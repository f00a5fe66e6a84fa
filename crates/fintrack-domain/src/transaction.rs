//! One-off income and expense entries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;
use crate::validation::{require_amount, require_text, CollectionKind, Validate, ValidationError};

/// A single recorded cash flow. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        kind: EntryKind,
        amount: Decimal,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_record_id(),
            kind,
            amount,
            category: category.into(),
            description: String::new(),
            date,
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

    /// Returns the description, or the category when no description was given.
    pub fn display_label(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.category
        } else {
            &self.description
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Validate for Transaction {
    fn validate(&self) -> Result<(), ValidationError> {
        let collection = CollectionKind::Transactions;
        require_text(collection, "id", &self.id)?;
        require_text(collection, "category", &self.category)?;
        require_amount(collection, "amount", self.amount)
    }
}
