use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;
use crate::validation::{require_amount, require_text, CollectionKind, Validate, ValidationError};

/// Something owed that is subtracted from net worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: LiabilityKind,
}

impl Liability {
    pub fn new(name: impl Into<String>, amount: Decimal, kind: LiabilityKind) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            amount,
            kind,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityKind {
    #[default]
    CreditCard,
    Loan,
    Mortgage,
    Other,
}

impl LiabilityKind {
    pub const ALL: [LiabilityKind; 4] = [
        LiabilityKind::CreditCard,
        LiabilityKind::Loan,
        LiabilityKind::Mortgage,
        LiabilityKind::Other,
    ];
}

impl fmt::Display for LiabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LiabilityKind::CreditCard => "Credit Card",
            LiabilityKind::Loan => "Loan",
            LiabilityKind::Mortgage => "Mortgage",
            LiabilityKind::Other => "Other",
        };
        f.write_str(label)
    }
}

impl Identifiable for Liability {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Liability {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Liability {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Validate for Liability {
    fn validate(&self) -> Result<(), ValidationError> {
        let collection = CollectionKind::Liabilities;
        require_text(collection, "id", &self.id)?;
        require_text(collection, "name", &self.name)?;
        require_amount(collection, "amount", self.amount)
    }
}
