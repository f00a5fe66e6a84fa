use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;
use crate::validation::{require_amount, require_text, CollectionKind, Validate, ValidationError};

/// Something owned that counts toward net worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: AssetKind,
}

impl Asset {
    pub fn new(name: impl Into<String>, value: Decimal, kind: AssetKind) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            value,
            kind,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Supported asset types. The type never weights the value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    #[default]
    Cash,
    Investment,
    Property,
    Vehicle,
    Other,
}

impl AssetKind {
    pub const ALL: [AssetKind; 5] = [
        AssetKind::Cash,
        AssetKind::Investment,
        AssetKind::Property,
        AssetKind::Vehicle,
        AssetKind::Other,
    ];
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssetKind::Cash => "Cash",
            AssetKind::Investment => "Investment",
            AssetKind::Property => "Property",
            AssetKind::Vehicle => "Vehicle",
            AssetKind::Other => "Other",
        };
        f.write_str(label)
    }
}

impl Identifiable for Asset {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Asset {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Asset {
    fn amount(&self) -> Decimal {
        self.value
    }
}

impl Validate for Asset {
    fn validate(&self) -> Result<(), ValidationError> {
        let collection = CollectionKind::Assets;
        require_text(collection, "id", &self.id)?;
        require_text(collection, "name", &self.name)?;
        require_amount(collection, "value", self.value)
    }
}
