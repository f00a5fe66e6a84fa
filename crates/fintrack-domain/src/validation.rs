//! Field-level checks applied before a record enters the ledger.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Names the four independent ledger collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Transactions,
    RecurringTransactions,
    Assets,
    Liabilities,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CollectionKind::Transactions => "transaction",
            CollectionKind::RecurringTransactions => "recurring transaction",
            CollectionKind::Assets => "asset",
            CollectionKind::Liabilities => "liability",
        };
        f.write_str(label)
    }
}

/// Reasons a record is rejected at the append boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField {
        collection: CollectionKind,
        field: &'static str,
    },
    NegativeAmount {
        collection: CollectionKind,
        field: &'static str,
    },
    AmountTooLarge {
        collection: CollectionKind,
        field: &'static str,
    },
    InvalidAmount {
        collection: CollectionKind,
        input: String,
    },
    DuplicateId {
        collection: CollectionKind,
        id: String,
    },
}

impl ValidationError {
    pub fn collection(&self) -> CollectionKind {
        match self {
            ValidationError::MissingField { collection, .. }
            | ValidationError::NegativeAmount { collection, .. }
            | ValidationError::AmountTooLarge { collection, .. }
            | ValidationError::InvalidAmount { collection, .. }
            | ValidationError::DuplicateId { collection, .. } => *collection,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { collection, field } => {
                write!(f, "{collection} is missing required field `{field}`")
            }
            ValidationError::NegativeAmount { collection, field } => {
                write!(f, "{collection} field `{field}` must not be negative")
            }
            ValidationError::AmountTooLarge { collection, field } => {
                write!(f, "{collection} field `{field}` exceeds {MAX_AMOUNT}")
            }
            ValidationError::InvalidAmount { collection, input } => {
                write!(f, "{collection} amount `{input}` is not a valid number")
            }
            ValidationError::DuplicateId { collection, id } => {
                write!(f, "{collection} with id `{id}` already exists")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Largest amount a record may carry (10^18).
///
/// Keeps every sum and monthly projection over a ledger far below
/// `Decimal::MAX`, so aggregation never overflows.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Implemented by every record that can be appended to the ledger.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(
    collection: CollectionKind,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { collection, field });
    }
    Ok(())
}

/// Accepts amounts in `0..=MAX_AMOUNT`. Negative zero counts as zero.
pub fn require_amount(
    collection: CollectionKind,
    field: &'static str,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount { collection, field });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge { collection, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn blank_text_is_missing() {
        let err = require_text(CollectionKind::Assets, "name", "   ").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                collection: CollectionKind::Assets,
                field: "name",
            }
        );
        assert_eq!(err.to_string(), "asset is missing required field `name`");
    }

    #[test]
    fn zero_is_not_negative() {
        assert!(require_amount(CollectionKind::Transactions, "amount", dec!(0)).is_ok());
        assert!(require_amount(CollectionKind::Transactions, "amount", dec!(-0.01)).is_err());
    }

    #[test]
    fn amount_ceiling_is_inclusive() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000_000u64));
        assert!(require_amount(CollectionKind::Assets, "value", MAX_AMOUNT).is_ok());

        let err = require_amount(CollectionKind::Assets, "value", Decimal::MAX).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AmountTooLarge {
                collection: CollectionKind::Assets,
                field: "value",
            }
        );
        assert_eq!(
            err.to_string(),
            "asset field `value` exceeds 1000000000000000000"
        );
    }
}
