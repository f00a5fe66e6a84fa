//! Shared traits, enums, and helpers for ledger records.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes the opaque identifier of a ledger record.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Generates a fresh opaque record identifier.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Direction of a cash flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Expense => "Expense",
            EntryKind::Income => "Income",
        };
        f.write_str(label)
    }
}

/// Cadence of a recurring transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceInterval {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

/// Rational multiplier that rescales a periodic amount to a monthly equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyFactor {
    pub numerator: u32,
    pub denominator: u32,
}

impl RecurrenceInterval {
    pub const ALL: [RecurrenceInterval; 4] = [
        RecurrenceInterval::Weekly,
        RecurrenceInterval::Monthly,
        RecurrenceInterval::Quarterly,
        RecurrenceInterval::Yearly,
    ];

    /// Fixed approximation: 4 weeks per month, 3 months per quarter, 12 per year.
    pub fn monthly_factor(self) -> MonthlyFactor {
        let (numerator, denominator) = match self {
            RecurrenceInterval::Weekly => (4, 1),
            RecurrenceInterval::Monthly => (1, 1),
            RecurrenceInterval::Quarterly => (1, 3),
            RecurrenceInterval::Yearly => (1, 12),
        };
        MonthlyFactor {
            numerator,
            denominator,
        }
    }

    /// Rescales `amount` to its monthly equivalent.
    ///
    /// Multiplication happens before division so that amounts evenly divisible
    /// by the period length stay exact (a quarterly 300 is exactly 100).
    pub fn to_monthly(self, amount: Decimal) -> Decimal {
        let factor = self.monthly_factor();
        amount * Decimal::from(factor.numerator) / Decimal::from(factor.denominator)
    }
}

impl fmt::Display for RecurrenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecurrenceInterval::Weekly => "Weekly",
            RecurrenceInterval::Monthly => "Monthly",
            RecurrenceInterval::Quarterly => "Quarterly",
            RecurrenceInterval::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

const ONE_OFF_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Entertainment",
    "Utilities",
    "Other",
];
const ONE_OFF_INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investments", "Other"];
const RECURRING_EXPENSE_CATEGORIES: &[&str] = &[
    "Rent",
    "Utilities",
    "Subscriptions",
    "Insurance",
    "Loan Payment",
    "Other",
];
const RECURRING_INCOME_CATEGORIES: &[&str] =
    &["Salary", "Rental Income", "Investment Income", "Other"];

/// Category names offered as input hints. Aggregation never consults these;
/// any free-text category is accepted.
pub fn suggested_categories(kind: EntryKind, recurring: bool) -> &'static [&'static str] {
    match (kind, recurring) {
        (EntryKind::Expense, false) => ONE_OFF_EXPENSE_CATEGORIES,
        (EntryKind::Income, false) => ONE_OFF_INCOME_CATEGORIES,
        (EntryKind::Expense, true) => RECURRING_EXPENSE_CATEGORIES,
        (EntryKind::Income, true) => RECURRING_INCOME_CATEGORIES,
    }
}
