//! Append-only store holding the four record collections of a session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    asset::Asset,
    common::Identifiable,
    liability::Liability,
    recurring::RecurringTransaction,
    transaction::Transaction,
    validation::{CollectionKind, Validate, ValidationError},
};

/// A record tagged with the collection it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerRecord {
    Transaction(Transaction),
    Recurring(RecurringTransaction),
    Asset(Asset),
    Liability(Liability),
}

impl LedgerRecord {
    pub fn collection(&self) -> CollectionKind {
        match self {
            LedgerRecord::Transaction(_) => CollectionKind::Transactions,
            LedgerRecord::Recurring(_) => CollectionKind::RecurringTransactions,
            LedgerRecord::Asset(_) => CollectionKind::Assets,
            LedgerRecord::Liability(_) => CollectionKind::Liabilities,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            LedgerRecord::Transaction(record) => record.id(),
            LedgerRecord::Recurring(record) => record.id(),
            LedgerRecord::Asset(record) => record.id(),
            LedgerRecord::Liability(record) => record.id(),
        }
    }
}

impl From<Transaction> for LedgerRecord {
    fn from(record: Transaction) -> Self {
        LedgerRecord::Transaction(record)
    }
}

impl From<RecurringTransaction> for LedgerRecord {
    fn from(record: RecurringTransaction) -> Self {
        LedgerRecord::Recurring(record)
    }
}

impl From<Asset> for LedgerRecord {
    fn from(record: Asset) -> Self {
        LedgerRecord::Asset(record)
    }
}

impl From<Liability> for LedgerRecord {
    fn from(record: Liability) -> Self {
        LedgerRecord::Liability(record)
    }
}

/// In-memory ledger. Collections only grow; insertion order is preserved.
///
/// Records are never linked to each other, so each collection validates
/// identifiers independently.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    recurring_transactions: Vec<RecurringTransaction>,
    assets: Vec<Asset>,
    liabilities: Vec<Liability>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            transactions: Vec::new(),
            recurring_transactions: Vec::new(),
            assets: Vec::new(),
            liabilities: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends `record` to its collection, returning the collection it landed in.
    pub fn append(&mut self, record: LedgerRecord) -> Result<CollectionKind, ValidationError> {
        let collection = record.collection();
        match record {
            LedgerRecord::Transaction(record) => self.append_transaction(record)?,
            LedgerRecord::Recurring(record) => self.append_recurring(record)?,
            LedgerRecord::Asset(record) => self.append_asset(record)?,
            LedgerRecord::Liability(record) => self.append_liability(record)?,
        }
        Ok(collection)
    }

    pub fn append_transaction(&mut self, record: Transaction) -> Result<(), ValidationError> {
        push_validated(
            &mut self.transactions,
            CollectionKind::Transactions,
            record,
        )?;
        self.touch();
        Ok(())
    }

    pub fn append_recurring(
        &mut self,
        record: RecurringTransaction,
    ) -> Result<(), ValidationError> {
        push_validated(
            &mut self.recurring_transactions,
            CollectionKind::RecurringTransactions,
            record,
        )?;
        self.touch();
        Ok(())
    }

    pub fn append_asset(&mut self, record: Asset) -> Result<(), ValidationError> {
        push_validated(&mut self.assets, CollectionKind::Assets, record)?;
        self.touch();
        Ok(())
    }

    pub fn append_liability(&mut self, record: Liability) -> Result<(), ValidationError> {
        push_validated(&mut self.liabilities, CollectionKind::Liabilities, record)?;
        self.touch();
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn recurring_transactions(&self) -> &[RecurringTransaction] {
        &self.recurring_transactions
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn liabilities(&self) -> &[Liability] {
        &self.liabilities
    }

    pub fn len(&self, collection: CollectionKind) -> usize {
        match collection {
            CollectionKind::Transactions => self.transactions.len(),
            CollectionKind::RecurringTransactions => self.recurring_transactions.len(),
            CollectionKind::Assets => self.assets.len(),
            CollectionKind::Liabilities => self.liabilities.len(),
        }
    }

    /// Returns `true` when all four collections are empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.recurring_transactions.is_empty()
            && self.assets.is_empty()
            && self.liabilities.is_empty()
    }

    pub fn contains_id(&self, collection: CollectionKind, id: &str) -> bool {
        match collection {
            CollectionKind::Transactions => has_id(&self.transactions, id),
            CollectionKind::RecurringTransactions => has_id(&self.recurring_transactions, id),
            CollectionKind::Assets => has_id(&self.assets, id),
            CollectionKind::Liabilities => has_id(&self.liabilities, id),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn has_id<T: Identifiable>(records: &[T], id: &str) -> bool {
    records.iter().any(|record| record.id() == id)
}

fn push_validated<T: Validate + Identifiable>(
    records: &mut Vec<T>,
    collection: CollectionKind,
    record: T,
) -> Result<(), ValidationError> {
    record.validate()?;
    if has_id(records.as_slice(), record.id()) {
        return Err(ValidationError::DuplicateId {
            collection,
            id: record.id().to_string(),
        });
    }
    records.push(record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssetKind, EntryKind, LiabilityKind, RecurrenceInterval};
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal_macros::dec;

    fn expense(id: &str) -> Transaction {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        Transaction::new(EntryKind::Expense, dec!(10), "Food", date).with_id(id)
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(CollectionKind::Assets), 0);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        for id in ["b", "a", "c"] {
            ledger.append_transaction(expense(id)).unwrap();
        }
        let ids: Vec<&str> = ledger.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_id_is_rejected_without_growth() {
        let mut ledger = Ledger::new();
        ledger.append_transaction(expense("t-1")).unwrap();
        let err = ledger.append_transaction(expense("t-1")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateId {
                collection: CollectionKind::Transactions,
                id: "t-1".into(),
            }
        );
        assert_eq!(ledger.len(CollectionKind::Transactions), 1);
    }

    #[test]
    fn ids_are_scoped_per_collection() {
        let mut ledger = Ledger::new();
        ledger.append_transaction(expense("shared")).unwrap();
        ledger
            .append_asset(Asset::new("Checking", dec!(500), AssetKind::Cash).with_id("shared"))
            .unwrap();
        assert!(ledger.contains_id(CollectionKind::Assets, "shared"));
        assert!(!ledger.contains_id(CollectionKind::Liabilities, "shared"));
    }

    #[test]
    fn append_routes_records_by_kind() {
        let mut ledger = Ledger::new();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rule = RecurringTransaction::new(
            EntryKind::Income,
            dec!(3000),
            "Salary",
            RecurrenceInterval::Monthly,
            start,
        );
        let card = Liability::new("Visa", dec!(250), LiabilityKind::CreditCard);

        assert_eq!(
            ledger.append(rule.into()).unwrap(),
            CollectionKind::RecurringTransactions
        );
        assert_eq!(ledger.append(card.into()).unwrap(), CollectionKind::Liabilities);
        assert_eq!(ledger.recurring_transactions().len(), 1);
        assert_eq!(ledger.liabilities().len(), 1);
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn oversized_amount_is_rejected() {
        let mut ledger = Ledger::new();
        let mut txn = expense("huge");
        txn.amount = rust_decimal::Decimal::MAX;
        assert!(matches!(
            ledger.append_transaction(txn),
            Err(ValidationError::AmountTooLarge { field: "amount", .. })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn invalid_record_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        let before = ledger.updated_at;
        let err = ledger
            .append_asset(Asset::new("", dec!(1), AssetKind::Other))
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "name", .. }));
        assert!(ledger.is_empty());
        assert_eq!(ledger.updated_at, before);
    }
}
