//! Validated append helpers for [`Ledger`] instances.

use tracing::{info, warn};

use fintrack_domain::{
    Asset, CollectionKind, Ledger, LedgerRecord, Liability, RecurringTransaction, Transaction,
    ValidationError,
};

/// Routes new records into the ledger and logs the outcome.
pub struct LedgerService;

impl LedgerService {
    pub fn create() -> Ledger {
        Ledger::new()
    }

    /// Appends a record of any kind. On rejection the ledger is unchanged.
    pub fn append(ledger: &mut Ledger, record: LedgerRecord) -> Result<(), ValidationError> {
        let collection = record.collection();
        let id = record.id().to_string();
        match ledger.append(record) {
            Ok(_) => {
                info!(
                    "appended {} `{}` ({} total)",
                    collection,
                    id,
                    ledger.len(collection)
                );
                Ok(())
            }
            Err(err) => {
                warn!("rejected {} `{}`: {}", collection, id, err);
                Err(err)
            }
        }
    }

    pub fn add_transaction(ledger: &mut Ledger, record: Transaction) -> Result<(), ValidationError> {
        Self::append(ledger, record.into())
    }

    pub fn add_recurring(
        ledger: &mut Ledger,
        record: RecurringTransaction,
    ) -> Result<(), ValidationError> {
        Self::append(ledger, record.into())
    }

    pub fn add_asset(ledger: &mut Ledger, record: Asset) -> Result<(), ValidationError> {
        Self::append(ledger, record.into())
    }

    pub fn add_liability(ledger: &mut Ledger, record: Liability) -> Result<(), ValidationError> {
        Self::append(ledger, record.into())
    }

    /// Collection sizes in a fixed order: transactions, recurring, assets, liabilities.
    pub fn counts(ledger: &Ledger) -> [(CollectionKind, usize); 4] {
        [
            CollectionKind::Transactions,
            CollectionKind::RecurringTransactions,
            CollectionKind::Assets,
            CollectionKind::Liabilities,
        ]
        .map(|collection| (collection, ledger.len(collection)))
    }
}
