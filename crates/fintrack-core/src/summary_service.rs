//! Per-category totals and net balance over one-off transactions.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use fintrack_domain::{EntryKind, Transaction};

/// Sum of all amounts observed for one category.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Aggregated view of the transaction collection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransactionSummary {
    pub income_by_category: Vec<CategoryTotal>,
    pub expense_by_category: Vec<CategoryTotal>,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
}

impl TransactionSummary {
    /// `true` when income covers expenses.
    pub fn is_surplus(&self) -> bool {
        self.net_balance >= Decimal::ZERO
    }
}

/// Pure aggregations over snapshots of the transaction collection.
///
/// See also: [`TransactionSummary`] for the combined view.
pub struct SummaryService;

impl SummaryService {
    /// Groups transactions of `kind` by exact category string and sums each group.
    ///
    /// Categories are emitted in first-seen order. Callers needing another
    /// order sort downstream, e.g. with [`SummaryService::sort_by_amount`].
    pub fn category_totals(transactions: &[Transaction], kind: EntryKind) -> Vec<CategoryTotal> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for txn in transactions.iter().filter(|txn| txn.kind == kind) {
            match positions.get(txn.category.as_str()) {
                Some(&idx) => totals[idx].amount += txn.amount,
                None => {
                    positions.insert(txn.category.as_str(), totals.len());
                    totals.push(CategoryTotal {
                        category: txn.category.clone(),
                        amount: txn.amount,
                    });
                }
            }
        }
        totals
    }

    /// Sum of every amount of `kind`, independent of category grouping.
    pub fn total_of(transactions: &[Transaction], kind: EntryKind) -> Decimal {
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .fold(Decimal::ZERO, |acc, txn| acc + txn.amount)
    }

    pub fn net_balance(transactions: &[Transaction]) -> Decimal {
        Self::total_of(transactions, EntryKind::Income)
            - Self::total_of(transactions, EntryKind::Expense)
    }

    pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
        let total_income = Self::total_of(transactions, EntryKind::Income);
        let total_expense = Self::total_of(transactions, EntryKind::Expense);
        TransactionSummary {
            income_by_category: Self::category_totals(transactions, EntryKind::Income),
            expense_by_category: Self::category_totals(transactions, EntryKind::Expense),
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
        }
    }

    /// Orders totals by descending amount, ties broken by category name.
    pub fn sort_by_amount(totals: &mut [CategoryTotal]) {
        totals.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
    }
}
