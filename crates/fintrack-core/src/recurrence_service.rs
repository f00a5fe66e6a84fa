//! Monthly projection of recurring cash flows.

use rust_decimal::Decimal;
use serde::Serialize;

use fintrack_domain::{EntryKind, RecurringTransaction};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecurringSummary {
    pub monthly_income: Decimal,
    pub monthly_expense: Decimal,
    pub monthly_net: Decimal,
    pub active_count: usize,
}

pub struct RecurrenceService;

impl RecurrenceService {
    /// Sums the monthly equivalents of active entries of `kind`.
    ///
    /// `start_date` is not consulted: future-dated entries still count.
    pub fn monthly_total(recurring: &[RecurringTransaction], kind: EntryKind) -> Decimal {
        recurring
            .iter()
            .filter(|rule| rule.kind == kind)
            .map(RecurringTransaction::monthly_equivalent)
            .fold(Decimal::ZERO, |acc, amount| acc + amount)
    }

    pub fn active(
        recurring: &[RecurringTransaction],
    ) -> impl Iterator<Item = &RecurringTransaction> {
        recurring.iter().filter(|rule| rule.is_active)
    }

    pub fn summarize(recurring: &[RecurringTransaction]) -> RecurringSummary {
        let monthly_income = Self::monthly_total(recurring, EntryKind::Income);
        let monthly_expense = Self::monthly_total(recurring, EntryKind::Expense);
        RecurringSummary {
            monthly_income,
            monthly_expense,
            monthly_net: monthly_income - monthly_expense,
            active_count: Self::active(recurring).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fintrack_domain::RecurrenceInterval;
    use rust_decimal_macros::dec;

    fn rule(kind: EntryKind, amount: Decimal, interval: RecurrenceInterval) -> RecurringTransaction {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        RecurringTransaction::new(kind, amount, "Other", interval, start)
    }

    #[test]
    fn inactive_entries_are_skipped() {
        let recurring = vec![
            rule(EntryKind::Expense, dec!(100), RecurrenceInterval::Weekly),
            rule(EntryKind::Expense, dec!(1000), RecurrenceInterval::Monthly).with_active(false),
        ];
        assert_eq!(
            RecurrenceService::monthly_total(&recurring, EntryKind::Expense),
            dec!(400)
        );
    }

    #[test]
    fn yearly_and_quarterly_normalize_exactly() {
        let recurring = vec![
            rule(EntryKind::Income, dec!(1200), RecurrenceInterval::Yearly),
            rule(EntryKind::Expense, dec!(300), RecurrenceInterval::Quarterly),
        ];
        assert_eq!(
            RecurrenceService::monthly_total(&recurring, EntryKind::Income),
            dec!(100)
        );
        assert_eq!(
            RecurrenceService::monthly_total(&recurring, EntryKind::Expense),
            dec!(100)
        );
    }

    #[test]
    fn future_start_dates_still_count() {
        let start = NaiveDate::from_ymd_opt(2999, 12, 31).unwrap();
        let recurring = vec![RecurringTransaction::new(
            EntryKind::Income,
            dec!(250),
            "Freelance",
            RecurrenceInterval::Monthly,
            start,
        )];
        let summary = RecurrenceService::summarize(&recurring);
        assert_eq!(summary.monthly_income, dec!(250));
        assert_eq!(summary.monthly_net, dec!(250));
        assert_eq!(summary.active_count, 1);
    }

    #[test]
    fn empty_input_is_zero() {
        let summary = RecurrenceService::summarize(&[]);
        assert_eq!(summary.monthly_income, Decimal::ZERO);
        assert_eq!(summary.monthly_expense, Decimal::ZERO);
        assert_eq!(summary.active_count, 0);
    }
}
