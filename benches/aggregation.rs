use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fintrack_core::{FinanceSession, FixedClock, RecurrenceService, SummaryService};
use fintrack_domain::{
    Asset, AssetKind, EntryKind, Liability, LiabilityKind, RecurrenceInterval,
    RecurringTransaction, Transaction,
};
use rust_decimal::Decimal;

const CATEGORIES: [&str; 6] = ["Food", "Housing", "Transport", "Salary", "Freelance", "Other"];

fn build_sample_session(txn_count: usize) -> FinanceSession {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let mut session = FinanceSession::with_clock(Box::new(FixedClock(now)));
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for idx in 0..txn_count {
        let kind = if idx % 4 == 0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        let amount = Decimal::new(5_000 + (idx % 100) as i64 * 25, 2);
        let date = now - Duration::days((idx % 365) as i64);
        session
            .add_transaction(Transaction::new(
                kind,
                amount,
                CATEGORIES[idx % CATEGORIES.len()],
                date,
            ))
            .expect("transaction");
    }

    for idx in 0..txn_count / 10 {
        let interval = RecurrenceInterval::ALL[idx % RecurrenceInterval::ALL.len()];
        let recurring = RecurringTransaction::new(
            EntryKind::Expense,
            Decimal::new(1_999 + idx as i64, 2),
            "Subscriptions",
            interval,
            start_date,
        )
        .with_active(idx % 7 != 0);
        session
            .add_recurring_transaction(recurring)
            .expect("recurring");
    }

    for idx in 0..100i64 {
        let kind = AssetKind::ALL[idx as usize % AssetKind::ALL.len()];
        session
            .add_asset(Asset::new(
                format!("Account {idx}"),
                Decimal::new(100_000 + idx, 2),
                kind,
            ))
            .expect("asset");
        session
            .add_liability(Liability::new(
                format!("Card {idx}"),
                Decimal::new(25_000 + idx, 2),
                LiabilityKind::CreditCard,
            ))
            .expect("liability");
    }

    session
}

fn bench_summaries(c: &mut Criterion) {
    let session = build_sample_session(black_box(10_000));

    c.bench_function("transaction_summary_10k", |b| {
        b.iter(|| black_box(session.get_summary()))
    });

    c.bench_function("category_totals_expense_10k", |b| {
        b.iter(|| {
            black_box(SummaryService::category_totals(
                session.transactions(),
                EntryKind::Expense,
            ))
        })
    });

    c.bench_function("recurring_monthly_total_1k", |b| {
        b.iter(|| {
            black_box(RecurrenceService::monthly_total(
                session.recurring_transactions(),
                EntryKind::Expense,
            ))
        })
    });

    c.bench_function("net_worth", |b| b.iter(|| black_box(session.get_net_worth())));
}

fn bench_ledger(c: &mut Criterion) {
    c.bench_function("build_session_1k", |b| {
        b.iter_batched(
            || 1_000,
            |count| black_box(build_sample_session(count)),
            BatchSize::SmallInput,
        )
    });

    let session = build_sample_session(10_000);
    c.bench_function("ledger_snapshot_json_10k", |b| {
        b.iter(|| {
            let json = serde_json::to_string(session.ledger()).expect("serialize ledger");
            black_box(json);
        })
    });
}

criterion_group!(benches, bench_summaries, bench_ledger);
criterion_main!(benches);
