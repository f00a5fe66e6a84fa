use rust_decimal::Decimal;
use serde::Serialize;

use fintrack_domain::{Amounted, Asset, Liability};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NetWorthSummary {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
}

impl NetWorthSummary {
    pub fn is_positive(&self) -> bool {
        self.net_worth >= Decimal::ZERO
    }
}

pub struct NetWorthService;

impl NetWorthService {
    /// Assets minus liabilities. Every kind counts at face value.
    pub fn compute(assets: &[Asset], liabilities: &[Liability]) -> NetWorthSummary {
        let total_assets = sum_amounts(assets);
        let total_liabilities = sum_amounts(liabilities);
        NetWorthSummary {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
        }
    }
}

fn sum_amounts<T: Amounted>(records: &[T]) -> Decimal {
    records
        .iter()
        .fold(Decimal::ZERO, |acc, record| acc + record.amount())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_domain::{AssetKind, LiabilityKind};
    use rust_decimal_macros::dec;

    #[test]
    fn computes_assets_minus_liabilities() {
        let assets = vec![
            Asset::new("Wallet", dec!(500), AssetKind::Cash),
            Asset::new("House", dec!(1500), AssetKind::Property),
        ];
        let liabilities = vec![Liability::new("Car loan", dec!(800), LiabilityKind::Loan)];
        let summary = NetWorthService::compute(&assets, &liabilities);
        assert_eq!(summary.total_assets, dec!(2000));
        assert_eq!(summary.total_liabilities, dec!(800));
        assert_eq!(summary.net_worth, dec!(1200));
        assert!(summary.is_positive());
    }

    #[test]
    fn liabilities_only_is_negative() {
        let liabilities = vec![Liability::new("Visa", dec!(99.99), LiabilityKind::CreditCard)];
        let summary = NetWorthService::compute(&[], &liabilities);
        assert_eq!(summary.net_worth, dec!(-99.99));
        assert!(!summary.is_positive());
    }
}
