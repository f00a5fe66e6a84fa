//! fintrack-domain
//!
//! Pure record types (Transaction, RecurringTransaction, Asset, Liability) and
//! the append-only Ledger that stores them. No I/O, no logging, no aggregation.

pub mod asset;
pub mod common;
pub mod ledger;
pub mod liability;
pub mod recurring;
pub mod transaction;
pub mod validation;

pub use asset::*;
pub use common::*;
pub use ledger::*;
pub use liability::*;
pub use recurring::*;
pub use transaction::*;
pub use validation::*;
