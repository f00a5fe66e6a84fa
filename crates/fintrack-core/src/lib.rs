//! fintrack-core
//!
//! Aggregation services and the session facade for the finance tracker.
//! Depends on fintrack-domain. No terminal I/O, no persistence.

pub mod drafts;
pub mod format;
pub mod ledger_service;
pub mod net_worth_service;
pub mod recurrence_service;
pub mod session;
pub mod summary_service;
pub mod time;

pub use drafts::*;
pub use format::*;
pub use ledger_service::*;
pub use net_worth_service::*;
pub use recurrence_service::*;
pub use session::*;
pub use summary_service::*;
pub use time::*;
