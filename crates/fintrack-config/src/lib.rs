//! fintrack-config
//!
//! Persistent user preferences (currency, locale, display precision, log filter).
//! Owns the Config data structure plus disk persistence helpers. Ledger data is
//! never written here.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
