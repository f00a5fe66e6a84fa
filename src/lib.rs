#![doc(test(attr(deny(warnings))))]

//! Fintrack is an in-memory personal finance tracker: one-off transactions,
//! recurring cash flows, assets and liabilities, plus the derived category,
//! monthly-recurring, and net worth views built from them.

pub mod context;
pub mod errors;
pub mod utils;

pub use fintrack_config;
pub use fintrack_core;
pub use fintrack_domain;

pub use context::{AppContext, SessionStats};
pub use errors::{FinTrackError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
///
/// Same as `init_with(None)`. Only the first `init`/`init_with` call of the
/// process installs a subscriber; returns `false` when one was already set.
pub fn init() -> bool {
    init_with(None)
}

/// Like [`init`], adding the log directives stored in the user config.
///
/// Call this before anything else that may call [`init`], otherwise the
/// config's `log_filter` is never applied.
pub fn init_with(config: Option<&fintrack_config::Config>) -> bool {
    let mut installed = false;
    INIT_TRACING.call_once(|| {
        utils::init_tracing(config.and_then(|cfg| cfg.log_filter.as_deref()));
        tracing::info!("{} tracing initialized.", utils::build_info::current().summary());
        installed = true;
    });
    installed
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_is_a_no_op() {
        super::init();
        assert!(!super::init());
    }

    #[test]
    fn build_metadata_reports_package_version() {
        let meta = super::utils::build_info::current();
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert!(meta.summary().starts_with("fintrack "));
    }
}
