pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &[&str] = &["fintrack=info", "fintrack_core=info"];

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Starts from `RUST_LOG`, then adds the crate defaults and any `extra`
/// directives from the user config. Invalid directives are skipped.
pub fn init_tracing(extra: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        let directives = DEFAULT_DIRECTIVES
            .iter()
            .copied()
            .chain(extra.into_iter().flat_map(|raw| raw.split(',')));
        for directive in directives.map(str::trim).filter(|d| !d.is_empty()) {
            match directive.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(err) => eprintln!("ignoring invalid log directive `{directive}`: {err}"),
            }
        }

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
