//! Tracing setup
//!
//! Logs go to stderr so report notices and listings on stdout stay clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "budgetbuddy=warn";

/// Initializes the global tracing subscriber once per process.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::debug!("still alive");
    }
}
