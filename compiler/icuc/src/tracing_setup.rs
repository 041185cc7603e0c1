//! One-time `tracing` subscriber setup for the CLI.
//!
//! Filter precedence: `RUST_LOG`, then `ICU_LOG`, then the level implied by
//! `-q`/`-v`. `ICU_LOG_TREE=1` swaps the flat formatter for an indented
//! span tree. Logs go to stderr so they never mix with rendered output.

use std::sync::Once;

use crate::config::Verbosity;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(verbosity: Verbosity) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directive = filter_directive(
            std::env::var("RUST_LOG").ok(),
            std::env::var("ICU_LOG").ok(),
            verbosity,
        );
        let filter = EnvFilter::try_new(&directive)
            .unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()));

        if std::env::var("ICU_LOG_TREE").is_ok_and(|value| value == "1") {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Pick the filter directive; empty variables count as unset.
fn filter_directive(
    rust_log: Option<String>,
    icu_log: Option<String>,
    verbosity: Verbosity,
) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| icu_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| verbosity.default_directive().to_owned())
}
