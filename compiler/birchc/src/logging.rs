//! Tracing setup for the CLI.
//!
//! Nothing is installed unless `BIRCH_LOG` or `RUST_LOG` is set, so a plain
//! run pays nothing for the `trace!` calls in the lexer and parser:
//!
//! ```bash
//! BIRCH_LOG=birch_parse=debug birch parse src/Main.birch
//! BIRCH_LOG=trace birch lex src/Main.birch
//! ```

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Preferred filter variable; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "BIRCH_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the hierarchical subscriber, once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directives = log_directives(
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let Some(directives) = directives else {
            return;
        };
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(layer)
            .init();
    });
}

fn log_directives(birch: Option<String>, rust: Option<String>) -> Option<String> {
    birch
        .filter(|value| !value.trim().is_empty())
        .or(rust.filter(|value| !value.trim().is_empty()))
}
