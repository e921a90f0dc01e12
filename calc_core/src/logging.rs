//! Logger setup for the native front-ends.
//!
//! `RUST_LOG` always wins. Otherwise the filter from settings is used,
//! with `calc_core` raised to debug when verbose output is requested.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter used by [`init_logger`].
pub fn build_filter(verbose: bool, default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose {
            format!("calc_core=debug,{}", default_filter)
        } else {
            default_filter.to_string()
        };
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install a compact stderr logger. Later calls are ignored.
pub fn init_logger(verbose: bool, default_filter: &str) {
    let result = tracing_subscriber::registry()
        .with(build_filter(verbose, default_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("logger already initialized");
    }
}
