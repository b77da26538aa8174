//! Logging infrastructure for the shellpack CLI.
//!
//! Logs go to stderr so resolved configs printed on stdout stay pipeable.
//!
//! # Example
//!
//! ```rust,no_run
//! use shellpack_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("resolving renderer config");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "shellpack_config=debug,shellpack_cli=debug";
const QUIET_FILTER: &str = "shellpack_config=error,shellpack_cli=error";
const DEFAULT_FILTER: &str = "shellpack_config=info,shellpack_cli=info";

/// Pick the filter for the given flags.
///
/// 1. `--verbose`: debug for shellpack crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` if set, otherwise info
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// # Arguments
///
/// * `verbose` - Debug-level logging for shellpack crates (wins over `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable ANSI colors in log lines
///
/// # Examples
///
/// ```rust,no_run
/// use shellpack_cli::logger::init_logger;
///
/// // Errors only, no colors (CI or piped output)
/// init_logger(false, true, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
