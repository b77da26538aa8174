//! Status messages for terminal output.
//!
//! Messages go to stderr. Colors follow terminal detection unless
//! [`init_colors`] disables them.

use owo_colors::{OwoColorize, Stream};

/// Apply `--no-color`. Without it, `NO_COLOR`/`FORCE_COLOR` and TTY
/// detection decide.
pub fn init_colors(no_color: bool) {
    if no_color {
        owo_colors::set_override(false);
    }
}

/// Print a success message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use shellpack_cli::ui::success;
///
/// success("Configuration is valid!");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stream::Stderr, |t| t.green()),
        message
    );
}

/// Print an info message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use shellpack_cli::ui::info;
///
/// info("Checking renderer configuration...");
/// ```
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stream::Stderr, |t| t.blue()),
        message
    );
}

/// Print a warning message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use shellpack_cli::ui::warning;
///
/// warning("Unrecognized environment `staging`, checking as development");
/// ```
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
        message.if_supports_color(Stream::Stderr, |t| t.yellow())
    );
}

/// Print an error message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use shellpack_cli::ui::error;
///
/// error("production config is invalid");
/// ```
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "✗".if_supports_color(Stream::Stderr, |t| t.red()),
        message.if_supports_color(Stream::Stderr, |t| t.red())
    );
}
