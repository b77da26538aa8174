//! shellpack CLI.
//!
//! - [`cli`] - clap argument definitions
//! - [`settings`] - layered settings (file, environment, flags)
//! - [`commands`] - `resolve` and `check`
//! - [`error`] - CLI errors and `miette` conversion
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result};
pub use settings::Settings;
