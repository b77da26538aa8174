//! Command-line interface definition for shellpack.
//!
//! - `shellpack resolve` - print the resolved build config
//! - `shellpack check` - resolve every environment and validate the result

mod tests;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// shellpack - renderer build configuration for the desktop shell
#[derive(Parser, Debug)]
#[command(
    name = "shellpack",
    version,
    about = "Resolve the renderer build configuration for an environment",
    long_about = "shellpack turns the renderer base template and package.json into the\n\
                  finalized configuration consumed by the bundling engine.\n\
                  The environment comes from --env, SHELLPACK_ENVIRONMENT or NODE_ENV."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print the build config
    ///
    /// Writes the config to stdout (or --output) as JSON or TOML.
    Resolve(ResolveArgs),

    /// Validate the configs of every environment
    ///
    /// Resolves development and production and runs schema validation,
    /// plus filesystem checks with --fs.
    Check(CheckArgs),
}

/// Options locating the project and choosing the environment
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file (defaults to <root>/shellpack.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dependency manifest (defaults to <root>/package.json)
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Target environment (overrides NODE_ENV)
    #[arg(short, long, value_name = "ENV")]
    pub env: Option<String>,

    /// Fail on an unrecognized environment instead of using development
    #[arg(long)]
    pub strict_env: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write the config to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Also check that entry sources and templates exist on disk
    #[arg(long)]
    pub fs: bool,
}

/// Serialization format for resolved configs
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, the form the bundling engine consumes
    #[value(name = "json")]
    Json,

    /// TOML, for reading and diffing
    #[value(name = "toml")]
    Toml,
}
