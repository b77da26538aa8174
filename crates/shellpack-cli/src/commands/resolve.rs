//! Resolve command implementation.

use std::fs;

use shellpack_config::BuildConfig;

use crate::cli::{OutputFormat, ResolveArgs};
use crate::error::Result;
use crate::settings::Settings;
use crate::ui;

/// Execute the resolve command.
///
/// Prints the config to stdout, or writes it to `--output`.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let rendered = render(&args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            ui::success(&format!("Wrote config to {}", path.display()));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Resolve the config selected by `args` and serialize it.
///
/// # Errors
///
/// Fails when settings can't be loaded, the manifest is malformed, or a
/// strict environment flag is unrecognized.
pub fn render(args: &ResolveArgs) -> Result<String> {
    let settings = Settings::load(&args.project)?;
    let environment = settings.environment()?;
    let config = settings.resolver()?.resolve(environment);

    tracing::info!(%environment, "resolved renderer config");
    serialize(&config, args.format)
}

/// Serialize a resolved config, always ending with a newline.
///
/// # Arguments
///
/// * `config` - Resolved config
/// * `format` - `json` (pretty-printed) or `toml`
pub fn serialize(config: &BuildConfig, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
