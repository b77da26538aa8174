//! Check command implementation.
//!
//! Resolves every environment and validates the result without building.

use shellpack_config::{ConfigValidator, Environment, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::settings::Settings;
use crate::ui;

const ENVIRONMENTS: [Environment; 2] = [Environment::Development, Environment::Production];

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load settings and the dependency manifest
/// 2. Validate the selected environment flag (strict mode only), or warn
///    about a flag that falls back to development
/// 3. Resolve development and production
/// 4. Schema validation, plus filesystem validation with `--fs`
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking renderer configuration...");

    let settings = Settings::load(&args.project)?;
    let selected = settings.environment()?;
    if let Some(flag) = settings.environment.as_deref() {
        if flag.parse::<Environment>().is_err() {
            ui::warning(&format!(
                "Unrecognized environment `{flag}`, checking as {selected}"
            ));
        }
    }
    let resolver = settings.resolver()?;
    ui::success(&format!(
        "Manifest declares {} runtime dependencies",
        resolver.manifest().dependencies.len()
    ));

    let validator: Box<dyn ConfigValidator> = if args.fs {
        Box::new(FsValidator::new(resolver.base().context.clone()))
    } else {
        Box::new(SchemaValidator)
    };

    for environment in ENVIRONMENTS {
        let config = resolver.resolve(environment);
        if let Err(err) = validator.validate(&config) {
            ui::error(&format!("{environment} config is invalid"));
            return Err(err.into());
        }

        let marker = if environment == selected { " (selected)" } else { "" };
        ui::success(&format!(
            "{environment}{marker}: {} rules, {} plugins",
            config.rules.len(),
            config.plugins.len()
        ));
    }

    ui::success("Configuration is valid!");
    Ok(())
}
