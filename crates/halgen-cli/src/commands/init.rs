//! `halgen init` — create a default configuration file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Leading comment block for generated config files.
const CONFIG_HEADER: &str = "# halgen configuration
#
# Values here fill in omitted CLI flags.  HALGEN_-prefixed environment
# variables override the file (e.g. HALGEN_DEFAULTS__AUTHOR).

";

/// Create a default halgen configuration file.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = AppConfig::config_path();

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let default_config = AppConfig::default();
    let toml = toml::to_string_pretty(&default_config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    // Ensure parent directory exists.
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, format!("{CONFIG_HEADER}{toml}"))
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_contents_parse_back() {
        // The comment header must not break TOML parsing of the payload.
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let full = format!("{CONFIG_HEADER}{toml}");

        let parsed: AppConfig = toml::from_str(&full).unwrap();
        assert_eq!(parsed.defaults.lang, "cpp");
        assert!(!parsed.output.no_color);
    }
}
