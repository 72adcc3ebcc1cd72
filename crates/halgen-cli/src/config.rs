//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `HALGEN_`-prefixed environment variables (`HALGEN_DEFAULTS__AUTHOR`)
//! 3. Config file (`--config` path, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new scaffolds.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Dialect used when `--lang` is omitted.
    pub lang: String,
    /// Author stamped into C file banners when `--author` is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            lang: "cpp".into(),
            author: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering environment variables and the config
    /// file over the built-in defaults.
    ///
    /// An explicit `--config` path must exist; the default-location file is
    /// optional (fresh installs run on defaults alone).
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path.clone())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix("HALGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?;

        // Missing keys fall back to the serde defaults, so a partial file
        // (or no file at all) still produces a complete config.
        let config = settings
            .try_deserialize()
            .context("Failed to parse configuration")?;

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.halgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "halgen", "halgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".halgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn default_lang_is_cpp() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.lang, "cpp");
        assert!(cfg.defaults.author.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_with_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("halgen.toml");
        fs::write(
            &path,
            "[defaults]\nlang = \"c\"\nauthor = \"R. Hamilton\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.lang, "c");
        assert_eq!(cfg.defaults.author.as_deref(), Some("R. Hamilton"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("halgen.toml");
        fs::write(&path, "[defaults]\nauthor = \"R. Hamilton\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.lang, "cpp");
        assert_eq!(cfg.defaults.author.as_deref(), Some("R. Hamilton"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/halgen.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("halgen.toml");
        fs::write(&path, "defaults = not valid toml [").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
