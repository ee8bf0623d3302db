use std::path::{Path, PathBuf};

use parquet_schema_dsl::{ParseOptions, DEFAULT_INDENT, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::CliError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "PARQUET_SCHEMA_CONFIG";

/// CLI configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub print: PrintConfig,
    #[serde(default)]
    pub parse: ParseConfig,
}

/// Printer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

/// Parser limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_max_input_bytes() -> u64 {
    1024 * 1024
}

impl CliConfig {
    /// Rejects limits that would make every parse fail.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.parse.max_depth == 0 {
            return Err(CliError::Config {
                message: "parse.max_depth must be at least 1".to_string(),
            });
        }
        if self.parse.max_input_bytes == 0 {
            return Err(CliError::Config {
                message: "parse.max_input_bytes must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings after merging config file values with CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub indent: usize,
    pub parse_options: ParseOptions,
    pub max_input_bytes: u64,
}

/// Discovery order for config file:
/// 1. `--config <path>` or `PARQUET_SCHEMA_CONFIG` (explicit; must exist)
/// 2. `./parquet-schema.toml` (project-local)
/// 3. `$XDG_CONFIG_HOME/parquet-schema/config.toml`
/// 4. `~/.config/parquet-schema/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    let local = PathBuf::from("parquet-schema.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("parquet-schema/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/parquet-schema/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Config {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    let config: CliConfig = toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Resolve effective settings from config + CLI overrides.
///
/// CLI flags take precedence over config file values.
pub fn resolve_settings(config: &CliConfig, cli: &Cli) -> Settings {
    Settings {
        indent: cli.indent.unwrap_or(config.print.indent),
        parse_options: ParseOptions {
            max_depth: config.parse.max_depth,
        },
        max_input_bytes: config.parse.max_input_bytes,
    }
}
