mod schema;

pub use schema::{Config, ThemeMode, DEFAULT_INITIAL_VALUE, DEFAULT_SLIDER_STEP};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::{MAX_VALUE, MIN_VALUE};

/// Get the config directory path (~/.config/motiv-calc/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("motiv-calc"))
}

/// Get the default config file path (~/.config/motiv-calc/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/motiv-calc/config.yaml) and falls back to defaults when it does not exist
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            explicit
        }
        None => match get_config_path() {
            Some(default) if default.exists() => default,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(Config::default());
            }
        },
    };

    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !(MIN_VALUE..=MAX_VALUE).contains(&config.initial_value) {
        errors.push(format!(
            "initial_value: must be between {} and {} (got {})",
            MIN_VALUE, MAX_VALUE, config.initial_value
        ));
    }

    if !(config.slider_step > 0.0 && config.slider_step <= MAX_VALUE) {
        errors.push(format!(
            "slider_step: must be greater than 0 and at most {} (got {})",
            MAX_VALUE, config.slider_step
        ));
    }

    if let Some(ref dir) = config.export_dir {
        if !dir.is_dir() {
            errors.push(format!("export_dir: {} is not a directory", dir.display()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
