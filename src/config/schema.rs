use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::export::ExportFormat;

pub const DEFAULT_INITIAL_VALUE: f64 = 5.0;
pub const DEFAULT_SLIDER_STEP: f64 = 0.1;

/// User settings for the front ends.
///
/// Weights are not configurable; every key here is presentation only.
///
/// Example YAML:
/// ```yaml
/// initial_value: 5.0
/// slider_step: 0.5
/// export_dir: /home/coach/motivation
/// export_format: txt
/// theme: dark
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Starting value of every slider (default: 5.0)
    #[serde(default = "default_initial_value")]
    pub initial_value: f64,

    /// Slider increment for h/l (default: 0.1)
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,

    /// Directory offered by the export prompt (default: current directory)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Encoding used for suggested export file names (default: csv)
    #[serde(default)]
    pub export_format: ExportFormat,

    #[serde(default)]
    pub theme: ThemeMode,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

fn default_initial_value() -> f64 {
    DEFAULT_INITIAL_VALUE
}

fn default_slider_step() -> f64 {
    DEFAULT_SLIDER_STEP
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_INITIAL_VALUE,
            slider_step: DEFAULT_SLIDER_STEP,
            export_dir: None,
            export_format: ExportFormat::default(),
            theme: ThemeMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
initial_value: 7.5
slider_step: 0.5
export_dir: /tmp/profiles
export_format: txt
theme: light
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.initial_value, 7.5);
        assert_eq!(config.slider_step, 0.5);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/profiles")));
        assert_eq!(config.export_format, ExportFormat::PlainText);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_weights_key_is_rejected() {
        let yaml = r#"
weights:
  digital: 0.5
"#;
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
