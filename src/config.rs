//! Configuration system for the evaluator
//!
//! Reads configuration from:
//! - `.senseirc.yaml` / `.senseirc.json` (project-level)
//! - `~/.senseirc.yaml` (user-level)
//!
//! Everything is optional; the defaults match the evaluator's documented
//! behavior exactly.

use crate::diagnostic::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Color mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Color mode
    pub color: ColorMode,

    /// Verbose output
    pub verbose: bool,
}

/// Rule configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Disabled rules
    pub disabled: Vec<String>,

    /// Severity overrides (rule_id -> severity)
    pub severity: HashMap<String, Severity>,
}

/// Guidance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Emit the generic guidance notes
    pub enabled: bool,

    /// Sources trimmed below this length get a "write more" note
    pub min_meaningful_len: usize,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_meaningful_len: 10,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Rule configuration
    pub rules: RulesConfig,

    /// Guidance settings
    pub guidance: GuidanceConfig,
}

impl Config {
    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Self = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "Unknown config file format: {}",
                    ext
                )))
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_names = [".senseirc.yaml", ".senseirc.yml", ".senseirc.json"];

        // Check current directory
        for name in &config_names {
            let path = PathBuf::from(name);
            if path.exists() {
                return Self::load(&path);
            }
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            for name in &config_names {
                let path = home.join(name);
                if path.exists() {
                    return Self::load(&path);
                }
            }
        }

        Ok(Self::default())
    }

    /// Merge CLI arguments into configuration
    pub fn merge_cli(
        &mut self,
        format: Option<OutputFormat>,
        verbose: Option<bool>,
        disabled_rules: Option<Vec<String>>,
    ) {
        if let Some(f) = format {
            self.output.format = f;
        }
        if let Some(v) = verbose {
            self.output.verbose = v;
        }
        if let Some(disabled) = disabled_rules {
            self.rules.disabled.extend(disabled);
        }
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        !self.rules.disabled.iter().any(|d| d == rule_id)
    }

    /// Get severity override for a rule
    pub fn severity_override(&self, rule_id: &str) -> Option<Severity> {
        self.rules.severity.get(rule_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.guidance.enabled);
        assert_eq!(config.guidance.min_meaningful_len, 10);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.is_rule_enabled("py-missing-colon"));
    }

    #[test]
    fn test_disabled_rule() {
        let mut config = Config::default();
        config.rules.disabled.push("c-missing-main".to_string());
        assert!(!config.is_rule_enabled("c-missing-main"));
        assert!(config.is_rule_enabled("c-missing-semicolon"));
    }

    #[test]
    fn test_severity_override() {
        let mut config = Config::default();
        config
            .rules
            .severity
            .insert("py-print-parens".to_string(), Severity::Warning);
        assert_eq!(
            config.severity_override("py-print-parens"),
            Some(Severity::Warning)
        );
        assert_eq!(config.severity_override("py-missing-colon"), None);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_load_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "rules:\n  disabled:\n    - py-unbalanced-line\n  severity:\n    c-missing-main: warning\nguidance:\n  min_meaningful_len: 5"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(!config.is_rule_enabled("py-unbalanced-line"));
        assert_eq!(
            config.severity_override("c-missing-main"),
            Some(Severity::Warning)
        );
        assert_eq!(config.guidance.min_meaningful_len, 5);
        // Unspecified sections keep their defaults
        assert!(config.guidance.enabled);
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "{{\"output\": {{\"format\": \"json\"}}}}").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_merge_cli() {
        let mut config = Config::default();
        config.merge_cli(
            Some(OutputFormat::Json),
            Some(true),
            Some(vec!["js-syntax-error".to_string()]),
        );
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.verbose);
        assert!(!config.is_rule_enabled("js-syntax-error"));
    }
}
