//! Application configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LABGUARD_*`)
/// 2. Project config (`labguard.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LabguardConfig {
    pub database: DatabaseConfig,
    pub report: ReportConfig,
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file path.
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("labguard.db"),
        }
    }
}

/// Export/report settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places for z-scores in exported rows.
    pub decimal_places: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

impl LabguardConfig {
    /// Load configuration with layered resolution (see type docs).
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("labguard.toml");
        if project_config_path.exists() {
            let text = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ReadError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Self) -> Result<(), ConfigError> {
        if let Ok(path) = std::env::var("LABGUARD_DB_PATH") {
            if !path.is_empty() {
                config.database.path = PathBuf::from(path);
            }
        }
        if let Ok(places) = std::env::var("LABGUARD_REPORT_DECIMALS") {
            config.report.decimal_places = parse_decimal_places(&places)?;
        }
        Ok(())
    }

    fn validate(config: &Self) -> Result<(), ConfigError> {
        if config.report.decimal_places > 6 {
            return Err(ConfigError::InvalidValue {
                field: "report.decimal_places",
                message: format!("{} exceeds the maximum of 6", config.report.decimal_places),
            });
        }
        Ok(())
    }
}

/// A malformed `LABGUARD_REPORT_DECIMALS` fails the same way a malformed
/// `labguard.toml` entry does.
fn parse_decimal_places(text: &str) -> Result<u8, ConfigError> {
    text.parse().map_err(|_| ConfigError::InvalidValue {
        field: "report.decimal_places",
        message: format!("cannot parse {text:?} as an integer"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = LabguardConfig::default();
        assert_eq!(config.database.path, PathBuf::from("labguard.db"));
        assert_eq!(config.report.decimal_places, 2);
    }

    #[test]
    fn parses_partial_toml() {
        let config = LabguardConfig::from_toml(
            r#"
            [report]
            decimal_places = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.report.decimal_places, 3);
        assert_eq!(config.database.path, PathBuf::from("labguard.db"));
    }

    #[test]
    fn rejects_invalid_decimal_places() {
        let result = LabguardConfig::from_toml(
            r#"
            [report]
            decimal_places = 9
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            LabguardConfig::from_toml("not = [valid"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn malformed_env_decimal_override_is_an_error() {
        assert_eq!(parse_decimal_places("4").unwrap(), 4);
        assert!(matches!(
            parse_decimal_places("many"),
            Err(ConfigError::InvalidValue {
                field: "report.decimal_places",
                ..
            })
        ));
        assert!(matches!(
            parse_decimal_places("-1"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn missing_project_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LabguardConfig::load(dir.path()).unwrap();
        assert_eq!(config, LabguardConfig::default());
    }

    #[test]
    fn project_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("labguard.toml"),
            "[database]\npath = \"qc/history.db\"\n",
        )
        .unwrap();
        let config = LabguardConfig::load(dir.path()).unwrap();
        assert_eq!(config.database.path, PathBuf::from("qc/history.db"));
    }
}
