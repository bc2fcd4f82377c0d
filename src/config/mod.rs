use crate::collections::chunk::{break_into_groups, Groups};
use crate::utils::error::{HelperError, Result};
use crate::utils::logger::init_logger;
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GROUP_SIZE: usize = 10;

/// Parameter object for the helpers' optional arguments.
///
/// ```toml
/// [grouping]
/// group_size = 10
///
/// [logging]
/// verbose = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    pub grouping: GroupingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub group_size: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
}

impl HelpersConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HelperError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a TOML document. Missing tables fall back to
    /// their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| HelperError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Installs the stderr logger at the configured verbosity.
    pub fn init_logging(&self) -> bool {
        init_logger(self.logging.verbose)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| HelperError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}

impl GroupingConfig {
    pub fn break_into_groups<I: IntoIterator>(&self, source: I) -> Result<Groups<I::IntoIter>> {
        break_into_groups(source, self.group_size)
    }
}

impl Validate for GroupingConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("grouping.group_size", self.group_size, 1)
    }
}

impl Validate for HelpersConfig {
    fn validate(&self) -> Result<()> {
        self.grouping.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[grouping]
group_size = 4

[logging]
verbose = true
"#;

        let config = HelpersConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.grouping.group_size, 4);
        assert!(config.logging.verbose);
        let _ = config.init_logging();
    }

    #[test]
    fn test_missing_tables_use_defaults() {
        let config = HelpersConfig::from_toml_str("").unwrap();
        assert_eq!(config, HelpersConfig::default());
        assert_eq!(config.grouping.group_size, DEFAULT_GROUP_SIZE);
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_zero_group_size_fails_validation() {
        let err = HelpersConfig::from_toml_str("[grouping]\ngroup_size = 0\n").unwrap_err();
        match err {
            HelperError::InvalidArgument { argument, value, .. } => {
                assert_eq!(argument, "grouping.group_size");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let err = HelpersConfig::from_toml_str("[grouping\n").unwrap_err();
        assert!(matches!(err, HelperError::ConfigError { .. }));

        let err = HelpersConfig::from_toml_str("[grouping]\ngroup_size = -2\n").unwrap_err();
        assert!(matches!(err, HelperError::ConfigError { .. }));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = HelpersConfig {
            grouping: GroupingConfig { group_size: 3 },
            logging: LoggingConfig { verbose: true },
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(HelpersConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[grouping]\ngroup_size = 2\n").unwrap();

        let config = HelpersConfig::from_file(temp_file.path()).unwrap();
        let groups: Vec<Vec<i32>> = config
            .grouping
            .break_into_groups(vec![1, 2, 3])
            .unwrap()
            .collect();
        assert_eq!(groups, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_missing_file() {
        let err = HelpersConfig::from_file("/nonexistent/helpers.toml").unwrap_err();
        assert!(matches!(err, HelperError::IoError(_)));
    }
}
