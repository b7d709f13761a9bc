//! Configuration loading functionality.
//!
//! This module provides YAML file loading for [`SplitConfig`].

use std::fs;
use std::path::Path;

use crate::error::{SplitterError, SplitterResult};

use super::types::SplitConfig;

impl SplitConfig {
    /// Loads a configuration from the specified YAML file.
    ///
    /// Missing fields fall back to the defaults, so a file may override any
    /// subset of `total`, `recipients`, and `precision`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/split.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration on success, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    ///
    /// The loaded configuration is not validated here; callers run
    /// [`validate`](Self::validate) once defaults, file values, and
    /// command-line overrides have been merged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use money_splitter::config::SplitConfig;
    ///
    /// let config = SplitConfig::from_yaml_file("./config/split.yaml")?;
    /// config.validate()?;
    /// # Ok::<(), money_splitter::error::SplitterError>(())
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> SplitterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SplitterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SplitterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_temp_yaml(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_shipped_configuration() {
        let config = SplitConfig::from_yaml_file("./config/split.yaml").unwrap();

        assert_eq!(config.total, dec("800.00"));
        assert_eq!(config.recipients, 3);
        assert_eq!(config.precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = SplitConfig::from_yaml_file("/nonexistent/split.yaml");

        match result {
            Err(SplitterError::ConfigNotFound { path }) => {
                assert!(path.contains("split.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp_yaml("money_splitter_bad.yaml", "recipients: [not closed\n");

        let result = SplitConfig::from_yaml_file(&path);
        match result {
            Err(SplitterError::ConfigParseError { path: p, .. }) => {
                assert!(p.contains("money_splitter_bad.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let path = write_temp_yaml("money_splitter_partial.yaml", "total: \"42.00\"\n");

        let config = SplitConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.total, dec("42.00"));
        assert_eq!(config.recipients, 3);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_loaded_config_is_not_validated() {
        let path = write_temp_yaml("money_splitter_zero.yaml", "recipients: 0\n");

        let config = SplitConfig::from_yaml_file(&path).unwrap();
        assert!(config.validate().is_err());
    }
}
