//! Configuration types for the money splitter.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file or assembled from
//! command-line arguments.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{SplitterError, SplitterResult};

/// The default total amount to split (800.00).
pub const DEFAULT_TOTAL: Decimal = Decimal::from_parts(80000, 0, 0, false, 2);

/// The default number of recipients.
pub const DEFAULT_RECIPIENTS: u32 = 3;

/// The default number of decimal places for share amounts.
pub const DEFAULT_PRECISION: u32 = 2;

/// The largest number of decimal places a share amount can carry.
pub const MAX_PRECISION: u32 = 28;

/// Parameters for one split run.
///
/// Fields left out of a YAML file fall back to the defaults, so a partial
/// configuration such as `total: "42.00"` is valid.
///
/// # Example
///
/// ```
/// use money_splitter::config::SplitConfig;
///
/// let config: SplitConfig = serde_yaml::from_str("total: \"100.00\"\nrecipients: 4\n").unwrap();
/// assert_eq!(config.recipients, 4);
/// assert_eq!(config.precision, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SplitConfig {
    /// The total amount to divide among recipients. May be negative or zero.
    #[serde(default = "default_total")]
    pub total: Decimal,
    /// The number of recipients sharing the total. Must be at least 1.
    #[serde(default = "default_recipients")]
    pub recipients: u32,
    /// The number of decimal places shares are rounded to.
    /// Must be between 1 and 28.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_total() -> Decimal {
    DEFAULT_TOTAL
}

fn default_recipients() -> u32 {
    DEFAULT_RECIPIENTS
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            total: DEFAULT_TOTAL,
            recipients: DEFAULT_RECIPIENTS,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SplitConfig {
    /// Checks the configuration constraints.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` when the configuration is usable, or:
    /// - `InvalidRecipientCount` when `recipients` is zero
    /// - `InvalidPrecision` when `precision` is outside `1..=28`
    pub fn validate(&self) -> SplitterResult<()> {
        if self.recipients == 0 {
            return Err(SplitterError::InvalidRecipientCount {
                count: self.recipients,
            });
        }
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(SplitterError::InvalidPrecision {
                precision: self.precision,
            });
        }
        Ok(())
    }

    /// The smallest currency increment at the configured precision
    /// (one cent at precision 2).
    ///
    /// The configuration must pass [`validate`](Self::validate) before this
    /// is called; precisions beyond the supported decimal range cannot be
    /// represented.
    pub fn minimal_unit(&self) -> Decimal {
        Decimal::new(1, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = SplitConfig::default();
        assert_eq!(config.total, dec("800.00"));
        assert_eq!(config.recipients, 3);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SplitConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_recipients() {
        let config = SplitConfig {
            recipients: 0,
            ..SplitConfig::default()
        };

        match config.validate() {
            Err(SplitterError::InvalidRecipientCount { count }) => assert_eq!(count, 0),
            other => panic!("Expected InvalidRecipientCount, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_precision() {
        let config = SplitConfig {
            precision: 0,
            ..SplitConfig::default()
        };

        match config.validate() {
            Err(SplitterError::InvalidPrecision { precision }) => assert_eq!(precision, 0),
            other => panic!("Expected InvalidPrecision, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_precision_above_max() {
        let config = SplitConfig {
            precision: 29,
            ..SplitConfig::default()
        };

        match config.validate() {
            Err(SplitterError::InvalidPrecision { precision }) => assert_eq!(precision, 29),
            other => panic!("Expected InvalidPrecision, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_precision_bounds() {
        let low = SplitConfig {
            precision: 1,
            ..SplitConfig::default()
        };
        let high = SplitConfig {
            precision: MAX_PRECISION,
            ..SplitConfig::default()
        };

        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn test_minimal_unit_at_precision_two() {
        let config = SplitConfig::default();
        assert_eq!(config.minimal_unit(), dec("0.01"));
    }

    #[test]
    fn test_minimal_unit_at_precision_four() {
        let config = SplitConfig {
            precision: 4,
            ..SplitConfig::default()
        };
        assert_eq!(config.minimal_unit(), dec("0.0001"));
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = "total: \"1234.56\"\nrecipients: 7\nprecision: 3\n";
        let config: SplitConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.total, dec("1234.56"));
        assert_eq!(config.recipients, 7);
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_deserialize_partial_config_fills_defaults() {
        let yaml = "recipients: 5\n";
        let config: SplitConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.total, dec("800.00"));
        assert_eq!(config.recipients, 5);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_deserialize_empty_config_is_default() {
        let config: SplitConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config.total, dec("800.00"));
        assert_eq!(config.recipients, 3);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_deserialize_negative_total() {
        let yaml = "total: \"-10.00\"\nrecipients: 2\n";
        let config: SplitConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.total, dec("-10.00"));
        assert!(config.validate().is_ok());
    }
}
