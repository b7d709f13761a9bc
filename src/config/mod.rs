//! Configuration loading and management for the money splitter.
//!
//! This module provides the split parameters structure, its validity
//! constraints, and YAML file loading.
//!
//! # Example
//!
//! ```no_run
//! use money_splitter::config::SplitConfig;
//!
//! let config = SplitConfig::from_yaml_file("./config/split.yaml").unwrap();
//! println!("Splitting {} among {} recipients", config.total, config.recipients);
//! ```

mod loader;
mod types;

pub use types::{DEFAULT_PRECISION, DEFAULT_RECIPIENTS, DEFAULT_TOTAL, MAX_PRECISION, SplitConfig};
