//! Configuration loading and management for the compliance engine.
//!
//! This module provides functionality to load a working-time regime from YAML
//! files: the statute metadata and the minute thresholds the rules apply.
//!
//! # Example
//!
//! ```no_run
//! use arbzg_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/arbzg").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ComplianceRules, RegimeConfig, RegimeMetadata, RulesConfig};
