//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a working-time
//! regime from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{ComplianceRules, RegimeConfig, RegimeMetadata, RulesConfig};

/// Loads and provides access to a regime configuration.
///
/// # Directory Structure
///
/// ```text
/// config/arbzg/
/// ├── regime.yaml   # Statute metadata
/// └── rules.yaml    # Thresholds in minutes
/// ```
///
/// # Example
///
/// ```no_run
/// use arbzg_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/arbzg").unwrap();
/// println!("Loaded regime: {}", loader.regime().name);
/// println!("Daily maximum: {} minutes", loader.rules().max_work_minutes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoader {
    config: RegimeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or carries thresholds that contradict each other.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;
        let rules_config = Self::load_yaml::<RulesConfig>(&path.join("rules.yaml"))?;

        validate_rules(&rules_config.rules)?;

        info!(
            regime = %metadata.code,
            version = %metadata.version,
            "Loaded working-time regime"
        );

        Ok(Self {
            config: RegimeConfig::new(metadata, rules_config.rules),
        })
    }

    /// The built-in Arbeitszeitgesetz regime, without touching disk.
    pub fn statutory() -> Self {
        Self {
            config: RegimeConfig::new(RegimeMetadata::statutory(), ComplianceRules::STATUTORY),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }

    /// Returns the thresholds.
    pub fn rules(&self) -> &ComplianceRules {
        self.config.rules()
    }
}

/// Rejects threshold combinations the band logic cannot work with.
fn validate_rules(rules: &ComplianceRules) -> EngineResult<()> {
    if rules.break_threshold_1 == 0 {
        return Err(invalid(
            "break_threshold_1",
            "must be greater than zero".to_string(),
        ));
    }
    if rules.break_threshold_1 >= rules.break_threshold_2 {
        return Err(invalid(
            "break_threshold_2",
            format!(
                "must be greater than break_threshold_1 ({})",
                rules.break_threshold_1
            ),
        ));
    }
    if rules.required_break_1 > rules.required_break_2 {
        return Err(invalid(
            "required_break_2",
            format!(
                "must not be less than required_break_1 ({})",
                rules.required_break_1
            ),
        ));
    }
    if rules.regular_work_minutes > rules.max_work_minutes {
        return Err(invalid(
            "regular_work_minutes",
            format!(
                "must not exceed max_work_minutes ({})",
                rules.max_work_minutes
            ),
        ));
    }
    if rules.min_qualifying_break_minutes == 0 {
        return Err(invalid(
            "min_qualifying_break_minutes",
            "must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message,
    }
}
