//! Configuration types for working-time compliance.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::{
    BREAK_THRESHOLD_1, BREAK_THRESHOLD_2, MAX_WORK_MINUTES, MIN_QUALIFYING_BREAK_MINUTES,
    MIN_REST_MINUTES, REGULAR_WORK_MINUTES, REQUIRED_BREAK_1, REQUIRED_BREAK_2,
};

/// Metadata about the working-time regime.
///
/// Contains identifying information about the statute the rules encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// Short code of the statute (e.g., "ArbZG").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or effective date of the encoded text.
    pub version: String,
    /// URL to the official statute text.
    pub source_url: String,
}

impl RegimeMetadata {
    /// Metadata of the built-in Arbeitszeitgesetz regime.
    pub fn statutory() -> Self {
        Self {
            code: "ArbZG".to_string(),
            name: "Arbeitszeitgesetz".to_string(),
            version: "2020-12-22".to_string(),
            source_url: "https://www.gesetze-im-internet.de/arbzg/".to_string(),
        }
    }
}

/// Statutory thresholds, all in minutes.
///
/// Every field falls back to the ArbZG value when omitted from `rules.yaml`,
/// so a rules file only has to name what it overrides.
///
/// # Example
///
/// ```
/// use arbzg_engine::config::ComplianceRules;
///
/// let rules = ComplianceRules::default();
/// assert_eq!(rules.max_work_minutes, 600);
/// assert_eq!(rules.min_rest_minutes, 660);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceRules {
    /// Absolute daily maximum (§3 sentence 2).
    pub max_work_minutes: u32,
    /// Regular daily limit, advisory only (§3 sentence 1).
    pub regular_work_minutes: u32,
    /// Work beyond this requires the first break tier (§4).
    pub break_threshold_1: u32,
    /// Work beyond this requires the second break tier (§4).
    pub break_threshold_2: u32,
    /// Break required above `break_threshold_1`.
    pub required_break_1: u32,
    /// Break required above `break_threshold_2`.
    pub required_break_2: u32,
    /// Shortest break that counts toward the requirement.
    pub min_qualifying_break_minutes: u32,
    /// Minimum uninterrupted rest between shifts (§5).
    pub min_rest_minutes: u32,
}

impl ComplianceRules {
    /// The thresholds of the Arbeitszeitgesetz.
    pub const STATUTORY: Self = Self {
        max_work_minutes: MAX_WORK_MINUTES,
        regular_work_minutes: REGULAR_WORK_MINUTES,
        break_threshold_1: BREAK_THRESHOLD_1,
        break_threshold_2: BREAK_THRESHOLD_2,
        required_break_1: REQUIRED_BREAK_1,
        required_break_2: REQUIRED_BREAK_2,
        min_qualifying_break_minutes: MIN_QUALIFYING_BREAK_MINUTES,
        min_rest_minutes: MIN_REST_MINUTES,
    };
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self::STATUTORY
    }
}

/// Rules configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesConfig {
    /// The thresholds.
    #[serde(default)]
    pub rules: ComplianceRules,
}

/// The complete regime configuration loaded from YAML files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimeConfig {
    metadata: RegimeMetadata,
    rules: ComplianceRules,
}

impl RegimeConfig {
    /// Creates a new RegimeConfig from its component parts.
    pub fn new(metadata: RegimeMetadata, rules: ComplianceRules) -> Self {
        Self { metadata, rules }
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns the thresholds.
    pub fn rules(&self) -> &ComplianceRules {
        &self.rules
    }
}
