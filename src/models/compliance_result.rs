//! Compliance verdict for a single day.

use serde::{Deserialize, Serialize};

/// The verdict of the daily compliance check.
///
/// `notes` is an ordered log: the daily-maximum note always precedes the
/// break note. A result may carry advisory notes while still compliant.
///
/// # Example
///
/// ```
/// use arbzg_engine::models::ComplianceResult;
///
/// let result = ComplianceResult::compliant();
/// assert!(result.is_compliant);
/// assert!(result.notes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Whether every statutory limit was respected.
    pub is_compliant: bool,
    /// Violations and advisories, in evaluation order.
    pub notes: Vec<String>,
}

impl ComplianceResult {
    /// A compliant result with no notes.
    pub fn compliant() -> Self {
        Self {
            is_compliant: true,
            notes: Vec::new(),
        }
    }

    /// Records a violation.
    pub fn violation(&mut self, note: String) {
        self.is_compliant = false;
        self.notes.push(note);
    }

    /// Records an advisory note without touching the verdict.
    pub fn advisory(&mut self, note: String) {
        self.notes.push(note);
    }
}

impl Default for ComplianceResult {
    fn default() -> Self {
        Self::compliant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_keeps_compliance() {
        let mut result = ComplianceResult::compliant();
        result.advisory("reminder".to_string());

        assert!(result.is_compliant);
        assert_eq!(result.notes, vec!["reminder".to_string()]);
    }

    #[test]
    fn test_violation_flips_compliance_and_keeps_order() {
        let mut result = ComplianceResult::compliant();
        result.advisory("first".to_string());
        result.violation("second".to_string());

        assert!(!result.is_compliant);
        assert_eq!(result.notes, vec!["first".to_string(), "second".to_string()]);
    }
}
