//! Daily working-time compliance check (ArbZG §3 and §4).

use crate::config::ComplianceRules;
use crate::models::ComplianceResult;

use super::{minutes_to_hours, required_break_minutes};

/// Checks a day's effective work and break minutes against the statute.
///
/// Rules are evaluated in a fixed order and their notes appended in that
/// order:
///
/// 1. Work above `max_work_minutes` violates the 10-hour maximum. Work above
///    `regular_work_minutes` (but within the maximum) only adds an advisory
///    note: the 8-hour limit may be exceeded if the 6-month average holds.
/// 2. If a break is required and `break_minutes` falls short of it, the day
///    violates the break rule.
///
/// # Examples
///
/// ```
/// use arbzg_engine::calculation::check_compliance;
/// use arbzg_engine::config::ComplianceRules;
///
/// let rules = ComplianceRules::default();
///
/// let result = check_compliance(480, 30, &rules);
/// assert!(result.is_compliant);
/// assert!(result.notes.is_empty());
///
/// let result = check_compliance(601, 45, &rules);
/// assert!(!result.is_compliant);
/// assert!(result.notes[0].contains("10 hours"));
/// ```
pub fn check_compliance(
    work_minutes: u32,
    break_minutes: u32,
    rules: &ComplianceRules,
) -> ComplianceResult {
    let mut result = ComplianceResult::compliant();

    if work_minutes > rules.max_work_minutes {
        result.violation(format!(
            "Exceeds the maximum daily working time of {} hours (ArbZG §3): {} minutes worked",
            hours_label(rules.max_work_minutes),
            work_minutes
        ));
    } else if work_minutes > rules.regular_work_minutes {
        result.advisory(format!(
            "Exceeds the regular daily working time of {} hours (ArbZG §3): {} minutes worked; \
             the 6-month average must not exceed {} hours per working day",
            hours_label(rules.regular_work_minutes),
            work_minutes,
            hours_label(rules.regular_work_minutes)
        ));
    }

    let required = required_break_minutes(work_minutes, rules);
    if required > 0 && break_minutes < required {
        result.violation(format!(
            "Insufficient break time (ArbZG §4): {} minutes taken, {} minutes required for {} minutes worked",
            break_minutes, required, work_minutes
        ));
    }

    result
}

/// Renders a minute threshold as hours, e.g. 600 -> "10", 510 -> "8.5".
fn hours_label(minutes: u32) -> String {
    minutes_to_hours(minutes).normalize().to_string()
}
