//! Mandatory break requirement (ArbZG §4).

use crate::config::ComplianceRules;

/// Returns the break, in minutes, the law requires for a day of `work_minutes`.
///
/// A step function with exclusive thresholds: `required_break_2` above
/// `break_threshold_2`, `required_break_1` above `break_threshold_1`, and no
/// break otherwise. With the statutory rules exactly 6 hours needs no break
/// and exactly 9 hours needs 30 minutes.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::required_break_minutes;
/// use arbzg_engine::config::ComplianceRules;
///
/// let rules = ComplianceRules::default();
/// assert_eq!(required_break_minutes(360, &rules), 0);
/// assert_eq!(required_break_minutes(361, &rules), 30);
/// assert_eq!(required_break_minutes(540, &rules), 30);
/// assert_eq!(required_break_minutes(541, &rules), 45);
/// ```
pub fn required_break_minutes(work_minutes: u32, rules: &ComplianceRules) -> u32 {
    if work_minutes > rules.break_threshold_2 {
        rules.required_break_2
    } else if work_minutes > rules.break_threshold_1 {
        rules.required_break_1
    } else {
        0
    }
}
