//! Minimum rest period between working days (ArbZG §5).

use chrono::NaiveDateTime;

use crate::config::ComplianceRules;

/// Whole minutes of rest between two events, when both are known.
pub fn rest_minutes(
    previous_day_last_event: Option<NaiveDateTime>,
    current_day_first_event: Option<NaiveDateTime>,
) -> Option<i64> {
    match (previous_day_last_event, current_day_first_event) {
        (Some(previous), Some(current)) => Some((current - previous).num_minutes()),
        _ => None,
    }
}

/// Checks the rest between the previous day's last event and the current
/// day's first event.
///
/// Without both timestamps there is nothing to evaluate and the check passes.
/// Otherwise the rest must be at least `min_rest_minutes` whole minutes.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::check_rest_period;
/// use arbzg_engine::config::ComplianceRules;
/// use chrono::{Duration, NaiveDateTime};
///
/// let rules = ComplianceRules::default();
/// let t = NaiveDateTime::parse_from_str("2026-01-15 20:00", "%Y-%m-%d %H:%M").unwrap();
///
/// assert!(check_rest_period(Some(t), Some(t + Duration::hours(11)), &rules));
/// assert!(!check_rest_period(Some(t), Some(t + Duration::hours(10)), &rules));
/// assert!(check_rest_period(None, Some(t), &rules));
/// ```
pub fn check_rest_period(
    previous_day_last_event: Option<NaiveDateTime>,
    current_day_first_event: Option<NaiveDateTime>,
    rules: &ComplianceRules,
) -> bool {
    rest_minutes(previous_day_last_event, current_day_first_event)
        .is_none_or(|minutes| minutes >= i64::from(rules.min_rest_minutes))
}
