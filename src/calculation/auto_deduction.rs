//! Mandatory break auto-deduction.
//!
//! When an employee worked long enough to owe a break but did not take
//! enough qualifying break time, the missing minutes are deducted from the
//! raw work time as if the break had been taken. The deduction must never
//! push the day into a band whose requirement is lower than the one that
//! justified it, so the band is re-evaluated after a tentative deduction.

use serde::{Deserialize, Serialize};

use crate::config::ComplianceRules;
use crate::models::AuditStep;

use super::required_break_minutes;

/// Computes the minutes to deduct from `raw_work_minutes` for a missing break.
///
/// 1. Up to `break_threshold_1` no break is owed and nothing is deducted.
/// 2. Otherwise the shortage against the band's requirement is deducted
///    tentatively and the resulting figure is re-classified:
///    - still in the same band (or, in the first band, exactly on the floor):
///      the shortage stands;
///    - dropped from the second band into the first: the shortage is
///      re-derived against the first band's lighter requirement;
///    - dropped below `break_threshold_1`: the deduction is capped so the
///      effective work lands exactly on the floor.
///
/// At most two bands are visited, so the search is bounded.
///
/// # Examples
///
/// ```
/// use arbzg_engine::calculation::compute_auto_deduction;
/// use arbzg_engine::config::ComplianceRules;
///
/// let rules = ComplianceRules::default();
///
/// // 6h25m without a break: capped at the 6-hour floor
/// assert_eq!(compute_auto_deduction(385, 0, &rules), 25);
/// // 9h25m without a break: 45 would fall into the 30-minute band
/// assert_eq!(compute_auto_deduction(565, 0, &rules), 30);
/// // 10h without a break: stays above 9 hours after 45
/// assert_eq!(compute_auto_deduction(600, 0, &rules), 45);
/// ```
pub fn compute_auto_deduction(
    raw_work_minutes: u32,
    qualifying_break_minutes: u32,
    rules: &ComplianceRules,
) -> u32 {
    let floor = rules.break_threshold_1;
    if raw_work_minutes <= floor {
        return 0;
    }

    let mut required = required_break_minutes(raw_work_minutes, rules);
    loop {
        let shortage = required.saturating_sub(qualifying_break_minutes);
        if shortage == 0 {
            return 0;
        }

        let headroom = raw_work_minutes - floor;
        if shortage > headroom {
            return headroom;
        }

        let effective = raw_work_minutes - shortage;

        if required == rules.required_break_1
            || required_break_minutes(effective, rules) == required
        {
            return shortage;
        }

        // Fell out of the second band: only the first band's break is owed.
        required = rules.required_break_1;
    }
}

/// The auto-deduction applied to a day, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoDeduction {
    /// Minutes deducted from the raw work time.
    pub deduction_minutes: u32,
    /// Raw work minutes minus the deduction.
    pub effective_work_minutes: u32,
    /// Qualifying break minutes plus the deduction.
    pub effective_break_minutes: u32,
    /// The audit step recording this deduction.
    pub audit_step: AuditStep,
}

/// Applies [`compute_auto_deduction`] and records the decision.
///
/// The deducted minutes count as break time taken. They are added to the
/// qualifying break total as a whole, without being held to the minimum
/// qualifying break length.
pub fn apply_auto_deduction(
    raw_work_minutes: u32,
    qualifying_break_minutes: u32,
    rules: &ComplianceRules,
    step_number: u32,
) -> AutoDeduction {
    let deduction_minutes =
        compute_auto_deduction(raw_work_minutes, qualifying_break_minutes, rules);
    let effective_work_minutes = raw_work_minutes - deduction_minutes;
    let effective_break_minutes = qualifying_break_minutes + deduction_minutes;
    let required = required_break_minutes(raw_work_minutes, rules);

    let reasoning = if required == 0 {
        format!(
            "{} minutes worked does not exceed {} minutes, no break required",
            raw_work_minutes, rules.break_threshold_1
        )
    } else if deduction_minutes == 0 {
        format!(
            "{} qualifying break minutes cover the {} minutes required for {} minutes worked",
            qualifying_break_minutes, required, raw_work_minutes
        )
    } else if effective_work_minutes == rules.break_threshold_1 {
        format!(
            "Deducted {} minutes, capped so effective work stays at the {} minute floor",
            deduction_minutes, rules.break_threshold_1
        )
    } else {
        format!(
            "Deducted {} missing break minutes, {} minutes of effective work remain",
            deduction_minutes, effective_work_minutes
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "auto_deduction".to_string(),
        rule_name: "Mandatory Break Auto-Deduction".to_string(),
        clause_ref: "ArbZG §4".to_string(),
        input: serde_json::json!({
            "raw_work_minutes": raw_work_minutes,
            "qualifying_break_minutes": qualifying_break_minutes,
            "required_break_minutes": required
        }),
        output: serde_json::json!({
            "deduction_minutes": deduction_minutes,
            "effective_work_minutes": effective_work_minutes,
            "effective_break_minutes": effective_break_minutes
        }),
        reasoning,
    };

    AutoDeduction {
        deduction_minutes,
        effective_work_minutes,
        effective_break_minutes,
        audit_step,
    }
}
