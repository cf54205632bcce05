//! Daily evaluation pipeline.
//!
//! This module runs every rule over one employee-day and assembles the
//! [`DaySummary`] record: aggregation, auto-deduction, the compliance check on
//! the effective figures, and the rest-period check against the previous day.

use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ComplianceRules;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, AuditWarning, ClockEvent, DaySummary};

use super::{aggregate_events, apply_auto_deduction, check_compliance, check_rest_period, rest_minutes};

/// Converts minutes to hours, rounded to two decimal places.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(375), Decimal::new(625, 2));
/// assert_eq!(minutes_to_hours(535), Decimal::new(892, 2));
/// ```
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

/// Evaluates one calendar day of clock events.
///
/// `previous_day_last_event` is the last event of the previous working day,
/// if any; the rest period is measured from it to the earliest event of
/// `events`.
///
/// # Errors
///
/// Returns [`EngineError::MalformedEventSequence`](crate::error::EngineError::MalformedEventSequence)
/// when the events cannot be paired. Nothing is repaired.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::evaluate_day;
/// use arbzg_engine::config::ComplianceRules;
/// use arbzg_engine::models::{ClockEvent, ClockEventType};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let events = vec![
///     ClockEvent::new(ClockEventType::ClockIn, at("2026-01-15 08:00")),
///     ClockEvent::new(ClockEventType::ClockOut, at("2026-01-15 14:45")),
/// ];
///
/// let summary = evaluate_day(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     &events,
///     None,
///     &ComplianceRules::default(),
/// )
/// .unwrap();
///
/// assert_eq!(summary.raw_work_minutes, 405);
/// assert_eq!(summary.auto_deduction_minutes, 30);
/// assert_eq!(summary.effective_work_minutes, 375);
/// assert!(summary.compliance.is_compliant);
/// ```
pub fn evaluate_day(
    date: NaiveDate,
    events: &[ClockEvent],
    previous_day_last_event: Option<NaiveDateTime>,
    rules: &ComplianceRules,
) -> EngineResult<DaySummary> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Step 1: pair events into intervals
    let aggregate = aggregate_events(events, rules).inspect_err(|err| {
        warn!(date = %date, error = %err, "Rejected clock event sequence");
    })?;
    debug!(
        date = %date,
        raw_work_minutes = aggregate.raw_work_minutes,
        qualifying_break_minutes = aggregate.qualifying_break_minutes,
        "Aggregated clock events"
    );

    steps.push(AuditStep {
        step_number,
        rule_id: "event_aggregation".to_string(),
        rule_name: "Clock Event Aggregation".to_string(),
        clause_ref: "ArbZG §2, §4".to_string(),
        input: serde_json::json!({
            "event_count": events.len(),
            "min_qualifying_break_minutes": rules.min_qualifying_break_minutes
        }),
        output: serde_json::json!({
            "raw_work_minutes": aggregate.raw_work_minutes,
            "raw_break_minutes": aggregate.raw_break_minutes,
            "qualifying_break_minutes": aggregate.qualifying_break_minutes,
            "non_qualifying_break_minutes": aggregate.non_qualifying_break_minutes(),
            "has_open_interval": aggregate.has_open_interval
        }),
        reasoning: format!(
            "{} events paired into {} work minutes and {} break minutes, {} of them qualifying",
            events.len(),
            aggregate.raw_work_minutes,
            aggregate.raw_break_minutes,
            aggregate.qualifying_break_minutes
        ),
    });
    step_number += 1;

    if aggregate.has_open_interval {
        warnings.push(AuditWarning {
            code: "OPEN_WORK_INTERVAL".to_string(),
            message: "A work interval is still open; its minutes are not counted".to_string(),
            severity: "low".to_string(),
        });
    }

    // Step 2: deduct a missing mandatory break
    let deduction = apply_auto_deduction(
        aggregate.raw_work_minutes,
        aggregate.qualifying_break_minutes,
        rules,
        step_number,
    );
    debug!(
        date = %date,
        deduction_minutes = deduction.deduction_minutes,
        effective_work_minutes = deduction.effective_work_minutes,
        "Applied auto-deduction"
    );
    steps.push(deduction.audit_step.clone());
    step_number += 1;

    // Step 3: daily maximum and break sufficiency on the effective figures
    let compliance = check_compliance(
        deduction.effective_work_minutes,
        deduction.effective_break_minutes,
        rules,
    );
    steps.push(AuditStep {
        step_number,
        rule_id: "compliance_check".to_string(),
        rule_name: "Daily Working Time Compliance".to_string(),
        clause_ref: "ArbZG §3, §4".to_string(),
        input: serde_json::json!({
            "effective_work_minutes": deduction.effective_work_minutes,
            "effective_break_minutes": deduction.effective_break_minutes,
            "max_work_minutes": rules.max_work_minutes,
            "regular_work_minutes": rules.regular_work_minutes
        }),
        output: serde_json::json!({
            "is_compliant": compliance.is_compliant,
            "notes": compliance.notes
        }),
        reasoning: if compliance.notes.is_empty() {
            "Within the regular daily limit with sufficient breaks".to_string()
        } else {
            compliance.notes.join("; ")
        },
    });
    step_number += 1;

    // Step 4: rest since the previous working day
    let first_event = events.iter().map(|e| e.timestamp).min();
    let rest = rest_minutes(previous_day_last_event, first_event);
    let rest_period_compliant = check_rest_period(previous_day_last_event, first_event, rules);
    steps.push(AuditStep {
        step_number,
        rule_id: "rest_period_check".to_string(),
        rule_name: "Minimum Rest Period".to_string(),
        clause_ref: "ArbZG §5".to_string(),
        input: serde_json::json!({
            "previous_day_last_event": previous_day_last_event,
            "current_day_first_event": first_event,
            "min_rest_minutes": rules.min_rest_minutes
        }),
        output: serde_json::json!({
            "rest_minutes": rest,
            "is_compliant": rest_period_compliant
        }),
        reasoning: match rest {
            None => "No adjacent event to measure rest against".to_string(),
            Some(minutes) if rest_period_compliant => format!(
                "{} minutes of rest meets the {} minute minimum",
                minutes, rules.min_rest_minutes
            ),
            Some(minutes) => format!(
                "{} minutes of rest is below the {} minute minimum",
                minutes, rules.min_rest_minutes
            ),
        },
    });

    if !rest_period_compliant {
        warnings.push(AuditWarning {
            code: "REST_PERIOD_VIOLATION".to_string(),
            message: format!(
                "Rest before this day was shorter than {} minutes",
                rules.min_rest_minutes
            ),
            severity: "high".to_string(),
        });
    }

    if !compliance.is_compliant || !rest_period_compliant {
        warn!(
            date = %date,
            effective_work_minutes = deduction.effective_work_minutes,
            rest_period_compliant,
            notes = ?compliance.notes,
            "Working day is not compliant"
        );
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(DaySummary {
        summary_id: Uuid::new_v4(),
        evaluated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        date,
        raw_work_minutes: aggregate.raw_work_minutes,
        raw_break_minutes: aggregate.raw_break_minutes,
        qualifying_break_minutes: aggregate.qualifying_break_minutes,
        auto_deduction_minutes: deduction.deduction_minutes,
        effective_work_minutes: deduction.effective_work_minutes,
        effective_break_minutes: deduction.effective_break_minutes,
        effective_work_hours: minutes_to_hours(deduction.effective_work_minutes),
        compliance,
        rest_period_compliant,
        rest_minutes: rest,
        has_open_interval: aggregate.has_open_interval,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
