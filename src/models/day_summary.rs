//! Daily summary models for the compliance engine.
//!
//! This module contains the [`DaySummary`] type and its audit structures. A
//! summary captures everything evaluated for one employee-day: raw and
//! effective minute counts, the auto-deduction, the compliance verdict, the
//! rest-period verdict, and the trace of every rule applied.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ComplianceResult;

/// A single step in the audit trace recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute section for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during evaluation.
///
/// Warnings flag conditions that do not stop the evaluation but may need a
/// supervisor's attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one evaluated day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

/// The daily-summary record for one employee-day.
///
/// The engine only produces this value; persisting it is the caller's job.
///
/// # Example
///
/// ```
/// use arbzg_engine::models::{AuditTrace, ComplianceResult, DaySummary};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let summary = DaySummary {
///     summary_id: Uuid::new_v4(),
///     evaluated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     raw_work_minutes: 480,
///     raw_break_minutes: 30,
///     qualifying_break_minutes: 30,
///     auto_deduction_minutes: 0,
///     effective_work_minutes: 480,
///     effective_break_minutes: 30,
///     effective_work_hours: Decimal::new(800, 2),
///     compliance: ComplianceResult::compliant(),
///     rest_period_compliant: true,
///     rest_minutes: None,
///     has_open_interval: false,
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(summary.is_fully_compliant());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Unique identifier for this evaluation.
    pub summary_id: Uuid,
    /// When the evaluation was performed.
    pub evaluated_at: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The calendar day evaluated.
    pub date: NaiveDate,
    /// Work minutes before auto-deduction.
    pub raw_work_minutes: u32,
    /// All break minutes, short breaks included.
    pub raw_break_minutes: u32,
    /// Break minutes from breaks of at least the qualifying length.
    pub qualifying_break_minutes: u32,
    /// Minutes deducted for a mandatory break that was not taken.
    pub auto_deduction_minutes: u32,
    /// Work minutes after auto-deduction.
    pub effective_work_minutes: u32,
    /// Qualifying break minutes plus the auto-deduction.
    pub effective_break_minutes: u32,
    /// `effective_work_minutes` in hours, rounded to two places.
    pub effective_work_hours: Decimal,
    /// The daily-maximum and break verdict.
    pub compliance: ComplianceResult,
    /// Whether the rest since the previous day's last event was long enough.
    pub rest_period_compliant: bool,
    /// Minutes of rest before the day's first event, when evaluable.
    pub rest_minutes: Option<i64>,
    /// True when a work interval was still running at the end of the events.
    pub has_open_interval: bool,
    /// Complete audit trace of rule decisions.
    pub audit_trace: AuditTrace,
}

impl DaySummary {
    /// Compliant on both the daily checks and the rest period.
    pub fn is_fully_compliant(&self) -> bool {
        self.compliance.is_compliant && self.rest_period_compliant
    }
}
