//! Calculation logic for the compliance engine.
//!
//! This module contains the rule functions that turn raw clock events into
//! effective working time and a compliance verdict: event aggregation, the
//! mandatory break requirement, the break auto-deduction, the daily maximum
//! and break check, the rest period check between days, and the pipeline
//! that evaluates a whole day.

mod aggregation;
mod auto_deduction;
mod break_requirement;
mod compliance_check;
mod daily_summary;
mod rest_period;
mod thresholds;

pub use aggregation::aggregate_events;
pub use auto_deduction::{AutoDeduction, apply_auto_deduction, compute_auto_deduction};
pub use break_requirement::required_break_minutes;
pub use compliance_check::check_compliance;
pub use daily_summary::{evaluate_day, minutes_to_hours};
pub use rest_period::{check_rest_period, rest_minutes};
pub use thresholds::{
    BREAK_THRESHOLD_1, BREAK_THRESHOLD_2, MAX_WORK_MINUTES, MIN_QUALIFYING_BREAK_MINUTES,
    MIN_REST_MINUTES, REGULAR_WORK_MINUTES, REQUIRED_BREAK_1, REQUIRED_BREAK_2,
};
