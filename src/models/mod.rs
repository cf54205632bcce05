//! Core data models for the compliance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_event;
mod compliance_result;
mod day_aggregate;
mod day_summary;

pub use clock_event::{BreakInterval, ClockEvent, ClockEventType};
pub use compliance_result::ComplianceResult;
pub use day_aggregate::DayAggregate;
pub use day_summary::{AuditStep, AuditTrace, AuditWarning, DaySummary};
