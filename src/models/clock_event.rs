//! Clock event model and related types.
//!
//! This module defines the raw punches recorded by a time clock and the
//! break intervals derived from them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The kind of punch recorded by the time clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventType {
    /// Start of a work interval.
    ClockIn,
    /// End of a work interval.
    ClockOut,
    /// Start of a break inside a work interval.
    BreakStart,
    /// End of a break.
    BreakEnd,
}

impl std::fmt::Display for ClockEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockEventType::ClockIn => write!(f, "clock in"),
            ClockEventType::ClockOut => write!(f, "clock out"),
            ClockEventType::BreakStart => write!(f, "break start"),
            ClockEventType::BreakEnd => write!(f, "break end"),
        }
    }
}

/// A single recorded punch. Immutable once recorded.
///
/// # Examples
///
/// ```
/// use arbzg_engine::models::{ClockEvent, ClockEventType};
///
/// let json = r#"{"type": "clock_in", "timestamp": "2026-01-15T08:00:00"}"#;
/// let event: ClockEvent = serde_json::from_str(json).unwrap();
/// assert_eq!(event.event_type, ClockEventType::ClockIn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// What kind of punch this is.
    #[serde(rename = "type")]
    pub event_type: ClockEventType,
    /// When the punch was recorded.
    pub timestamp: NaiveDateTime,
}

impl ClockEvent {
    /// Creates a new event.
    pub fn new(event_type: ClockEventType, timestamp: NaiveDateTime) -> Self {
        Self {
            event_type,
            timestamp,
        }
    }
}

/// A closed break derived from a BreakStart/BreakEnd pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    /// The start time of the break.
    pub start: NaiveDateTime,
    /// The end time of the break.
    pub end: NaiveDateTime,
}

impl BreakInterval {
    /// Returns the duration of the break in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether the break counts toward the mandatory-break requirement.
    pub fn qualifies(&self, min_qualifying_minutes: u32) -> bool {
        self.duration_minutes() >= i64::from(min_qualifying_minutes)
    }
}
