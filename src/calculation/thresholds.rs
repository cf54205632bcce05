//! Statutory thresholds of the Arbeitszeitgesetz, in minutes.
//!
//! These are the defaults of [`ComplianceRules`](crate::config::ComplianceRules);
//! the rule functions themselves read their thresholds from the rules value.

/// Absolute daily maximum of 10 hours (ArbZG §3 sentence 2).
pub const MAX_WORK_MINUTES: u32 = 600;

/// Regular daily working time of 8 hours (ArbZG §3 sentence 1).
///
/// Exceeding it is allowed as long as the 6-month average stays at 8 hours,
/// which is checked outside this engine.
pub const REGULAR_WORK_MINUTES: u32 = 480;

/// More than 6 hours of work requires [`REQUIRED_BREAK_1`] (ArbZG §4).
pub const BREAK_THRESHOLD_1: u32 = 360;

/// More than 9 hours of work requires [`REQUIRED_BREAK_2`] (ArbZG §4).
pub const BREAK_THRESHOLD_2: u32 = 540;

/// Break required above [`BREAK_THRESHOLD_1`].
pub const REQUIRED_BREAK_1: u32 = 30;

/// Break required above [`BREAK_THRESHOLD_2`].
pub const REQUIRED_BREAK_2: u32 = 45;

/// Breaks shorter than this do not count toward the requirement (ArbZG §4 sentence 2).
pub const MIN_QUALIFYING_BREAK_MINUTES: u32 = 15;

/// Minimum uninterrupted rest between two working days (ArbZG §5).
pub const MIN_REST_MINUTES: u32 = 660;
