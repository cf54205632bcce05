//! Aggregated minute counts for one day.

use serde::{Deserialize, Serialize};

use super::BreakInterval;

/// The minute totals of one calendar day, derived from its clock events.
///
/// `raw_work_minutes` and `qualifying_break_minutes` feed the compliance
/// rules; the remaining fields are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAggregate {
    /// Work minutes across completed intervals, breaks excluded.
    pub raw_work_minutes: u32,
    /// All break minutes inside completed intervals, short breaks included.
    pub raw_break_minutes: u32,
    /// Minutes of breaks long enough to count toward the requirement.
    pub qualifying_break_minutes: u32,
    /// Closed breaks of completed intervals, in time order.
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    /// True when the day ends with a work interval still running.
    #[serde(default)]
    pub has_open_interval: bool,
}

impl DayAggregate {
    /// Break minutes that were too short to qualify.
    pub fn non_qualifying_break_minutes(&self) -> u32 {
        self.raw_break_minutes
            .saturating_sub(self.qualifying_break_minutes)
    }
}
