//! Clock event aggregation.
//!
//! This module pairs one day's raw clock events into work and break intervals
//! and reduces them to the minute totals the compliance rules work on.

use chrono::NaiveDateTime;

use crate::config::ComplianceRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{BreakInterval, ClockEvent, ClockEventType, DayAggregate};

/// A work interval that has been clocked in but not yet out.
struct OpenInterval {
    clock_in: NaiveDateTime,
    break_start: Option<NaiveDateTime>,
    breaks: Vec<BreakInterval>,
}

impl OpenInterval {
    fn new(clock_in: NaiveDateTime) -> Self {
        Self {
            clock_in,
            break_start: None,
            breaks: Vec::new(),
        }
    }
}

/// Running totals over the completed intervals of the day.
#[derive(Default)]
struct Totals {
    work_minutes: i64,
    break_minutes: i64,
    qualifying_break_minutes: i64,
    breaks: Vec<BreakInterval>,
}

impl Totals {
    fn close(&mut self, interval: OpenInterval, clock_out: NaiveDateTime, rules: &ComplianceRules) {
        let span = (clock_out - interval.clock_in).num_minutes();
        let mut inside_breaks = 0;

        for b in &interval.breaks {
            let duration = b.duration_minutes();
            inside_breaks += duration;
            if b.qualifies(rules.min_qualifying_break_minutes) {
                self.qualifying_break_minutes += duration;
            }
        }

        self.work_minutes += (span - inside_breaks).max(0);
        self.break_minutes += inside_breaks;
        self.breaks.extend(interval.breaks);
    }
}

/// Reduces one day's clock events to a [`DayAggregate`].
///
/// Events are walked in timestamp order. Within one timestamp, closing events
/// (BreakEnd, then ClockOut) come before opening events (ClockIn, then
/// BreakStart), so a clock out and the next clock in recorded at the same
/// minute hand over cleanly whatever order they were given in. A ClockIn opens a work interval that the
/// next ClockOut closes, and BreakStart/BreakEnd pairs inside it carve out
/// breaks. Break minutes never count as work. Only breaks of at least
/// `rules.min_qualifying_break_minutes` count toward
/// `qualifying_break_minutes`; shorter ones are lost time.
///
/// A work interval still open after the last event is treated as ongoing:
/// none of its minutes are counted and `has_open_interval` is set.
///
/// # Errors
///
/// Returns [`EngineError::MalformedEventSequence`] when the events cannot be
/// paired: a break end with no open break, a clock in while an interval is
/// already open, a break start outside a work interval or inside an open
/// break, a clock out with no open interval, or a clock out during a break.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::aggregate_events;
/// use arbzg_engine::config::ComplianceRules;
/// use arbzg_engine::models::{ClockEvent, ClockEventType};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let events = vec![
///     ClockEvent::new(ClockEventType::ClockIn, at("2026-01-15 08:00")),
///     ClockEvent::new(ClockEventType::BreakStart, at("2026-01-15 12:00")),
///     ClockEvent::new(ClockEventType::BreakEnd, at("2026-01-15 12:30")),
///     ClockEvent::new(ClockEventType::ClockOut, at("2026-01-15 16:30")),
/// ];
///
/// let aggregate = aggregate_events(&events, &ComplianceRules::default()).unwrap();
/// assert_eq!(aggregate.raw_work_minutes, 480);
/// assert_eq!(aggregate.qualifying_break_minutes, 30);
/// ```
pub fn aggregate_events(
    events: &[ClockEvent],
    rules: &ComplianceRules,
) -> EngineResult<DayAggregate> {
    let mut ordered: Vec<&ClockEvent> = events.iter().collect();
    ordered.sort_by_key(|e| (e.timestamp, same_minute_rank(e.event_type)));

    let mut open: Option<OpenInterval> = None;
    let mut totals = Totals::default();

    for (index, event) in ordered.into_iter().enumerate() {
        let timestamp = event.timestamp;
        let kind = event.event_type;

        match kind {
            ClockEventType::ClockIn => {
                if open.is_some() {
                    return Err(malformed(index, kind, "while a work interval is already open"));
                }
                open = Some(OpenInterval::new(timestamp));
            }
            ClockEventType::BreakStart => {
                let interval = open
                    .as_mut()
                    .ok_or_else(|| malformed(index, kind, "outside a work interval"))?;
                if interval.break_start.is_some() {
                    return Err(malformed(index, kind, "while a break is already open"));
                }
                interval.break_start = Some(timestamp);
            }
            ClockEventType::BreakEnd => {
                let interval = open
                    .as_mut()
                    .ok_or_else(|| malformed(index, kind, "without a preceding break start"))?;
                let start = interval
                    .break_start
                    .take()
                    .ok_or_else(|| malformed(index, kind, "without a preceding break start"))?;
                interval.breaks.push(BreakInterval {
                    start,
                    end: timestamp,
                });
            }
            ClockEventType::ClockOut => {
                let interval = open
                    .take()
                    .ok_or_else(|| malformed(index, kind, "without an open work interval"))?;
                if interval.break_start.is_some() {
                    return Err(malformed(index, kind, "while a break is still open"));
                }
                totals.close(interval, timestamp, rules);
            }
        }
    }

    Ok(DayAggregate {
        raw_work_minutes: to_minutes(totals.work_minutes),
        raw_break_minutes: to_minutes(totals.break_minutes),
        qualifying_break_minutes: to_minutes(totals.qualifying_break_minutes),
        breaks: totals.breaks,
        has_open_interval: open.is_some(),
    })
}

/// Order of events sharing a timestamp: closing before opening.
fn same_minute_rank(event_type: ClockEventType) -> u8 {
    match event_type {
        ClockEventType::BreakEnd => 0,
        ClockEventType::ClockOut => 1,
        ClockEventType::ClockIn => 2,
        ClockEventType::BreakStart => 3,
    }
}

fn malformed(index: usize, event_type: ClockEventType, problem: &str) -> EngineError {
    EngineError::MalformedEventSequence {
        index,
        message: format!("{} {}", event_type, problem),
    }
}

fn to_minutes(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("2026-01-15 {}", time_str), "%Y-%m-%d %H:%M")
            .unwrap()
    }

    fn ev(event_type: ClockEventType, time_str: &str) -> ClockEvent {
        ClockEvent::new(event_type, at(time_str))
    }

    fn rules() -> ComplianceRules {
        ComplianceRules::default()
    }

    fn assert_malformed_at(result: EngineResult<DayAggregate>, expected_index: usize) {
        match result {
            Err(EngineError::MalformedEventSequence { index, .. }) => {
                assert_eq!(index, expected_index);
            }
            other => panic!("Expected MalformedEventSequence, got {:?}", other),
        }
    }

    // ==========================================================================
    // AG-001: empty day
    // ==========================================================================
    #[test]
    fn test_ag_001_empty_day_is_all_zero() {
        let aggregate = aggregate_events(&[], &rules()).unwrap();
        assert_eq!(aggregate, DayAggregate::default());
    }

    // ==========================================================================
    // AG-002: single interval, no breaks
    // ==========================================================================
    #[test]
    fn test_ag_002_single_interval_no_breaks() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::ClockOut, "14:25"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 385);
        assert_eq!(aggregate.raw_break_minutes, 0);
        assert_eq!(aggregate.qualifying_break_minutes, 0);
        assert!(!aggregate.has_open_interval);
    }

    // ==========================================================================
    // AG-003: qualifying break excluded from work
    // ==========================================================================
    #[test]
    fn test_ag_003_qualifying_break_excluded_from_work() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "12:00"),
            ev(ClockEventType::BreakEnd, "12:30"),
            ev(ClockEventType::ClockOut, "17:00"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 510);
        assert_eq!(aggregate.raw_break_minutes, 30);
        assert_eq!(aggregate.qualifying_break_minutes, 30);
        assert_eq!(aggregate.breaks.len(), 1);
    }

    // ==========================================================================
    // AG-004: short break is lost time
    // ==========================================================================
    #[test]
    fn test_ag_004_short_break_is_lost_time() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "10:00"),
            ev(ClockEventType::BreakEnd, "10:10"),
            ev(ClockEventType::ClockOut, "15:00"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 410);
        assert_eq!(aggregate.raw_break_minutes, 10);
        assert_eq!(aggregate.qualifying_break_minutes, 0);
        assert_eq!(aggregate.non_qualifying_break_minutes(), 10);
    }

    // ==========================================================================
    // AG-005: split breaks, only the 15-minute parts qualify
    // ==========================================================================
    #[test]
    fn test_ag_005_split_breaks_mixed_qualification() {
        let events = vec![
            ev(ClockEventType::ClockIn, "07:00"),
            ev(ClockEventType::BreakStart, "09:00"),
            ev(ClockEventType::BreakEnd, "09:15"),
            ev(ClockEventType::BreakStart, "11:00"),
            ev(ClockEventType::BreakEnd, "11:14"),
            ev(ClockEventType::BreakStart, "13:00"),
            ev(ClockEventType::BreakEnd, "13:20"),
            ev(ClockEventType::ClockOut, "17:00"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 600 - 49);
        assert_eq!(aggregate.raw_break_minutes, 49);
        assert_eq!(aggregate.qualifying_break_minutes, 35);
    }

    // ==========================================================================
    // AG-006: two completed intervals are summed
    // ==========================================================================
    #[test]
    fn test_ag_006_two_intervals_summed() {
        let events = vec![
            ev(ClockEventType::ClockIn, "06:00"),
            ev(ClockEventType::ClockOut, "10:00"),
            ev(ClockEventType::ClockIn, "14:00"),
            ev(ClockEventType::ClockOut, "17:30"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 450);
        assert_eq!(aggregate.raw_break_minutes, 0);
    }

    // ==========================================================================
    // AG-007: open interval is ongoing and excluded
    // ==========================================================================
    #[test]
    fn test_ag_007_open_interval_excluded() {
        let events = vec![
            ev(ClockEventType::ClockIn, "06:00"),
            ev(ClockEventType::ClockOut, "10:00"),
            ev(ClockEventType::ClockIn, "11:00"),
            ev(ClockEventType::BreakStart, "12:00"),
            ev(ClockEventType::BreakEnd, "12:30"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 240);
        assert_eq!(aggregate.raw_break_minutes, 0);
        assert_eq!(aggregate.qualifying_break_minutes, 0);
        assert!(aggregate.breaks.is_empty());
        assert!(aggregate.has_open_interval);
    }

    #[test]
    fn test_open_break_at_end_of_day_is_ongoing() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "12:00"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 0);
        assert!(aggregate.has_open_interval);
    }

    #[test]
    fn test_unordered_events_are_sorted() {
        let events = vec![
            ev(ClockEventType::ClockOut, "16:30"),
            ev(ClockEventType::BreakEnd, "12:30"),
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "12:00"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 480);
        assert_eq!(aggregate.qualifying_break_minutes, 30);
    }

    #[test]
    fn test_same_minute_handover_given_reversed() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::ClockIn, "12:00"),
            ev(ClockEventType::ClockOut, "12:00"),
            ev(ClockEventType::ClockOut, "16:00"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 480);
        assert!(!aggregate.has_open_interval);
    }

    #[test]
    fn test_break_end_and_clock_out_at_same_minute() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "15:30"),
            ev(ClockEventType::ClockOut, "16:00"),
            ev(ClockEventType::BreakEnd, "16:00"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.raw_work_minutes, 450);
        assert_eq!(aggregate.qualifying_break_minutes, 30);
    }

    #[test]
    fn test_back_to_back_breaks_at_same_minute() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "12:15"),
            ev(ClockEventType::BreakStart, "12:00"),
            ev(ClockEventType::BreakEnd, "12:30"),
            ev(ClockEventType::BreakEnd, "12:15"),
            ev(ClockEventType::ClockOut, "16:30"),
        ];

        let aggregate = aggregate_events(&events, &rules()).unwrap();
        assert_eq!(aggregate.breaks.len(), 2);
        assert_eq!(aggregate.qualifying_break_minutes, 30);
    }

    #[test]
    fn test_custom_qualifying_length() {
        let custom = ComplianceRules {
            min_qualifying_break_minutes: 10,
            ..ComplianceRules::default()
        };
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "10:00"),
            ev(ClockEventType::BreakEnd, "10:10"),
            ev(ClockEventType::ClockOut, "15:00"),
        ];

        let aggregate = aggregate_events(&events, &custom).unwrap();
        assert_eq!(aggregate.qualifying_break_minutes, 10);
    }

    // ==========================================================================
    // Malformed sequences
    // ==========================================================================

    #[test]
    fn test_break_end_without_start_is_malformed() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakEnd, "12:00"),
            ev(ClockEventType::ClockOut, "16:00"),
        ];
        assert_malformed_at(aggregate_events(&events, &rules()), 1);
    }

    #[test]
    fn test_break_end_outside_interval_is_malformed() {
        let events = vec![ev(ClockEventType::BreakEnd, "12:00")];
        assert_malformed_at(aggregate_events(&events, &rules()), 0);
    }

    #[test]
    fn test_overlapping_work_intervals_are_malformed() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::ClockIn, "09:00"),
            ev(ClockEventType::ClockOut, "16:00"),
        ];
        assert_malformed_at(aggregate_events(&events, &rules()), 1);
    }

    #[test]
    fn test_break_start_outside_interval_is_malformed() {
        let events = vec![
            ev(ClockEventType::BreakStart, "07:00"),
            ev(ClockEventType::ClockIn, "08:00"),
        ];
        assert_malformed_at(aggregate_events(&events, &rules()), 0);
    }

    #[test]
    fn test_nested_break_start_is_malformed() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "10:00"),
            ev(ClockEventType::BreakStart, "10:05"),
        ];
        assert_malformed_at(aggregate_events(&events, &rules()), 2);
    }

    #[test]
    fn test_clock_out_without_clock_in_is_malformed() {
        let events = vec![ev(ClockEventType::ClockOut, "16:00")];
        assert_malformed_at(aggregate_events(&events, &rules()), 0);
    }

    #[test]
    fn test_malformed_message_names_the_event() {
        let events = vec![ev(ClockEventType::ClockOut, "16:00")];

        match aggregate_events(&events, &rules()) {
            Err(EngineError::MalformedEventSequence { message, .. }) => {
                assert_eq!(message, "clock out without an open work interval");
            }
            other => panic!("Expected MalformedEventSequence, got {:?}", other),
        }
    }

    #[test]
    fn test_clock_out_during_break_is_malformed() {
        let events = vec![
            ev(ClockEventType::ClockIn, "08:00"),
            ev(ClockEventType::BreakStart, "12:00"),
            ev(ClockEventType::ClockOut, "16:00"),
        ];
        assert_malformed_at(aggregate_events(&events, &rules()), 2);
    }
}
