//! Timeline lane layout.
//!
//! Lays one day's events out into the minimum number of non-overlapping
//! rendering lanes, so a day view can draw concurrent classes side by
//! side instead of on top of each other.
//!
//! # Algorithm
//!
//! Greedy interval partitioning:
//! 1. Resolve each event's interval; an unparseable range renders as a
//!    1-hour block at a fixed fallback start so every event stays visible.
//! 2. Sort by start ascending, duration descending on ties — long blocks
//!    claim lanes before shorter ones starting at the same minute, which
//!    keeps layouts reproducible.
//! 3. Place each event in the lowest-index lane whose last end is at or
//!    before the event's start (half-open intervals: back-to-back events
//!    share a lane); open a new lane when none is free.
//!
//! First-fit over start-sorted intervals opens a lane only when every
//! existing lane is busy, so the lane count equals the maximum number of
//! simultaneously running events — the minimum possible.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, TimeInterval};

/// Render position for events whose time range cannot be parsed.
const FALLBACK_START_MIN: i64 = 8 * 60;
const FALLBACK_DURATION_MIN: i64 = 60;

/// An event placed on the visual grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutEvent {
    /// The scheduled class being rendered.
    pub assignment: Assignment,
    /// Render start (minutes past midnight; fallback position when the
    /// range was unparseable).
    pub start_min: i64,
    /// Render end (minutes past midnight).
    pub end_min: i64,
    /// Assigned rendering lane (0-indexed).
    pub lane: usize,
}

/// Lane assignments for one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    /// Events in placement order (start ascending, longest first on ties).
    pub items: Vec<LaidOutEvent>,
    /// Number of lanes the caller must size the rendering track for.
    pub lane_count: usize,
}

/// Lays out one day's events into non-overlapping lanes.
pub fn layout_day(events: &[Assignment]) -> DayLayout {
    let mut resolved: Vec<(TimeInterval, &Assignment)> = events
        .iter()
        .map(|assignment| {
            let interval = assignment.slot().interval.unwrap_or_else(|| {
                TimeInterval::new(FALLBACK_START_MIN, FALLBACK_START_MIN + FALLBACK_DURATION_MIN)
            });
            (interval, assignment)
        })
        .collect();

    resolved.sort_by(|(a, _), (b, _)| {
        a.start_min
            .cmp(&b.start_min)
            .then(b.duration_min().cmp(&a.duration_min()))
    });

    let mut lane_ends: Vec<i64> = Vec::new();
    let mut items = Vec::with_capacity(resolved.len());

    for (interval, assignment) in resolved {
        let lane = match lane_ends.iter().position(|&end| end <= interval.start_min) {
            Some(free) => {
                lane_ends[free] = interval.end_min;
                free
            }
            None => {
                lane_ends.push(interval.end_min);
                lane_ends.len() - 1
            }
        };
        items.push(LaidOutEvent {
            assignment: assignment.clone(),
            start_min: interval.start_min,
            end_min: interval.end_min,
            lane,
        });
    }

    DayLayout {
        items,
        lane_count: lane_ends.len(),
    }
}

/// Lays out a multi-day snapshot, one [`DayLayout`] per day in the given
/// order (see [`DEFAULT_DAYS`](crate::models::DEFAULT_DAYS)).
pub fn layout_week(schedule: &[Assignment], days: &[&str]) -> Vec<(String, DayLayout)> {
    days.iter()
        .map(|&day| {
            let events: Vec<Assignment> = schedule
                .iter()
                .filter(|a| a.day == day)
                .cloned()
                .collect();
            (day.to_string(), layout_day(&events))
        })
        .collect()
}
