//! Time-range parsing and interval overlap.
//!
//! Class times arrive as human-entered text (`"9:00 AM - 10:30 AM"`).
//! Parsing normalizes each side to minutes past a reference midnight; a
//! range whose end does not follow its start is treated as crossing
//! midnight. Parsing failures never abort a conflict check: [`TimeSlot`]
//! keeps the original text so the overlap predicate can degrade to exact
//! textual identity when no interval is available.
//!
//! # Time Model
//! All times are minutes past a reference midnight. `end_min` may exceed
//! [`MINUTES_PER_DAY`] for midnight-crossing ranges.

use serde::{Deserialize, Serialize};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time interval [start, end) in minutes past a reference midnight.
///
/// Half-open: includes start, excludes end. Intervals that merely touch
/// at an endpoint do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Interval start (minutes, inclusive).
    pub start_min: i64,
    /// Interval end (minutes, exclusive). May exceed `MINUTES_PER_DAY`.
    pub end_min: i64,
}

impl TimeInterval {
    /// Creates a new interval.
    pub fn new(start_min: i64, end_min: i64) -> Self {
        Self { start_min, end_min }
    }

    /// Duration of this interval (minutes).
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether two intervals overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Parses a textual time range into a normalized interval.
///
/// The text must be `"<start> - <end>"` with exactly one `" - "`
/// separator. Each side is `H:MM`, optionally followed by a
/// case-insensitive `AM`/`PM` suffix (12 AM → hour 0, 12 PM stays 12,
/// other PM hours +12); a bare `H:MM` is read as a 24-hour clock.
///
/// When the parsed end is at or before the start, the range is taken to
/// cross midnight and the end is shifted by 24 hours, so the result always
/// has a strictly positive duration.
///
/// Returns `None` for malformed input (missing separator, extra parts,
/// non-numeric hour or minute, out-of-range values). Never panics.
pub fn parse_time_range(text: &str) -> Option<TimeInterval> {
    let (start_text, end_text) = text.split_once(" - ")?;
    if end_text.contains(" - ") {
        return None;
    }

    let start = parse_clock(start_text)?;
    let mut end = parse_clock(end_text)?;
    if end <= start {
        end += MINUTES_PER_DAY;
    }
    Some(TimeInterval::new(start, end))
}

/// Parses one `H:MM [AM|PM]` clock reading into minutes past midnight.
fn parse_clock(text: &str) -> Option<i64> {
    let text = text.trim().to_ascii_uppercase();

    let (clock, is_pm) = if let Some(rest) = text.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = text.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else {
        (text.as_str(), None)
    };

    let (hour_text, minute_text) = clock.split_once(':')?;
    let hour: i64 = hour_text.trim().parse().ok()?;
    let minute: i64 = minute_text.trim().parse().ok()?;
    if !(0..60).contains(&minute) {
        return None;
    }

    let hour = match is_pm {
        Some(pm) => {
            // 12-hour clock: 12 AM is midnight, 12 PM is noon.
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (hour, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            }
        }
        None => {
            if !(0..24).contains(&hour) {
                return None;
            }
            hour
        }
    };

    Some(hour * 60 + minute)
}

/// A schedule slot: the original range text plus its parsed interval.
///
/// Keeping the raw text lets overlap checks fail closed on malformed
/// input: two slots with identical unparseable text still collide, while
/// distinct unparseable texts cannot be compared and are assumed disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The time range as entered.
    pub raw: String,
    /// Parsed interval, `None` when the text was malformed.
    pub interval: Option<TimeInterval>,
}

impl TimeSlot {
    /// Parses a slot from range text. Always structurally succeeds;
    /// malformed text yields a slot with no interval.
    pub fn parse(text: impl Into<String>) -> Self {
        let raw = text.into();
        let interval = parse_time_range(&raw);
        Self { raw, interval }
    }

    /// Whether two slots overlap.
    ///
    /// Both parsed → interval overlap. Either unparsed → exact equality
    /// of the raw texts (the conservative fallback).
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.interval, other.interval) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => self.raw == other.raw,
        }
    }

    /// Parsed duration (minutes), `None` when the text was malformed.
    pub fn duration_min(&self) -> Option<i64> {
        self.interval.map(|iv| iv.duration_min())
    }
}
