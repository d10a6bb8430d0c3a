//! Weekly faculty-load aggregation.
//!
//! Sums teaching hours per faculty member across the whole week,
//! independent of conflict checking, and classifies the total against a
//! configurable weekly maximum for load-meter widgets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Assignment, FacultyIdentity};

/// Default weekly teaching-hour ceiling.
pub const DEFAULT_MAX_WEEKLY_HOURS: f64 = 18.0;

/// Hours charged for an assignment whose time range cannot be parsed.
const FALLBACK_CLASS_HOURS: f64 = 1.0;

/// Classification of a weekly teaching load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// Below 80% of the maximum.
    Optimal,
    /// At or above 80% of the maximum.
    Heavy,
    /// At or above the maximum.
    Overloaded,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadStatus::Optimal => "Optimal",
            LoadStatus::Heavy => "Heavy",
            LoadStatus::Overloaded => "Overloaded",
        };
        f.write_str(label)
    }
}

/// Total weekly teaching hours for one faculty member.
///
/// Matches either faculty slot via
/// [`FacultyIdentity::same_person`] across all days. Each match
/// contributes its parsed duration in hours; an unparseable range is
/// charged [`FALLBACK_CLASS_HOURS`] rather than dropped, so malformed
/// data inflates the meter instead of hiding work. The sum is rounded
/// to one decimal place.
pub fn weekly_hours(faculty: &FacultyIdentity, schedule: &[Assignment]) -> f64 {
    let total: f64 = schedule
        .iter()
        .filter(|a| a.involves_faculty(faculty))
        .map(|a| match a.slot().duration_min() {
            Some(minutes) => minutes as f64 / 60.0,
            None => FALLBACK_CLASS_HOURS,
        })
        .sum();
    (total * 10.0).round() / 10.0
}

/// Classifies a weekly hour total against a maximum load.
///
/// Pure threshold function, usable without any schedule fixture:
/// `hours >= max_load` is `Overloaded`, `hours >= 0.8 * max_load` is
/// `Heavy`, anything below is `Optimal`.
pub fn classify_load(hours: f64, max_load: f64) -> LoadStatus {
    if hours >= max_load {
        LoadStatus::Overloaded
    } else if hours >= 0.8 * max_load {
        LoadStatus::Heavy
    } else {
        LoadStatus::Optimal
    }
}

/// One row of a weekly load report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyLoad {
    pub faculty: FacultyIdentity,
    /// Weekly hours, rounded to one decimal.
    pub hours: f64,
    pub status: LoadStatus,
}

/// Aggregates weekly load for every faculty member in the snapshot.
///
/// Distinct identities (id-first, per [`FacultyIdentity::same_person`])
/// appearing in either faculty slot each get a row; rows are sorted by
/// hours descending.
pub fn load_report(schedule: &[Assignment], max_load: f64) -> Vec<FacultyLoad> {
    let mut roster: Vec<&FacultyIdentity> = Vec::new();
    for assignment in schedule {
        for person in assignment.faculty_members() {
            if person.id.is_none() && person.name.is_empty() {
                continue;
            }
            if !roster.iter().any(|known| known.same_person(person)) {
                roster.push(person);
            }
        }
    }

    let mut report: Vec<FacultyLoad> = roster
        .into_iter()
        .map(|person| {
            let hours = weekly_hours(person, schedule);
            FacultyLoad {
                faculty: person.clone(),
                hours,
                status: classify_load(hours, max_load),
            }
        })
        .collect();
    report.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    report
}
