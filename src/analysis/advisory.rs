//! Advisory analysis for a candidate assignment.
//!
//! Computes the soft signals the scheduling form shows live while the
//! user types: room utilization for the chosen slot, subject repetition
//! on the same day, and per-faculty daily load. Warnings never block
//! persistence; only a hard conflict (delegated to
//! [`validate`](crate::conflict::validate)) yields a blocking verdict.

use serde::{Deserialize, Serialize};

use crate::conflict::{validate, Conflict, ValidateOptions};
use crate::models::Assignment;

/// Overall verdict of [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisStatus {
    /// No conflicts, no warnings.
    Ok,
    /// Advisory warnings only — persistence may proceed.
    Warning,
    /// A hard conflict — persistence must be blocked.
    Error,
}

/// Categories of advisory warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Nearly all rooms are booked for this exact slot.
    Utilization,
    /// The same subject already meets this group on this day.
    Repetition,
    /// A faculty member is at the daily class limit.
    DailyLoad,
}

/// An advisory warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryWarning {
    /// Warning category.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
}

impl AdvisoryWarning {
    fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall verdict.
    pub status: AnalysisStatus,
    /// The blocking conflict's message, or the first warning's.
    pub message: Option<String>,
    /// All advisory warnings produced.
    pub warnings: Vec<AdvisoryWarning>,
    /// The blocking conflict, when `status` is `Error`.
    pub conflict: Option<Conflict>,
    /// Projected room utilization for the candidate's exact slot (percent,
    /// counting the candidate itself).
    pub utilization_pct: u32,
}

/// Configuration for [`analyze`].
///
/// The warning thresholds default to the values the scheduling forms have
/// always used; institutions with different norms override them.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Total bookable rooms in the active period.
    pub room_count: usize,
    /// Warn when projected slot utilization exceeds this percentage.
    pub utilization_warn_pct: u32,
    /// Warn when a candidate's faculty already has this many classes that day.
    pub daily_load_warn: usize,
    /// Assignment id to leave out of every count (re-analyzing an edit).
    pub exclude_id: Option<String>,
}

impl AnalyzerConfig {
    /// Creates a config with the default thresholds.
    pub fn new(room_count: usize) -> Self {
        Self {
            room_count,
            utilization_warn_pct: 90,
            daily_load_warn: 4,
            exclude_id: None,
        }
    }

    /// Sets the utilization warning threshold (percent).
    pub fn with_utilization_warn_pct(mut self, pct: u32) -> Self {
        self.utilization_warn_pct = pct;
        self
    }

    /// Sets the daily faculty-load warning threshold.
    pub fn with_daily_load_warn(mut self, count: usize) -> Self {
        self.daily_load_warn = count;
        self
    }

    /// Excludes the given assignment id from every count.
    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.exclude_id = Some(id.into());
        self
    }
}

/// Analyzes a candidate assignment against the schedule snapshot.
///
/// Runs the hard-conflict validator first; a hit short-circuits with
/// `Error` (utilization is still reported — it is informational either
/// way). Otherwise gathers advisory warnings in a fixed order:
/// utilization, repetition, then daily load per faculty slot.
pub fn analyze(
    candidate: &Assignment,
    schedule: &[Assignment],
    config: &AnalyzerConfig,
) -> AnalysisResult {
    let others: Vec<&Assignment> = schedule
        .iter()
        .filter(|a| config.exclude_id.as_deref() != Some(a.id.as_str()))
        .filter(|a| a.academic_period == candidate.academic_period && a.day == candidate.day)
        .collect();

    let utilization_pct = slot_utilization(candidate, &others, config.room_count);

    let opts = ValidateOptions {
        exclude_id: config.exclude_id.clone(),
    };
    if let Some(conflict) = validate(candidate, schedule, &opts) {
        return AnalysisResult {
            status: AnalysisStatus::Error,
            message: Some(conflict.message.clone()),
            warnings: Vec::new(),
            conflict: Some(conflict),
            utilization_pct,
        };
    }

    let mut warnings = Vec::new();

    if utilization_pct > config.utilization_warn_pct {
        warnings.push(AdvisoryWarning::new(
            WarningKind::Utilization,
            format!(
                "{utilization_pct}% of rooms are booked for {} {}",
                candidate.day, candidate.time_range
            ),
        ));
    }

    if !candidate.subject.is_empty() {
        let repeated = others.iter().any(|a| {
            a.subject == candidate.subject && candidate.group.section_overlaps(&a.group)
        });
        if repeated {
            warnings.push(AdvisoryWarning::new(
                WarningKind::Repetition,
                format!(
                    "{} already meets {} on {}",
                    candidate.subject, candidate.group, candidate.day
                ),
            ));
        }
    }

    for person in candidate.faculty_members() {
        let count = others.iter().filter(|a| a.involves_faculty(person)).count();
        if count >= config.daily_load_warn {
            warnings.push(AdvisoryWarning::new(
                WarningKind::DailyLoad,
                format!(
                    "{} already teaches {} classes on {}",
                    person.name, count, candidate.day
                ),
            ));
        }
    }

    let status = if warnings.is_empty() {
        AnalysisStatus::Ok
    } else {
        AnalysisStatus::Warning
    };
    AnalysisResult {
        status,
        message: warnings.first().map(|w| w.message.clone()),
        warnings,
        conflict: None,
        utilization_pct,
    }
}

/// Projected utilization of the candidate's exact textual slot.
///
/// Counts same-day assignments with the identical `time_range` text (the
/// same published slot, not mere overlap) plus the candidate itself.
/// Zero configured rooms reports 100% — fail toward flagging.
fn slot_utilization(candidate: &Assignment, others: &[&Assignment], room_count: usize) -> u32 {
    if room_count == 0 {
        return 100;
    }
    let occupied = others
        .iter()
        .filter(|a| a.time_range == candidate.time_range)
        .count();
    (((occupied + 1) as f64 / room_count as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacultyIdentity, StudentGroup, WILDCARD};

    fn entry(id: &str, day: &str, range: &str, room: &str, faculty_id: &str) -> Assignment {
        Assignment::new(id, day, range)
            .with_period("2025-even")
            .with_subject("CS301")
            .with_room(room)
            .with_group(StudentGroup::new("CS", "3rd", "A", WILDCARD))
            .with_faculty(FacultyIdentity::with_id(faculty_id, format!("Fac {faculty_id}")))
    }

    fn candidate() -> Assignment {
        Assignment::new("new", "Monday", "10:00 AM - 11:00 AM")
            .with_period("2025-even")
            .with_subject("EC210")
            .with_room("Lab2")
            .with_group(StudentGroup::new("EC", "3rd", "A", WILDCARD))
            .with_faculty(FacultyIdentity::with_id("F9", "Dr. Nair"))
    }

    #[test]
    fn test_clean_candidate_is_ok() {
        let schedule = vec![entry("A", "Monday", "10:00 AM - 11:00 AM", "Lab1", "F1")];
        let result = analyze(&candidate(), &schedule, &AnalyzerConfig::new(10));
        assert_eq!(result.status, AnalysisStatus::Ok);
        assert!(result.message.is_none());
        assert!(result.warnings.is_empty());
        // Two rooms booked out of ten
        assert_eq!(result.utilization_pct, 20);
    }

    #[test]
    fn test_hard_conflict_short_circuits() {
        let schedule = vec![entry("A", "Monday", "10:00 AM - 11:00 AM", "Lab2", "F1")];
        let result = analyze(&candidate(), &schedule, &AnalyzerConfig::new(10));
        assert_eq!(result.status, AnalysisStatus::Error);
        assert!(result.conflict.is_some());
        assert!(result.warnings.is_empty());
        assert_eq!(result.utilization_pct, 20); // still informational
    }

    #[test]
    fn test_utilization_warning_above_threshold() {
        // 9 of 10 rooms taken in the exact slot; candidate makes it 10
        let schedule: Vec<Assignment> = (0..9)
            .map(|i| {
                entry(
                    &format!("A{i}"),
                    "Monday",
                    "10:00 AM - 11:00 AM",
                    &format!("R{i}"),
                    &format!("F{i}"),
                )
            })
            .collect();
        let result = analyze(&candidate(), &schedule, &AnalyzerConfig::new(10));
        assert_eq!(result.status, AnalysisStatus::Warning);
        assert_eq!(result.utilization_pct, 100);
        assert_eq!(result.warnings[0].kind, WarningKind::Utilization);
        assert_eq!(result.message, Some(result.warnings[0].message.clone()));
    }

    #[test]
    fn test_utilization_counts_exact_slot_not_overlap() {
        // An overlapping but differently-published slot does not count
        let schedule = vec![entry("A", "Monday", "10:30 AM - 11:30 AM", "Lab1", "F1")];
        let result = analyze(&candidate(), &schedule, &AnalyzerConfig::new(2));
        assert_eq!(result.utilization_pct, 50);
    }

    #[test]
    fn test_zero_rooms_flags_full() {
        let result = analyze(&candidate(), &[], &AnalyzerConfig::new(0));
        assert_eq!(result.utilization_pct, 100);
        assert_eq!(result.status, AnalysisStatus::Warning);
    }

    #[test]
    fn test_repetition_warning() {
        // Same subject for an overlapping section earlier the same day
        let mut existing = entry("A", "Monday", "8:00 AM - 9:00 AM", "Lab1", "F1");
        existing.subject = "EC210".into();
        existing.group = StudentGroup::new("EC", "3rd", WILDCARD, WILDCARD);

        let result = analyze(&candidate(), &[existing], &AnalyzerConfig::new(10));
        assert_eq!(result.status, AnalysisStatus::Warning);
        assert_eq!(result.warnings[0].kind, WarningKind::Repetition);
        assert!(result.warnings[0].message.contains("EC210"));
    }

    #[test]
    fn test_repetition_requires_same_cohort() {
        // Same subject code in another department is not a repeat
        let mut existing = entry("A", "Monday", "8:00 AM - 9:00 AM", "Lab1", "F1");
        existing.subject = "EC210".into();
        let result = analyze(&candidate(), &[existing], &AnalyzerConfig::new(10));
        assert_eq!(result.status, AnalysisStatus::Ok);
    }

    #[test]
    fn test_daily_load_warning_names_faculty_and_count() {
        // F9 already has four non-overlapping Monday classes
        let schedule: Vec<Assignment> = (0..4)
            .map(|i| {
                entry(
                    &format!("A{i}"),
                    "Monday",
                    &format!("{}:00 AM - {}:00 AM", i + 7, i + 8),
                    &format!("R{i}"),
                    "F9",
                )
            })
            .collect();
        let mut c = candidate();
        c.time_range = "4:00 PM - 5:00 PM".into();

        let result = analyze(&c, &schedule, &AnalyzerConfig::new(10));
        assert_eq!(result.status, AnalysisStatus::Warning);
        assert_eq!(result.warnings[0].kind, WarningKind::DailyLoad);
        assert!(result.warnings[0].message.contains("Dr. Nair"));
        assert!(result.warnings[0].message.contains('4'));
    }

    #[test]
    fn test_daily_load_below_threshold_silent() {
        let schedule: Vec<Assignment> = (0..3)
            .map(|i| {
                entry(
                    &format!("A{i}"),
                    "Monday",
                    &format!("{}:00 AM - {}:00 AM", i + 7, i + 8),
                    &format!("R{i}"),
                    "F9",
                )
            })
            .collect();
        let mut c = candidate();
        c.time_range = "4:00 PM - 5:00 PM".into();

        let result = analyze(&c, &schedule, &AnalyzerConfig::new(10));
        assert_eq!(result.status, AnalysisStatus::Ok);
    }

    #[test]
    fn test_multiple_warnings_first_is_message() {
        // Utilization and daily load both fire; utilization is reported first
        let mut schedule: Vec<Assignment> = (0..4)
            .map(|i| {
                entry(
                    &format!("A{i}"),
                    "Monday",
                    "8:00 AM - 9:00 AM",
                    &format!("R{i}"),
                    "F9",
                )
            })
            .collect();
        schedule.push(entry("B", "Monday", "10:00 AM - 11:00 AM", "Lab1", "F1"));

        let result = analyze(&candidate(), &schedule, &AnalyzerConfig::new(2));
        assert_eq!(result.status, AnalysisStatus::Warning);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0].kind, WarningKind::Utilization);
        assert_eq!(result.warnings[1].kind, WarningKind::DailyLoad);
        assert_eq!(result.message, Some(result.warnings[0].message.clone()));
    }

    #[test]
    fn test_exclude_id_applies_to_counts() {
        // Re-analyzing an edit: the stored version occupies the same slot
        let stored = {
            let mut a = candidate();
            a.id = "new".into();
            a
        };
        // Without the exclusion the stored copy collides with itself
        let clash = analyze(&candidate(), &[stored.clone()], &AnalyzerConfig::new(2));
        assert_eq!(clash.status, AnalysisStatus::Error);

        let result = analyze(
            &candidate(),
            &[stored],
            &AnalyzerConfig::new(2).excluding("new"),
        );
        assert_eq!(result.status, AnalysisStatus::Ok);
        assert_eq!(result.utilization_pct, 50); // just the candidate, two rooms
    }

    #[test]
    fn test_custom_thresholds() {
        let schedule = vec![entry("A", "Monday", "8:00 AM - 9:00 AM", "R1", "F9")];
        let mut c = candidate();
        c.time_range = "4:00 PM - 5:00 PM".into();

        let config = AnalyzerConfig::new(10).with_daily_load_warn(1);
        let result = analyze(&c, &schedule, &config);
        assert_eq!(result.status, AnalysisStatus::Warning);
        assert_eq!(result.warnings[0].kind, WarningKind::DailyLoad);
    }
}
