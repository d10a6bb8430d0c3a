//! Hard-conflict validation for candidate assignments.
//!
//! Checks a candidate against the active period's schedule snapshot for
//! blocking rule violations:
//! - Same person in both of the candidate's faculty slots
//! - Room double-booked at an overlapping time
//! - Faculty double-booked at an overlapping time (either slot, id-first)
//! - Student group double-booked (wildcard-aware)
//!
//! A non-`None` verdict must block persistence; the caller surfaces
//! [`Conflict::message`] to the user. Checks run in a fixed priority
//! (room, then each faculty slot, then group) against the snapshot in
//! order, and the first hit wins — the verdict is deterministic for a
//! stable snapshot order, not the globally "worst" conflict.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, FacultyIdentity};

/// Categories of hard scheduling conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The candidate assigns the same person to both faculty slots.
    SelfAssignment,
    /// The room is already occupied at an overlapping time.
    Room,
    /// A faculty member is already teaching at an overlapping time.
    Faculty,
    /// The student group already has a class at an overlapping time.
    Group,
}

/// A blocking scheduling conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Id of the colliding assignment. `None` for self-conflicts.
    pub with: Option<String>,
    /// Human-readable description for the scheduling form.
    pub message: String,
}

impl Conflict {
    fn new(kind: ConflictKind, with: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            with,
            message: message.into(),
        }
    }

    /// Creates a self-assignment conflict.
    pub fn self_assignment(person: &FacultyIdentity) -> Self {
        Self::new(
            ConflictKind::SelfAssignment,
            None,
            format!("{} is assigned to both faculty slots", person.name),
        )
    }

    /// Creates a room conflict naming the occupying class.
    pub fn room(item: &Assignment) -> Self {
        Self::new(
            ConflictKind::Room,
            Some(item.id.clone()),
            format!(
                "Room {} is already occupied by {} for {}",
                item.room, item.subject, item.group
            ),
        )
    }

    /// Creates a faculty conflict naming the person and their other class.
    pub fn faculty(person: &FacultyIdentity, item: &Assignment) -> Self {
        Self::new(
            ConflictKind::Faculty,
            Some(item.id.clone()),
            format!(
                "{} is already teaching {} for {} at this time",
                person.name, item.subject, item.group
            ),
        )
    }

    /// Creates a student-group conflict naming the colliding class.
    pub fn group(item: &Assignment) -> Self {
        Self::new(
            ConflictKind::Group,
            Some(item.id.clone()),
            format!("{} already has {} at this time", item.group, item.subject),
        )
    }
}

/// Options for [`validate`].
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Assignment id to leave out of the comparison set, so an edited
    /// assignment is not compared against its own stored version.
    pub exclude_id: Option<String>,
}

impl ValidateOptions {
    /// Options excluding the given assignment id.
    pub fn excluding(id: impl Into<String>) -> Self {
        Self {
            exclude_id: Some(id.into()),
        }
    }
}

/// Validates a candidate assignment against the schedule snapshot.
///
/// Returns the first hard conflict found, or `None` when the candidate is
/// safe to persist. The comparison set is every snapshot entry with the
/// same academic period and day, excluding `opts.exclude_id`, whose slot
/// overlaps the candidate's (per [`TimeSlot::overlaps`]'s conservative
/// fallback for unparseable ranges).
///
/// [`TimeSlot::overlaps`]: crate::models::TimeSlot::overlaps
pub fn validate(
    candidate: &Assignment,
    schedule: &[Assignment],
    opts: &ValidateOptions,
) -> Option<Conflict> {
    if let Some(second) = &candidate.faculty2 {
        if second.same_person(&candidate.faculty) {
            return Some(Conflict::self_assignment(second));
        }
    }

    let slot = candidate.slot();
    for item in schedule {
        if item.academic_period != candidate.academic_period || item.day != candidate.day {
            continue;
        }
        if opts.exclude_id.as_deref() == Some(item.id.as_str()) {
            continue;
        }
        if !slot.overlaps(&item.slot()) {
            continue;
        }
        if let Some(conflict) = conflict_between(candidate, item) {
            return Some(conflict);
        }
    }

    None
}

/// Checks one overlapping pair in fixed priority: room, then each of the
/// candidate's faculty slots, then student group. The caller has already
/// established same period, same day, and slot overlap.
fn conflict_between(candidate: &Assignment, item: &Assignment) -> Option<Conflict> {
    if !candidate.room.is_empty() && candidate.room == item.room {
        return Some(Conflict::room(item));
    }

    for person in candidate.faculty_members() {
        if item.involves_faculty(person) {
            return Some(Conflict::faculty(person, item));
        }
    }

    if candidate.group.overlaps(&item.group) {
        return Some(Conflict::group(item));
    }

    None
}

/// A conflict found between two already-persisted assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditFinding {
    /// Id of the earlier assignment in snapshot order.
    pub assignment_id: String,
    /// The conflict; its `with` names the later assignment.
    pub conflict: Conflict,
}

/// Scans an existing schedule for every hard conflict among its entries.
///
/// Unlike [`validate`], which stops at the first hit for one candidate,
/// this reports all pairwise violations — concurrent edits can race past
/// write-time validation, and dashboards surface the damage with this.
pub fn audit(schedule: &[Assignment]) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for (i, a) in schedule.iter().enumerate() {
        if let Some(second) = &a.faculty2 {
            if second.same_person(&a.faculty) {
                findings.push(AuditFinding {
                    assignment_id: a.id.clone(),
                    conflict: Conflict::self_assignment(second),
                });
            }
        }

        let slot = a.slot();
        for b in &schedule[i + 1..] {
            if a.academic_period != b.academic_period || a.day != b.day {
                continue;
            }
            if !slot.overlaps(&b.slot()) {
                continue;
            }
            if let Some(conflict) = conflict_between(a, b) {
                findings.push(AuditFinding {
                    assignment_id: a.id.clone(),
                    conflict,
                });
            }
        }
    }

    findings
}
