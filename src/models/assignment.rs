//! The scheduling record.
//!
//! An assignment is one scheduled class: a day, a time range, a room, a
//! subject, a student group, and one or two faculty, all scoped to an
//! academic period. The crate holds no collection of its own — callers
//! pass a snapshot of the active period's assignments into every call.

use serde::{Deserialize, Serialize};

use super::{FacultyIdentity, StudentGroup, TimeSlot};

/// Default ordered weekday set for week views. Sites with a different
/// teaching week pass their own list where a day order is needed.
pub const DEFAULT_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One scheduled class.
///
/// `time_range` is kept as entered (`"9:00 AM - 10:30 AM"`); [`Self::slot`]
/// parses it on demand so a malformed range degrades per the slot's
/// fallback rules instead of being rejected at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Weekday name (site-configurable set, see [`DEFAULT_DAYS`]).
    pub day: String,
    /// Textual time range, `"<start> - <end>"`.
    pub time_range: String,
    /// Scoping identifier; assignments in different periods never conflict.
    pub academic_period: String,
    /// Course identifier (display and repetition checks only).
    pub subject: String,
    /// Physical room, uniquely lockable per (day, interval).
    pub room: String,
    /// Student cohort taught.
    pub group: StudentGroup,
    /// Primary teaching staff.
    pub faculty: FacultyIdentity,
    /// Optional second teaching staff.
    pub faculty2: Option<FacultyIdentity>,
}

impl Assignment {
    /// Creates an assignment with the given id, day, and time range.
    pub fn new(id: impl Into<String>, day: impl Into<String>, time_range: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            day: day.into(),
            time_range: time_range.into(),
            ..Self::default()
        }
    }

    /// Sets the academic period.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.academic_period = period.into();
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the student group.
    pub fn with_group(mut self, group: StudentGroup) -> Self {
        self.group = group;
        self
    }

    /// Sets the primary faculty.
    pub fn with_faculty(mut self, faculty: FacultyIdentity) -> Self {
        self.faculty = faculty;
        self
    }

    /// Sets the second faculty.
    pub fn with_second_faculty(mut self, faculty: FacultyIdentity) -> Self {
        self.faculty2 = Some(faculty);
        self
    }

    /// Parses the time range into a slot (raw text + optional interval).
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::parse(self.time_range.as_str())
    }

    /// Both faculty slots, primary first.
    pub fn faculty_members(&self) -> impl Iterator<Item = &FacultyIdentity> {
        std::iter::once(&self.faculty).chain(self.faculty2.as_ref())
    }

    /// Whether either faculty slot refers to the given person.
    pub fn involves_faculty(&self, person: &FacultyIdentity) -> bool {
        self.faculty_members().any(|mine| mine.same_person(person))
    }
}
