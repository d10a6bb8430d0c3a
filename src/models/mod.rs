//! Timetable domain models.
//!
//! Provides the data types the conflict, analysis, and layout modules
//! operate on. None of them own state — an [`Assignment`] snapshot is
//! borrowed into every call.
//!
//! # Identity Rules
//!
//! - Faculty match id-first with display-name fallback
//!   ([`FacultyIdentity::same_person`])
//! - Section/subgroup values may be the [`WILDCARD`], which absorbs
//!   overlap with any specific value ([`StudentGroup::overlaps`])
//! - Time ranges are half-open intervals; unparseable text degrades to
//!   textual identity ([`TimeSlot::overlaps`])

mod assignment;
mod group;
mod identity;
mod interval;

pub use assignment::{Assignment, DEFAULT_DAYS};
pub use group::{StudentGroup, WILDCARD};
pub use identity::FacultyIdentity;
pub use interval::{parse_time_range, TimeInterval, TimeSlot, MINUTES_PER_DAY};
