//! Conflict detection and timeline layout for weekly class schedules.
//!
//! The validating core of a timetable-management application. Callers
//! hold an in-memory snapshot of [`models::Assignment`] records for the
//! active academic period and call into this crate before persisting a
//! new or edited assignment, when rendering live advisory feedback, and
//! when laying out a day or week view.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Assignment`, `StudentGroup`,
//!   `FacultyIdentity`, `TimeInterval`, `TimeSlot`
//! - **`conflict`**: Hard-conflict validation (room, faculty, and
//!   student-group double booking) — a non-`None` verdict must block the
//!   write
//! - **`analysis`**: Advisory warnings (utilization, repetition, daily
//!   load) and weekly faculty-load aggregation — never blocking
//! - **`layout`**: Greedy interval partitioning of a day's events into
//!   non-overlapping rendering lanes
//!
//! # Design
//!
//! Every function is a synchronous, pure computation over a borrowed
//! snapshot: no interior state, no I/O, no panics on malformed data.
//! Unparseable time text degrades conservatively — toward "flag as a
//! possible conflict", never toward "silently allow". Consistency of the
//! snapshot, and re-validating at write time, are the caller's
//! responsibility.

pub mod analysis;
pub mod conflict;
pub mod layout;
pub mod models;
