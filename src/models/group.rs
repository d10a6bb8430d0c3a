//! Student group identity and wildcard-aware overlap.
//!
//! A group is the hierarchical cohort a class is taught to:
//! department → semester → section → subgroup. Section and subgroup may
//! hold the [`WILDCARD`] value, meaning the entire parent group; a
//! wildcard absorbs overlap with every specific value at its level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Section/subgroup value meaning "the entire parent group".
pub const WILDCARD: &str = "All";

/// The student cohort an assignment is taught to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGroup {
    pub department: String,
    pub semester: String,
    /// Section within the semester, or [`WILDCARD`].
    pub section: String,
    /// Subgroup within the section, or [`WILDCARD`].
    pub subgroup: String,
}

impl StudentGroup {
    /// Creates a group.
    pub fn new(
        department: impl Into<String>,
        semester: impl Into<String>,
        section: impl Into<String>,
        subgroup: impl Into<String>,
    ) -> Self {
        Self {
            department: department.into(),
            semester: semester.into(),
            section: section.into(),
            subgroup: subgroup.into(),
        }
    }

    /// Whether the two groups belong to the same department and semester
    /// and their sections overlap (wildcard-aware).
    pub fn section_overlaps(&self, other: &Self) -> bool {
        self.department == other.department
            && self.semester == other.semester
            && unit_overlaps(&self.section, &other.section)
    }

    /// Whether the two groups share students.
    ///
    /// Requires same department and semester, overlapping sections, and
    /// overlapping subgroups. A wildcard at either level absorbs every
    /// specific value; two distinct specific values are disjoint.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.section_overlaps(other) && unit_overlaps(&self.subgroup, &other.subgroup)
    }
}

fn unit_overlaps(a: &str, b: &str) -> bool {
    a == WILDCARD || b == WILDCARD || a == b
}

impl fmt::Display for StudentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.department, self.semester, self.section)?;
        if !self.subgroup.is_empty() && self.subgroup != WILDCARD {
            write!(f, "/{}", self.subgroup)?;
        }
        Ok(())
    }
}
