//! Faculty identity.
//!
//! Records carry a durable faculty id when master data provides one; the
//! display name is always present and serves as the weak fallback identity
//! for legacy records. All faculty matching in the crate goes through
//! [`FacultyIdentity::same_person`] so the id-first rule lives in one place.

use serde::{Deserialize, Serialize};

/// A teaching staff member referenced by an assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyIdentity {
    /// Durable identifier from master data. `None` for legacy records.
    pub id: Option<String>,
    /// Display name (weak identity, used as fallback).
    pub name: String,
}

impl FacultyIdentity {
    /// Creates an identity with only a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates an identity with a durable id and a display name.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    /// Whether two identities refer to the same person.
    ///
    /// Ids compare only against ids; when either side lacks one, non-empty
    /// display names are compared instead. Two blank names never match.
    pub fn same_person(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => !self.name.is_empty() && self.name == other.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_match_wins_over_name() {
        let a = FacultyIdentity::with_id("F1", "Dr. Rao");
        let b = FacultyIdentity::with_id("F1", "Rao, S.");
        assert!(a.same_person(&b));

        let c = FacultyIdentity::with_id("F2", "Dr. Rao");
        assert!(!a.same_person(&c)); // same name, different id
    }

    #[test]
    fn test_name_fallback_when_id_missing() {
        let a = FacultyIdentity::named("Dr. Rao");
        let b = FacultyIdentity::with_id("F1", "Dr. Rao");
        assert!(a.same_person(&b));
        assert!(b.same_person(&a));

        let c = FacultyIdentity::named("Dr. Iyer");
        assert!(!a.same_person(&c));
    }

    #[test]
    fn test_blank_names_never_match() {
        let a = FacultyIdentity::named("");
        let b = FacultyIdentity::named("");
        assert!(!a.same_person(&b));
    }
}
