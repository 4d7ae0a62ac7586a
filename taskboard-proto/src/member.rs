//! Member records for the taskboard tracker.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Unique identifier for a registered member.
///
/// Assigned sequentially by the tracker starting at 1; 0 is reserved as the
/// never-assigned sentinel. Identifiers are never reused, even after the
/// member is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(u32);

impl MemberId {
    /// Creates a `MemberId` from a raw integer.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered team member.
///
/// Present in the member collection iff currently registered; deleting the
/// member removes the record but never retires tasks that still name its
/// identity as assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier.
    pub id: MemberId,
    /// The member's caller identity token.
    pub identity: Identity,
}
