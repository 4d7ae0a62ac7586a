//! Task records for the taskboard tracker.
//!
//! A task is created from a [`TaskPayload`] by the tracker, which assigns
//! the identifier and stamps the start time. The assignee link is a weak
//! reference: it must name a registered member at creation time, and is
//! never re-validated afterwards.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Minimum deadline, in hours from the task's start time.
pub const MIN_DEADLINE_HOURS: u64 = 1;

/// Nanoseconds in one hour.
const NANOS_PER_HOUR: u64 = 3_600 * 1_000_000_000;

/// Unique identifier for a task.
///
/// Assigned sequentially by the tracker starting at 1; 0 is reserved as the
/// never-assigned sentinel. Identifiers are never reused, even after the
/// task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u32);

impl TaskId {
    /// Creates a `TaskId` from a raw integer.
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

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of work assigned to a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Task title; non-empty, validated at creation only.
    pub title: String,
    /// Task description; non-empty, validated at creation only.
    pub description: String,
    /// Identity of the member this task is assigned to. Must name a
    /// registered member at creation time; stale afterwards if that member
    /// is deleted (weak reference, never cascaded).
    pub assigned_to: Identity,
    /// Whether the task has been completed.
    pub is_done: bool,
    /// Nanoseconds since the Unix epoch, captured at creation.
    pub start_time: u64,
    /// Deadline as a count of hours from `start_time`; at least
    /// [`MIN_DEADLINE_HOURS`].
    pub deadline_hours: u64,
}

impl Task {
    /// Returns the absolute deadline as nanoseconds since the Unix epoch.
    ///
    /// Derived on demand from `start_time` and `deadline_hours`; not a
    /// stored field. Saturates at `u64::MAX` for out-of-range deadlines.
    #[must_use]
    pub const fn deadline_at(&self) -> u64 {
        self.start_time
            .saturating_add(self.deadline_hours.saturating_mul(NANOS_PER_HOUR))
    }
}

/// Caller-supplied fields for creating a task.
///
/// The tracker fills in the identifier, start time, and completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Identity of the member the task is assigned to.
    pub assigned_to: Identity,
    /// Deadline in hours from creation.
    pub deadline_hours: u64,
}
