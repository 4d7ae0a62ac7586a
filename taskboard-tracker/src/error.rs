//! Operation errors for the tracker core.

use taskboard_proto::identity::Identity;
use taskboard_proto::member::MemberId;
use taskboard_proto::task::{MIN_DEADLINE_HOURS, TaskId};
use thiserror::Error;

use crate::stable::StoreError;

/// Errors returned by tracker operations.
///
/// All variants are recoverable by the caller (retry with corrected input),
/// except [`TrackerError::Storage`], which wraps the storage layer's
/// bound-exceeded failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// The caller is not authorized for this operation.
    #[error("caller is not authorized for this operation")]
    Unauthorized,
    /// No member is registered under the given identifier.
    #[error("member not found: {0}")]
    MemberNotFound(MemberId),
    /// No task exists under the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The new identity on a member update is empty.
    #[error("identity cannot be empty")]
    EmptyIdentity,
    /// The task title is empty.
    #[error("task title cannot be empty")]
    EmptyTitle,
    /// The task description is empty.
    #[error("task description cannot be empty")]
    EmptyDescription,
    /// The task deadline is below the minimum.
    #[error("task deadline must be at least {MIN_DEADLINE_HOURS} hour")]
    DeadlineTooShort,
    /// The task's assignee is not a registered member.
    #[error("assigned member is not registered: {0}")]
    UnknownAssignee(Identity),
    /// Listing the member collection while it is empty.
    #[error("no members yet")]
    NoMembers,
    /// Listing the task collection while it is empty.
    #[error("no tasks yet")]
    NoTasks,
    /// A storage-layer bound was exceeded.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
