//! The task collection.

use std::time::{SystemTime, UNIX_EPOCH};

use taskboard_proto::task::{MIN_DEADLINE_HOURS, Task, TaskId, TaskPayload};

use crate::alloc::IdAllocator;
use crate::error::TrackerError;
use crate::members::MemberStore;
use crate::stable::BoundedMap;

/// Owns the task collection, keyed by sequentially-assigned [`TaskId`].
///
/// Creation validates the payload in full before an identifier is
/// allocated, so a rejected creation never consumes one. The assignee
/// link is checked against the member collection at creation time only;
/// it is a weak reference afterwards.
#[derive(Debug)]
pub struct TaskStore {
    entries: BoundedMap<TaskId, Task>,
    ids: IdAllocator,
}

impl TaskStore {
    /// Creates an empty store with the given collection bounds.
    #[must_use]
    pub const fn new(max_entries: usize, max_value_bytes: usize) -> Self {
        Self {
            entries: BoundedMap::new(max_entries, max_value_bytes),
            ids: IdAllocator::new(),
        }
    }

    /// Creates a task from a payload and returns its identifier.
    ///
    /// Stamps `start_time` with the current system time and stores the
    /// record with `is_done = false`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownAssignee`] if the payload's assignee
    /// is not a registered member, [`TrackerError::EmptyTitle`],
    /// [`TrackerError::EmptyDescription`], or
    /// [`TrackerError::DeadlineTooShort`] on malformed fields, or
    /// [`TrackerError::Storage`] if a collection bound is exceeded.
    pub fn add(
        &mut self,
        payload: TaskPayload,
        members: &MemberStore,
    ) -> Result<TaskId, TrackerError> {
        if !members.is_member(&payload.assigned_to) {
            return Err(TrackerError::UnknownAssignee(payload.assigned_to));
        }
        if payload.title.is_empty() {
            return Err(TrackerError::EmptyTitle);
        }
        if payload.description.is_empty() {
            return Err(TrackerError::EmptyDescription);
        }
        if payload.deadline_hours < MIN_DEADLINE_HOURS {
            return Err(TrackerError::DeadlineTooShort);
        }

        self.entries.ensure_capacity()?;
        let id = TaskId::from_raw(self.ids.allocate()?);
        let task = Task {
            id,
            title: payload.title,
            description: payload.description,
            assigned_to: payload.assigned_to,
            is_done: false,
            start_time: now_ns(),
            deadline_hours: payload.deadline_hours,
        };
        self.entries.insert(id, task)?;
        Ok(id)
    }

    /// Removes a task, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] if no task holds `id`.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TrackerError> {
        self.entries.remove(id).ok_or(TrackerError::TaskNotFound(id))
    }

    /// Returns the task stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] if no task holds `id`.
    pub fn get(&self, id: TaskId) -> Result<Task, TrackerError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or(TrackerError::TaskNotFound(id))
    }

    /// Marks the task done, replacing the stored record whole.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] if no task holds `id`.
    pub fn complete(&mut self, id: TaskId) -> Result<TaskId, TrackerError> {
        let mut task = self.get(id)?;
        task.is_done = true;
        self.entries.insert(id, task)?;
        Ok(id)
    }

    /// Returns all tasks in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoTasks`] when the collection is empty;
    /// listing deliberately errors rather than returning an empty sequence.
    pub fn list_all(&self) -> Result<Vec<Task>, TrackerError> {
        let tasks = self.entries.values();
        if tasks.is_empty() {
            return Err(TrackerError::NoTasks);
        }
        Ok(tasks)
    }

    /// Returns a full snapshot of the collection in ascending identifier
    /// order; empty when there are no tasks. Query operations filter over
    /// this snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.entries.values()
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Current system time as nanoseconds since the Unix epoch.
fn now_ns() -> u64 {
    u64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos(),
    )
    .unwrap_or(u64::MAX)
}
