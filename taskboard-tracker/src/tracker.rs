//! The tracker operation surface.
//!
//! [`Tracker`] wires the identity gate, the two stores, and the query
//! functions into the set of exposed operations. Every operation is a
//! single synchronous call: consult the gate where required, then read or
//! write exactly one store, with reads running over a full snapshot.
//! Execution is run-to-completion; there are no internal blocking points.

use std::sync::Arc;

use parking_lot::RwLock;
use taskboard_proto::identity::Identity;
use taskboard_proto::member::{Member, MemberId};
use taskboard_proto::task::{Task, TaskId, TaskPayload};

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::gate::IdentityGate;
use crate::members::MemberStore;
use crate::query;
use crate::stable::{DEFAULT_MAX_ENTRIES, DEFAULT_MAX_VALUE_BYTES};
use crate::tasks::TaskStore;

/// A tracker behind a single global lock, for hosts that call in from
/// more than one thread. The serialized execution contract holds: each
/// operation runs to completion under the lock.
pub type SharedTracker = Arc<RwLock<Tracker>>;

/// The storage and access-control core of the task tracker.
///
/// The administrator identity is captured once at construction and is
/// immutable afterwards. Mutating operations require the administrator
/// caller (task completion also admits the assignee); queries are open to
/// any caller.
#[derive(Debug)]
pub struct Tracker {
    gate: IdentityGate,
    members: MemberStore,
    tasks: TaskStore,
}

impl Tracker {
    /// Creates a tracker from a resolved configuration.
    #[must_use]
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            gate: IdentityGate::new(Identity::new(config.admin_identity.clone())),
            members: MemberStore::new(config.max_members, config.max_value_bytes),
            tasks: TaskStore::new(config.max_tasks, config.max_value_bytes),
        }
    }

    /// Creates a tracker with the default collection bounds.
    #[must_use]
    pub fn with_admin(admin: Identity) -> Self {
        Self {
            gate: IdentityGate::new(admin),
            members: MemberStore::new(DEFAULT_MAX_ENTRIES, DEFAULT_MAX_VALUE_BYTES),
            tasks: TaskStore::new(DEFAULT_MAX_ENTRIES, DEFAULT_MAX_VALUE_BYTES),
        }
    }

    /// Wraps the tracker in a single global lock for multi-threaded hosts.
    #[must_use]
    pub fn into_shared(self) -> SharedTracker {
        Arc::new(RwLock::new(self))
    }

    /// Returns the administrator identity.
    #[must_use]
    pub const fn owner(&self) -> &Identity {
        self.gate.admin()
    }

    /// Registers a new member. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unauthorized`] for a non-admin caller, or
    /// [`TrackerError::Storage`] if a collection bound is exceeded.
    pub fn add_member(
        &mut self,
        caller: &Identity,
        identity: Identity,
    ) -> Result<MemberId, TrackerError> {
        self.gate.require_admin(caller)?;
        let id = self.members.add(identity)?;
        tracing::info!(member = %id, "member registered");
        Ok(id)
    }

    /// Removes a member, returning the removed record. Admin only.
    ///
    /// Tasks assigned to the removed member are left untouched; their
    /// assignee field goes stale rather than being cascaded.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unauthorized`] for a non-admin caller, or
    /// [`TrackerError::MemberNotFound`] if no member holds `id`.
    pub fn delete_member(
        &mut self,
        caller: &Identity,
        id: MemberId,
    ) -> Result<Member, TrackerError> {
        self.gate.require_admin(caller)?;
        let member = self.members.remove(id)?;
        tracing::info!(member = %id, "member deleted");
        Ok(member)
    }

    /// Returns the member registered under `id`. Open to any caller.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MemberNotFound`] if no member holds `id`.
    pub fn member(&self, id: MemberId) -> Result<Member, TrackerError> {
        self.members.get(id)
    }

    /// Overwrites the identity stored under `id`. Admin only.
    ///
    /// Inserts a new entry if `id` is absent; see [`MemberStore::update`]
    /// for this documented edge case.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unauthorized`] for a non-admin caller,
    /// [`TrackerError::EmptyIdentity`] if the new identity is empty, or
    /// [`TrackerError::Storage`] if a collection bound is exceeded.
    pub fn update_member(
        &mut self,
        caller: &Identity,
        id: MemberId,
        new_identity: Identity,
    ) -> Result<MemberId, TrackerError> {
        self.gate.require_admin(caller)?;
        let id = self.members.update(id, new_identity)?;
        tracing::info!(member = %id, "member updated");
        Ok(id)
    }

    /// Returns all members in ascending identifier order. Open to any
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoMembers`] when the collection is empty.
    pub fn members(&self) -> Result<Vec<Member>, TrackerError> {
        self.members.list_all()
    }

    /// Returns `true` iff some registered member's identity equals the
    /// argument exactly. Open to any caller.
    #[must_use]
    pub fn is_member(&self, identity: &Identity) -> bool {
        self.members.is_member(identity)
    }

    /// Creates a task from a payload. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unauthorized`] for a non-admin caller
    /// (before any validation), a validation error for a malformed
    /// payload, or [`TrackerError::Storage`] if a collection bound is
    /// exceeded.
    pub fn add_task(
        &mut self,
        caller: &Identity,
        payload: TaskPayload,
    ) -> Result<TaskId, TrackerError> {
        self.gate.require_admin(caller)?;
        let id = self.tasks.add(payload, &self.members)?;
        tracing::info!(task = %id, "task created");
        Ok(id)
    }

    /// Removes a task, returning the removed record. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unauthorized`] for a non-admin caller, or
    /// [`TrackerError::TaskNotFound`] if no task holds `id`.
    pub fn delete_task(&mut self, caller: &Identity, id: TaskId) -> Result<Task, TrackerError> {
        self.gate.require_admin(caller)?;
        let task = self.tasks.remove(id)?;
        tracing::info!(task = %id, "task deleted");
        Ok(task)
    }

    /// Returns the task stored under `id`. Open to any caller.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] if no task holds `id`.
    pub fn task(&self, id: TaskId) -> Result<Task, TrackerError> {
        self.tasks.get(id)
    }

    /// Returns all tasks in ascending identifier order. Open to any
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoTasks`] when the collection is empty.
    pub fn tasks(&self) -> Result<Vec<Task>, TrackerError> {
        self.tasks.list_all()
    }

    /// Marks a task done. Admin or assignee.
    ///
    /// The administrator may complete any task; any other caller must be
    /// the task's assignee. For a non-admin caller the task is looked up
    /// first, so a missing task reports not-found rather than
    /// unauthorized.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] if no task holds `id`, or
    /// [`TrackerError::Unauthorized`] if the caller is neither the
    /// administrator nor the assignee.
    pub fn complete_task(&mut self, caller: &Identity, id: TaskId) -> Result<TaskId, TrackerError> {
        if !self.gate.is_admin(caller) {
            let task = self.tasks.get(id)?;
            if task.assigned_to != *caller {
                return Err(TrackerError::Unauthorized);
            }
        }
        let id = self.tasks.complete(id)?;
        tracing::info!(task = %id, "task completed");
        Ok(id)
    }

    /// Returns the tasks assigned to `identity` whose completion state
    /// equals `done`; empty when nothing matches. Open to any caller.
    #[must_use]
    pub fn personal_tasks(&self, identity: &Identity, done: bool) -> Vec<Task> {
        query::personal_tasks(&self.tasks.snapshot(), identity, done)
    }

    /// Returns the tasks whose title or description contains `text`,
    /// case-insensitively; empty when nothing matches. Open to any caller.
    #[must_use]
    pub fn search_tasks(&self, text: &str) -> Vec<Task> {
        query::search_tasks(&self.tasks.snapshot(), text)
    }
}
