//! The member collection.

use taskboard_proto::identity::Identity;
use taskboard_proto::member::{Member, MemberId};

use crate::alloc::IdAllocator;
use crate::error::TrackerError;
use crate::stable::BoundedMap;

/// Owns the member collection: identity registrations keyed by
/// sequentially-assigned [`MemberId`].
///
/// Authorization for the mutating operations lives in the tracker surface;
/// this store only enforces its own data invariants.
#[derive(Debug)]
pub struct MemberStore {
    entries: BoundedMap<MemberId, Member>,
    ids: IdAllocator,
}

impl MemberStore {
    /// Creates an empty store with the given collection bounds.
    #[must_use]
    pub const fn new(max_entries: usize, max_value_bytes: usize) -> Self {
        Self {
            entries: BoundedMap::new(max_entries, max_value_bytes),
            ids: IdAllocator::new(),
        }
    }

    /// Registers a new member and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if a collection bound is exceeded.
    pub fn add(&mut self, identity: Identity) -> Result<MemberId, TrackerError> {
        self.entries.ensure_capacity()?;
        let id = MemberId::from_raw(self.ids.allocate()?);
        self.entries.insert(id, Member { id, identity })?;
        Ok(id)
    }

    /// Removes a member, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MemberNotFound`] if no member holds `id`.
    pub fn remove(&mut self, id: MemberId) -> Result<Member, TrackerError> {
        self.entries
            .remove(id)
            .ok_or(TrackerError::MemberNotFound(id))
    }

    /// Returns the member registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MemberNotFound`] if no member holds `id`.
    pub fn get(&self, id: MemberId) -> Result<Member, TrackerError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or(TrackerError::MemberNotFound(id))
    }

    /// Overwrites the identity stored under `id`.
    ///
    /// If no member holds `id`, a new entry is created there rather than
    /// failing; the identifier counter is not consumed. Callers that need
    /// an existence guarantee must check with [`MemberStore::get`] first.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EmptyIdentity`] if `new_identity` is empty,
    /// or [`TrackerError::Storage`] if a collection bound is exceeded.
    pub fn update(
        &mut self,
        id: MemberId,
        new_identity: Identity,
    ) -> Result<MemberId, TrackerError> {
        if new_identity.is_empty() {
            return Err(TrackerError::EmptyIdentity);
        }
        self.entries.insert(
            id,
            Member {
                id,
                identity: new_identity,
            },
        )?;
        Ok(id)
    }

    /// Returns all members in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoMembers`] when the collection is empty;
    /// listing deliberately errors rather than returning an empty sequence.
    pub fn list_all(&self) -> Result<Vec<Member>, TrackerError> {
        let members = self.entries.values();
        if members.is_empty() {
            return Err(TrackerError::NoMembers);
        }
        Ok(members)
    }

    /// Returns `true` iff some registered member's identity equals the
    /// argument exactly.
    #[must_use]
    pub fn is_member(&self, identity: &Identity) -> bool {
        self.entries.iter().any(|m| m.identity == *identity)
    }

    /// Returns the number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no members are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
