//! Caller authorization.

use taskboard_proto::identity::Identity;

use crate::error::TrackerError;

/// Binary authorization gate: a caller either is the administrator or is
/// not. The administrator identity is injected at construction and never
/// changes afterwards.
///
/// Every mutating operation consults this gate before any other
/// validation, so authorization errors take precedence over validation
/// errors.
#[derive(Debug)]
pub struct IdentityGate {
    admin: Identity,
}

impl IdentityGate {
    /// Creates a gate for the given administrator identity.
    #[must_use]
    pub const fn new(admin: Identity) -> Self {
        Self { admin }
    }

    /// Returns the configured administrator identity.
    #[must_use]
    pub const fn admin(&self) -> &Identity {
        &self.admin
    }

    /// Returns `true` iff the caller is the administrator.
    #[must_use]
    pub fn is_admin(&self, caller: &Identity) -> bool {
        self.admin == *caller
    }

    /// Fails fast unless the caller is the administrator.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unauthorized`] for any other caller.
    pub fn require_admin(&self, caller: &Identity) -> Result<(), TrackerError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(TrackerError::Unauthorized)
        }
    }
}
