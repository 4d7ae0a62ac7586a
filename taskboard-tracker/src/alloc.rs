//! Sequential identifier allocation.

use crate::stable::StoreError;

/// Strictly increasing identifier allocator for one collection.
///
/// Hands out `u32` identifiers starting at 1; 0 is reserved as the
/// never-assigned sentinel. Identifiers are never reused, even after the
/// entry they named is deleted. Each store owns its own allocator, so the
/// two collections count independently.
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Creates an allocator whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Hands out the next identifier.
    ///
    /// Callers must finish all validation before allocating, so that a
    /// rejected creation never consumes an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] once the counter reaches
    /// `u32::MAX`; the counter never wraps.
    pub fn allocate(&mut self) -> Result<u32, StoreError> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(StoreError::IdSpaceExhausted)?;
        Ok(id)
    }

    #[cfg(test)]
    const fn starting_at(next: u32) -> Self {
        Self { next }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
