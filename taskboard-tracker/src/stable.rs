//! Bounded ordered map, the in-memory stand-in for the host's stable map.
//!
//! The host environment supplies the persistent ordered key-value primitive;
//! this module reproduces its contract for in-process use: entries iterate
//! in ascending key order, and both the entry count and the serialized size
//! of each value are bounded. Exceeding either bound is an explicit
//! [`StoreError`], never a silent truncation. Values are postcard-encoded
//! for size accounting, so a durable host map can store the same bytes.

use std::collections::BTreeMap;

use serde::Serialize;
use taskboard_proto::codec;

/// Default maximum number of entries per collection.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default maximum serialized value size in bytes.
pub const DEFAULT_MAX_VALUE_BYTES: usize = 1000;

/// Storage-layer failures.
///
/// These signal an exhausted stored-state limit rather than bad caller
/// input; callers cannot retry their way out of them without an operator
/// raising the bounds.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The collection holds its maximum number of entries.
    #[error("collection is full (max {max} entries)")]
    CapacityReached {
        /// The configured entry bound.
        max: usize,
    },
    /// A value's serialized form exceeds the per-value size bound.
    #[error("value too large ({size} bytes, max {max})")]
    ValueTooLarge {
        /// Serialized size of the rejected value.
        size: usize,
        /// The configured size bound.
        max: usize,
    },
    /// A value could not be serialized for size accounting.
    #[error("value encoding failed: {0}")]
    Encode(String),
    /// The identifier counter for the collection is exhausted.
    #[error("identifier space exhausted")]
    IdSpaceExhausted,
}

/// An ordered key-value map bounded in entry count and value size.
#[derive(Debug)]
pub struct BoundedMap<K, V> {
    entries: BTreeMap<K, V>,
    max_entries: usize,
    max_value_bytes: usize,
}

impl<K: Ord + Copy, V: Serialize + Clone> BoundedMap<K, V> {
    /// Creates an empty map with the given bounds.
    #[must_use]
    pub const fn new(max_entries: usize, max_value_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            max_entries,
            max_value_bytes,
        }
    }

    /// Checks that the map can accept one more entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapacityReached`] if the map is full.
    pub fn ensure_capacity(&self) -> Result<(), StoreError> {
        if self.entries.len() >= self.max_entries {
            return Err(StoreError::CapacityReached {
                max: self.max_entries,
            });
        }
        Ok(())
    }

    /// Inserts a value at the given key, overwriting any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapacityReached`] if the key is new and the
    /// map is full, [`StoreError::ValueTooLarge`] if the value's encoded
    /// form exceeds the size bound, or [`StoreError::Encode`] if it cannot
    /// be serialized. The map is unchanged on error.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), StoreError> {
        if !self.entries.contains_key(&key) {
            self.ensure_capacity()?;
        }
        let encoded = codec::encode(&value).map_err(|e| StoreError::Encode(e.to_string()))?;
        if encoded.len() > self.max_value_bytes {
            return Err(StoreError::ValueTooLarge {
                size: encoded.len(),
                max: self.max_value_bytes,
            });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Returns a reference to the value at `key`, if present.
    pub fn get(&self, key: K) -> Option<&V> {
        self.entries.get(&key)
    }

    /// Removes and returns the value at `key`, if present.
    pub fn remove(&mut self, key: K) -> Option<V> {
        self.entries.remove(&key)
    }

    /// Returns a snapshot of all values in ascending key order.
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }

    /// Iterates over values in ascending key order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
