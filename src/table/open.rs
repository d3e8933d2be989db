//! Open-addressing table
//!
//! One contiguous slot array, one probe strategy.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{HashLabError, Result};
use super::{ProbeStrategy, Slot};

/// Fixed-capacity open-addressing table of `i64` keys
///
/// ## Walk Rules
/// - **insert**: steps over occupied slots and tombstones until an empty
///   slot or the end of the probe sequence, rejecting duplicates on the way.
///   The first tombstone seen is reused, otherwise the empty slot.
/// - **search / delete**: tombstones never end the walk; an empty slot does.
#[derive(Debug, Clone)]
pub struct OpenTable {
    /// Slot array, exclusively owned, length fixed at construction
    slots: Vec<Slot>,

    /// Active probe strategy
    strategy: ProbeStrategy,

    /// Number of occupied slots
    len: usize,

    /// Number of tombstones
    tombstones: usize,
}

impl OpenTable {
    /// Create an empty table with `capacity` slots
    ///
    /// Fails with `InvalidCapacity` for 0 slots and with `Config` for a
    /// double hashing prime that is not prime.
    pub fn new(capacity: usize, strategy: ProbeStrategy) -> Result<Self> {
        if capacity == 0 {
            return Err(HashLabError::InvalidCapacity(capacity));
        }
        strategy.validate()?;

        Ok(Self {
            slots: vec![Slot::Empty; capacity],
            strategy,
            len: 0,
            tombstones: 0,
        })
    }

    /// Home index of `key`
    pub fn home(&self, key: i64) -> usize {
        super::home(key, self.capacity())
    }

    /// Insert a key
    ///
    /// Fails with `DuplicateKey` if the key is already present, or
    /// `TableFull` if no usable slot is reachable on its probe sequence.
    pub fn insert(&mut self, key: i64) -> Result<()> {
        let mut reusable = None;
        let mut target = None;

        for index in self.strategy.sequence(key, self.capacity()) {
            trace!(key, index, "insert probe");
            match self.slots[index] {
                Slot::Occupied(existing) if existing == key => {
                    debug!(key, index, "duplicate key rejected");
                    return Err(HashLabError::DuplicateKey { key });
                }
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    reusable.get_or_insert(index);
                }
                Slot::Empty => {
                    target = Some(index);
                    break;
                }
            }
        }

        let index = match reusable.or(target) {
            Some(index) => index,
            None => {
                debug!(key, strategy = self.strategy.name(), "no usable slot");
                return Err(HashLabError::TableFull { key });
            }
        };

        if self.slots[index] == Slot::Tombstone {
            self.tombstones -= 1;
        }
        self.slots[index] = Slot::Occupied(key);
        self.len += 1;

        debug!(key, index, "inserted");
        Ok(())
    }

    /// Find the index holding `key`
    pub fn search(&self, key: i64) -> Result<usize> {
        self.locate(key).ok_or(HashLabError::NotFound { key })
    }

    /// Delete a key, leaving a tombstone in its slot
    pub fn delete(&mut self, key: i64) -> Result<()> {
        let index = self.locate(key).ok_or(HashLabError::NotFound { key })?;

        self.slots[index] = Slot::Tombstone;
        self.len -= 1;
        self.tombstones += 1;

        debug!(key, index, "deleted");
        Ok(())
    }

    /// Every slot in index order
    pub fn dump(&self) -> Vec<(usize, Slot)> {
        self.slots.iter().copied().enumerate().collect()
    }

    /// Indices the active strategy visits for `key`, in order
    pub fn probe_path(&self, key: i64) -> Vec<usize> {
        self.strategy.sequence(key, self.capacity()).collect()
    }

    /// Reset every slot to empty
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
        self.len = 0;
        self.tombstones = 0;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no live keys remain
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of tombstones
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Live keys divided by capacity
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// The strategy this table probes with
    pub fn strategy(&self) -> ProbeStrategy {
        self.strategy
    }

    fn locate(&self, key: i64) -> Option<usize> {
        for index in self.strategy.sequence(key, self.capacity()) {
            trace!(key, index, "search probe");
            match self.slots[index] {
                Slot::Occupied(existing) if existing == key => return Some(index),
                Slot::Empty => return None,
                _ => {}
            }
        }
        None
    }
}

impl fmt::Display for OpenTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Occupied(key) => writeln!(f, "Index {}: {}", index, key)?,
                Slot::Tombstone => writeln!(f, "Index {}: Deleted", index)?,
                Slot::Empty => writeln!(f, "Index {}: Empty", index)?,
            }
        }
        Ok(())
    }
}
