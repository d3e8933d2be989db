//! Separate-chaining table
//!
//! Bucket-per-slot alternative to open addressing. Buckets are plain vectors
//! owned by the table, stored oldest key first and read newest first.

use std::fmt;

use tracing::debug;

use crate::error::{HashLabError, Result};

/// Fixed number of buckets, keys homed by division
#[derive(Debug, Clone)]
pub struct ChainedTable {
    buckets: Vec<Vec<i64>>,
    len: usize,
}

impl ChainedTable {
    /// Create a table with `capacity` empty buckets
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HashLabError::InvalidCapacity(capacity));
        }

        Ok(Self {
            buckets: vec![Vec::new(); capacity],
            len: 0,
        })
    }

    /// Add `key` to the head of its chain
    pub fn insert(&mut self, key: i64) -> Result<()> {
        let index = self.home(key);
        let bucket = &mut self.buckets[index];

        if bucket.contains(&key) {
            return Err(HashLabError::DuplicateKey { key });
        }

        bucket.push(key);
        self.len += 1;

        debug!(key, index, chain_len = bucket.len(), "chained insert");
        Ok(())
    }

    /// Bucket index holding `key`
    pub fn search(&self, key: i64) -> Result<usize> {
        let index = self.home(key);
        if self.buckets[index].contains(&key) {
            Ok(index)
        } else {
            Err(HashLabError::NotFound { key })
        }
    }

    /// Unlink `key` from its bucket
    pub fn delete(&mut self, key: i64) -> Result<()> {
        let index = self.home(key);
        let bucket = &mut self.buckets[index];

        let position = bucket
            .iter()
            .position(|&k| k == key)
            .ok_or(HashLabError::NotFound { key })?;
        bucket.remove(position);
        self.len -= 1;

        debug!(key, index, "chained delete");
        Ok(())
    }

    /// Keys of one bucket, newest first
    pub fn bucket(&self, index: usize) -> Option<Vec<i64>> {
        self.buckets
            .get(index)
            .map(|bucket| bucket.iter().rev().copied().collect())
    }

    /// Length of the longest chain
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of keys across all buckets
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no keys are stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn home(&self, key: i64) -> usize {
        super::home(key, self.buckets.len())
    }
}

impl fmt::Display for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            write!(f, "Index {}: ", index)?;
            if bucket.is_empty() {
                writeln!(f, "Empty")?;
            } else {
                let chain: Vec<String> = bucket.iter().rev().map(i64::to_string).collect();
                writeln!(f, "{}", chain.join(" -> "))?;
            }
        }
        Ok(())
    }
}
