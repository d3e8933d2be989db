//! Probe sequences
//!
//! Each strategy turns a home index into a deterministic walk over the slot
//! array. Every walk is bounded by N attempts for a table of N slots.

use std::fmt;

use crate::config::is_prime;
use crate::error::{HashLabError, Result};

/// Collision-resolution policy for [`OpenTable`](super::OpenTable)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStrategy {
    /// `(h + i) mod N`
    Linear,

    /// `(h + i²) mod N`
    Quadratic,

    /// `(h + i * step(key)) mod N` with `step(key) = P - (key mod P)`
    DoubleHash { prime: u64 },
}

impl ProbeStrategy {
    /// Reject parameters a probe sequence cannot run with
    ///
    /// Double hashing needs a prime `P`; `P = 0` would divide by zero in
    /// [`step`].
    pub fn validate(&self) -> Result<()> {
        match *self {
            ProbeStrategy::DoubleHash { prime } if !is_prime(prime) => Err(HashLabError::Config(
                format!("double hash prime must be prime, got {}", prime),
            )),
            _ => Ok(()),
        }
    }

    /// Start a probe sequence for `key` in a table of `capacity` slots
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or the double hashing prime is 0. Tables
    /// rule both out at construction.
    pub fn sequence(&self, key: i64, capacity: usize) -> ProbeSequence {
        let home = home(key, capacity);
        let stride = match *self {
            ProbeStrategy::DoubleHash { prime } => step(key, prime),
            _ => 1,
        };

        ProbeSequence {
            strategy: *self,
            home,
            capacity,
            stride,
            attempt: 0,
        }
    }

    /// Short name used in listings and the shell
    pub fn name(&self) -> &'static str {
        match self {
            ProbeStrategy::Linear => "linear",
            ProbeStrategy::Quadratic => "quadratic",
            ProbeStrategy::DoubleHash { .. } => "double",
        }
    }
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStrategy::Linear => write!(f, "Linear Probing"),
            ProbeStrategy::Quadratic => write!(f, "Quadratic Probing"),
            ProbeStrategy::DoubleHash { prime } => write!(f, "Double Hashing (P={})", prime),
        }
    }
}

/// Home index of `key`: `key mod capacity`, always in `[0, capacity)`
///
/// # Panics
///
/// Panics if `capacity` is 0.
pub fn home(key: i64, capacity: usize) -> usize {
    key.rem_euclid(capacity as i64) as usize
}

/// Double hashing step: `P - (key mod P)`, always in `[1, P]`
///
/// # Panics
///
/// Panics if `prime` is 0.
pub fn step(key: i64, prime: u64) -> u64 {
    prime - key.rem_euclid(prime as i64) as u64
}

/// Iterator over the slot indices a strategy visits for one key
///
/// Yields the home index first, then at most `capacity - 1` further indices.
/// Linear and double hashing stop early once the walk cycles back to home.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    strategy: ProbeStrategy,
    home: usize,
    capacity: usize,
    stride: u64,
    attempt: usize,
}

impl ProbeSequence {
    /// The index this sequence started from
    pub fn home(&self) -> usize {
        self.home
    }

    /// Number of indices yielded so far
    pub fn attempts(&self) -> usize {
        self.attempt
    }

    fn offset(&self, i: u128) -> u128 {
        let n = self.capacity as u128;
        match self.strategy {
            ProbeStrategy::Linear => i % n,
            ProbeStrategy::Quadratic => (i * i) % n,
            ProbeStrategy::DoubleHash { .. } => (i * self.stride as u128) % n,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.attempt >= self.capacity {
            return None;
        }

        let i = self.attempt as u128;
        let index = ((self.home as u128 + self.offset(i)) % self.capacity as u128) as usize;

        if i > 0 && index == self.home && self.strategy != ProbeStrategy::Quadratic {
            // Exact cycle: nothing new past this point.
            self.attempt = self.capacity;
            return None;
        }

        self.attempt += 1;
        Some(index)
    }
}
