//! Configuration for HashLab
//!
//! Centralized configuration with sensible defaults. Built once at startup
//! and handed to every component that needs it.

use crate::error::{HashLabError, Result};
use crate::table::ProbeStrategy;

/// Main configuration for a HashLab session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Table Configuration
    // -------------------------------------------------------------------------
    /// Number of slots in every table (fixed, never resized)
    pub capacity: usize,

    /// Probe strategy selected when a session starts
    pub default_strategy: StrategyKind,

    /// Prime P used by the double-hashing step `P - (key mod P)`
    pub double_hash_prime: u64,

    // -------------------------------------------------------------------------
    // Universal Hashing Configuration
    // -------------------------------------------------------------------------
    /// Small prime the universal hash reduces through before `mod size`
    pub universal_prime: u64,

    /// Seed for the universal hash parameters.
    /// `None` draws them from OS entropy.
    pub universal_seed: Option<u64>,
}

/// Probe strategy names as they appear in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Linear,
    Quadratic,
    DoubleHash,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 10,
            default_strategy: StrategyKind::Linear,
            double_hash_prime: 7,
            universal_prime: 7,
            universal_seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check every value before any table is built
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(HashLabError::InvalidCapacity(self.capacity));
        }
        if !is_prime(self.double_hash_prime) {
            return Err(HashLabError::Config(format!(
                "double hash prime must be prime, got {}",
                self.double_hash_prime
            )));
        }
        if !is_prime(self.universal_prime) {
            return Err(HashLabError::Config(format!(
                "universal prime must be prime, got {}",
                self.universal_prime
            )));
        }
        Ok(())
    }

    /// Resolve a strategy kind into a concrete probe strategy
    pub fn strategy(&self, kind: StrategyKind) -> ProbeStrategy {
        match kind {
            StrategyKind::Linear => ProbeStrategy::Linear,
            StrategyKind::Quadratic => ProbeStrategy::Quadratic,
            StrategyKind::DoubleHash => ProbeStrategy::DoubleHash {
                prime: self.double_hash_prime,
            },
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the table capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the strategy a session starts with
    pub fn default_strategy(mut self, kind: StrategyKind) -> Self {
        self.config.default_strategy = kind;
        self
    }

    /// Set the double hashing prime
    pub fn double_hash_prime(mut self, prime: u64) -> Self {
        self.config.double_hash_prime = prime;
        self
    }

    /// Set the universal hashing prime
    pub fn universal_prime(mut self, prime: u64) -> Self {
        self.config.universal_prime = prime;
        self
    }

    /// Fix the universal hash seed for reproducible runs
    pub fn universal_seed(mut self, seed: u64) -> Self {
        self.config.universal_seed = Some(seed);
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Trial-division primality check for small configuration primes
pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
