//! Universal hashing
//!
//! `h(key) = ((a * key + b) mod p) mod size`, with `a` and `b` drawn once
//! from a seeded generator. The parameters are an explicit value owned by
//! whoever built it, so two hashers with the same seed agree everywhere.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{is_prime, Config};
use crate::error::{HashLabError, Result};

/// Randomised hash parameters, fixed for the lifetime of the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalHash {
    /// Multiplier, in `[1, size]`
    a: u64,

    /// Offset, in `[0, size)`
    b: u64,

    /// Small prime reduced through before `mod size`
    prime: u64,
}

impl UniversalHash {
    /// Draw parameters for tables of `size` slots from `rng`
    ///
    /// Fails with `HashLabError::Config` unless `prime` is prime.
    pub fn from_rng<R: Rng>(rng: &mut R, size: usize, prime: u64) -> Result<Self> {
        check_prime(prime)?;

        let size = size.max(1) as u64;
        let a = rng.random_range(1..=size);
        let b = rng.random_range(0..size);

        Ok(Self { a, b, prime })
    }

    /// Draw parameters from a fixed seed
    pub fn with_seed(seed: u64, size: usize, prime: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng, size, prime)
    }

    /// Build from config: the configured seed, or OS entropy without one
    pub fn from_config(config: &Config) -> Result<Self> {
        let hash = match config.universal_seed {
            Some(seed) => Self::with_seed(seed, config.capacity, config.universal_prime)?,
            None => {
                let mut rng = StdRng::from_os_rng();
                Self::from_rng(&mut rng, config.capacity, config.universal_prime)?
            }
        };

        debug!(a = hash.a, b = hash.b, prime = hash.prime, "universal hash parameters drawn");
        Ok(hash)
    }

    /// Use explicit parameters
    pub fn from_parts(a: u64, b: u64, prime: u64) -> Result<Self> {
        check_prime(prime)?;
        Ok(Self { a, b, prime })
    }

    /// Hash `key` into `[0, size)`
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn hash(&self, key: i64, size: usize) -> usize {
        debug_assert!(size > 0, "hash size must be non-zero");
        let a = self.a as i128;
        let b = self.b as i128;
        let mixed = (a * key as i128 + b).rem_euclid(self.prime as i128);

        (mixed as u128 % size as u128) as usize
    }

    /// Multiplier
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Offset
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Prime reduced through before `mod size`
    pub fn prime(&self) -> u64 {
        self.prime
    }
}

fn check_prime(prime: u64) -> Result<()> {
    if is_prime(prime) {
        Ok(())
    } else {
        Err(HashLabError::Config(format!(
            "universal prime must be prime, got {}",
            prime
        )))
    }
}
