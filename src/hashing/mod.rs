//! Hashing Module
//!
//! Classic integer hash functions, independent of any table.
//!
//! ## Methods
//! - Division:       `key mod size`
//! - Mid-square:     middle digits of `key²`, mod size
//! - Folding:        sum of 3-digit groups, mod size
//! - Multiplication: `floor(size * frac(key * 0.618...))`
//! - Universal:      `((a * key + b) mod p) mod size`, `a`/`b` seeded once

mod functions;
mod universal;

use std::fmt;
use std::str::FromStr;

pub use functions::{division, folding, mid_square, multiplication, GOLDEN_FRACTION};
pub use universal::UniversalHash;

use crate::config::Config;
use crate::error::HashLabError;

/// The five hash functions by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMethod {
    Division,
    MidSquare,
    Folding,
    Multiplication,
    Universal,
}

impl HashMethod {
    /// All methods, in menu order
    pub const ALL: [HashMethod; 5] = [
        HashMethod::Division,
        HashMethod::MidSquare,
        HashMethod::Folding,
        HashMethod::Multiplication,
        HashMethod::Universal,
    ];
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashMethod::Division => "division",
            HashMethod::MidSquare => "mid-square",
            HashMethod::Folding => "folding",
            HashMethod::Multiplication => "multiplication",
            HashMethod::Universal => "universal",
        };
        f.write_str(name)
    }
}

impl FromStr for HashMethod {
    type Err = HashLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "division" | "div" => Ok(HashMethod::Division),
            "mid-square" | "midsquare" | "mid" => Ok(HashMethod::MidSquare),
            "folding" | "fold" => Ok(HashMethod::Folding),
            "multiplication" | "mul" => Ok(HashMethod::Multiplication),
            "universal" | "uni" => Ok(HashMethod::Universal),
            other => Err(HashLabError::Parse(format!("unknown hash method '{}'", other))),
        }
    }
}

/// Evaluates any of the five methods against one set of universal parameters
#[derive(Debug, Clone)]
pub struct HashSuite {
    universal: UniversalHash,
}

impl HashSuite {
    /// Wrap already drawn universal parameters
    pub fn new(universal: UniversalHash) -> Self {
        Self { universal }
    }

    /// Build the suite once from config
    pub fn from_config(config: &Config) -> Result<Self, HashLabError> {
        Ok(Self::new(UniversalHash::from_config(config)?))
    }

    /// Hash `key` into `[0, size)` with `method`
    pub fn index(&self, method: HashMethod, key: i64, size: usize) -> usize {
        match method {
            HashMethod::Division => division(key, size),
            HashMethod::MidSquare => mid_square(key, size),
            HashMethod::Folding => folding(key, size),
            HashMethod::Multiplication => multiplication(key, size),
            HashMethod::Universal => self.universal.hash(key, size),
        }
    }

    /// Parameters behind the universal method
    pub fn universal(&self) -> &UniversalHash {
        &self.universal
    }
}
