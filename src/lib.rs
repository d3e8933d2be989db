//! # HashLab
//!
//! Fixed-capacity integer hash tables for studying collision resolution:
//! - Open addressing with linear, quadratic, or double-hashing probes
//! - Tombstone deletes that keep probe chains searchable
//! - Separate chaining for comparison
//! - Five classic hash functions (division, mid-square, folding,
//!   multiplication, universal)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     hashlab (binary)                         │
//! │                 clap args → Config → Shell                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Workbench                              │
//! │              (routes commands to active table)               │
//! └───────┬─────────────────────┬─────────────────────┬─────────┘
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!  ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!  │  OpenTable  │       │ChainedTable │       │  HashSuite  │
//!  │ (x3 probes) │       │  (buckets)  │       │ (5 methods) │
//!  └─────────────┘       └─────────────┘       └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use hashlab::table::{OpenTable, ProbeStrategy};
//!
//! let mut table = OpenTable::new(10, ProbeStrategy::Linear).unwrap();
//! table.insert(5).unwrap();
//! table.insert(15).unwrap();
//! table.delete(5).unwrap();
//! assert_eq!(table.search(15).unwrap(), 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod table;
pub mod hashing;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{HashLabError, Result};
pub use config::{Config, StrategyKind};
pub use table::{ChainedTable, OpenTable, ProbeStrategy, Slot};
pub use shell::Workbench;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of HashLab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
