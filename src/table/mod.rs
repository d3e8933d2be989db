//! Table Module
//!
//! Fixed-capacity integer hash tables.
//!
//! ## Responsibilities
//! - Open addressing over a single owned slot array
//! - Pluggable probe sequences (linear, quadratic, double hashing)
//! - Tombstone deletes that keep later probe chains reachable
//! - Separate chaining as the bucket-list alternative
//!
//! ## Slot Lifecycle
//! ```text
//!   Empty ──insert──► Occupied(key) ──delete──► Tombstone
//!                          ▲                        │
//!                          └─────────insert─────────┘
//! ```
//! A tombstone never turns back into `Empty`: a search that stopped there
//! would miss keys placed further along the same probe chain.

mod probe;
mod open;
mod chained;

pub use probe::{home, step, ProbeSequence, ProbeStrategy};
pub use open::OpenTable;
pub use chained::ChainedTable;

/// State of one slot in an open-addressing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Never written
    Empty,

    /// Holds a live key
    Occupied(i64),

    /// Held a key that was deleted
    Tombstone,
}
