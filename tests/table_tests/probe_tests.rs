//! Probe Sequence Tests
//!
//! Tests verify:
//! - Index formulas for each strategy
//! - The N-attempt bound
//! - Double hashing step never stalls

use hashlab::table::{step, ProbeStrategy};
use hashlab::{Config, StrategyKind};

fn path(strategy: ProbeStrategy, key: i64, capacity: usize) -> Vec<usize> {
    strategy.sequence(key, capacity).collect()
}

// =============================================================================
// Formula Tests
// =============================================================================

#[test]
fn test_linear_formula() {
    let p = path(ProbeStrategy::Linear, 25, 10);
    for (i, index) in p.iter().enumerate() {
        assert_eq!(*index, (5 + i) % 10);
    }
}

#[test]
fn test_quadratic_formula() {
    let p = path(ProbeStrategy::Quadratic, 3, 11);
    assert_eq!(p.len(), 11);
    for (i, index) in p.iter().enumerate() {
        assert_eq!(*index, (3 + i * i) % 11);
    }
}

#[test]
fn test_double_hash_formula() {
    // key 10, P = 7: step 4; 13 slots -> full cycle of 13 distinct indices
    let strategy = ProbeStrategy::DoubleHash { prime: 7 };
    let p = path(strategy, 10, 13);
    assert_eq!(p.len(), 13);
    for (i, index) in p.iter().enumerate() {
        assert_eq!(*index, (10 + i * 4) % 13);
    }
}

#[test]
fn test_sequence_starts_at_home() {
    for strategy in [
        ProbeStrategy::Linear,
        ProbeStrategy::Quadratic,
        ProbeStrategy::DoubleHash { prime: 7 },
    ] {
        for key in [0i64, 1, 17, 99, -4] {
            let seq = strategy.sequence(key, 10);
            assert_eq!(seq.home(), key.rem_euclid(10) as usize);
            assert_eq!(path(strategy, key, 10)[0], seq.home());
        }
    }
}

// =============================================================================
// Bound Tests
// =============================================================================

#[test]
fn test_every_sequence_is_bounded_by_capacity() {
    for capacity in 1..=16usize {
        for strategy in [
            ProbeStrategy::Linear,
            ProbeStrategy::Quadratic,
            ProbeStrategy::DoubleHash { prime: 7 },
        ] {
            for key in 0..40i64 {
                assert!(path(strategy, key, capacity).len() <= capacity);
            }
        }
    }
}

#[test]
fn test_linear_covers_all_slots() {
    let mut p = path(ProbeStrategy::Linear, 3, 8);
    p.sort_unstable();
    assert_eq!(p, (0..8).collect::<Vec<_>>());
}

#[test]
fn test_attempts_counter() {
    let mut seq = ProbeStrategy::Linear.sequence(0, 4);
    assert_eq!(seq.attempts(), 0);
    seq.next();
    seq.next();
    assert_eq!(seq.attempts(), 2);
}

// =============================================================================
// Double Hashing Step Tests
// =============================================================================

#[test]
fn test_step_never_zero() {
    for prime in [2u64, 3, 5, 7, 11, 13] {
        for key in -200i64..200 {
            let s = step(key, prime);
            assert_ne!(s, 0, "step({}, {}) stalled", key, prime);
            assert!(s <= prime);
        }
    }
}

#[test]
fn test_step_values() {
    assert_eq!(step(0, 7), 7);
    assert_eq!(step(1, 7), 6);
    assert_eq!(step(6, 7), 1);
    assert_eq!(step(15, 7), 6);
}

#[test]
fn test_config_resolves_strategies() {
    let config = Config::default();
    assert_eq!(config.strategy(StrategyKind::Linear), ProbeStrategy::Linear);
    assert_eq!(config.strategy(StrategyKind::Quadratic), ProbeStrategy::Quadratic);
    assert_eq!(
        config.strategy(StrategyKind::DoubleHash),
        ProbeStrategy::DoubleHash { prime: 7 }
    );
}
