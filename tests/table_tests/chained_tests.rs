//! ChainedTable Tests

use hashlab::{ChainedTable, HashLabError};

#[test]
fn test_new_chained_table_is_empty() {
    let t = ChainedTable::new(10).unwrap();
    assert_eq!(t.capacity(), 10);
    assert!(t.is_empty());
    assert_eq!(t.longest_chain(), 0);
}

#[test]
fn test_zero_capacity_rejected() {
    assert_eq!(ChainedTable::new(0).unwrap_err(), HashLabError::InvalidCapacity(0));
}

#[test]
fn test_colliding_keys_share_a_bucket() {
    let mut t = ChainedTable::new(10).unwrap();
    t.insert(5).unwrap();
    t.insert(15).unwrap();
    t.insert(25).unwrap();

    assert_eq!(t.search(15), Ok(5));
    assert_eq!(t.bucket(5), Some(vec![25, 15, 5]));
    assert_eq!(t.longest_chain(), 3);
    assert_eq!(t.len(), 3);
}

#[test]
fn test_duplicate_rejected() {
    let mut t = ChainedTable::new(10).unwrap();
    t.insert(3).unwrap();
    assert_eq!(t.insert(3), Err(HashLabError::DuplicateKey { key: 3 }));
    assert_eq!(t.len(), 1);
}

#[test]
fn test_delete_from_middle_of_chain() {
    let mut t = ChainedTable::new(10).unwrap();
    for key in [1, 11, 21] {
        t.insert(key).unwrap();
    }
    t.delete(11).unwrap();

    assert_eq!(t.bucket(1), Some(vec![21, 1]));
    assert_eq!(t.search(11), Err(HashLabError::NotFound { key: 11 }));
    assert_eq!(t.delete(11), Err(HashLabError::NotFound { key: 11 }));
}

#[test]
fn test_never_full() {
    let mut t = ChainedTable::new(2).unwrap();
    for key in 0..50 {
        t.insert(key).unwrap();
    }
    assert_eq!(t.len(), 50);
}

#[test]
fn test_display_lists_chains() {
    let mut t = ChainedTable::new(3).unwrap();
    t.insert(1).unwrap();
    t.insert(4).unwrap();

    assert_eq!(t.to_string(), "Index 0: Empty\nIndex 1: 4 -> 1\nIndex 2: Empty\n");
}

#[test]
fn test_bucket_out_of_range() {
    let t = ChainedTable::new(3).unwrap();
    assert_eq!(t.bucket(3), None);
    assert_eq!(t.bucket(0), Some(vec![]));
}

#[test]
fn test_newest_first_after_delete_and_reinsert() {
    let mut t = ChainedTable::new(10).unwrap();
    for key in [2, 12, 22] {
        t.insert(key).unwrap();
    }
    t.delete(2).unwrap();
    t.insert(2).unwrap();

    assert_eq!(t.bucket(2), Some(vec![2, 22, 12]));
    assert_eq!(
        t.to_string().lines().nth(2),
        Some("Index 2: 2 -> 22 -> 12")
    );
}
