//! Capacity policy
//!
//! - Growth never fails below the configured maximum
//! - Capacity is always at least the length
//! - Removal never shrinks capacity

use crate::common::*;
use pairlist::DEFAULT_CAPACITY;

#[test]
fn appends_never_fail_for_capacity() {
    let mut list = TestList::new();
    let mut seen = Vec::new();
    for i in 0..200 {
        list.add(i, format!("n{i}"), String::new()).unwrap();
        assert!(list.capacity() >= list.len());
        if seen.last() != Some(&list.capacity()) {
            seen.push(list.capacity());
        }
    }
    assert_eq!(seen, vec![4, 8, 16, 32, 64, 128, 256]);
}

#[test]
fn first_growth_from_empty_is_default() {
    let mut list = TestList::new();
    list.insert_at(0, rec(1, "a", "x")).unwrap();
    assert_eq!(list.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn removal_keeps_capacity() {
    let mut list = numbered(9);
    let capacity = list.capacity();
    while !list.is_empty() {
        list.remove_at(list.len() - 1).unwrap();
    }
    assert_eq!(list.capacity(), capacity);
}

#[test]
fn set_capacity_does_not_bump_version() {
    let mut list = numbered(3);
    let version = list.version();
    list.set_capacity(50).unwrap();
    assert_eq!(list.version(), version);
    assert_eq!(names(&list), vec!["name-0", "name-1", "name-2"]);
}

#[test]
fn set_capacity_rejects_below_length_and_above_max() {
    let mut list = TestList::from_config(PairListConfig {
        max_capacity: Some(8),
        ..PairListConfig::default()
    })
    .unwrap();
    for i in 0..5 {
        list.add(i, i.to_string(), String::new()).unwrap();
    }

    assert!(matches!(
        list.set_capacity(4),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        list.set_capacity(9),
        Err(Error::InvalidArgument { .. })
    ));
    list.set_capacity(5).unwrap();
    assert_eq!(list.capacity(), 5);
    assert_eq!(list.max_capacity(), 8);
}

#[test]
fn config_rejects_initial_above_max() {
    let result = TestList::from_config(PairListConfig {
        initial_capacity: 16,
        max_capacity: Some(8),
        ..PairListConfig::default()
    });
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn clone_keeps_capacity_and_contents() {
    let list = numbered(5);
    let copy = list.clone();
    assert_eq!(copy.capacity(), list.capacity());
    assert_eq!(copy.to_array(), list.to_array());
}

#[test]
fn bulk_add_reserves_exactly_once() {
    let mut list = TestList::new();
    list.add_all((0..10).map(|i| rec(i, &format!("n{i}"), "v")))
        .unwrap();
    assert_eq!(list.len(), 10);
    assert_eq!(list.capacity(), 10);
}

#[test]
fn reserve_beyond_maximum_is_rejected() {
    let mut list = TestList::from_config(PairListConfig {
        max_capacity: Some(8),
        ..PairListConfig::default()
    })
    .unwrap();
    let version = list.version();

    list.reserve(8).unwrap();
    assert_eq!(list.capacity(), 8);
    assert!(matches!(list.reserve(9), Err(Error::InvalidArgument { .. })));
    assert_eq!(list.capacity(), 8);
    assert_eq!(list.version(), version);
}
