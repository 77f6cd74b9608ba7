//! Mutation detection during enumeration

use crate::common::*;

#[test]
fn undisturbed_cursor_matches_to_array() {
    let list = numbered(10);
    let mut cursor = list.cursor();
    let ids = walk_ids(&mut cursor, &list).unwrap();
    let expected: Vec<u32> = list.to_array().iter().map(|r| r.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(cursor.position(), list.len());
}

#[test]
fn add_during_walk_invalidates() {
    let mut list = numbered(3);
    let mut cursor = list.cursor();
    assert!(cursor.advance(&list).unwrap().is_some());
    list.add_record(rec(50, "late", "v")).unwrap();
    assert!(matches!(
        cursor.advance(&list),
        Err(Error::ConcurrentModification { .. })
    ));
}

#[test]
fn remove_inside_loop_invalidates() {
    let mut list = numbered(4);
    let mut cursor = list.cursor();
    let mut failed = false;
    loop {
        match cursor.advance(&list).map(|record| record.map(|r| r.id)) {
            Ok(Some(id)) => {
                if id == 1 {
                    list.remove_by_id(&id);
                }
            }
            Ok(None) => break,
            Err(err) => {
                assert!(matches!(err, Error::ConcurrentModification { .. }));
                failed = true;
                break;
            }
        }
    }
    assert!(failed);
    assert_eq!(list.len(), 3);
}

#[test]
fn overwrite_and_insert_invalidate() {
    let mut list = numbered(3);

    let mut cursor = list.cursor();
    list.update_at(1, rec(1, "name-1", "new")).unwrap();
    assert!(cursor.advance(&list).is_err());

    let mut cursor = list.cursor();
    list.insert_at(0, rec(9, "front", "v")).unwrap();
    assert!(cursor.advance(&list).is_err());
}

#[test]
fn fresh_cursor_after_mutation_is_valid() {
    let mut list = numbered(3);
    let mut stale = list.cursor();
    list.remove_at(0).unwrap();
    assert!(walk_ids(&mut stale, &list).is_err());

    let mut fresh = list.cursor();
    assert_eq!(walk_ids(&mut fresh, &list).unwrap(), vec![1, 2]);
}

#[test]
fn cloned_cursor_tracks_independently() {
    let list = numbered(3);
    let mut a = list.cursor();
    a.advance(&list).unwrap();
    let mut b = a.clone();
    assert_eq!(walk_ids(&mut b, &list).unwrap(), vec![1, 2]);
    assert_eq!(a.position(), 1);
}

#[test]
fn cursor_refuses_a_different_list_at_the_same_version() {
    let a = numbered(2);
    let mut b = TestList::new();
    b.add_record(rec(77, "x", "v")).unwrap();
    b.add_record(rec(78, "y", "v")).unwrap();
    assert_eq!(a.version(), b.version());

    let mut cursor = a.cursor();
    assert_eq!(cursor.advance(&b), Err(Error::ForeignCursor));
    assert_eq!(walk_ids(&mut cursor, &a).unwrap(), vec![0, 1]);
}

#[test]
fn cursor_refuses_a_clone_of_its_list() {
    let list = numbered(3);
    let copy = list.clone();
    assert_eq!(copy.version(), list.version());

    let mut cursor = list.cursor();
    assert_eq!(walk_ids(&mut cursor, &copy), Err(Error::ForeignCursor));

    let mut own = copy.cursor();
    assert_eq!(walk_ids(&mut own, &copy).unwrap(), vec![0, 1, 2]);
    assert_eq!(own.advance(&list), Err(Error::ForeignCursor));
}
