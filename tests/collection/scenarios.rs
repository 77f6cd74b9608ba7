//! End-to-end usage flows

use crate::common::*;

#[test]
fn duplicate_key_then_remove_front() {
    let mut list: PairList<u32, &str, &str> = PairList::new();
    list.add(1, "a", "x").unwrap();
    list.add(2, "b", "y").unwrap();

    assert_eq!(list.add(1, "a", "z"), Err(Error::DuplicateKey));
    assert_eq!(list.len(), 2);
    assert_eq!(list.find_value_by_id(&2), Ok(&"y"));

    list.remove_at(0).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.to_array(), vec![Record::new(2, "b", "y")]);
}

#[test]
fn negative_size_rejected_then_single_growth() {
    let err = TestList::try_with_capacity(-1).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let mut list = TestList::try_with_capacity(3).unwrap();
    for i in 0..3 {
        list.add(i, format!("n{i}"), "v".to_string()).unwrap();
    }
    assert_eq!(list.capacity(), 3);

    list.add(3, "n3".to_string(), "v".to_string()).unwrap();
    assert!(list.capacity() >= 4);
    assert_eq!(list.capacity(), 6);
}

#[test]
fn update_found_record_by_predicate() {
    let mut list = PairList::with_unique_keys(false);
    for i in 0..1000u32 {
        list.add(i, format!("name-{i}"), i.to_string()).unwrap();
    }

    let target = 417;
    let mut item = list.find(|r| r.id == target).unwrap().clone();
    assert_eq!(item.value, "417");

    item.value = "hello world".to_string();
    list.update_at(target as usize, item.clone()).unwrap();
    assert_eq!(list.find_value_by_id(&target).unwrap(), "hello world");

    item.value = String::new();
    let index = list.update_by_predicate(|r| r.id == target, item.clone()).unwrap();
    assert_eq!(index, target as usize);

    assert_eq!(list.find_value_by_id(&item.id).unwrap(), "");
    assert_eq!(list.find_value_by_name(&item.name).unwrap(), "");
    assert_eq!(list.find_value_by_pair(&item.id, &item.name).unwrap(), "");
}

#[test]
fn user_defined_id_type_compared_by_value() {
    #[derive(Debug, Clone, PartialEq)]
    struct Coder {
        name: String,
        age: u32,
    }

    let peter = Coder {
        name: "Peter".to_string(),
        age: 31,
    };
    let mut list = PairList::new();
    list.add(peter.clone(), "1.0e04".to_string(), 1u8).unwrap();

    let lookalike = Coder {
        name: "Peter".to_string(),
        age: 31,
    };
    assert_eq!(list.index_of_id(&lookalike), Some(0));
    assert_eq!(
        list.add(lookalike, "1.0e04".to_string(), 2u8),
        Err(Error::DuplicateKey)
    );
}

#[test]
fn list_built_from_config_document() {
    let config: PairListConfig =
        serde_json::from_str(r#"{ "unique_keys": false, "initial_capacity": 2, "max_capacity": 3 }"#)
            .unwrap();
    let mut list = TestList::from_config(config).unwrap();
    assert!(!list.unique_keys());
    assert_eq!(list.capacity(), 2);

    list.add_all(vec![rec(1, "a", "x"), rec(1, "a", "x"), rec(2, "b", "y")])
        .unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.capacity(), 3);
    assert!(list.add_record(rec(4, "d", "w")).is_err());
}

#[test]
fn absent_parts_rejected_before_mutation() {
    let mut list = numbered(2);
    let version = list.version();

    let err = list.try_add(None, Some("x".to_string()), Some("y".to_string()));
    assert_eq!(err, Err(Error::NullArgument("id")));
    assert_eq!(list.len(), 2);
    assert_eq!(list.version(), version);
}
