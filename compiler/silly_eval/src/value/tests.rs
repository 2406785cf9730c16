use super::*;
use crate::EvalError;
use pretty_assertions::assert_eq;

#[test]
fn test_heap_reuses_handles() {
    let mut heap = StringHeap::new();
    let a = heap.intern("abc");
    let b = heap.intern("xyz");
    assert_eq!(heap.intern("abc"), a);
    assert_ne!(a, b);
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.get(b), "xyz");
}

#[test]
fn test_raw() {
    let mut heap = StringHeap::new();
    let s = Value::string("hi", &mut heap);
    assert_eq!(s.raw(&heap), RawValue::Str("hi"));
    assert_eq!(Value::Int(3).raw(&heap), RawValue::Int(3));

    let list = Value::list(vec![Value::Bool(true)]);
    assert_eq!(list.raw(&heap), RawValue::List(&[Value::Bool(true)]));
}

#[test]
fn test_stringify_and_display() {
    let mut heap = StringHeap::new();
    let s = Value::string("a b", &mut heap);
    let list = Value::list(vec![
        Value::Int(1),
        s.clone(),
        Value::list(vec![Value::Bool(false)]),
    ]);

    assert_eq!(s.stringify(&heap), "\"a b\"");
    assert_eq!(s.display(&heap), "a b");
    assert_eq!(list.stringify(&heap), "[1 \"a b\" [false]]");
    assert_eq!(list.display(&heap), "[1 \"a b\" [false]]");
    assert_eq!(Value::list(vec![]).display(&heap), "[]");
}

#[test]
fn test_compare_same_kind() {
    let mut heap = StringHeap::new();
    let apple = Value::string("apple", &mut heap);
    let banana = Value::string("banana", &mut heap);

    assert_eq!(Value::Int(2).compare(&Value::Int(10), &heap).unwrap(), Ordering::Less);
    assert_eq!(apple.compare(&banana, &heap).unwrap(), Ordering::Less);
    assert_eq!(
        Value::Bool(true).compare(&Value::Bool(false), &heap).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_compare_lists() {
    let heap = StringHeap::new();
    let short = Value::list(vec![Value::Int(1)]);
    let long = Value::list(vec![Value::Int(1), Value::Int(0)]);
    let bigger = Value::list(vec![Value::Int(2)]);

    assert_eq!(short.compare(&long, &heap).unwrap(), Ordering::Less);
    assert_eq!(long.compare(&bigger, &heap).unwrap(), Ordering::Less);
    assert_eq!(short.compare(&short.clone(), &heap).unwrap(), Ordering::Equal);

    let mixed = Value::list(vec![Value::Bool(true)]);
    assert!(matches!(
        short.compare(&mixed, &heap),
        Err(EvalError::TypeMismatch { .. })
    ));
}

#[test]
fn test_compare_kind_mismatch() {
    let mut heap = StringHeap::new();
    let s = Value::string("1", &mut heap);
    assert_eq!(
        Value::Int(1).compare(&s, &heap),
        Err(EvalError::TypeMismatch {
            operation: "comparison".to_owned(),
            found: "integer and string".to_owned(),
        })
    );
}
