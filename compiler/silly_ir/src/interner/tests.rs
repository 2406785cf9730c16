use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_keywords_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();

    let endwhile = interner.intern("endwhile");
    let var = interner.intern("var");

    assert_eq!(interner.len(), before);
    assert_eq!(interner.lookup(endwhile), "endwhile");
    assert_eq!(interner.lookup(var), "var");
}

#[test]
fn test_len_grows_once_per_distinct_string() {
    let interner = StringInterner::new();
    let before = interner.len();

    interner.intern("x1");
    interner.intern("x1");
    interner.intern("x2");

    assert_eq!(interner.len(), before + 2);
    assert!(!interner.is_empty());
}
