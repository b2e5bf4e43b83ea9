use crate::constant_pool::{Constant, ConstantPool, decode_modified_utf8, encode_modified_utf8};
use crate::error::ClassFormatError;
use crate::insn::MemberRef;

#[test]
fn first_index_is_one() {
    let mut pool = ConstantPool::new();
    assert!(pool.is_empty());
    assert_eq!(pool.utf8("a").unwrap(), 1);
    assert_eq!(pool.count(), 2);
}

#[test]
fn interning_deduplicates() {
    let mut pool = ConstantPool::new();
    let a = pool.class("com/example/R").unwrap();
    let b = pool.class("com/example/R").unwrap();
    assert_eq!(a, b);
    // Utf8 + Class
    assert_eq!(pool.count(), 3);
    assert_eq!(pool.class_at(a).unwrap(), "com/example/R");
}

#[test]
fn wide_entries_take_two_slots() {
    let mut pool = ConstantPool::new();
    assert_eq!(pool.intern(Constant::Long(7)).unwrap(), 1);
    assert_eq!(pool.integer(7).unwrap(), 3);
    assert!(pool.get(2).is_none());
    assert_eq!(pool.iter().count(), 2);
}

#[test]
fn member_refs_resolve_back() {
    let mut pool = ConstantPool::new();
    let member = MemberRef::new("com/example/R$id", "alpha", "I");
    let index = pool.field_ref(&member).unwrap();
    assert_eq!(pool.member_at(index).unwrap(), member);
    assert!(pool.integer_at(index).is_err());
}

#[test]
fn modified_utf8_nul_and_supplementary() {
    assert_eq!(encode_modified_utf8("a\0b"), vec![b'a', 0xc0, 0x80, b'b']);
    assert_eq!(encode_modified_utf8("é"), "é".as_bytes());

    let emoji = encode_modified_utf8("\u{1F600}");
    assert_eq!(emoji.len(), 6);
    assert_eq!(decode_modified_utf8(&emoji).as_deref(), Some("\u{1F600}"));
    assert_eq!(decode_modified_utf8(&[0xc0, 0x80]).as_deref(), Some("\0"));
}

#[test]
fn modified_utf8_rejects_raw_nul_and_truncation() {
    assert_eq!(decode_modified_utf8(&[0]), None);
    assert_eq!(decode_modified_utf8(&[0xe0, 0x80]), None);
}

#[test]
fn utf8_length_is_limited_in_encoded_bytes() {
    let mut pool = ConstantPool::new();
    assert!(pool.utf8(&"a".repeat(65535)).is_ok());
    assert_eq!(
        pool.utf8(&"a".repeat(65536)),
        Err(ClassFormatError::Utf8TooLong { len: 65536 })
    );
    // NUL takes two bytes in modified UTF-8.
    assert_eq!(
        pool.utf8(&"\0".repeat(32768)),
        Err(ClassFormatError::Utf8TooLong { len: 65536 })
    );
    assert_eq!(pool.count(), 2);
}
