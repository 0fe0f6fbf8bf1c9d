use alloc::{string::String, vec, vec::Vec};
use core::ffi::CStr;

use bumpalo::Bump;
use pretty_assertions::assert_eq;

use super::StringRef;
use crate::{error::ViewError, test_utils::init_test_logging};

const NPOS: usize = StringRef::NPOS;

// ============================
// Scenario: "hello,world"
// ============================

#[test]
fn hello_world_scenario() {
    let s = StringRef::from("hello,world");
    assert_eq!(s.len(), 11);

    let (left, right) = s.split(b',');
    assert_eq!(left, "hello");
    assert_eq!(right, "world");

    assert_eq!(s.find(b'o', 0), 4);
    assert_eq!(s.rfind(b'o', NPOS), 7);
    assert_eq!(s.substr(6, NPOS), "world");
    assert_eq!(s.take_front(5), "hello");
    assert_eq!(s.compare("hello,world".into()), 0);
    assert_eq!(s.compare("hello,worlda".into()), -1);
}

#[test]
fn empty_scenario() {
    let s = StringRef::empty();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    for c in [0u8, b'a', 0xff] {
        assert_eq!(s.find(c, 0), NPOS);
        assert_eq!(s.rfind(c, NPOS), NPOS);
    }
    assert!(s.substr(0, NPOS).is_empty());
    let (left, right) = s.split(b'x');
    assert!(left.is_empty());
    assert!(right.is_empty());
}

// ============================
// Construction
// ============================

#[test]
fn construct_from_cstr_excludes_terminator() {
    let c = CStr::from_bytes_with_nul(b"abc\0").unwrap();
    let s = StringRef::from(c);
    assert_eq!(s.len(), 3);
    assert_eq!(s, "abc");
}

#[test]
fn construct_from_raw_c_pointer() {
    let raw = b"hey\0";
    // SAFETY: `raw` is NUL-terminated and outlives the view.
    let s = unsafe { StringRef::from_ptr(raw.as_ptr().cast()) };
    assert_eq!(s, "hey");
}

#[test]
fn null_pointer_is_explicitly_empty() {
    // SAFETY: null is handled by the constructor.
    let s = unsafe { StringRef::from_ptr_or_empty(core::ptr::null()) };
    assert!(s.is_empty());

    // SAFETY: zero length never reads the pointer.
    let s = unsafe { StringRef::from_raw_parts(core::ptr::null(), 0) };
    assert!(s.is_empty());
}

#[test]
fn construct_from_owning_string() {
    let owned = String::from("owned");
    let s = StringRef::from(&owned);
    assert_eq!(s.len(), owned.len());
    assert_eq!(s.data(), owned.as_ptr());
}

#[test]
fn embedded_nul_is_part_of_the_string() {
    let s = StringRef::from(b"a\0b");
    assert_eq!(s.len(), 3);
    assert_eq!(s.find(0, 0), 1);
    assert_eq!(s[2], b'b');
}

// ============================
// Equality and ordering
// ============================

#[test]
fn equals_is_byte_exact() {
    assert!(StringRef::from("abc").equals("abc".into()));
    assert!(!StringRef::from("abc").equals("abd".into()));
    assert!(!StringRef::from("abc").equals("ab".into()));
    assert!(StringRef::empty().equals("".into()));
}

#[test]
fn compare_orders_by_shared_prefix_then_length() {
    let cmp = |a: &str, b: &str| StringRef::from(a).compare(b.into());
    assert_eq!(cmp("", ""), 0);
    assert_eq!(cmp("", "a"), -1);
    assert_eq!(cmp("a", ""), 1);
    assert_eq!(cmp("abc", "abd"), -1);
    assert_eq!(cmp("abd", "abc"), 1);
    assert_eq!(cmp("ab", "abc"), -1);
    assert_eq!(cmp("b", "abc"), 1);
}

#[test]
fn compare_treats_nul_as_an_ordinary_byte() {
    let a = StringRef::from(b"a\0z");
    let b = StringRef::from(b"a\0b");
    assert_eq!(a.compare(b), 1);
    assert!(a > b);
}

#[test]
fn ordering_operators_follow_compare() {
    let a = StringRef::from("apple");
    let b = StringRef::from("banana");
    assert!(a < b);
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(a <= a);
    assert!(a >= a);

    let mut words = vec![b, a, StringRef::from("app")];
    words.sort();
    assert_eq!(words, vec!["app", "apple", "banana"]);
}

// ============================
// Affixes
// ============================

#[test]
fn starts_with_and_ends_with() {
    let s = StringRef::from("prefix-body-suffix");
    assert!(s.starts_with("prefix"));
    assert!(s.starts_with(""));
    assert!(!s.starts_with("body"));
    assert!(s.ends_with("suffix"));
    assert!(s.ends_with(""));
    assert!(!s.ends_with("body"));
    assert!(!StringRef::from("ab").starts_with("abc"));
    assert!(!StringRef::from("bc").ends_with("abc"));
}

#[test]
fn consume_front_removes_prefix_only_when_present() {
    let mut s = StringRef::from("key=value");
    assert!(!s.consume_front("value"));
    assert_eq!(s, "key=value");
    assert!(s.consume_front("key="));
    assert_eq!(s, "value");
}

#[test]
fn consume_back_removes_suffix_only_when_present() {
    let mut s = StringRef::from("file.tar.gz");
    assert!(s.consume_back(".gz"));
    assert!(!s.consume_back(".gz"));
    assert_eq!(s, "file.tar");
}

// ============================
// Searching
// ============================

#[test]
fn find_respects_from() {
    let s = StringRef::from("abcabc");
    assert_eq!(s.find(b'b', 0), 1);
    assert_eq!(s.find(b'b', 2), 4);
    assert_eq!(s.find(b'b', 5), NPOS);
    assert_eq!(s.find(b'b', 100), NPOS);
    assert_eq!(s.find_first_of(b'c', 0), 2);
}

#[test]
fn rfind_searches_before_from() {
    let s = StringRef::from("abcabc");
    assert_eq!(s.rfind(b'a', NPOS), 3);
    assert_eq!(s.rfind(b'a', 3), 0);
    assert_eq!(s.rfind(b'a', 0), NPOS);
    assert_eq!(s.find_last_of(b'c', NPOS), 5);
}

#[test]
fn find_and_rfind_agree_on_single_occurrence() {
    let s = StringRef::from("xx#yy");
    assert_eq!(s.find(b'#', 0), s.rfind(b'#', NPOS));
}

#[test]
fn count_occurrences() {
    let s = StringRef::from("mississippi");
    assert_eq!(s.count(b's'), 4);
    assert_eq!(s.count(b'z'), 0);
    assert_eq!(StringRef::empty().count(b'a'), 0);
}

// ============================
// Sub-strings
// ============================

#[test]
fn substr_never_fails() {
    let s = StringRef::from("hello");
    assert_eq!(s.substr(1, 3), "ell");
    assert_eq!(s.substr(3, 100), "lo");
    assert!(s.substr(5, 1).is_empty());
    assert!(s.substr(NPOS, NPOS).is_empty());
    assert!(s.substr(1000, 2).is_empty());
}

#[test]
fn take_front_and_back() {
    let s = StringRef::from("hello");
    assert_eq!(s.take_front(2), "he");
    assert_eq!(s.take_back(2), "lo");
    assert_eq!(s.take_front(10), "hello");
    assert_eq!(s.take_back(10), "hello");
    assert!(s.take_front(0).is_empty());
}

#[test]
fn drop_front_and_back_honor_count() {
    let s = StringRef::from("hello");
    assert_eq!(s.drop_front(2), "llo");
    assert_eq!(s.drop_back(2), "hel");
    assert!(s.drop_front(5).is_empty());
    assert!(s.drop_back(5).is_empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "Dropping more elements than exist")]
fn drop_front_past_end_panics() {
    StringRef::from("ab").drop_front(3);
}

#[test]
#[cfg(not(debug_assertions))]
fn drop_past_end_without_assertions_follows_substr_clamping() {
    let s = StringRef::from("ab");
    assert!(s.drop_front(3).is_empty());
    assert_eq!(s.drop_back(3), "ab");
}

#[test]
fn checked_drops_report_errors() {
    let s = StringRef::from("ab");
    assert_eq!(
        s.try_drop_front(3),
        Err(ViewError::DropPastEnd { count: 3, len: 2 })
    );
    assert_eq!(
        s.try_drop_back(3),
        Err(ViewError::DropPastEnd { count: 3, len: 2 })
    );
    assert_eq!(s.try_drop_back(1), Ok(StringRef::from("a")));
}

#[test]
fn slice_clamps_both_ends() {
    let s = StringRef::from("0123456789");
    assert_eq!(s.slice(2, 5), "234");
    assert_eq!(s.slice(7, NPOS), "789");
    assert!(s.slice(5, 2).is_empty());
    assert!(s.slice(20, 30).is_empty());
}

#[test]
fn split_uses_first_separator() {
    let s = StringRef::from("a=b=c");
    let (left, right) = s.split(b'=');
    assert_eq!(left, "a");
    assert_eq!(right, "b=c");

    let (left, right) = s.split(b'#');
    assert_eq!(left, s);
    assert!(right.is_empty());

    let (left, right) = StringRef::from("=").split(b'=');
    assert!(left.is_empty());
    assert!(right.is_empty());
}

// ============================
// Element access
// ============================

#[test]
fn front_back_and_index() {
    let s = StringRef::from("xyz");
    assert_eq!(s.front(), b'x');
    assert_eq!(s.back(), b'z');
    assert_eq!(s[1], b'y');
    assert_eq!(s.try_get(3), Err(ViewError::IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(StringRef::empty().try_front(), Err(ViewError::Empty));
    assert_eq!(StringRef::empty().try_back(), Err(ViewError::Empty));
}

#[test]
fn bytes_range_is_restartable() {
    let s = StringRef::from("abc");
    let range = s.bytes();
    let once: Vec<u8> = range.iter().copied().collect();
    let twice: Vec<u8> = range.iter().copied().collect();
    assert_eq!(once, b"abc".to_vec());
    assert_eq!(once, twice);
}

// ============================
// Owned copies
// ============================

#[test]
fn str_materializes_utf8() {
    assert_eq!(StringRef::from("héllo").str(), Ok(String::from("héllo")));
    assert_eq!(StringRef::empty().str(), Ok(String::new()));
    assert_eq!(
        StringRef::from(b"ok\xff").str(),
        Err(ViewError::InvalidUtf8 { valid_up_to: 2 })
    );
    let s: Result<String, _> = StringRef::from("x").try_into();
    assert_eq!(s, Ok(String::from("x")));
}

#[test]
fn to_vec_is_byte_exact() {
    let s = StringRef::from(b"\xff\x00a");
    let owned: Vec<u8> = s.into();
    assert_eq!(owned, vec![0xff, 0x00, b'a']);
    assert_eq!(s.to_vec(), owned);
}

#[test]
fn append_onto_growable_buffer() {
    let mut buf = b"head:".to_vec();
    buf += StringRef::from("tail");
    StringRef::from("!").append_to(&mut buf);
    assert_eq!(buf, b"head:tail!".to_vec());
}

#[test]
fn copy_into_arena_outlives_source() {
    init_test_logging();
    let arena = Bump::new();
    let copied = {
        let source = String::from("temporary");
        StringRef::from(&source).copy(&arena)
    };
    assert_eq!(copied, "temporary");
}

#[test]
fn copy_of_empty_skips_allocator() {
    let arena = Bump::new();
    let before = arena.allocated_bytes();
    assert!(StringRef::empty().copy(&arena).is_empty());
    assert_eq!(arena.allocated_bytes(), before);
}

// ============================
// Formatting
// ============================

#[test]
fn debug_escapes_bytes() {
    let s = StringRef::from(b"a\"\n\xff");
    assert_eq!(alloc::format!("{:?}", s), r#""a\"\n\xff""#);
}

#[test]
fn display_replaces_invalid_utf8() {
    let s = StringRef::from(b"ok\xffok");
    assert_eq!(alloc::format!("{}", s), "ok\u{FFFD}ok");
}
