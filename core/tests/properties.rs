//! Property tests for the view types.

use proptest::prelude::*;
use spanview_core::{ArrayRef, ArrayView, MutableArrayRef, StringRef};

const NPOS: usize = StringRef::NPOS;

proptest! {
    #[test]
    fn array_views_over_equal_contents_are_equal(xs in prop::collection::vec(any::<i32>(), 0..32)) {
        let copy = xs.clone();
        prop_assert_eq!(ArrayRef::new(&xs), ArrayRef::new(&copy));
    }

    #[test]
    fn array_views_differing_in_one_element_are_not_equal(
        xs in prop::collection::vec(any::<i32>(), 1..32),
        idx in any::<prop::sample::Index>(),
    ) {
        let mut other = xs.clone();
        let i = idx.index(other.len());
        other[i] = other[i].wrapping_add(1);
        prop_assert_ne!(ArrayRef::new(&xs), ArrayRef::new(&other));
    }

    #[test]
    fn array_views_of_different_length_are_not_equal(xs in prop::collection::vec(any::<u8>(), 1..32)) {
        let shorter = &xs[..xs.len() - 1];
        prop_assert!(!ArrayRef::new(&xs).equals(&ArrayRef::new(shorter)));
    }

    #[test]
    fn drop_front_shifts_every_index(xs in prop::collection::vec(any::<u16>(), 2..32)) {
        let view = ArrayRef::new(&xs);
        let rest = view.drop_front();
        for i in 0..rest.len() {
            prop_assert_eq!(rest[i], view[i + 1]);
        }
    }

    #[test]
    fn mutable_drop_back_honors_count(
        mut xs in prop::collection::vec(any::<u8>(), 0..32),
        n in 0usize..32,
    ) {
        let len = xs.len();
        let n = n.min(len);
        let view = MutableArrayRef::new(&mut xs);
        prop_assert_eq!(view.drop_back(n).len(), len - n);
    }

    #[test]
    fn split_round_trips(
        left in "[a-z]{0,12}",
        right in "[a-z]{0,12}",
    ) {
        let joined = format!("{left},{right}");
        let (l, r) = StringRef::from(&joined).split(b',');

        let mut rebuilt = l.to_vec();
        rebuilt.push(b',');
        rebuilt += r;
        prop_assert_eq!(rebuilt, joined.as_bytes().to_vec());
        prop_assert_eq!(l, left.as_str());
        prop_assert_eq!(r, right.as_str());
    }

    #[test]
    fn substr_never_panics(s in ".{0,16}", start in any::<usize>(), n in any::<usize>()) {
        let view = StringRef::from(s.as_str());
        let sub = view.substr(start, n);
        prop_assert!(sub.len() <= view.len());
        prop_assert!(sub.len() <= n);
        if start >= view.len() {
            prop_assert!(sub.is_empty());
        }
    }

    #[test]
    fn slice_never_panics(s in ".{0,16}", start in any::<usize>(), end in any::<usize>()) {
        let view = StringRef::from(s.as_str());
        let sub = view.slice(start, end);
        prop_assert!(sub.len() <= view.len());
        if end <= start {
            prop_assert!(sub.is_empty());
        }
    }

    #[test]
    fn absent_byte_is_never_found(s in "[a-y]{0,24}") {
        let view = StringRef::from(s.as_str());
        prop_assert_eq!(view.find(b'z', 0), NPOS);
        prop_assert_eq!(view.rfind(b'z', NPOS), NPOS);
        prop_assert_eq!(view.count(b'z'), 0);
    }

    #[test]
    fn single_occurrence_found_both_ways(before in "[a-y]{0,12}", after in "[a-y]{0,12}") {
        let s = format!("{before}z{after}");
        let view = StringRef::from(&s);
        prop_assert_eq!(view.find(b'z', 0), before.len());
        prop_assert_eq!(view.find(b'z', 0), view.rfind(b'z', NPOS));
    }

    #[test]
    fn consume_front_without_prefix_leaves_view_alone(s in "[a-m]{0,12}", prefix in "[n-z]{1,4}") {
        let mut view = StringRef::from(s.as_str());
        let before = view;
        prop_assert!(!view.consume_front(prefix.as_str()));
        prop_assert_eq!(view, before);
        prop_assert_eq!(view.data(), before.data());
    }

    #[test]
    fn consume_front_with_prefix_removes_it(prefix in "[a-z]{0,6}", rest in "[a-z]{0,12}") {
        let s = format!("{prefix}{rest}");
        let original = StringRef::from(&s);
        let mut view = original;
        prop_assert!(view.consume_front(prefix.as_str()));
        prop_assert_eq!(view, original.drop_front(prefix.len()));
        prop_assert_eq!(view, rest.as_str());
    }

    #[test]
    fn compare_matches_byte_ordering(a in prop::collection::vec(any::<u8>(), 0..16), b in prop::collection::vec(any::<u8>(), 0..16)) {
        let expected = match a.cmp(&b) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        prop_assert_eq!(StringRef::from(&a).compare(StringRef::from(&b)), expected);
    }
}
