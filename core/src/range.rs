//! A range built from two positions.
//!
//! [`IterRange`] stores a begin and an end [`Cursor`] and nothing else, so it
//! can be iterated any number of times: each iteration starts again from a
//! copy of `begin`. No validation is done. The end must be reachable from the
//! begin by repeated [`Cursor::advance`], otherwise iteration does not stop
//! where the caller expects (for slice cursors it panics when reading past
//! the underlying slice).
//!
//! ```
//! use spanview_core::{IterRange, drop_begin, make_range};
//!
//! let r = make_range(2usize, 5);
//! assert_eq!(r.into_iter().collect::<Vec<_>>(), [2, 3, 4]);
//!
//! let data = [10, 20, 30, 40];
//! let tail: Vec<i32> = drop_begin(&data[..], 1).into_iter().copied().collect();
//! assert_eq!(tail, [20, 30, 40]);
//!
//! let whole = IterRange::from_container(&data[..]);
//! assert_eq!(whole.into_iter().count(), 4);
//! ```

use core::{fmt, iter::FusedIterator};

/// A position inside some sequence.
///
/// Two cursors compare equal when they denote the same position of the same
/// sequence.
pub trait Cursor: Clone + PartialEq {
    type Item;

    /// Reads the element at this position.
    fn get(&self) -> Self::Item;

    /// Moves to the next position.
    fn advance(&mut self);

    /// Moves forward `n` positions.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

/// Integers are their own positions: `make_range(2, 5)` yields `2, 3, 4`.
impl Cursor for usize {
    type Item = usize;

    fn get(&self) -> usize {
        *self
    }

    fn advance(&mut self) {
        *self += 1;
    }

    fn advance_by(&mut self, n: usize) {
        *self += n;
    }
}

/// A position inside a borrowed slice.
///
/// The one-past-the-end position is `SliceCursor::new(slice, slice.len())`.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T], pos: usize) -> Self {
        SliceCursor { slice, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.pos == other.pos
    }
}
impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("base", &self.slice.as_ptr())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    // Unchecked, like `advance`: reading through an out-of-range cursor panics.
    fn advance_by(&mut self, n: usize) {
        self.pos += n;
    }
}

/// Anything that can hand out its begin and end positions.
pub trait Positions {
    type Cursor: Cursor;

    fn positions(self) -> (Self::Cursor, Self::Cursor);
}

impl<'a, T> Positions for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn positions(self) -> (Self::Cursor, Self::Cursor) {
        (SliceCursor::new(self, 0), SliceCursor::new(self, self.len()))
    }
}

impl<'a, T, const N: usize> Positions for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn positions(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().positions()
    }
}

impl<'a, T> Positions for &'a alloc::vec::Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn positions(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().positions()
    }
}

/// Wraps a pair of positions as something `for` can walk over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IterRange<C> {
    begin: C,
    end: C,
}

static_assertions::assert_eq_size!(IterRange<usize>, [usize; 2]);
static_assertions::assert_eq_size!(IterRange<SliceCursor<'static, u8>>, [usize; 6]);

impl<C: Cursor> IterRange<C> {
    pub fn new(begin: C, end: C) -> Self {
        IterRange { begin, end }
    }

    pub fn from_pair((begin, end): (C, C)) -> Self {
        IterRange { begin, end }
    }

    /// Spans the whole of `container`.
    pub fn from_container<P: Positions<Cursor = C>>(container: P) -> Self {
        Self::from_pair(container.positions())
    }

    pub fn begin(&self) -> C {
        self.begin.clone()
    }

    pub fn end(&self) -> C {
        self.end.clone()
    }

    pub fn iter(&self) -> RangeIter<C> {
        RangeIter {
            cur: self.begin.clone(),
            end: self.end.clone(),
        }
    }
}

/// Shorthand for [`IterRange::new`].
pub fn make_range<C: Cursor>(begin: C, end: C) -> IterRange<C> {
    IterRange::new(begin, end)
}

/// A range over `container` that skips its first `n` elements.
///
/// Nothing checks `n` against the container's length.
pub fn drop_begin<P: Positions>(container: P, n: usize) -> IterRange<P::Cursor> {
    let (mut begin, end) = container.positions();
    begin.advance_by(n);
    IterRange::new(begin, end)
}

/// Iterator produced by walking an [`IterRange`].
#[derive(Clone, Debug)]
pub struct RangeIter<C> {
    cur: C,
    end: C,
}

impl<C: Cursor> Iterator for RangeIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.cur == self.end {
            return None;
        }
        let item = self.cur.get();
        self.cur.advance();
        Some(item)
    }
}

impl<C: Cursor> FusedIterator for RangeIter<C> {}

impl<C: Cursor> IntoIterator for IterRange<C> {
    type Item = C::Item;
    type IntoIter = RangeIter<C>;

    fn into_iter(self) -> RangeIter<C> {
        RangeIter {
            cur: self.begin,
            end: self.end,
        }
    }
}

impl<C: Cursor> IntoIterator for &IterRange<C> {
    type Item = C::Item;
    type IntoIter = RangeIter<C>;

    fn into_iter(self) -> RangeIter<C> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;
