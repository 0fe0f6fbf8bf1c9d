//! Read-only view of a contiguous run of elements.
//!
//! An [`ArrayRef`] is a borrowed slice wearing a small API: it lets a
//! function accept "N elements in a row" from a fixed array, a `Vec`, a
//! single value or a literal list without copying and without caring which
//! container the elements live in.
//!
//! ```
//! use spanview_core::{ArrayRef, ArrayView};
//!
//! fn total(xs: ArrayRef<'_, u32>) -> u32 {
//!     xs.iter().sum()
//! }
//!
//! let v = vec![1, 2, 3];
//! assert_eq!(total((&v).into()), 6);
//! assert_eq!(total((&[4, 5]).into()), 9);
//! assert_eq!(total(ArrayRef::from_ref(&7)), 7);
//!
//! let view = ArrayRef::new(&v);
//! assert_eq!(view.drop_front().len(), 2);
//! ```

use core::{fmt, hash, iter, ops, slice};

use alloc::vec::Vec;

use crate::{
    alloc_copy::CopyAllocator,
    error::{self, ViewError},
    range::{Positions, SliceCursor},
};

/// The read-only contract shared by [`ArrayRef`] and
/// [`MutableArrayRef`](crate::MutableArrayRef).
pub trait ArrayView<T> {
    fn as_slice(&self) -> &[T];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element-wise equality over the full length of both views.
    fn equals<V>(&self, rhs: &V) -> bool
    where
        V: ArrayView<T> + ?Sized,
        T: PartialEq,
    {
        let (lhs, rhs) = (self.as_slice(), rhs.as_slice());
        lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| a == b)
    }

    /// Copies every element into a new `Vec`.
    fn vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

/// A constant reference to an array: a start and a length.
///
/// Cheap to copy; pass it by value.
pub struct ArrayRef<'a, T> {
    data: &'a [T],
}

static_assertions::assert_eq_size!(ArrayRef<u8>, [usize; 2]);
static_assertions::assert_eq_size!(ArrayRef<u128>, &[u128]);

impl<'a, T> ArrayRef<'a, T> {
    pub const fn new(data: &'a [T]) -> Self {
        ArrayRef { data }
    }

    pub const fn empty() -> Self {
        ArrayRef { data: &[] }
    }

    /// A view of exactly one element.
    pub const fn from_ref(one: &'a T) -> Self {
        ArrayRef {
            data: slice::from_ref(one),
        }
    }

    /// Builds a view from a base pointer and a length.
    ///
    /// A null `data` is accepted when `len` is zero.
    ///
    /// # Safety
    ///
    /// When `len > 0`, `data` must satisfy the requirements of
    /// [`slice::from_raw_parts`] for the whole lifetime `'a`.
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        if len == 0 {
            return Self::empty();
        }
        debug_assert!(!data.is_null(), "Non-empty view with null base");
        // SAFETY: upheld by the caller.
        ArrayRef {
            data: unsafe { slice::from_raw_parts(data, len) },
        }
    }

    /// Builds a view over `[begin, end)`.
    ///
    /// # Safety
    ///
    /// Both pointers must lie in (or one past the end of) the same allocation,
    /// with `begin <= end`, and the range must stay valid for `'a`.
    pub unsafe fn from_ptr_range(begin: *const T, end: *const T) -> Self {
        if begin == end {
            return Self::empty();
        }
        // SAFETY: same allocation and ordering are upheld by the caller.
        unsafe {
            let len = end.offset_from(begin);
            debug_assert!(len >= 0, "Inverted pointer range");
            Self::from_raw_parts(begin, len as usize)
        }
    }

    /// Base address of the view. Dangling (never null) when the view is empty.
    pub const fn data(&self) -> *const T {
        self.data.as_ptr()
    }

    pub const fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn as_ptr_range(&self) -> ops::Range<*const T> {
        self.data.as_ptr_range()
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Walks the elements from last to first.
    pub fn rev_iter(&self) -> iter::Rev<slice::Iter<'a, T>> {
        self.data.iter().rev()
    }

    /// Drops the first element.
    ///
    /// # Panics
    ///
    /// If the view is empty.
    pub fn drop_front(self) -> Self {
        debug_assert!(!self.data.is_empty(), "Array is empty");
        ArrayRef::new(&self.data[1..])
    }

    /// Drops the last element.
    ///
    /// The count is accepted for signature compatibility with
    /// [`MutableArrayRef::drop_back`](crate::MutableArrayRef::drop_back) but
    /// ignored: exactly one element is always dropped. Existing callers rely on
    /// that, so it stays.
    ///
    /// # Panics
    ///
    /// If the view is empty.
    pub fn drop_back(self, _count: usize) -> Self {
        debug_assert!(!self.data.is_empty(), "Array is empty");
        ArrayRef::new(&self.data[..self.data.len() - 1])
    }

    pub fn try_drop_front(self) -> Result<Self, ViewError> {
        error::check_drop(1, self.data.len())?;
        Ok(self.drop_front())
    }

    pub fn try_drop_back(self) -> Result<Self, ViewError> {
        error::check_drop(1, self.data.len())?;
        Ok(self.drop_back(1))
    }

    pub fn try_get(&self, index: usize) -> Result<&'a T, ViewError> {
        error::check_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    /// Copies the elements into `alloc` and returns a view of the copy.
    ///
    /// An empty view is returned as-is without touching the allocator.
    pub fn copy<'b, A: CopyAllocator>(&self, alloc: &'b A) -> ArrayRef<'b, T>
    where
        T: Copy,
    {
        if self.data.is_empty() {
            return ArrayRef::empty();
        }
        tracing::trace!(len = self.data.len(), "copying array view into allocator");
        ArrayRef::new(alloc.alloc_copy(self.data))
    }
}

impl<T> ArrayView<T> for ArrayRef<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T> Clone for ArrayRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for ArrayRef<'_, T> {}

impl<T> Default for ArrayRef<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> ops::Deref for ArrayRef<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<T> AsRef<[T]> for ArrayRef<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.data
    }
}

impl<T> ops::Index<usize> for ArrayRef<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.data.len(), "Invalid index!");
        &self.data[index]
    }
}

impl<'a, T> From<&'a T> for ArrayRef<'a, T> {
    fn from(one: &'a T) -> Self {
        ArrayRef::from_ref(one)
    }
}

impl<'a, T> From<&'a [T]> for ArrayRef<'a, T> {
    fn from(data: &'a [T]) -> Self {
        ArrayRef::new(data)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ArrayRef<'a, T> {
    fn from(list: &'a [T; N]) -> Self {
        if N == 0 {
            return ArrayRef::empty();
        }
        ArrayRef::new(list)
    }
}

impl<'a, T> From<&'a Vec<T>> for ArrayRef<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        ArrayRef::new(vec)
    }
}

impl<'a, T> IntoIterator for ArrayRef<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &ArrayRef<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> Positions for ArrayRef<'a, T> {
    type Cursor = SliceCursor<'a, T>;

    fn positions(self) -> (Self::Cursor, Self::Cursor) {
        self.data.positions()
    }
}

impl<T: PartialEq> PartialEq<ArrayRef<'_, T>> for ArrayRef<'_, T> {
    fn eq(&self, other: &ArrayRef<'_, T>) -> bool {
        self.equals(other)
    }
}
impl<T: Eq> Eq for ArrayRef<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for ArrayRef<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ArrayRef<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data == other
    }
}

impl<T: hash::Hash> hash::Hash for ArrayRef<'_, T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data).finish()
    }
}

#[cfg(test)]
#[path = "array_ref_test.rs"]
mod array_ref_test;
