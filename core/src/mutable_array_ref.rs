//! Mutable view of a contiguous run of elements.
//!
//! [`MutableArrayRef`] carries the same read-only contract as
//! [`ArrayRef`] (through [`ArrayView`]) and adds write access to the
//! referenced elements. The view does not own the elements; the buffer they
//! live in must outlive it, which the borrow checker enforces.
//!
//! Writing requires `&mut self`. Slicing consumes the view and returns a
//! narrower one over the same elements; call [`MutableArrayRef::reborrow`]
//! first to keep the original around.
//!
//! ```
//! use spanview_core::{ArrayView, MutableArrayRef};
//!
//! let mut data = [1, 2, 3, 4, 5];
//! let mut view = MutableArrayRef::new(&mut data);
//! *view.front() = 10;
//! view.reborrow().drop_front(3)[0] = 40;
//! assert_eq!(view.drop_back(2).len(), 3);
//! assert_eq!(data, [10, 2, 3, 40, 5]);
//! ```

use core::{fmt, hash, iter, ops, slice};

use alloc::vec::Vec;

use crate::{
    array_ref::{ArrayRef, ArrayView},
    error::{self, ViewError},
};

/// A mutable reference to an array: a start and a length.
pub struct MutableArrayRef<'a, T> {
    data: &'a mut [T],
}

static_assertions::assert_eq_size!(MutableArrayRef<u8>, [usize; 2]);

impl<'a, T> MutableArrayRef<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        MutableArrayRef { data }
    }

    pub fn empty() -> Self {
        MutableArrayRef { data: &mut [] }
    }

    pub fn from_mut(one: &'a mut T) -> Self {
        MutableArrayRef {
            data: slice::from_mut(one),
        }
    }

    /// # Safety
    ///
    /// When `len > 0`, `data` must satisfy the requirements of
    /// [`slice::from_raw_parts_mut`] for the whole lifetime `'a`.
    pub unsafe fn from_raw_parts(data: *mut T, len: usize) -> Self {
        if len == 0 {
            return Self::empty();
        }
        debug_assert!(!data.is_null(), "Non-empty view with null base");
        // SAFETY: upheld by the caller.
        MutableArrayRef {
            data: unsafe { slice::from_raw_parts_mut(data, len) },
        }
    }

    /// # Safety
    ///
    /// Both pointers must lie in (or one past the end of) the same allocation,
    /// with `begin <= end`, and nothing else may access the range during `'a`.
    pub unsafe fn from_ptr_range(begin: *mut T, end: *mut T) -> Self {
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

    /// Writable base address of the view.
    ///
    /// Taken from the unique borrow, so writes through it are allowed until
    /// the view is used again.
    pub fn data(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }

    /// A read-only view of the same elements.
    pub fn as_array_ref(&self) -> ArrayRef<'_, T> {
        ArrayRef::new(&*self.data)
    }

    /// A shorter-lived view of the same elements, leaving `self` usable
    /// once the returned view is gone.
    pub fn reborrow(&mut self) -> MutableArrayRef<'_, T> {
        MutableArrayRef {
            data: &mut *self.data,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn rev_iter(&self) -> iter::Rev<slice::Iter<'_, T>> {
        self.data.iter().rev()
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// If the view is empty.
    pub fn front(&mut self) -> &mut T {
        debug_assert!(!self.data.is_empty(), "Array is empty");
        &mut self.data[0]
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// If the view is empty.
    pub fn back(&mut self) -> &mut T {
        debug_assert!(!self.data.is_empty(), "Array is empty");
        let last = self.data.len() - 1;
        &mut self.data[last]
    }

    pub fn try_front(&mut self) -> Result<&mut T, ViewError> {
        self.data.first_mut().ok_or(ViewError::Empty)
    }

    pub fn try_back(&mut self) -> Result<&mut T, ViewError> {
        self.data.last_mut().ok_or(ViewError::Empty)
    }

    /// Skips `offset` elements and keeps the next `count`.
    ///
    /// # Panics
    ///
    /// If `offset + count` exceeds the length.
    pub fn slice(self, offset: usize, count: usize) -> Self {
        debug_assert!(
            offset.checked_add(count).is_some_and(|end| end <= self.data.len()),
            "Invalid specifier"
        );
        let data = self.data;
        MutableArrayRef::new(&mut data[offset..][..count])
    }

    /// Skips `offset` elements and keeps the rest.
    pub fn slice_from(self, offset: usize) -> Self {
        let count = self.data.len().wrapping_sub(offset);
        self.slice(offset, count)
    }

    /// # Panics
    ///
    /// If `count` exceeds the length.
    pub fn drop_front(self, count: usize) -> Self {
        debug_assert!(self.data.len() >= count, "Dropping more elements than exist");
        let rest = self.data.len().wrapping_sub(count);
        self.slice(count, rest)
    }

    /// Drops the last `count` elements.
    ///
    /// Unlike [`ArrayRef::drop_back`], the count is honored.
    ///
    /// # Panics
    ///
    /// If `count` exceeds the length.
    pub fn drop_back(self, count: usize) -> Self {
        debug_assert!(self.data.len() >= count, "Dropping more elements than exist");
        let rest = self.data.len().wrapping_sub(count);
        self.slice(0, rest)
    }

    pub fn try_slice(self, offset: usize, count: usize) -> Result<Self, ViewError> {
        error::check_slice(offset, count, self.data.len())?;
        Ok(self.slice(offset, count))
    }

    pub fn try_drop_front(self, count: usize) -> Result<Self, ViewError> {
        error::check_drop(count, self.data.len())?;
        Ok(self.drop_front(count))
    }

    pub fn try_drop_back(self, count: usize) -> Result<Self, ViewError> {
        error::check_drop(count, self.data.len())?;
        Ok(self.drop_back(count))
    }

    pub fn try_get(&mut self, index: usize) -> Result<&mut T, ViewError> {
        error::check_index(index, self.data.len())?;
        Ok(&mut self.data[index])
    }
}

impl<T> ArrayView<T> for MutableArrayRef<'_, T> {
    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T> Default for MutableArrayRef<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> ops::Deref for MutableArrayRef<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &*self.data
    }
}

impl<T> ops::DerefMut for MutableArrayRef<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T> AsRef<[T]> for MutableArrayRef<'_, T> {
    fn as_ref(&self) -> &[T] {
        &*self.data
    }
}

impl<T> AsMut<[T]> for MutableArrayRef<'_, T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T> ops::Index<usize> for MutableArrayRef<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.data.len(), "Invalid index!");
        &self.data[index]
    }
}

impl<T> ops::IndexMut<usize> for MutableArrayRef<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.data.len(), "Invalid index!");
        &mut self.data[index]
    }
}

impl<'a, T> From<&'a mut T> for MutableArrayRef<'a, T> {
    fn from(one: &'a mut T) -> Self {
        MutableArrayRef::from_mut(one)
    }
}

impl<'a, T> From<&'a mut [T]> for MutableArrayRef<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        MutableArrayRef::new(data)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for MutableArrayRef<'a, T> {
    fn from(list: &'a mut [T; N]) -> Self {
        MutableArrayRef::new(list)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for MutableArrayRef<'a, T> {
    fn from(vec: &'a mut Vec<T>) -> Self {
        MutableArrayRef::new(vec)
    }
}

impl<'a, T> From<MutableArrayRef<'a, T>> for ArrayRef<'a, T> {
    fn from(view: MutableArrayRef<'a, T>) -> Self {
        ArrayRef::new(view.data)
    }
}

impl<'a, T> IntoIterator for MutableArrayRef<'a, T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<'b, T> IntoIterator for &'b MutableArrayRef<'_, T> {
    type Item = &'b T;
    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'b, T> IntoIterator for &'b mut MutableArrayRef<'_, T> {
    type Item = &'b mut T;
    type IntoIter = slice::IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: PartialEq> PartialEq<MutableArrayRef<'_, T>> for MutableArrayRef<'_, T> {
    fn eq(&self, other: &MutableArrayRef<'_, T>) -> bool {
        self.equals(other)
    }
}
impl<T: Eq> Eq for MutableArrayRef<'_, T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for MutableArrayRef<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self.data == *other
    }
}

impl<T: hash::Hash> hash::Hash for MutableArrayRef<'_, T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableArrayRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
#[path = "mutable_array_ref_test.rs"]
mod mutable_array_ref_test;
