//! The allocation capability used by [`StringRef::copy`] and [`ArrayRef::copy`].
//!
//! A view can be copied into memory that outlives its source buffer without
//! the copy becoming an owning container: the allocator owns the bytes, the
//! returned view borrows the allocator.
//!
//! [`StringRef::copy`]: crate::StringRef::copy
//! [`ArrayRef::copy`]: crate::ArrayRef::copy

use bumpalo::Bump;

/// Something that can allocate a run of contiguous elements.
pub trait CopyAllocator {
    /// Allocates `src.len()` elements, copies `src` into them and returns the
    /// new storage. The storage lives as long as the allocator borrow.
    fn alloc_copy<'a, T: Copy>(&'a self, src: &[T]) -> &'a mut [T];
}

impl CopyAllocator for Bump {
    fn alloc_copy<'a, T: Copy>(&'a self, src: &[T]) -> &'a mut [T] {
        self.alloc_slice_copy(src)
    }
}
