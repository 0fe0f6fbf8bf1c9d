//! Spanview - non-owning views over contiguous memory
//!
//! # Overview
//!
//! Spanview lets code pass "a reference to N contiguous elements" around
//! without copying and without depending on the container that owns them:
//!
//! - [`ArrayRef`] and [`MutableArrayRef`] view elements of any type.
//! - [`StringRef`] views bytes and adds string operations (search, split,
//!   prefix and suffix tests, clamped sub-strings).
//! - [`IterRange`] turns a pair of positions into something `for` can walk.
//!
//! Views borrow their buffer, so the compiler rejects any view that would
//! outlive it.
//!
//! # Quick Start
//!
//! ```
//! use spanview::{ArrayRef, ArrayView, StringRef};
//!
//! let line = String::from("user=alice");
//! let (key, value) = StringRef::from(&line).split(b'=');
//! assert_eq!(key, "user");
//! assert_eq!(value, "alice");
//!
//! let scores = vec![90, 72, 85];
//! let view = ArrayRef::new(&scores);
//! assert_eq!(view.drop_front().vec(), vec![72, 85]);
//! ```
//!
//! # Copying into an arena
//!
//! A view can be copied into a [`bumpalo::Bump`] (or any [`CopyAllocator`])
//! when it must outlive its source:
//!
//! ```
//! use bumpalo::Bump;
//! use spanview::StringRef;
//!
//! let arena = Bump::new();
//! let kept = {
//!     let scratch = String::from("short-lived");
//!     StringRef::from(&scratch).copy(&arena)
//! };
//! assert_eq!(kept, "short-lived");
//! ```
//!
//! # Checked operations
//!
//! Operations with preconditions (indexing, dropping, slicing a
//! [`MutableArrayRef`]) panic when the precondition is violated. Each has a
//! `try_` form that returns a [`ViewError`] instead:
//!
//! ```
//! use spanview::{StringRef, ViewError};
//!
//! let s = StringRef::from("ab");
//! assert_eq!(
//!     s.try_drop_front(3),
//!     Err(ViewError::DropPastEnd { count: 3, len: 2 })
//! );
//! ```

pub use bumpalo;

pub use spanview_core::{
    ArrayRef, ArrayView, CopyAllocator, Cursor, IterRange, MutableArrayRef, Positions,
    SliceCursor, StringRef, ViewError, drop_begin, make_range,
};
pub use spanview_core::{alloc_copy, array_ref, error, mutable_array_ref, range, string_ref};
