#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Non-owning views over contiguous memory.
//!
//! - [`IterRange`]: a pair of positions usable in `for` loops.
//! - [`ArrayRef`]: a read-only view of zero or more elements.
//! - [`MutableArrayRef`]: the same view, with write access to the elements.
//! - [`StringRef`]: a read-only view of bytes with string operations.
//!
//! None of these own their storage. Every view borrows its buffer, so the
//! borrow checker rejects a view that would outlive the data it points at.

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod alloc_copy;
pub mod array_ref;
pub mod error;
pub mod mutable_array_ref;
pub mod range;
pub mod string_ref;

pub use alloc_copy::CopyAllocator;
pub use array_ref::{ArrayRef, ArrayView};
pub use error::ViewError;
pub use mutable_array_ref::MutableArrayRef;
pub use range::{Cursor, IterRange, Positions, SliceCursor, drop_begin, make_range};
pub use string_ref::StringRef;
