//! Read-only view of a byte string.
//!
//! A [`StringRef`] is a start and a length. The bytes are not required to be
//! NUL-terminated, nor to be UTF-8: every operation works on raw bytes and
//! the length alone decides where the string ends.
//!
//! Searches never fail. A byte that is not there is reported as
//! [`StringRef::NPOS`], and out-of-range offsets given to
//! [`substr`](StringRef::substr) or [`slice`](StringRef::slice) are clamped.
//!
//! ```
//! use spanview_core::StringRef;
//!
//! let s = StringRef::from("hello,world");
//! let (left, right) = s.split(b',');
//! assert_eq!(left, "hello");
//! assert_eq!(right, "world");
//! assert_eq!(s.find(b'o', 0), 4);
//! assert_eq!(s.rfind(b'o', StringRef::NPOS), 7);
//! assert_eq!(s.find(b'z', 0), StringRef::NPOS);
//! assert_eq!(s.substr(6, StringRef::NPOS), "world");
//! ```
//!
//! A view borrows its source, so it cannot be built from a temporary
//! `String`:
//!
//! ```compile_fail
//! use spanview_core::StringRef;
//!
//! let s = StringRef::from(&String::from("gone"));
//! assert_eq!(s.len(), 4);
//! ```
//!
//! Nor is there a conversion that would turn a null pointer into a view:
//!
//! ```compile_fail
//! use spanview_core::StringRef;
//!
//! let s = StringRef::from(core::ptr::null::<u8>());
//! ```

use core::{
    cmp::{self, Ordering},
    ffi::{CStr, c_char},
    fmt, hash,
    iter::Copied,
    ops, slice,
};

use alloc::{string::String, vec::Vec};

use crate::{
    alloc_copy::CopyAllocator,
    error::{self, ViewError},
    range::{IterRange, Positions, SliceCursor},
};

/// A constant reference to a byte string.
///
/// Cheap to copy; pass it by value.
#[derive(Clone, Copy, Default)]
pub struct StringRef<'a> {
    data: &'a [u8],
}

static_assertions::assert_eq_size!(StringRef, [usize; 2]);

impl<'a> StringRef<'a> {
    /// Returned by searches that find nothing; also means "to the end" when
    /// passed as a length or end position.
    pub const NPOS: usize = usize::MAX;

    pub const fn new(data: &'a [u8]) -> Self {
        StringRef { data }
    }

    pub const fn empty() -> Self {
        StringRef { data: &[] }
    }

    /// Views the bytes of a C string, without its terminator.
    pub fn from_cstr(s: &'a CStr) -> Self {
        StringRef::new(s.to_bytes())
    }

    /// Views a NUL-terminated string, scanning for the terminator.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and satisfy the requirements of
    /// [`CStr::from_ptr`] for the whole lifetime `'a`.
    pub unsafe fn from_ptr(ptr: *const c_char) -> Self {
        debug_assert!(!ptr.is_null(), "Null C string");
        // SAFETY: upheld by the caller.
        StringRef::from_cstr(unsafe { CStr::from_ptr(ptr) })
    }

    /// Like [`from_ptr`](Self::from_ptr), but a null pointer gives an empty
    /// view.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must satisfy the requirements of [`CStr::from_ptr`]
    /// for the whole lifetime `'a`.
    pub unsafe fn from_ptr_or_empty(ptr: *const c_char) -> Self {
        if ptr.is_null() {
            return StringRef::empty();
        }
        // SAFETY: non-null, the rest is upheld by the caller.
        unsafe { StringRef::from_ptr(ptr) }
    }

    /// # Safety
    ///
    /// When `len > 0`, `data` must satisfy the requirements of
    /// [`slice::from_raw_parts`] for the whole lifetime `'a`.
    pub unsafe fn from_raw_parts(data: *const u8, len: usize) -> Self {
        if len == 0 {
            return StringRef::empty();
        }
        // SAFETY: upheld by the caller.
        StringRef::new(unsafe { slice::from_raw_parts(data, len) })
    }

    /// Start of the string, which is not NUL-terminated.
    pub const fn data(&self) -> *const u8 {
        self.data.as_ptr()
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Copied<slice::Iter<'a, u8>> {
        self.data.iter().copied()
    }

    pub fn bytes(&self) -> IterRange<SliceCursor<'a, u8>> {
        IterRange::from_container(self.data)
    }

    /// # Panics
    ///
    /// If the string is empty.
    pub fn front(&self) -> u8 {
        debug_assert!(!self.is_empty(), "String is empty");
        self.data[0]
    }

    /// # Panics
    ///
    /// If the string is empty.
    pub fn back(&self) -> u8 {
        debug_assert!(!self.is_empty(), "String is empty");
        self.data[self.data.len() - 1]
    }

    pub fn try_front(&self) -> Result<u8, ViewError> {
        self.data.first().copied().ok_or(ViewError::Empty)
    }

    pub fn try_back(&self) -> Result<u8, ViewError> {
        self.data.last().copied().ok_or(ViewError::Empty)
    }

    pub fn try_get(&self, index: usize) -> Result<u8, ViewError> {
        error::check_index(index, self.data.len())?;
        Ok(self.data[index])
    }

    /// Copies the bytes into `alloc` and returns a view of the copy.
    ///
    /// An empty string is never requested from the allocator.
    pub fn copy<'b, A: CopyAllocator>(&self, alloc: &'b A) -> StringRef<'b> {
        if self.is_empty() {
            return StringRef::empty();
        }
        tracing::trace!(len = self.len(), "copying string view into allocator");
        StringRef::new(alloc.alloc_copy(self.data))
    }

    /// Byte-for-byte equality. Cheaper than [`compare`](Self::compare) when
    /// the ordering is not needed.
    pub fn equals(&self, rhs: StringRef<'_>) -> bool {
        self.data.len() == rhs.data.len() && compare_memory(self.data, rhs.data).is_eq()
    }

    /// Three-way comparison: -1, 0 or 1.
    ///
    /// The shared prefix is compared byte by byte first; when it matches,
    /// the shorter string orders first.
    pub fn compare(&self, rhs: StringRef<'_>) -> i32 {
        let shared = cmp::min(self.data.len(), rhs.data.len());
        match compare_memory(&self.data[..shared], &rhs.data[..shared]) {
            Ordering::Less => return -1,
            Ordering::Greater => return 1,
            Ordering::Equal => {}
        }
        match self.data.len().cmp(&rhs.data.len()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// An owned copy, if the bytes are UTF-8.
    pub fn str(&self) -> Result<String, ViewError> {
        Ok(String::from(self.to_str()?))
    }

    /// The bytes as `&str`, if they are UTF-8.
    pub fn to_str(&self) -> Result<&'a str, ViewError> {
        Ok(core::str::from_utf8(self.data)?)
    }

    /// An owned copy of the bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Appends the bytes to `buf`, as `buf += self` does.
    pub fn append_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.data);
    }

    pub fn starts_with<'b>(&self, prefix: impl Into<StringRef<'b>>) -> bool {
        let prefix = prefix.into();
        self.data.len() >= prefix.data.len()
            && compare_memory(&self.data[..prefix.data.len()], prefix.data).is_eq()
    }

    pub fn ends_with<'b>(&self, suffix: impl Into<StringRef<'b>>) -> bool {
        let suffix = suffix.into();
        self.data.len() >= suffix.data.len()
            && compare_memory(
                &self.data[self.data.len() - suffix.data.len()..],
                suffix.data,
            )
            .is_eq()
    }

    /// Index of the first `c` at or after `from`, or [`NPOS`](Self::NPOS).
    pub fn find(&self, c: u8, from: usize) -> usize {
        let begin = cmp::min(from, self.data.len());
        if begin == self.data.len() {
            return Self::NPOS;
        }
        match memchr::memchr(c, &self.data[begin..]) {
            Some(offset) => begin + offset,
            None => Self::NPOS,
        }
    }

    /// Index of the last `c` before `from`, or [`NPOS`](Self::NPOS).
    ///
    /// Pass [`NPOS`](Self::NPOS) to search the whole string.
    pub fn rfind(&self, c: u8, from: usize) -> usize {
        let end = cmp::min(from, self.data.len());
        memchr::memrchr(c, &self.data[..end]).unwrap_or(Self::NPOS)
    }

    /// Same as [`find`](Self::find).
    pub fn find_first_of(&self, c: u8, from: usize) -> usize {
        self.find(c, from)
    }

    /// Same as [`rfind`](Self::rfind).
    pub fn find_last_of(&self, c: u8, from: usize) -> usize {
        self.rfind(c, from)
    }

    /// Number of occurrences of `c`.
    pub fn count(&self, c: u8) -> usize {
        memchr::memchr_iter(c, self.data).count()
    }

    /// Up to `n` bytes starting at `start`.
    ///
    /// A `start` past the end gives an empty string; an `n` past the end is
    /// cut to what remains. Never panics.
    pub fn substr(&self, start: usize, n: usize) -> StringRef<'a> {
        let start = cmp::min(start, self.data.len());
        let n = cmp::min(n, self.data.len() - start);
        StringRef::new(&self.data[start..start + n])
    }

    /// The first `n` bytes, or the whole string if it is shorter.
    pub fn take_front(&self, n: usize) -> StringRef<'a> {
        if n >= self.len() {
            return *self;
        }
        self.drop_back(self.len() - n)
    }

    /// The last `n` bytes, or the whole string if it is shorter.
    pub fn take_back(&self, n: usize) -> StringRef<'a> {
        if n >= self.len() {
            return *self;
        }
        self.drop_front(self.len() - n)
    }

    /// # Panics
    ///
    /// In debug builds, if `n` exceeds the length.
    pub fn drop_front(&self, n: usize) -> StringRef<'a> {
        debug_assert!(self.len() >= n, "Dropping more elements than exist");
        self.substr(n, Self::NPOS)
    }

    /// # Panics
    ///
    /// In debug builds, if `n` exceeds the length.
    pub fn drop_back(&self, n: usize) -> StringRef<'a> {
        debug_assert!(self.len() >= n, "Dropping more elements than exist");
        self.substr(0, self.len().wrapping_sub(n))
    }

    pub fn try_drop_front(&self, n: usize) -> Result<StringRef<'a>, ViewError> {
        error::check_drop(n, self.len())?;
        Ok(self.drop_front(n))
    }

    pub fn try_drop_back(&self, n: usize) -> Result<StringRef<'a>, ViewError> {
        error::check_drop(n, self.len())?;
        Ok(self.drop_back(n))
    }

    /// Removes `prefix` from the front if present, reporting whether it was.
    pub fn consume_front<'b>(&mut self, prefix: impl Into<StringRef<'b>>) -> bool {
        let prefix = prefix.into();
        if !self.starts_with(prefix) {
            return false;
        }
        *self = self.drop_front(prefix.len());
        true
    }

    /// Removes `suffix` from the back if present, reporting whether it was.
    pub fn consume_back<'b>(&mut self, suffix: impl Into<StringRef<'b>>) -> bool {
        let suffix = suffix.into();
        if !self.ends_with(suffix) {
            return false;
        }
        *self = self.drop_back(suffix.len());
        true
    }

    /// The bytes in `[start, end)`, after clamping both to the string.
    ///
    /// An `end` before `start` gives an empty string.
    pub fn slice(&self, start: usize, end: usize) -> StringRef<'a> {
        let start = cmp::min(start, self.data.len());
        let end = cmp::min(cmp::max(start, end), self.data.len());
        StringRef::new(&self.data[start..end])
    }

    /// Splits around the first `separator`.
    ///
    /// When found, `left + separator + right` is the original string. When
    /// not found, the whole string is on the left and the right is empty.
    pub fn split(&self, separator: u8) -> (StringRef<'a>, StringRef<'a>) {
        let idx = self.find(separator, 0);
        if idx == Self::NPOS {
            return (*self, StringRef::empty());
        }
        (self.slice(0, idx), self.slice(idx + 1, Self::NPOS))
    }
}

// Slices are never null, but an empty compare is still answered without
// looking at either side.
fn compare_memory(lhs: &[u8], rhs: &[u8]) -> Ordering {
    if lhs.is_empty() && rhs.is_empty() {
        return Ordering::Equal;
    }
    lhs.cmp(rhs)
}

impl ops::Index<usize> for StringRef<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        debug_assert!(index < self.data.len(), "Invalid index!");
        &self.data[index]
    }
}

impl AsRef<[u8]> for StringRef<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> From<&'a str> for StringRef<'a> {
    fn from(s: &'a str) -> Self {
        StringRef::new(s.as_bytes())
    }
}

impl<'a> From<&'a String> for StringRef<'a> {
    fn from(s: &'a String) -> Self {
        StringRef::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for StringRef<'a> {
    fn from(data: &'a [u8]) -> Self {
        StringRef::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StringRef<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        StringRef::new(data)
    }
}

impl<'a> From<&'a Vec<u8>> for StringRef<'a> {
    fn from(data: &'a Vec<u8>) -> Self {
        StringRef::new(data)
    }
}

impl<'a> From<&'a CStr> for StringRef<'a> {
    fn from(s: &'a CStr) -> Self {
        StringRef::from_cstr(s)
    }
}

impl From<StringRef<'_>> for Vec<u8> {
    fn from(s: StringRef<'_>) -> Self {
        s.to_vec()
    }
}

impl TryFrom<StringRef<'_>> for String {
    type Error = ViewError;

    fn try_from(s: StringRef<'_>) -> Result<Self, ViewError> {
        s.str()
    }
}

impl ops::AddAssign<StringRef<'_>> for Vec<u8> {
    fn add_assign(&mut self, s: StringRef<'_>) {
        s.append_to(self);
    }
}

impl<'a> IntoIterator for StringRef<'a> {
    type Item = u8;
    type IntoIter = Copied<slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Positions for StringRef<'a> {
    type Cursor = SliceCursor<'a, u8>;

    fn positions(self) -> (Self::Cursor, Self::Cursor) {
        self.data.positions()
    }
}

impl PartialEq<StringRef<'_>> for StringRef<'_> {
    fn eq(&self, other: &StringRef<'_>) -> bool {
        self.equals(*other)
    }
}
impl Eq for StringRef<'_> {}

impl PartialEq<str> for StringRef<'_> {
    fn eq(&self, other: &str) -> bool {
        self.equals(other.into())
    }
}

impl PartialEq<&str> for StringRef<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.equals((*other).into())
    }
}

impl PartialEq<[u8]> for StringRef<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.equals(other.into())
    }
}

impl PartialOrd<StringRef<'_>> for StringRef<'_> {
    fn partial_cmp(&self, other: &StringRef<'_>) -> Option<Ordering> {
        Some(self.compare(*other).cmp(&0))
    }
}

impl Ord for StringRef<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other).cmp(&0)
    }
}

impl hash::Hash for StringRef<'_> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}

impl fmt::Debug for StringRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.data.escape_ascii())
    }
}

/// Writes the bytes as text, replacing invalid UTF-8 with U+FFFD.
impl fmt::Display for StringRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.data.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "string_ref_test.rs"]
mod string_ref_test;
