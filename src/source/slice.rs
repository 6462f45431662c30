use crate::sequence::{
    BidirectionalSequence, BoundedSequence, IntoSequence, MultipassSequence, RandomAccessSequence,
    Sequence, assert_sequence,
};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A [`Sequence`] borrowing the elements of a slice.
///
/// Its cursor is the index of the current element, and the slice length is its last cursor.
/// Elements are references with the lifetime of the slice, not of the sequence,
/// so they stay usable after the sequence is gone.
///
/// This `struct` is created by [`from_slice()`], or by converting `&[T]`, `&[T; N]`
/// or `&Vec<T>` with [`IntoSequence`]. See its documentation for more.
#[derive(Debug)]
pub struct SliceSeq<'a, T> {
    slice: &'a [T],
}

/// Creates a [`Sequence`] borrowing the elements of a slice.
///
/// # Examples
///
/// ```
/// use cursor_seq::{prelude::*, source::from_slice};
///
/// let names = ["ada", "grace"];
/// let mut seq = from_slice(&names);
///
/// let cursor = seq.find(|name| name.starts_with('g'));
/// assert_eq!(cursor, 1);
/// assert_eq!(seq.read_at(&cursor), &"grace");
/// ```
#[inline]
pub fn from_slice<T>(slice: &[T]) -> SliceSeq<'_, T> {
    assert_sequence(SliceSeq { slice })
}

impl<'a, T> SliceSeq<'a, T> {
    /// Returns the borrowed slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<T> Clone for SliceSeq<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceSeq<'_, T> {}

impl<'a, T> Sequence for SliceSeq<'a, T> {
    type Cursor = usize;

    type Element = &'a T;

    #[inline]
    fn first(&mut self) -> Self::Cursor {
        0
    }

    #[inline]
    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        *cursor == self.slice.len()
    }

    #[inline]
    fn inc(&mut self, cursor: &mut Self::Cursor) {
        debug_assert!(*cursor < self.slice.len(), "advanced a cursor past the end");
        *cursor += 1;
    }

    #[inline]
    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        &self.slice[*cursor]
    }
}

impl<T> MultipassSequence for SliceSeq<'_, T> {}

impl<T> BidirectionalSequence for SliceSeq<'_, T> {
    #[inline]
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        debug_assert!(*cursor > 0, "stepped a cursor back before the start");
        *cursor -= 1;
    }
}

impl<T> RandomAccessSequence for SliceSeq<'_, T> {
    #[inline]
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: isize) {
        *cursor = offset_index(*cursor, offset, self.slice.len());
    }

    #[inline]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        index_distance(*from, *to)
    }
}

impl<T> BoundedSequence for SliceSeq<'_, T> {
    #[inline]
    fn last(&self) -> Self::Cursor {
        self.slice.len()
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Element = &'a T;

    type IntoSeq = SliceSeq<'a, T>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_slice(self)
    }
}

impl<'a, T, const N: usize> IntoSequence for &'a [T; N] {
    type Element = &'a T;

    type IntoSeq = SliceSeq<'a, T>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_slice(self)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> IntoSequence for &'a Vec<T> {
    type Element = &'a T;

    type IntoSeq = SliceSeq<'a, T>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_slice(self)
    }
}

// Index arithmetic shared by the slice-backed sequences.

pub(super) fn offset_index(index: usize, offset: isize, len: usize) -> usize {
    match index.checked_add_signed(offset) {
        Some(moved) if moved <= len => moved,
        _ => panic!("moved a cursor out of range: {index} by {offset} with length {len}"),
    }
}

#[inline]
pub(super) fn index_distance(from: usize, to: usize) -> isize {
    // Slice lengths never exceed `isize::MAX`.
    to as isize - from as isize
}
