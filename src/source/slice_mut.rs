use crate::sequence::{
    BidirectionalSequence, BoundedSequence, IntoSequence, MultipassSequence, RandomAccessSequence,
    Sequence, SwapSequence, assert_sequence,
};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use super::slice::{index_distance, offset_index};

/// A [`Sequence`] over a mutably borrowed slice, able to rearrange its elements.
///
/// Reading clones the element at the cursor. The main purpose of this sequence is
/// in-place algorithms such as [`inplace_reverse()`](crate::algo::inplace_reverse),
/// which only need [`SwapSequence::swap_at()`].
///
/// This `struct` is created by [`from_slice_mut()`], or by converting `&mut [T]`,
/// `&mut [T; N]` or `&mut Vec<T>` with [`IntoSequence`].
/// See its documentation for more.
#[derive(Debug)]
pub struct SliceMut<'a, T> {
    slice: &'a mut [T],
}

/// Creates a [`Sequence`] over a mutably borrowed slice.
///
/// # Examples
///
/// ```
/// use cursor_seq::{prelude::*, source::from_slice_mut};
///
/// let mut letters = ['a', 'b', 'c'];
/// let mut seq = from_slice_mut(&mut letters);
///
/// let first = seq.first();
/// let last = seq.find(|c| c == 'c');
/// seq.swap_at(&first, &last);
///
/// assert_eq!(letters, ['c', 'b', 'a']);
/// ```
#[inline]
pub fn from_slice_mut<T: Clone>(slice: &mut [T]) -> SliceMut<'_, T> {
    assert_sequence(SliceMut { slice })
}

impl<T> SliceMut<'_, T> {
    /// Returns the borrowed slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.slice
    }

    /// Returns the borrowed slice mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.slice
    }
}

impl<T: Clone> Sequence for SliceMut<'_, T> {
    type Cursor = usize;

    type Element = T;

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
        self.slice[*cursor].clone()
    }
}

impl<T: Clone> MultipassSequence for SliceMut<'_, T> {}

impl<T: Clone> BidirectionalSequence for SliceMut<'_, T> {
    #[inline]
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        debug_assert!(*cursor > 0, "stepped a cursor back before the start");
        *cursor -= 1;
    }
}

impl<T: Clone> RandomAccessSequence for SliceMut<'_, T> {
    #[inline]
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: isize) {
        *cursor = offset_index(*cursor, offset, self.slice.len());
    }

    #[inline]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        index_distance(*from, *to)
    }
}

impl<T: Clone> BoundedSequence for SliceMut<'_, T> {
    #[inline]
    fn last(&self) -> Self::Cursor {
        self.slice.len()
    }
}

impl<T: Clone> SwapSequence for SliceMut<'_, T> {
    #[inline]
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.slice.swap(*a, *b);
    }
}

impl<'a, T: Clone> IntoSequence for &'a mut [T] {
    type Element = T;

    type IntoSeq = SliceMut<'a, T>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_slice_mut(self)
    }
}

impl<'a, T: Clone, const N: usize> IntoSequence for &'a mut [T; N] {
    type Element = T;

    type IntoSeq = SliceMut<'a, T>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_slice_mut(self)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T: Clone> IntoSequence for &'a mut Vec<T> {
    type Element = T;

    type IntoSeq = SliceMut<'a, T>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_slice_mut(self)
    }
}
