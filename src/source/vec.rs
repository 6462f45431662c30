use crate::sequence::{
    BidirectionalSequence, BoundedSequence, IntoSequence, MultipassSequence, RandomAccessSequence,
    Sequence, SwapSequence, assert_sequence,
};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use super::slice::{index_distance, offset_index};

/// A [`Sequence`] owning its elements in a [`Vec`].
///
/// Reading clones the element at the cursor, since the sequence keeps ownership.
/// Being owned, it can be the element of an outer sequence and become an inner sequence
/// of [`flatten_with()`](crate::adapters::flatten_with) without borrowing anything.
///
/// This `struct` is created by [`from_vec()`], or by converting a [`Vec`]
/// with [`IntoSequence`]. See its documentation for more.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VecSeq<T> {
    vec: Vec<T>,
}

/// Creates a [`Sequence`] owning the elements of a [`Vec`].
///
/// # Examples
///
/// ```
/// use cursor_seq::{prelude::*, source::from_vec};
///
/// let mut seq = from_vec(vec![3, 1, 2]);
/// seq.inplace_reverse();
///
/// assert!(seq.any(|n| n == 3));
/// assert_eq!(seq.into_inner(), [2, 1, 3]);
/// ```
#[inline]
pub fn from_vec<T: Clone>(vec: Vec<T>) -> VecSeq<T> {
    assert_sequence(VecSeq { vec })
}

impl<T> VecSeq<T> {
    /// Returns the elements.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.vec
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
}

impl<T: Clone> Sequence for VecSeq<T> {
    type Cursor = usize;

    type Element = T;

    #[inline]
    fn first(&mut self) -> Self::Cursor {
        0
    }

    #[inline]
    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        *cursor == self.vec.len()
    }

    #[inline]
    fn inc(&mut self, cursor: &mut Self::Cursor) {
        debug_assert!(*cursor < self.vec.len(), "advanced a cursor past the end");
        *cursor += 1;
    }

    #[inline]
    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        self.vec[*cursor].clone()
    }
}

impl<T: Clone> MultipassSequence for VecSeq<T> {}

impl<T: Clone> BidirectionalSequence for VecSeq<T> {
    #[inline]
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        debug_assert!(*cursor > 0, "stepped a cursor back before the start");
        *cursor -= 1;
    }
}

impl<T: Clone> RandomAccessSequence for VecSeq<T> {
    #[inline]
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: isize) {
        *cursor = offset_index(*cursor, offset, self.vec.len());
    }

    #[inline]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        index_distance(*from, *to)
    }
}

impl<T: Clone> BoundedSequence for VecSeq<T> {
    #[inline]
    fn last(&self) -> Self::Cursor {
        self.vec.len()
    }
}

impl<T: Clone> SwapSequence for VecSeq<T> {
    #[inline]
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.vec.swap(*a, *b);
    }
}

impl<T: Clone> IntoSequence for Vec<T> {
    type Element = T;

    type IntoSeq = VecSeq<T>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_vec(self)
    }
}

impl<T: Clone> From<Vec<T>> for VecSeq<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        from_vec(vec)
    }
}
