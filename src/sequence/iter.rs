use std::fmt::Debug;

use super::Sequence;

/// An [`Iterator`] that drives a [`Sequence`] from its first cursor to its last one,
/// extracting each element with [`move_at()`](Sequence::move_at).
///
/// Unless a starting cursor is given, the first cursor is only requested on
/// the first call to [`next()`](Iterator::next).
/// The iterator is fused: once the sequence reports its end, it keeps returning [`None`].
///
/// This `struct` is created by [`SequenceExt::iter()`](super::SequenceExt::iter)
/// and [`SequenceExt::iter_from()`](super::SequenceExt::iter_from).
/// See their documentation for more.
pub struct Iter<S>
where
    S: Sequence,
{
    seq: S,
    cursor: Option<S::Cursor>,
}

impl<S> Iter<S>
where
    S: Sequence,
{
    #[inline]
    pub(super) fn new(seq: S) -> Self {
        Self { seq, cursor: None }
    }

    #[inline]
    pub(super) fn with_cursor(seq: S, cursor: S::Cursor) -> Self {
        Self {
            seq,
            cursor: Some(cursor),
        }
    }

    /// Returns the underlying sequence, discarding the traversal state.
    #[inline]
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S> Iterator for Iter<S>
where
    S: Sequence,
{
    type Item = S::Element;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.get_or_insert_with(|| self.seq.first());
        if self.seq.is_last(cursor) {
            return None;
        }

        let item = self.seq.move_at(cursor);
        self.seq.inc(cursor);
        Some(item)
    }
}

impl<S> std::iter::FusedIterator for Iter<S> where S: Sequence {}

impl<S> Debug for Iter<S>
where
    S: Sequence + Debug,
    S::Cursor: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("seq", &self.seq)
            .field("cursor", &self.cursor)
            .finish()
    }
}
