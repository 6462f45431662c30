use std::fmt::Debug;

use crate::sequence::{Sequence, assert_sequence};

/// A single-pass [`Sequence`] pulling its elements from an [`Iterator`].
///
/// The sequence buffers the current element only. Its cursor can neither be copied nor
/// compared, so it is not a [`MultipassSequence`]: once advanced, an element is gone.
///
/// [`read_at()`](Sequence::read_at) clones the buffered element, while
/// [`move_at()`](Sequence::move_at) hands it out without cloning.
/// After an element has been moved out, it must not be read again.
///
/// This `struct` is created by [`from_iter()`]. See its documentation for more.
///
/// [`MultipassSequence`]: crate::sequence::MultipassSequence
pub struct FromIter<I>
where
    I: Iterator,
{
    iter: I,
    front: Front<I::Item>,
}

/// Position within a [`FromIter`]. The position itself is kept by the sequence.
#[derive(Debug)]
pub struct FromIterCursor {
    _priv: (),
}

#[derive(Debug)]
enum Front<T> {
    Ready(T),
    Moved,
    Exhausted,
}

/// Creates a single-pass [`Sequence`] from anything iterable.
///
/// Nothing is pulled from the iterator until [`first()`](Sequence::first) is called,
/// and each [`inc()`](Sequence::inc) pulls exactly one element.
///
/// # Examples
///
/// ```
/// use cursor_seq::{prelude::*, source::from_iter};
///
/// let mut lines = from_iter("a\nbb\n\nccc".lines());
/// let cursor = lines.find(|line| line.is_empty());
///
/// assert!(!lines.is_last(&cursor));
/// assert_eq!(lines.iter_from(cursor).collect::<Vec<_>>(), ["", "ccc"]);
/// ```
#[inline]
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator<Item: Clone>,
{
    assert_sequence(FromIter {
        iter: iter.into_iter(),
        front: Front::Exhausted,
    })
}

impl<I> FromIter<I>
where
    I: Iterator,
{
    #[inline]
    fn pull(&mut self) {
        self.front = match self.iter.next() {
            Some(item) => Front::Ready(item),
            None => Front::Exhausted,
        };
    }

    /// Returns the underlying iterator. The buffered element, if any, is dropped.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator<Item: Clone>,
{
    type Cursor = FromIterCursor;

    type Element = I::Item;

    #[inline]
    fn first(&mut self) -> Self::Cursor {
        self.pull();
        FromIterCursor { _priv: () }
    }

    #[inline]
    fn is_last(&self, _cursor: &Self::Cursor) -> bool {
        matches!(self.front, Front::Exhausted)
    }

    #[inline]
    fn inc(&mut self, _cursor: &mut Self::Cursor) {
        debug_assert!(
            !matches!(self.front, Front::Exhausted),
            "advanced a cursor past the end"
        );
        self.pull();
    }

    fn read_at(&self, _cursor: &Self::Cursor) -> Self::Element {
        match &self.front {
            Front::Ready(item) => item.clone(),
            Front::Moved => panic!("read an element that has been moved out"),
            Front::Exhausted => panic!("read at the end of a sequence"),
        }
    }

    fn move_at(&mut self, _cursor: &Self::Cursor) -> Self::Element {
        match std::mem::replace(&mut self.front, Front::Moved) {
            Front::Ready(item) => item,
            Front::Moved => panic!("moved an element out twice"),
            Front::Exhausted => panic!("moved at the end of a sequence"),
        }
    }
}

impl<I> Debug for FromIter<I>
where
    I: Iterator<Item: Debug> + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromIter")
            .field("iter", &self.iter)
            .field("front", &self.front)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::rc::Rc;

    use crate::prelude::*;

    use super::from_iter;

    #[test]
    fn lazy_pulling() {
        let mut pulled = vec![];
        let mut seq = from_iter((0..3).inspect(|&n| pulled.push(n)));

        let mut cursor = seq.first();
        seq.inc(&mut cursor);
        assert_eq!(seq.read_at(&cursor), 1);
        drop(seq);

        assert_eq!(pulled, [0, 1]);
    }

    #[test]
    fn move_at_does_not_clone() {
        let shared = Rc::new(());
        let mut seq = from_iter([Rc::clone(&shared)]);

        let cursor = seq.first();
        let moved = seq.move_at(&cursor);
        // The sequence holds no copy anymore, and is not at its end either.
        assert_eq!(Rc::strong_count(&shared), 2);
        assert!(!seq.is_last(&cursor));
        drop(moved);
    }

    #[test]
    #[should_panic(expected = "moved out")]
    fn read_after_move() {
        let mut seq = from_iter(["x"]);
        let cursor = seq.first();
        let _ = seq.move_at(&cursor);
        let _ = seq.read_at(&cursor);
    }
}
