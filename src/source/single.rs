use crate::sequence::{
    BidirectionalSequence, BoundedSequence, MultipassSequence, RandomAccessSequence, Sequence,
    assert_sequence,
};

/// A [`Sequence`] of exactly one element.
///
/// Reading clones the element, so it can be read any number of times.
/// This is what [`flatten_with_value()`](crate::adapters::flatten_with_value) uses as
/// its separator pattern.
///
/// This `struct` is created by [`single()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Single<T> {
    value: T,
}

/// Position within a [`Single`]: before or after its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SingleCursor {
    done: bool,
}

/// Creates a [`Sequence`] yielding `value` once.
///
/// # Examples
///
/// ```
/// use cursor_seq::{prelude::*, source::single};
///
/// assert_eq!(single('x').iter().collect::<String>(), "x");
/// assert_eq!(single(7).count(), 1);
/// ```
#[inline]
pub fn single<T: Clone>(value: T) -> Single<T> {
    assert_sequence(Single { value })
}

impl<T> Single<T> {
    /// Returns the element.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Sequence for Single<T> {
    type Cursor = SingleCursor;

    type Element = T;

    #[inline]
    fn first(&mut self) -> Self::Cursor {
        SingleCursor { done: false }
    }

    #[inline]
    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        cursor.done
    }

    #[inline]
    fn inc(&mut self, cursor: &mut Self::Cursor) {
        debug_assert!(!cursor.done, "advanced a cursor past the end");
        cursor.done = true;
    }

    #[inline]
    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        debug_assert!(!cursor.done, "read at the end of a sequence");
        self.value.clone()
    }
}

impl<T: Clone> MultipassSequence for Single<T> {}

impl<T: Clone> BidirectionalSequence for Single<T> {
    #[inline]
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        debug_assert!(cursor.done, "stepped a cursor back before the start");
        cursor.done = false;
    }
}

impl<T: Clone> RandomAccessSequence for Single<T> {
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: isize) {
        let pos = isize::from(cursor.done) + offset;
        assert!(
            (0..=1).contains(&pos),
            "moved a cursor out of range by {offset}"
        );
        cursor.done = pos == 1;
    }

    #[inline]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        isize::from(to.done) - isize::from(from.done)
    }
}

impl<T: Clone> BoundedSequence for Single<T> {
    #[inline]
    fn last(&self) -> Self::Cursor {
        SingleCursor { done: true }
    }
}
