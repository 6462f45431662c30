use super::Sequence;

/// A [`Sequence`] whose cursors can be copied, compared and replayed.
///
/// Several cursors may coexist and advance independently. Reading at a cursor
/// yields the same element no matter how many other cursors passed over it,
/// and [`first()`](Sequence::first) always returns equal cursors.
///
/// Two cursors compare equal only if they denote the same position of the same sequence.
pub trait MultipassSequence: Sequence<Cursor: Clone + PartialEq> {}

/// A [`MultipassSequence`] whose cursors can step back.
pub trait BidirectionalSequence: MultipassSequence {
    /// Moves the cursor back by one element.
    ///
    /// The cursor must not be the first one.
    fn dec(&mut self, cursor: &mut Self::Cursor);
}

/// A [`BidirectionalSequence`] whose cursors can jump by an arbitrary offset in constant time.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Moves the cursor by `offset` elements, forwards if positive, backwards if negative.
    ///
    /// The resulting position must lie between the first cursor and the last one, inclusive.
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: isize);

    /// Returns how many times `from` has to be advanced to reach `to`.
    ///
    /// Negative if `to` comes before `from`.
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize;
}

/// A [`Sequence`] that can produce its end cursor without traversing.
pub trait BoundedSequence: Sequence {
    /// Returns the cursor one past the last element.
    ///
    /// It is never read from, but it can be compared with, and
    /// (for a [`BidirectionalSequence`]) stepped back from.
    fn last(&self) -> Self::Cursor;
}

/// A [`Sequence`] whose elements can be exchanged in place.
pub trait SwapSequence: Sequence {
    /// Swaps the elements at the two cursors.
    ///
    /// Neither cursor may be the last one. Swapping a position with itself does nothing.
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor);
}
