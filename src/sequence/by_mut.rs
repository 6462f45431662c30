use super::{
    BidirectionalSequence, BoundedSequence, MultipassSequence, RandomAccessSequence, Sequence,
    SwapSequence,
};

// A mutable borrow drives the borrowed sequence, so an algorithm
// consuming its argument can still be handed a sequence that is used afterwards.

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Cursor = S::Cursor;

    type Element = S::Element;

    #[inline]
    fn first(&mut self) -> Self::Cursor {
        S::first(self)
    }

    #[inline]
    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        S::is_last(self, cursor)
    }

    #[inline]
    fn inc(&mut self, cursor: &mut Self::Cursor) {
        S::inc(self, cursor);
    }

    #[inline]
    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        S::read_at(self, cursor)
    }

    #[inline]
    fn move_at(&mut self, cursor: &Self::Cursor) -> Self::Element {
        S::move_at(self, cursor)
    }
}

impl<S> MultipassSequence for &mut S where S: MultipassSequence + ?Sized {}

impl<S> BidirectionalSequence for &mut S
where
    S: BidirectionalSequence + ?Sized,
{
    #[inline]
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        S::dec(self, cursor);
    }
}

impl<S> RandomAccessSequence for &mut S
where
    S: RandomAccessSequence + ?Sized,
{
    #[inline]
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: isize) {
        S::inc_by(self, cursor, offset);
    }

    #[inline]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        S::distance(self, from, to)
    }
}

impl<S> BoundedSequence for &mut S
where
    S: BoundedSequence + ?Sized,
{
    #[inline]
    fn last(&self) -> Self::Cursor {
        S::last(self)
    }
}

impl<S> SwapSequence for &mut S
where
    S: SwapSequence + ?Sized,
{
    #[inline]
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        S::swap_at(self, a, b);
    }
}
