use std::cell::Cell;

use crate::sequence::{
    BidirectionalSequence, BoundedSequence, MultipassSequence, RandomAccessSequence, Sequence,
    SwapSequence,
};

/// Wraps a sequence and counts the element accesses made through it.
///
/// Forwards every capability tier of the wrapped sequence unchanged,
/// including its cursor type.
#[derive(Debug)]
pub struct Probe<S> {
    seq: S,
    reads: Cell<usize>,
    swaps: usize,
}

impl<S: Sequence> Probe<S> {
    pub fn new(seq: S) -> Self {
        Self {
            seq,
            reads: Cell::new(0),
            swaps: 0,
        }
    }

    /// Number of `read_at()` and `move_at()` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    fn count_read(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

impl<S: Sequence> Sequence for Probe<S> {
    type Cursor = S::Cursor;

    type Element = S::Element;

    fn first(&mut self) -> Self::Cursor {
        self.seq.first()
    }

    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        self.seq.is_last(cursor)
    }

    fn inc(&mut self, cursor: &mut Self::Cursor) {
        self.seq.inc(cursor);
    }

    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        self.count_read();
        self.seq.read_at(cursor)
    }

    fn move_at(&mut self, cursor: &Self::Cursor) -> Self::Element {
        self.count_read();
        self.seq.move_at(cursor)
    }
}

impl<S: MultipassSequence> MultipassSequence for Probe<S> {}

impl<S: BidirectionalSequence> BidirectionalSequence for Probe<S> {
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        self.seq.dec(cursor);
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for Probe<S> {
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: isize) {
        self.seq.inc_by(cursor, offset);
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        self.seq.distance(from, to)
    }
}

impl<S: BoundedSequence> BoundedSequence for Probe<S> {
    fn last(&self) -> Self::Cursor {
        self.seq.last()
    }
}

impl<S: SwapSequence> SwapSequence for Probe<S> {
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.swaps += 1;
        self.seq.swap_at(a, b);
    }
}
