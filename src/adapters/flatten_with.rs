use std::fmt::Debug;

use crate::{
    sequence::{BoundedSequence, IntoSequence, MultipassSequence, Sequence},
    source::{Single, single},
};

/// The inner sequence type of a sequence of sequences `S`.
pub type Inner<S> = <<S as Sequence>::Element as IntoSequence>::IntoSeq;

/// The element type of the inner sequences of a sequence of sequences `S`.
pub type InnerElement<S> = <<S as Sequence>::Element as IntoSequence>::Element;

type InnerCursor<S> = <Inner<S> as Sequence>::Cursor;

type CursorOf<S, P> =
    FlattenWithCursor<<S as Sequence>::Cursor, <P as Sequence>::Cursor, InnerCursor<S>>;

/// A [`Sequence`] that flattens a sequence of sequences, interleaving a separator
/// pattern between every two consecutive inner sequences.
///
/// Each element of the outer sequence is turned into an inner sequence with
/// [`IntoSequence`] when the traversal reaches it. The adaptor keeps that one
/// inner sequence alive until the traversal leaves it for the next outer element.
///
/// The pattern appears *between* inner sequences only, never before the first one
/// nor after the last one. An empty inner sequence contributes no elements,
/// but the boundaries on both of its sides still get a pattern each.
///
/// Elements are those of the inner sequences. Pattern elements are converted into
/// them with [`Into`].
///
/// This is a single-pass sequence regardless of the outer one, since the current
/// inner sequence lives in the adaptor rather than in the cursor.
/// It is a [`BoundedSequence`] if the outer sequence is.
///
/// This `struct` is created by [`flatten_with()`] and [`flatten_with_value()`].
/// See their documentation for more.
pub struct FlattenWith<S, P>
where
    S: Sequence<Element: IntoSequence>,
    P: Sequence,
{
    base: S,
    pattern: P,
    // The pattern is multipass, so any of its first cursors will do.
    pattern_first: P::Cursor,
    // `None` while the cursor sits in the pattern, or before the first inner sequence.
    inner: Option<Inner<S>>,
}

/// Position within a [`FlattenWith`].
///
/// It holds the outer cursor, and either a pattern cursor or an inner cursor,
/// depending on which segment the position falls in.
#[derive(Debug, Clone)]
pub struct FlattenWithCursor<O, P, I> {
    outer: O,
    segment: Segment<P, I>,
}

#[derive(Debug, Clone)]
enum Segment<P, I> {
    Pattern(P),
    Inner(I),
}

/// Flattens a sequence of sequences, placing the elements of `pattern`
/// between every two consecutive inner sequences.
///
/// `pattern` must be a [`MultipassSequence`], since it is traversed once per boundary,
/// and its elements must convert [`Into`] those of the inner sequences.
/// Compositions breaking either requirement do not compile.
///
/// # Examples
///
/// ```
/// use cursor_seq::{adapters::flatten_with, prelude::*};
///
/// let rows = vec![vec![1, 2], vec![3], vec![], vec![4, 5]];
/// let flat: Vec<i32> = flatten_with(&rows, &[0, 0])
///     .iter()
///     .copied()
///     .collect();
///
/// // The empty row still sits between two separators.
/// assert_eq!(flat, [1, 2, 0, 0, 3, 0, 0, 0, 0, 4, 5]);
/// ```
///
/// The pattern may be empty, making this a plain flatten:
///
/// ```
/// use cursor_seq::{adapters::flatten_with, prelude::*};
///
/// let rows = [[1, 2], [3, 4]];
/// let empty: [i32; 0] = [];
/// assert_eq!(flatten_with(&rows, &empty).count(), 4);
/// ```
pub fn flatten_with<S, P>(seq: S, pattern: P) -> FlattenWith<S::IntoSeq, P::IntoSeq>
where
    S: IntoSequence<Element: IntoSequence>,
    P: IntoSequence<
            IntoSeq: MultipassSequence,
            Element: Into<<S::Element as IntoSequence>::Element>,
        >,
{
    FlattenWith::new(seq.into_seq(), pattern.into_seq())
}

/// Flattens a sequence of sequences, placing `value` between every two
/// consecutive inner sequences.
///
/// This is [`flatten_with()`] with a [`single()`] pattern, which is why the value
/// has to be [`Clone`].
///
/// # Examples
///
/// ```
/// use cursor_seq::{adapters::flatten_with_value, prelude::*, source::from_iter};
///
/// let words = from_iter(["flatten", "with"].map(|word| word.chars().collect::<Vec<_>>()));
/// let sentence: String = flatten_with_value(words, ' ').iter().collect();
///
/// assert_eq!(sentence, "flatten with");
/// ```
pub fn flatten_with_value<S>(
    seq: S,
    value: <S::Element as IntoSequence>::Element,
) -> FlattenWith<S::IntoSeq, Single<<S::Element as IntoSequence>::Element>>
where
    S: IntoSequence<Element: IntoSequence<Element: Clone>>,
{
    flatten_with(seq, single(value))
}

impl<S, P> FlattenWith<S, P>
where
    S: Sequence<Element: IntoSequence>,
    P: MultipassSequence,
{
    fn new(base: S, mut pattern: P) -> Self {
        Self {
            base,
            pattern_first: pattern.first(),
            pattern,
            inner: None,
        }
    }

    #[inline]
    fn inner(&self) -> &Inner<S> {
        self.inner
            .as_ref()
            .expect("inner sequence should be materialized")
    }

    #[inline]
    fn inner_mut(&mut self) -> &mut Inner<S> {
        self.inner
            .as_mut()
            .expect("inner sequence should be materialized")
    }

    /// Turns the outer element at the cursor into the current inner sequence,
    /// and moves the cursor to its start.
    fn enter_inner(&mut self, cursor: &mut CursorOf<S, P>) {
        let inner = self
            .inner
            .insert(self.base.move_at(&cursor.outer).into_seq());
        cursor.segment = Segment::Inner(inner.first());
    }

    /// Moves the cursor past exhausted segments, until it rests on an element
    /// or the outer sequence ends.
    fn satisfy(&mut self, cursor: &mut CursorOf<S, P>) {
        loop {
            match &cursor.segment {
                Segment::Pattern(pattern_cur) => {
                    if !self.pattern.is_last(pattern_cur) {
                        return;
                    }

                    self.enter_inner(cursor);
                }
                Segment::Inner(inner_cur) => {
                    if !self.inner().is_last(inner_cur) {
                        return;
                    }

                    self.inner = None;
                    self.base.inc(&mut cursor.outer);
                    if self.base.is_last(&cursor.outer) {
                        return;
                    }

                    cursor.segment = Segment::Pattern(self.pattern_first.clone());
                }
            }
        }
    }
}

impl<S, P> Sequence for FlattenWith<S, P>
where
    S: Sequence<Element: IntoSequence>,
    P: MultipassSequence<Element: Into<InnerElement<S>>>,
{
    type Cursor = CursorOf<S, P>;

    type Element = InnerElement<S>;

    fn first(&mut self) -> Self::Cursor {
        let mut cursor = FlattenWithCursor {
            outer: self.base.first(),
            segment: Segment::Pattern(self.pattern_first.clone()),
        };

        // No pattern before the first inner sequence.
        if !self.base.is_last(&cursor.outer) {
            self.enter_inner(&mut cursor);
            self.satisfy(&mut cursor);
        }

        cursor
    }

    #[inline]
    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        self.base.is_last(&cursor.outer)
    }

    fn inc(&mut self, cursor: &mut Self::Cursor) {
        match &mut cursor.segment {
            Segment::Pattern(pattern_cur) => self.pattern.inc(pattern_cur),
            Segment::Inner(inner_cur) => self.inner_mut().inc(inner_cur),
        }

        self.satisfy(cursor);
    }

    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        match &cursor.segment {
            Segment::Pattern(pattern_cur) => self.pattern.read_at(pattern_cur).into(),
            Segment::Inner(inner_cur) => self.inner().read_at(inner_cur),
        }
    }

    fn move_at(&mut self, cursor: &Self::Cursor) -> Self::Element {
        match &cursor.segment {
            Segment::Pattern(pattern_cur) => self.pattern.move_at(pattern_cur).into(),
            Segment::Inner(inner_cur) => self.inner_mut().move_at(inner_cur),
        }
    }
}

impl<S, P> BoundedSequence for FlattenWith<S, P>
where
    S: BoundedSequence<Element: IntoSequence>,
    P: MultipassSequence<Element: Into<InnerElement<S>>>,
{
    /// The end is decided by the outer cursor alone, so no inner sequence is
    /// materialized here.
    #[inline]
    fn last(&self) -> Self::Cursor {
        FlattenWithCursor {
            outer: self.base.last(),
            segment: Segment::Pattern(self.pattern_first.clone()),
        }
    }
}

impl<S, P> Debug for FlattenWith<S, P>
where
    S: Sequence<Element: IntoSequence> + Debug,
    P: Sequence<Cursor: Debug> + Debug,
    Inner<S>: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlattenWith")
            .field("base", &self.base)
            .field("pattern", &self.pattern)
            .field("pattern_first", &self.pattern_first)
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::prelude::*;
    use crate::source::{from_iter, from_slice, from_vec};
    use crate::test_utils::Probe;

    use super::{flatten_with, flatten_with_value};

    fn flatten_with_zero(rows: &[Vec<i32>]) -> Vec<i32> {
        flatten_with_value(from_slice(rows), &0)
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn separator_between_rows() {
        assert_eq!(
            flatten_with_zero(&[vec![1], vec![2], vec![3]]),
            [1, 0, 2, 0, 3]
        );
    }

    #[test]
    fn empty_rows_keep_their_boundaries() {
        assert_eq!(
            flatten_with_zero(&[vec![1, 2], vec![3], vec![], vec![4, 5]]),
            [1, 2, 0, 3, 0, 0, 4, 5]
        );
        assert_eq!(flatten_with_zero(&[vec![], vec![]]), [0]);
        assert_eq!(flatten_with_zero(&[vec![], vec![], vec![]]), [0, 0]);
        assert_eq!(flatten_with_zero(&[vec![], vec![7]]), [0, 7]);
        assert_eq!(flatten_with_zero(&[vec![7], vec![]]), [7, 0]);
        assert!(flatten_with_zero(&[vec![]]).is_empty());
    }

    #[test]
    fn empty_outer() {
        let mut seq = flatten_with_value(from_slice::<Vec<i32>>(&[]), &0);

        let cursor = seq.first();
        assert!(seq.is_last(&cursor));
        assert!(seq.inner.is_none());
    }

    #[test]
    fn single_row_never_consults_pattern() {
        let rows = [vec![1, 2, 3]];
        let mut pattern = Probe::new(from_slice(&[9, 9]));

        let flat: Vec<_> = flatten_with(&rows, &mut pattern)
            .iter()
            .copied()
            .collect();

        assert_eq!(flat, [1, 2, 3]);
        assert_eq!(pattern.reads(), 0);
    }

    #[test]
    fn pattern_read_once_per_boundary() {
        let rows = [vec![1], vec![2], vec![3]];
        let mut pattern = Probe::new(from_slice(&[8, 9]));

        let flat: Vec<_> = flatten_with(&rows, &mut pattern)
            .iter()
            .copied()
            .collect();

        assert_eq!(flat, [1, 8, 9, 2, 8, 9, 3]);
        assert_eq!(pattern.reads(), 4);
    }

    #[test]
    fn empty_pattern_is_plain_flatten() {
        let rows = [vec![1], vec![], vec![2, 3]];
        let empty: [i32; 0] = [];

        let flat: Vec<_> = flatten_with(&rows, &empty).iter().copied().collect();
        assert_eq!(flat, [1, 2, 3]);
    }

    #[test]
    fn single_pass_outer_of_owned_rows() {
        let rows = from_iter(vec![vec!['a', 'b'], vec![], vec!['c']]);
        let joined: String = rows.flatten_with_value('-').iter().collect();

        assert_eq!(joined, "ab--c");
    }

    #[test]
    fn owned_rows_with_owned_pattern() {
        let rows = from_vec(vec![vec![1, 2], vec![3]]);
        let flat: Vec<_> = rows.flatten_with(vec![0, 0]).iter().collect();

        assert_eq!(flat, [1, 2, 0, 0, 3]);
    }

    #[test]
    fn reading_does_not_advance() {
        let rows = [vec![1, 2], vec![3]];
        let mut seq = flatten_with_value(&rows, &0);

        let mut cursor = seq.first();
        assert_eq!(seq.read_at(&cursor), &1);
        assert_eq!(seq.read_at(&cursor), &1);

        seq.inc(&mut cursor);
        seq.inc(&mut cursor);
        // Now in the pattern.
        assert_eq!(seq.read_at(&cursor), &0);
        assert!(seq.inner.is_none());

        seq.inc(&mut cursor);
        assert_eq!(seq.read_at(&cursor), &3);
        seq.inc(&mut cursor);
        assert!(seq.is_last(&cursor));
    }

    #[test]
    fn bounded_end_without_materializing() {
        let rows = [vec![1], vec![2]];
        let seq = flatten_with_value(&rows, &0);

        let last = seq.last();
        assert!(seq.is_last(&last));
        assert!(seq.inner.is_none());
    }

    #[test]
    #[should_panic(expected = "materialized")]
    fn read_at_the_end() {
        let rows = [vec![1]];
        let mut seq = flatten_with_value(&rows, &0);

        let mut cursor = seq.first();
        seq.inc(&mut cursor);
        assert!(seq.is_last(&cursor));
        let _ = seq.read_at(&cursor);
    }
}
