use crate::{
    adapters::{self, FlattenWith, InnerElement},
    algo,
    source::Single,
};

use super::{
    BidirectionalSequence, BoundedSequence, IntoSequence, Iter, MultipassSequence, Sequence,
    SwapSequence,
};

/// Extends [`Sequence`] with method forms of the algorithms and adaptors of this crate.
///
/// This trait is automatically implemented for all [`Sequence`] types.
/// Every method forwards to the free function of the same name, so the two forms
/// behave identically.
///
/// Methods taking `&mut self` leave the sequence in place, ready for another pass
/// if it is a [`MultipassSequence`].
pub trait SequenceExt: Sequence {
    /// Visits elements in order until `pred` returns `false` or the sequence ends.
    ///
    /// See [`algo::for_each_while()`](crate::algo::for_each_while).
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::{prelude::*, source::from_slice};
    ///
    /// let mut seq = from_slice(&[2, 4, 5, 6]);
    /// let cursor = seq.for_each_while(|&n| n % 2 == 0);
    ///
    /// assert_eq!(seq.read_at(&cursor), &5);
    /// ```
    #[inline]
    fn for_each_while<F>(&mut self, pred: F) -> Self::Cursor
    where
        F: FnMut(Self::Element) -> bool,
    {
        algo::for_each_while(self, pred)
    }

    /// Calls `f` on every element, in order.
    ///
    /// See [`algo::for_each()`](crate::algo::for_each).
    #[inline]
    fn for_each<F>(&mut self, f: F)
    where
        F: FnMut(Self::Element),
    {
        algo::for_each(self, f);
    }

    /// Returns the number of elements, traversing the whole sequence.
    ///
    /// See [`algo::count()`](crate::algo::count).
    #[inline]
    fn count(&mut self) -> usize {
        algo::count(self)
    }

    /// Returns the cursor of the first element satisfying `pred`,
    /// or the last cursor if there is none.
    ///
    /// See [`algo::find()`](crate::algo::find).
    #[inline]
    fn find<F>(&mut self, pred: F) -> Self::Cursor
    where
        F: FnMut(Self::Element) -> bool,
    {
        algo::find(self, pred)
    }

    /// Tests whether every element satisfies `pred`.
    ///
    /// See [`algo::all()`](crate::algo::all).
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::{prelude::*, source::from_slice};
    ///
    /// assert!(from_slice(&[1, 2, 3]).all(|&n| n > 0));
    /// assert!(!from_slice(&[1, -2, 3]).all(|&n| n > 0));
    /// ```
    #[inline]
    fn all<F>(&mut self, pred: F) -> bool
    where
        F: FnMut(Self::Element) -> bool,
    {
        algo::all(self, pred)
    }

    /// Tests whether some element satisfies `pred`.
    ///
    /// See [`algo::any()`](crate::algo::any).
    #[inline]
    fn any<F>(&mut self, pred: F) -> bool
    where
        F: FnMut(Self::Element) -> bool,
    {
        algo::any(self, pred)
    }

    /// Tests whether no element satisfies `pred`.
    ///
    /// See [`algo::none()`](crate::algo::none).
    #[inline]
    fn none<F>(&mut self, pred: F) -> bool
    where
        F: FnMut(Self::Element) -> bool,
    {
        algo::none(self, pred)
    }

    /// Flattens a sequence of sequences, placing the elements of `pattern`
    /// between every two consecutive inner sequences.
    ///
    /// See [`adapters::flatten_with()`](crate::adapters::flatten_with).
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::{prelude::*, source::from_slice};
    ///
    /// let words = vec![b"foo".to_vec(), b"bar".to_vec()];
    /// let joined: Vec<u8> = from_slice(&words)
    ///     .flatten_with(b", ")
    ///     .iter()
    ///     .copied()
    ///     .collect();
    ///
    /// assert_eq!(joined, b"foo, bar");
    /// ```
    #[inline]
    fn flatten_with<P>(self, pattern: P) -> FlattenWith<Self, P::IntoSeq>
    where
        Self: Sized,
        Self::Element: IntoSequence,
        P: IntoSequence<IntoSeq: MultipassSequence, Element: Into<InnerElement<Self>>>,
    {
        adapters::flatten_with(self, pattern)
    }

    /// Flattens a sequence of sequences, placing `value` between every two
    /// consecutive inner sequences.
    ///
    /// See [`adapters::flatten_with_value()`](crate::adapters::flatten_with_value).
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::{prelude::*, source::from_vec};
    ///
    /// let flat: Vec<_> = from_vec(vec![vec![1], vec![2], vec![3]])
    ///     .flatten_with_value(0)
    ///     .iter()
    ///     .collect();
    ///
    /// assert_eq!(flat, [1, 0, 2, 0, 3]);
    /// ```
    #[inline]
    fn flatten_with_value(
        self,
        value: InnerElement<Self>,
    ) -> FlattenWith<Self, Single<InnerElement<Self>>>
    where
        Self: Sized,
        Self::Element: IntoSequence,
        InnerElement<Self>: Clone,
    {
        adapters::flatten_with_value(self, value)
    }

    /// Reverses the elements of the sequence in place.
    ///
    /// See [`algo::inplace_reverse()`](crate::algo::inplace_reverse).
    #[inline]
    fn inplace_reverse(&mut self)
    where
        Self: BidirectionalSequence + BoundedSequence + SwapSequence,
    {
        algo::inplace_reverse(self);
    }

    /// Creates an [`Iterator`] extracting the elements of this sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::{prelude::*, source::from_slice};
    ///
    /// let doubled: Vec<_> = from_slice(&[1, 2, 3]).iter().map(|n| n * 2).collect();
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    #[inline]
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Creates an [`Iterator`] extracting the elements of this sequence,
    /// starting at `cursor` instead of the first cursor.
    ///
    /// This resumes a traversal an algorithm stopped, such as the cursor returned by
    /// [`for_each_while()`](SequenceExt::for_each_while).
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::{prelude::*, source::from_slice};
    ///
    /// let mut seq = from_slice(&[1, 2, 3, 4]);
    /// let cursor = seq.find(|&n| n == 3);
    ///
    /// assert_eq!(seq.iter_from(cursor).collect::<Vec<_>>(), [&3, &4]);
    /// ```
    #[inline]
    fn iter_from(self, cursor: Self::Cursor) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::with_cursor(self, cursor)
    }
}

impl<S: Sequence> SequenceExt for S {}
