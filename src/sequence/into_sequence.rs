use super::Sequence;

/// Conversion into a [`Sequence`].
///
/// By implementing this trait for a type, you define how it will be converted to a sequence.
/// Every [`Sequence`] converts into itself, and this crate provides conversions for slices,
/// arrays and [`Vec`]s (see [`source`](crate::source)).
///
/// # Usage in trait bounds
///
/// Using `IntoSequence` in trait bounds allows a function to be generic over both
/// [`Sequence`] and `IntoSequence`.
/// This is convenient for users of the function, so when they are using it
/// they do not have to make an extra call to
/// [`IntoSequence::into_seq()`] to obtain an instance of [`Sequence`].
///
/// It is also how [`flatten_with()`](crate::adapters::flatten_with) turns each
/// element of the outer sequence into an inner sequence.
///
/// # Examples
///
/// ```
/// use cursor_seq::prelude::*;
///
/// let nums = vec![1, 2, 3];
///
/// // `&Vec<T>` converts into a sequence borrowing the elements.
/// let mut seq = (&nums).into_seq();
/// let cursor = seq.first();
/// assert_eq!(seq.read_at(&cursor), &1);
/// ```
pub trait IntoSequence {
    /// The type of the elements of the produced sequence.
    type Element;

    /// Which sequence being produced?
    type IntoSeq: Sequence<Element = Self::Element>;

    /// Creates a sequence from a value.
    fn into_seq(self) -> Self::IntoSeq;
}

impl<S: Sequence> IntoSequence for S {
    type Element = S::Element;

    type IntoSeq = S;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        self
    }
}
