/// A lazily evaluated, ordered collection of elements, traversed through a cursor.
///
/// This is the single-pass tier of the protocol: a cursor obtained from
/// [`first()`](Sequence::first) may be advanced until it is the last one,
/// and that is all a caller may rely on.
/// Stronger guarantees are expressed by the tier traits layered on top of it
/// (see the [module documentation](crate::sequence)).
///
/// The sequence must outlive every cursor it produced, and a cursor is only
/// meaningful to the sequence instance that produced it.
///
/// # Elements
///
/// [`Element`](Sequence::Element) is what [`read_at()`](Sequence::read_at) yields.
/// Sequences borrowing their data usually yield references tied to the borrowed data
/// (e.g. `&'a T`), while sequences owning their data yield owned values.
///
/// # Examples
///
/// A sequence counting down to zero:
///
/// ```
/// use cursor_seq::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Cursor = u32;
///     type Element = u32;
///
///     fn first(&mut self) -> u32 {
///         self.0
///     }
///
///     fn is_last(&self, cursor: &u32) -> bool {
///         *cursor == 0
///     }
///
///     fn inc(&mut self, cursor: &mut u32) {
///         *cursor -= 1;
///     }
///
///     fn read_at(&self, cursor: &u32) -> u32 {
///         *cursor
///     }
/// }
///
/// assert!(Countdown(3).all(|n| n > 0));
/// assert_eq!(Countdown(3).iter().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub trait Sequence {
    /// A position within this sequence.
    type Cursor;

    /// The type produced when reading at a position.
    type Element;

    /// Returns a cursor to the first element,
    /// or a cursor for which [`is_last()`](Sequence::is_last) holds if the sequence is empty.
    fn first(&mut self) -> Self::Cursor;

    /// Returns `true` if the cursor denotes the end of the sequence.
    ///
    /// This has no side effect and may be called any number of times.
    fn is_last(&self, cursor: &Self::Cursor) -> bool;

    /// Advances the cursor by one element.
    ///
    /// The cursor must not be the last one.
    fn inc(&mut self, cursor: &mut Self::Cursor);

    /// Returns the element at the cursor.
    ///
    /// The cursor must not be the last one.
    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element;

    /// Returns the element at the cursor for extraction, rather than for inspection.
    ///
    /// A sequence may give up its copy of the element here, so the element at this
    /// position should not be read again afterwards.
    ///
    /// The default implementation forwards to [`read_at()`](Sequence::read_at).
    #[inline]
    fn move_at(&mut self, cursor: &Self::Cursor) -> Self::Element {
        self.read_at(cursor)
    }
}
