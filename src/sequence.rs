//! Module contains the cursor protocol and its capability tiers.
//!
//! A [`Sequence`] never hands out its elements on its own. Instead, a caller
//! asks it for a *cursor* with [`first()`](Sequence::first), then drives that cursor
//! with [`is_last()`](Sequence::is_last), [`inc()`](Sequence::inc) and
//! [`read_at()`](Sequence::read_at). The sequence keeps the data, the cursor keeps
//! the position, and the algorithm keeps nothing.
//!
//! # Capability tiers
//!
//! | Trait | Added guarantee |
//! |---|---|
//! | [`Sequence`] | single-pass: a cursor may be advanced once |
//! | [`MultipassSequence`] | cursors are [`Clone`] and comparable, and may be replayed |
//! | [`BidirectionalSequence`] | cursors can step back with [`dec()`](BidirectionalSequence::dec) |
//! | [`RandomAccessSequence`] | cursors can jump and measure distances |
//! | [`BoundedSequence`] | the end cursor is available directly via [`last()`](BoundedSequence::last) |
//! | [`SwapSequence`] | elements at two cursors can be swapped in place |
//!
//! An algorithm states the tier it needs in its bounds, so a sequence lacking
//! the capability is rejected at compile time rather than at traversal time.
//!
//! # Contract violations
//!
//! Reading or advancing a cursor at the end, stepping back before the start,
//! and jumping out of range are violations of the protocol.
//! They are not reported through return values: implementations may panic
//! (in debug builds at least), and callers must check
//! [`is_last()`](Sequence::is_last) beforehand.
//!
//! # Example
//!
//! ```
//! use cursor_seq::prelude::*;
//! use cursor_seq::source::from_slice;
//!
//! let mut seq = from_slice(&[3, 1, 4]);
//!
//! let mut cursor = seq.first();
//! let mut seen = vec![];
//! while !seq.is_last(&cursor) {
//!     seen.push(*seq.read_at(&cursor));
//!     seq.inc(&mut cursor);
//! }
//!
//! assert_eq!(seen, [3, 1, 4]);
//! assert!(cursor == seq.last());
//! ```

mod by_mut;
mod into_sequence;
mod iter;
#[allow(clippy::module_inception)]
mod sequence;
mod sequence_ext;
mod tiers;

pub use into_sequence::*;
pub use iter::*;
pub use sequence::*;
pub use sequence_ext::*;
pub use tiers::*;

#[inline(always)]
pub(crate) const fn assert_sequence<S>(seq: S) -> S
where
    S: Sequence,
{
    seq
}
