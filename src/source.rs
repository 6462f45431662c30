//! Concrete [`Sequence`]s the adaptors and algorithms of this crate can start from.
//!
//! | Constructor | Sequence | Tier | Element |
//! |---|---|---|---|
//! | [`single()`] | [`Single`] | random-access, bounded | `T` (cloned) |
//! | [`from_slice()`] | [`SliceSeq`] | random-access, bounded | `&'a T` |
//! | [`from_slice_mut()`] | [`SliceMut`] | random-access, bounded, swap | `T` (cloned) |
//! | [`from_vec()`] | [`VecSeq`] | random-access, bounded, swap | `T` (cloned) |
//! | [`from_iter()`] | [`FromIter`] | single-pass | `I::Item` |
//!
//! Slices, arrays and [`Vec`]s also implement [`IntoSequence`], so they can be
//! handed to any function taking one.
//!
//! [`Sequence`]: crate::sequence::Sequence
//! [`IntoSequence`]: crate::sequence::IntoSequence

mod from_iter;
mod single;
mod slice;
mod slice_mut;
#[cfg(feature = "alloc")]
mod vec;

pub use from_iter::*;
pub use single::*;
pub use slice::*;
pub use slice_mut::*;
#[cfg(feature = "alloc")]
pub use vec::*;
