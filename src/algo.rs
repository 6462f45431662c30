//! Eager algorithms driving a [`Sequence`] through its cursor.
//!
//! Every traversal here is built on [`for_each_while()`], the one loop of
//! this crate that visits elements until told to stop.
//! Algorithms own no iteration state: they obtain a cursor from the sequence,
//! drive it and, where useful, hand it back.
//!
//! Each algorithm also has a method form on [`SequenceExt`].
//!
//! [`Sequence`]: crate::sequence::Sequence
//! [`SequenceExt`]: crate::sequence::SequenceExt

mod all_any_none;
mod for_each_while;
mod inplace_reverse;

pub use all_any_none::*;
pub use for_each_while::*;
pub use inplace_reverse::*;
