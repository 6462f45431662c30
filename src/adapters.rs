//! [`Sequence`]s built on top of other sequences.
//!
//! An adaptor wraps one or more sequences, synthesizes its own cursor type,
//! and forwards each protocol operation to the cursors of the wrapped sequences.
//!
//! [`Sequence`]: crate::sequence::Sequence

mod flatten_with;

pub use flatten_with::*;
