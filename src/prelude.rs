//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the protocol traits and the method forms of the algorithms.
//!
//! # Example
//!
//! ```
//! use cursor_seq::prelude::*;
//! ```

pub use crate::sequence::{
    BidirectionalSequence, BoundedSequence, IntoSequence, MultipassSequence, RandomAccessSequence,
    Sequence, SequenceExt, SwapSequence,
};
