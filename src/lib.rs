//! Generic algorithms over sequences, driven by cursors.
//!
//! [`Iterator`] fuses the position and the data into one value: advancing it
//! consumes the data, and what has been consumed cannot be revisited.
//! This crate splits the two apart. A [`Sequence`] holds the data, and a *cursor*
//! holds a position within it. Algorithms drive the cursor through a small protocol:
//!
//! ```
//! pub trait Sequence {
//!     type Cursor;
//!     type Element;
//!     fn first(&mut self) -> Self::Cursor;
//!     fn is_last(&self, cursor: &Self::Cursor) -> bool;
//!     fn inc(&mut self, cursor: &mut Self::Cursor);
//!     fn read_at(&self, cursor: &Self::Cursor) -> Self::Element;
//! }
//! ```
//!
//! Since the cursor outlives the algorithm, an algorithm can hand it back:
//! [`find()`] tells *where* the element is, and the caller resumes from there.
//!
//! # Capability tiers
//!
//! Not every sequence can do everything. A stream read off a socket can be walked once,
//! while a slice can be walked back and forth, jumped through, and rearranged.
//! The [`sequence`] module layers these abilities as traits
//! ([`MultipassSequence`], [`BidirectionalSequence`], [`RandomAccessSequence`],
//! [`BoundedSequence`] and [`SwapSequence`]), and each algorithm asks for exactly
//! the tier it needs:
//!
//! ```
//! use cursor_seq::prelude::*;
//! use cursor_seq::source::{from_iter, from_slice_mut};
//!
//! // Quantifiers only need a single pass.
//! assert!(from_iter("a1b2".chars()).any(|c| c.is_ascii_digit()));
//!
//! // Reversing needs to walk from both ends and swap.
//! let mut letters = ['a', 'b', 'c'];
//! from_slice_mut(&mut letters).inplace_reverse();
//! assert_eq!(letters, ['c', 'b', 'a']);
//! ```
//!
//! Asking for more than a sequence can give does not compile:
//!
//! ```compile_fail
//! use cursor_seq::prelude::*;
//! use cursor_seq::source::from_iter;
//!
//! from_iter(vec![1, 2, 3]).inplace_reverse();
//! ```
//!
//! # Adaptors
//!
//! [`flatten_with()`] turns a sequence of sequences into one sequence,
//! with a separator pattern placed between consecutive inner sequences:
//!
//! ```
//! use cursor_seq::prelude::*;
//! use cursor_seq::source::from_slice;
//!
//! let words = vec![b"hello".to_vec(), b"world".to_vec()];
//! let joined: Vec<u8> = from_slice(&words).flatten_with(b" ").iter().copied().collect();
//!
//! assert_eq!(joined, b"hello world");
//! ```
//!
//! # Features
//!
//! - `std` (default): implies `alloc`.
//! - `alloc`: sequences over [`Vec`](std::vec::Vec).
//!
//! Without both, the crate is `no_std` and allocation-free.
//!
//! [`Sequence`]: sequence::Sequence
//! [`MultipassSequence`]: sequence::MultipassSequence
//! [`BidirectionalSequence`]: sequence::BidirectionalSequence
//! [`RandomAccessSequence`]: sequence::RandomAccessSequence
//! [`BoundedSequence`]: sequence::BoundedSequence
//! [`SwapSequence`]: sequence::SwapSequence

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod adapters;
pub mod algo;
pub mod prelude;
pub mod sequence;
pub mod source;

#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use adapters::{flatten_with, flatten_with_value};
pub use algo::*;
