//! The ordered collection and its supporting types.
//!
//! This module provides the crate's single data structure and everything
//! around it:
//!
//! - [`OrderedCollection`]: an insertion-ordered, resizable container
//!   with a functional-style API and signed, wrapping indices
//! - [`CollectionError`]: the error taxonomy of the fallible indexing
//!   and slicing operations
//! - [`collection!`](crate::collection!): literal construction
//!
//! # Indexing Model
//!
//! Indices are signed and normalize against the count at call time:
//! `0` is the first element, `-1` the last, and an arbitrarily negative
//! index keeps gaining the count until non-negative. Slices take a
//! `(start, end?, step?)` range and walk circularly, wrapping past
//! either boundary when the normalized bounds call for it.
//!
//! # Examples
//!
//! ```rust
//! use funcol::collection::OrderedCollection;
//!
//! let readings = funcol::collection![0, 1, 2, 3, 4, 5];
//!
//! assert_eq!(readings.get(-2), Ok(&4));
//! assert_eq!(readings.slice(&[4, 1]).unwrap().to_vec(), vec![4, 5, 0, 1]);
//! assert_eq!(
//!     readings.filter(|reading| reading % 2 == 0).to_vec(),
//!     vec![0, 2, 4]
//! );
//! ```

mod error;
mod index;
mod macros;
mod ordered;

pub use error::CollectionError;
pub use ordered::OrderedCollection;
