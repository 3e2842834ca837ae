//! # funcol
//!
//! Eager functional collections for Rust.
//!
//! ## Overview
//!
//! This library provides [`OrderedCollection`], a value-semantic, ordered,
//! growable sequence that layers a functional-programming-style API on top
//! of contiguous storage:
//!
//! - **Derivation**: `filter`, `map`, `sort`, `uniques`, `group_by`,
//!   `slice`, `limit_to` — all eager, all returning a fully materialized
//!   new collection without touching the receiver
//! - **Aggregation**: `reduce`, tie-preserving `max_by`/`min_by`,
//!   `each_match`/`any_match`/`no_match`, `contains`
//! - **Python-style indexing**: negative indices count from the back, and
//!   strided slices walk circularly across the collection boundary
//! - **Rendering**: prefix/separator/postfix printing to any caller-supplied
//!   [`std::io::Write`] sink
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for [`OrderedCollection`]
//!
//! ## Example
//!
//! ```rust
//! use funcol::collection::OrderedCollection;
//!
//! let numbers = funcol::collection![3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let evens = numbers.filter(|n| n % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![4, 2, 6]);
//!
//! // Negative indices count from the back
//! assert_eq!(numbers.get(-1), Ok(&6));
//!
//! // Slices may wrap around the boundary
//! let wrapped = numbers.slice(&[6, 1]).unwrap();
//! assert_eq!(wrapped.to_vec(), vec![2, 6, 3, 1]);
//! ```
//!
//! [`OrderedCollection`]: crate::collection::OrderedCollection

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use funcol::prelude::*;
///
/// let collection: OrderedCollection<i32> = funcol::collection![1, 2, 3];
/// assert_eq!(collection.len(), 3);
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;
