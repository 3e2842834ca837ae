//! Error types for collection indexing and slicing.
//!
//! Every fallible operation on [`OrderedCollection`] reports its failure
//! through [`CollectionError`]. Errors are raised at the point of
//! detection and propagate unchanged to the caller; the collection never
//! recovers internally and never partially mutates before failing.
//!
//! [`OrderedCollection`]: super::OrderedCollection

use std::fmt;

/// Represents a failure of an indexing, slicing, or extrema operation.
///
/// The two historical families are index errors (`EmptyCollection`,
/// `IndexOutOfRange`) and range errors (`WrongArgumentCount`,
/// `ExceededSize`, `NonZeroStepRequired`).
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{CollectionError, OrderedCollection};
///
/// let empty: OrderedCollection<i32> = OrderedCollection::new();
/// assert_eq!(empty.first(), Err(CollectionError::EmptyCollection));
///
/// let short = funcol::collection![1, 2, 3];
/// assert_eq!(
///     short.slice(&[0, 10]),
///     Err(CollectionError::ExceededSize { index: 10, len: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An operation requiring at least one element was invoked on a
    /// zero-length collection.
    EmptyCollection,
    /// Single-index access with a raw, as-given index at or beyond the
    /// current count. Only large positive indices are caught here; large
    /// negative indices wrap instead (see
    /// [`OrderedCollection::get`](super::OrderedCollection::get)).
    IndexOutOfRange {
        /// The index as supplied by the caller, before normalization.
        index: isize,
        /// The collection length at the time of the call.
        len: usize,
    },
    /// A slice was called with zero or more than three range values.
    WrongArgumentCount {
        /// How many range values the caller supplied.
        supplied: usize,
    },
    /// A raw slice bound reached or exceeded the current count.
    ExceededSize {
        /// The offending bound as supplied by the caller.
        index: isize,
        /// The collection length at the time of the call.
        len: usize,
    },
    /// A supplied slice step reduced to zero modulo the current count.
    NonZeroStepRequired,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => {
                write!(formatter, "bad index: the collection is empty")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(
                    formatter,
                    "bad index: {index} is out of range for length {len}"
                )
            }
            Self::WrongArgumentCount { supplied } => {
                write!(
                    formatter,
                    "bad range: a range takes <start>, <start, end>, or \
                     <start, end, step> values (got {supplied})"
                )
            }
            Self::ExceededSize { index, len } => {
                write!(
                    formatter,
                    "bad range: index {index} cannot equal or exceed the \
                     collection length {len}"
                )
            }
            Self::NonZeroStepRequired => {
                write!(formatter, "bad range: step cannot be 0")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

// =============================================================================
// Tests
// =============================================================================
