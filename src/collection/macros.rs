//! Literal construction macro for [`OrderedCollection`].
//!
//! [`OrderedCollection`]: super::OrderedCollection

/// Creates an [`OrderedCollection`] from a literal element list.
///
/// Mirrors the forms of `vec!`: a comma-separated element list (trailing
/// comma allowed), a `value; count` repetition, or nothing for an empty
/// collection.
///
/// [`OrderedCollection`]: crate::collection::OrderedCollection
///
/// # Examples
///
/// ## Element list
///
/// ```rust
/// let collection = funcol::collection![1, 2, 3];
/// assert_eq!(collection.to_vec(), vec![1, 2, 3]);
/// ```
///
/// ## Repetition
///
/// ```rust
/// let collection = funcol::collection![0; 4];
/// assert_eq!(collection.to_vec(), vec![0, 0, 0, 0]);
/// ```
///
/// ## Empty
///
/// ```rust
/// use funcol::collection::OrderedCollection;
///
/// let collection: OrderedCollection<i32> = funcol::collection![];
/// assert!(collection.is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    // Nothing: empty collection
    () => {
        $crate::collection::OrderedCollection::new()
    };

    // value; count: repeat a cloneable element
    ($element:expr; $count:expr) => {
        $crate::collection::OrderedCollection::from_vec(::std::vec![$element; $count])
    };

    // Comma-separated elements, trailing comma allowed
    ($($element:expr),+ $(,)?) => {
        $crate::collection::OrderedCollection::from_vec(::std::vec![$($element),+])
    };
}
