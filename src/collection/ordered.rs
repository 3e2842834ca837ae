//! Eager, ordered, functional-style collection over contiguous storage.
//!
//! This module provides [`OrderedCollection`], an insertion-ordered,
//! dynamically-sized container that layers a functional API (filter, map,
//! reduce, sort, grouping, extrema) on top of contiguous storage, together
//! with Python-style negative indexing and strided, wraparound slicing.
//!
//! # Overview
//!
//! `OrderedCollection` composes over a private `Vec<T>` and exposes a
//! curated operation set:
//!
//! - O(1) `len`, `is_empty`, `add` (amortized)
//! - O(N) single-pass derivations (`filter`, `map`, `slice`, `limit_to`)
//!   and aggregations (`reduce`, `max_by`, quantifiers)
//! - O(N log N) `sort`/`sort_by`, O(N²) `uniques` (no capability
//!   assumptions on `T`), O(N) expected `uniques_hashed`
//!
//! Every derivation returns a new, independently owned collection; the
//! receiver is never mutated. The only mutating operations are `add`,
//! `add_many`, `get_mut`, and `Extend`.
//!
//! # Examples
//!
//! ```rust
//! use funcol::collection::OrderedCollection;
//!
//! let readings = funcol::collection![3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let report = readings
//!     .filter(|reading| reading % 2 == 0)
//!     .sort(false)
//!     .map(|reading| reading * 10);
//!
//! assert_eq!(report.to_vec(), vec![20, 40, 60]);
//! assert_eq!(readings.len(), 8); // receiver untouched
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use super::error::CollectionError;
use super::index::{RangeWalk, normalize_index, plan_range};

// =============================================================================
// OrderedCollection Definition
// =============================================================================

/// An insertion-ordered, resizable collection with a functional-style API.
///
/// Elements keep the order they were inserted in under every operation
/// except `sort`/`sort_by`. Indices are signed: `0` is the first element,
/// `-1` the last, and a negative index gains the current count until
/// non-negative (so `-(count + 1)` wraps back around to the last element).
///
/// # Time Complexity
///
/// | Operation        | Complexity        |
/// |------------------|-------------------|
/// | `new`            | O(1)              |
/// | `get`            | O(1)              |
/// | `add`            | O(1) amortized    |
/// | `slice`          | O(N)              |
/// | `filter` / `map` | O(N)              |
/// | `reduce`         | O(N)              |
/// | `sort`           | O(N log N)        |
/// | `uniques`        | O(N²)             |
/// | `uniques_hashed` | O(N) expected     |
/// | `group_by`       | O(N log G)        |
/// | `len`            | O(1)              |
///
/// # Examples
///
/// ```rust
/// use funcol::collection::OrderedCollection;
///
/// let collection: OrderedCollection<i32> = (0..100).collect();
/// assert_eq!(collection.len(), 100);
/// assert_eq!(collection.get(50), Ok(&50));
/// assert_eq!(collection.get(-1), Ok(&99));
/// ```
#[derive(Clone)]
pub struct OrderedCollection<T> {
    /// Elements in insertion order.
    elements: Vec<T>,
}

// Static assertions: a plain owning container, so thread-safety and
// cloneability follow the element type.
static_assertions::assert_impl_all!(OrderedCollection<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderedCollection<String>: Send, Sync, Clone);

// =============================================================================
// Construction and Access
// =============================================================================

impl<T> OrderedCollection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = OrderedCollection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a collection that takes ownership of an existing `Vec`.
    ///
    /// The move counterpart of [`from_slice`](Self::from_slice); no
    /// elements are copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::OrderedCollection;
    ///
    /// let collection = OrderedCollection::from_vec(vec![1, 2, 3]);
    /// assert_eq!(collection.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements in the collection.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection holds no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at the given signed index.
    ///
    /// The raw index is checked against the current count *before*
    /// normalization, so only a too-large positive index is rejected; an
    /// arbitrarily negative index keeps wrapping instead. This asymmetry
    /// is part of the observable contract.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty, and [`CollectionError::IndexOutOfRange`] if the raw index
    /// is greater than or equal to the count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::CollectionError;
    ///
    /// let collection = funcol::collection![10, 20, 30];
    ///
    /// assert_eq!(collection.get(0), Ok(&10));
    /// assert_eq!(collection.get(-1), Ok(&30));
    /// assert_eq!(collection.get(-4), Ok(&30)); // wraps a second time
    /// assert_eq!(
    ///     collection.get(3),
    ///     Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }
        let len = self.len();
        if index >= len as isize {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(&self.elements[normalize_index(index, len)])
    }

    /// Returns a mutable reference to the element at the given signed
    /// index.
    ///
    /// Index handling matches [`get`](Self::get), including the
    /// raw-before-normalization bound check.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty, and [`CollectionError::IndexOutOfRange`] if the raw index
    /// is greater than or equal to the count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut collection = funcol::collection![1, 2, 3];
    /// *collection.get_mut(-1).unwrap() = 9;
    /// assert_eq!(collection.to_vec(), vec![1, 2, 9]);
    /// ```
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }
        let len = self.len();
        if index >= len as isize {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(&mut self.elements[normalize_index(index, len)])
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty.
    #[inline]
    pub fn first(&self) -> Result<&T, CollectionError> {
        self.elements.first().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty.
    #[inline]
    pub fn last(&self) -> Result<&T, CollectionError> {
        self.elements.last().ok_or(CollectionError::EmptyCollection)
    }

    /// Appends an element at the back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::OrderedCollection;
    ///
    /// let mut collection = OrderedCollection::new();
    /// collection.add(1);
    /// collection.add(2);
    /// assert_eq!(collection.to_vec(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Appends every element of an iterator at the back, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut collection = funcol::collection![1];
    /// collection.add_many(vec![2, 3]);
    /// assert_eq!(collection.to_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn add_many<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(elements);
    }

    /// Returns an iterator over references to the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a contiguous slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the collection and returns the underlying `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Creates a collection by copying the elements of a slice.
    ///
    /// The copy counterpart of [`from_vec`](Self::from_vec).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::OrderedCollection;
    ///
    /// let source = [1, 2, 3];
    /// let collection = OrderedCollection::from_slice(&source);
    /// assert_eq!(collection.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }

    /// Returns a copy of the elements as a `Vec`.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Clones the elements at every position a walk visits, in
    /// visitation order.
    fn collect_walk(&self, walk: RangeWalk) -> Self {
        let mut elements = Vec::new();
        for position in walk {
            elements.push(self.elements[position].clone());
        }
        Self { elements }
    }
}

// =============================================================================
// Derivation Operations
// =============================================================================

impl<T> OrderedCollection<T> {
    /// Returns a new collection holding `transform(element)` for every
    /// element, in order.
    ///
    /// The element type may change; the length never does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 3];
    ///
    /// let doubled = collection.map(|element| element * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    ///
    /// let rendered = collection.map(ToString::to_string);
    /// assert_eq!(rendered.to_vec(), vec!["1", "2", "3"]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, transform: F) -> OrderedCollection<U>
    where
        F: FnMut(&T) -> U,
    {
        OrderedCollection {
            elements: self.elements.iter().map(transform).collect(),
        }
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Returns a new collection of the elements satisfying the predicate,
    /// relative order preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 10, 15, -2, -8, 15];
    ///
    /// let negatives = collection.filter(|element| *element < 0);
    /// assert_eq!(negatives.to_vec(), vec![-2, -8]);
    /// assert_eq!(collection.len(), 7); // receiver untouched
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    /// Returns a new collection of the elements visited by walking from
    /// `start` to `end` inclusive, stepping by `step`.
    ///
    /// The range supplies 1 to 3 signed values: `start`, optionally `end`
    /// (default: the last valid index), and optionally `step` (default:
    /// 1). `start` and `end` may be negative with the usual wrapping
    /// meaning. The walk is circular: with a positive step and an `end`
    /// that precedes `start` (in normalized terms) it runs off the back
    /// and resumes at the front, and symmetrically for a negative step.
    ///
    /// A supplied step is reduced modulo the count with its sign kept, so
    /// an oversized stride folds down to an equivalent one. A defaulted
    /// step is never reduced. One consequence: an explicit step that is a
    /// multiple of the count (including step 1 over a single element)
    /// reduces to 0 and is rejected, while the same range without the
    /// step succeeds.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::WrongArgumentCount`] unless the range holds
    ///   1 to 3 values.
    /// - [`CollectionError::EmptyCollection`] if the collection is empty.
    /// - [`CollectionError::ExceededSize`] if the raw `start` or the raw
    ///   `end` is greater than or equal to the count. The check runs on
    ///   the raw values, so only positive bounds are caught; negative
    ///   bounds always normalize.
    /// - [`CollectionError::NonZeroStepRequired`] if the reduced step
    ///   is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![0, 1, 2, 3, 4, 5];
    ///
    /// assert_eq!(collection.slice(&[1, 4]).unwrap().to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(collection.slice(&[0, 5, 2]).unwrap().to_vec(), vec![0, 2, 4]);
    ///
    /// // Wraparound: end precedes start, so the walk circles past the back.
    /// assert_eq!(collection.slice(&[4, 1]).unwrap().to_vec(), vec![4, 5, 0, 1]);
    ///
    /// // Backward wraparound past the front.
    /// assert_eq!(collection.slice(&[1, 4, -1]).unwrap().to_vec(), vec![1, 0, 5, 4]);
    /// ```
    pub fn slice(&self, range: &[isize]) -> Result<Self, CollectionError> {
        let walk = plan_range(range, self.len())?;
        Ok(self.collect_walk(walk))
    }

    /// Returns a new collection of the first `min(count, len)` elements.
    ///
    /// Asking for zero elements, or limiting an empty collection, returns
    /// an empty collection. Cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 3, 4, 5];
    ///
    /// assert_eq!(collection.limit_to(3).to_vec(), vec![1, 2, 3]);
    /// assert_eq!(collection.limit_to(99).to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(collection.limit_to(0).is_empty());
    /// ```
    #[must_use]
    pub fn limit_to(&self, count: usize) -> Self {
        if count == 0 || self.is_empty() {
            return Self::default();
        }
        let end = count.min(self.len()) - 1;
        self.collect_walk(RangeWalk::new(0, end, 1, self.len()))
    }

    /// Returns a sorted copy ordered by the supplied comparator; the
    /// receiver is untouched.
    ///
    /// The sort is stable: elements that compare equal keep their
    /// relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection!["pear", "fig", "banana"];
    ///
    /// let by_length = collection.sort_by(|left, right| left.len().cmp(&right.len()));
    /// assert_eq!(by_length.to_vec(), vec!["fig", "pear", "banana"]);
    /// ```
    #[must_use]
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.elements.clone();
        elements.sort_by(compare);
        Self { elements }
    }

    /// Returns a new collection retaining only the first occurrence of
    /// each distinct value, in first-occurrence order.
    ///
    /// Quadratic by design: only `PartialEq` is assumed of `T`. See
    /// [`uniques_hashed`](Self::uniques_hashed) for the opt-in fast path
    /// when `T` is hashable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 1, 3, 2, 4];
    /// assert_eq!(collection.uniques().to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn uniques(&self) -> Self
    where
        T: PartialEq,
    {
        let mut elements: Vec<T> = Vec::new();
        for element in &self.elements {
            if !elements.contains(element) {
                elements.push(element.clone());
            }
        }
        Self { elements }
    }

    /// Returns the same result as [`uniques`](Self::uniques) in O(N)
    /// expected time, for element types that support hashing.
    ///
    /// A separate method rather than a specialization of `uniques`, so
    /// picking the fast path is always an explicit caller decision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 1, 3, 2, 4];
    /// assert_eq!(collection.uniques_hashed().to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn uniques_hashed(&self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::new();
        let mut elements = Vec::new();
        for element in &self.elements {
            if seen.insert(element) {
                elements.push(element.clone());
            }
        }
        Self { elements }
    }

    /// Groups the elements by a derived key.
    ///
    /// Returns a map from each distinct key to the collection of elements
    /// producing it. Key iteration follows the key type's total order;
    /// elements within a group keep insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let ages = funcol::collection![23, 27, 31, 35, 39, 42];
    ///
    /// let by_decade = ages.group_by(|age| age / 10);
    /// assert_eq!(by_decade[&2].to_vec(), vec![23, 27]);
    /// assert_eq!(by_decade[&3].to_vec(), vec![31, 35, 39]);
    /// assert_eq!(by_decade[&4].to_vec(), vec![42]);
    /// ```
    #[must_use]
    pub fn group_by<K, F>(&self, mut key_of: F) -> BTreeMap<K, Self>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut groups: BTreeMap<K, Self> = BTreeMap::new();
        for element in &self.elements {
            groups
                .entry(key_of(element))
                .or_default()
                .add(element.clone());
        }
        groups
    }
}

impl<T: Ord + Clone> OrderedCollection<T> {
    /// Returns a sorted copy ordered by the natural total order of `T`,
    /// descending when the flag is set; the receiver is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![3, 1, 2];
    ///
    /// assert_eq!(collection.sort(false).to_vec(), vec![1, 2, 3]);
    /// assert_eq!(collection.sort(true).to_vec(), vec![3, 2, 1]);
    /// assert_eq!(collection.to_vec(), vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn sort(&self, descending: bool) -> Self {
        let mut elements = self.elements.clone();
        if descending {
            elements.sort_by(|left, right| right.cmp(left));
        } else {
            elements.sort();
        }
        Self { elements }
    }
}

// =============================================================================
// Aggregation Operations
// =============================================================================

impl<T> OrderedCollection<T> {
    /// Left-folds the elements in order into an accumulator.
    ///
    /// Reducing an empty collection returns `initial` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 10, 15, -2, -8, 15];
    /// assert_eq!(collection.reduce(0, |sum, element| sum + element), 33);
    /// ```
    #[must_use]
    pub fn reduce<Acc, F>(&self, initial: Acc, combine: F) -> Acc
    where
        F: FnMut(Acc, &T) -> Acc,
    {
        self.elements.iter().fold(initial, combine)
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Short-circuits on the first failing element; vacuously `true` for
    /// an empty collection.
    #[must_use]
    pub fn each_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// Returns `true` if at least one element satisfies the predicate.
    ///
    /// Short-circuits on the first match; `false` for an empty
    /// collection.
    #[must_use]
    pub fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Returns `true` if no element satisfies the predicate.
    ///
    /// Short-circuits on the first match; vacuously `true` for an empty
    /// collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![2, 4, 6];
    ///
    /// assert!(collection.each_match(|element| element % 2 == 0));
    /// assert!(collection.any_match(|element| *element > 5));
    /// assert!(collection.no_match(|element| *element < 0));
    /// ```
    #[must_use]
    pub fn no_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    /// Returns `true` if some element equals the given value.
    ///
    /// The value may be any borrowed form of `T`, so a collection of
    /// `String` answers lookups by `&str`. Linear scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![String::from("alpha"), String::from("beta")];
    ///
    /// assert!(collection.contains("alpha"));
    /// assert!(!collection.contains("gamma"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.elements.iter().any(|element| element.borrow() == value)
    }

    /// Visits every element in order with the given action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 3];
    ///
    /// let mut total = 0;
    /// collection.for_each(|element| total += element);
    /// assert_eq!(total, 6);
    /// ```
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(action);
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Single-pass extrema scan keeping every element tied for the best
    /// key.
    ///
    /// A strictly better key clears the running ties and restarts them;
    /// an equal key appends the newly seen element. Keys that compare as
    /// incomparable (for example a NaN float key) never displace the
    /// current best.
    fn extrema_by<K, F>(&self, mut key_of: F, take_greater: bool) -> Result<Self, CollectionError>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        let Some((head, tail)) = self.elements.split_first() else {
            return Err(CollectionError::EmptyCollection);
        };
        let mut best_key = key_of(head);
        let mut winners = vec![head.clone()];
        for element in tail {
            let key = key_of(element);
            match key.partial_cmp(&best_key) {
                Some(Ordering::Greater) if take_greater => {
                    best_key = key;
                    winners.clear();
                    winners.push(element.clone());
                }
                Some(Ordering::Less) if !take_greater => {
                    best_key = key;
                    winners.clear();
                    winners.push(element.clone());
                }
                Some(Ordering::Equal) => winners.push(element.clone()),
                _ => {}
            }
        }
        Ok(Self { elements: winners })
    }

    /// Returns every element whose key is the maximum over the
    /// collection, in original relative order.
    ///
    /// Ties are preserved: the result holds one element per occurrence
    /// of the winning key, not just the first.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let words = funcol::collection!["pear", "fig", "banana", "cherry"];
    ///
    /// let longest = words.max_by(|word| word.len()).unwrap();
    /// assert_eq!(longest.to_vec(), vec!["banana", "cherry"]);
    /// ```
    pub fn max_by<K, F>(&self, key_of: F) -> Result<Self, CollectionError>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.extrema_by(key_of, true)
    }

    /// Returns every element whose key is the minimum over the
    /// collection, in original relative order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty.
    pub fn min_by<K, F>(&self, key_of: F) -> Result<Self, CollectionError>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.extrema_by(key_of, false)
    }
}

impl<T: PartialOrd + Clone> OrderedCollection<T> {
    /// Returns every element equal to the maximum, in original relative
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![3, 9, 1, 9, 4];
    ///
    /// assert_eq!(collection.max().unwrap().to_vec(), vec![9, 9]);
    /// assert_eq!(collection.min().unwrap().to_vec(), vec![1]);
    /// ```
    pub fn max(&self) -> Result<Self, CollectionError> {
        self.extrema_by(|element| element.clone(), true)
    }

    /// Returns every element equal to the minimum, in original relative
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is
    /// empty.
    pub fn min(&self) -> Result<Self, CollectionError> {
        self.extrema_by(|element| element.clone(), false)
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl<T: fmt::Display> OrderedCollection<T> {
    /// Writes the elements to a sink as prefix, elements joined by the
    /// separator, postfix.
    ///
    /// An empty collection renders prefix and postfix only. The sink is
    /// always supplied by the caller; there is no implicit default
    /// output.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 3];
    ///
    /// let mut rendered = Vec::new();
    /// collection.print(&mut rendered, "<", " | ", ">").unwrap();
    /// assert_eq!(rendered, b"<1 | 2 | 3>");
    /// ```
    pub fn print<W>(
        &self,
        sink: &mut W,
        prefix: &str,
        separator: &str,
        postfix: &str,
    ) -> io::Result<()>
    where
        W: Write,
    {
        write!(sink, "{prefix}")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(sink, "{separator}")?;
            }
            write!(sink, "{element}")?;
        }
        write!(sink, "{postfix}")
    }
}

impl<T> OrderedCollection<T> {
    /// Writes the elements to a sink like [`print`](Self::print), with
    /// each element rendered by a caller-supplied formatter.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let collection = funcol::collection![1, 2, 3];
    ///
    /// let mut rendered = Vec::new();
    /// collection
    ///     .print_by(&mut rendered, |element| format!("#{element}"), "", ", ", "\n")
    ///     .unwrap();
    /// assert_eq!(rendered, b"#1, #2, #3\n");
    /// ```
    pub fn print_by<W, F, D>(
        &self,
        sink: &mut W,
        mut render: F,
        prefix: &str,
        separator: &str,
        postfix: &str,
    ) -> io::Result<()>
    where
        W: Write,
        F: FnMut(&T) -> D,
        D: fmt::Display,
    {
        write!(sink, "{prefix}")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(sink, "{separator}")?;
            }
            let rendered = render(element);
            write!(sink, "{rendered}")?;
        }
        write!(sink, "{postfix}")
    }
}

// =============================================================================
// Iterators
// =============================================================================

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.elements.extend(iterator);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OrderedCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone> From<&[T]> for OrderedCollection<T> {
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedCollection<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T: PartialEq> PartialEq for OrderedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for OrderedCollection<T> {}

/// Hashes the length first, then each element in order, so equal
/// collections hash equally and ordering affects the hash.
impl<T: Hash> Hash for OrderedCollection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedCollection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedCollectionVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> OrderedCollectionVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedCollectionVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = OrderedCollection<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(OrderedCollection::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedCollection<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedCollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
