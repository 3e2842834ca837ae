//! Signed-index normalization and the strided range walk.
//!
//! This module holds the indexing core shared by
//! [`OrderedCollection::get`], [`OrderedCollection::slice`], and
//! [`OrderedCollection::limit_to`]:
//!
//! - [`normalize_index`] maps a possibly negative index onto `[0, count)`
//!   by repeated addition of the current count (Python-style `-1` is the
//!   last element, and indices more negative than `-count` keep wrapping).
//! - [`plan_range`] validates a raw `(start, end?, step?)` range against
//!   the current count and produces a [`RangeWalk`].
//! - [`RangeWalk`] is an iterator over the visited positions, including
//!   the circular legs of a wraparound slice.
//!
//! Validation is deliberately asymmetric and order-sensitive: the bounds
//! are checked against the *raw* values before normalization, so a large
//! positive bound is rejected while an equally large negative one wraps.
//! This is long-established observable behavior, not an oversight.
//!
//! [`OrderedCollection::get`]: super::OrderedCollection::get
//! [`OrderedCollection::slice`]: super::OrderedCollection::slice
//! [`OrderedCollection::limit_to`]: super::OrderedCollection::limit_to

use super::error::CollectionError;

// =============================================================================
// Index Normalization
// =============================================================================

/// Maps a signed index onto an offset in `[0, count)`.
///
/// A negative index gains `count` until non-negative, so `-1` names the
/// last element and `-(count + 1)` wraps a second time back to the last
/// element. This is equivalent to `((index % count) + count) % count`,
/// i.e. [`isize::rem_euclid`].
///
/// Normalizing against an empty collection is undefined; callers guard
/// with an explicit empty check first.
pub(crate) fn normalize_index(index: isize, count: usize) -> usize {
    debug_assert!(count > 0, "normalize_index requires a non-empty collection");
    index.rem_euclid(count as isize) as usize
}

// =============================================================================
// Range Planning
// =============================================================================

/// Validates raw range arguments against the current count and produces
/// the corresponding [`RangeWalk`].
///
/// The range supplies `start`, optionally `end` (default: `count - 1`),
/// and optionally `step` (default: `1`). Checks run in the historical
/// order:
///
/// 1. the range must hold 1–3 values (`WrongArgumentCount`);
/// 2. the collection must be non-empty (`EmptyCollection`);
/// 3. the raw `start`, then the raw `end`, must stay below the count
///    (`ExceededSize`) — negative bounds are never caught here, they
///    normalize instead;
/// 4. a supplied `step` is reduced modulo the count with its sign kept
///    (a defaulted step is never reduced); a reduced step of zero is
///    rejected (`NonZeroStepRequired`).
pub(crate) fn plan_range(range: &[isize], len: usize) -> Result<RangeWalk, CollectionError> {
    if range.is_empty() || range.len() > 3 {
        return Err(CollectionError::WrongArgumentCount {
            supplied: range.len(),
        });
    }
    if len == 0 {
        return Err(CollectionError::EmptyCollection);
    }
    let count = len as isize;

    let start = range[0];
    if start >= count {
        return Err(CollectionError::ExceededSize { index: start, len });
    }
    let normalized_start = normalize_index(start, len);

    let end = if range.len() >= 2 { range[1] } else { count - 1 };
    if end >= count {
        return Err(CollectionError::ExceededSize { index: end, len });
    }
    let normalized_end = normalize_index(end, len);

    let step = if range.len() == 3 {
        range[2] % count
    } else {
        1
    };
    if step == 0 {
        return Err(CollectionError::NonZeroStepRequired);
    }

    Ok(RangeWalk::new(normalized_start, normalized_end, step, len))
}

// =============================================================================
// RangeWalk
// =============================================================================

/// Iterator over the positions visited by a strided, possibly circular
/// walk from a normalized start to a normalized end, both inclusive.
///
/// Four traversal shapes exist, keyed on the step sign and the relative
/// order of the normalized bounds:
///
/// - `step > 0`, `end >= start`: plain forward walk.
/// - `step > 0`, `end < start`: forward wraparound — run to the high
///   boundary, resume at `(last + step) mod count`, finish at `end`.
/// - `step < 0`, `end <= start`: plain backward walk.
/// - `step < 0`, `end > start`: backward wraparound — run to position 0,
///   resume at `(last + step) mod count`, finish at `end`.
///
/// Every emitted position lies in `[0, count)`; a walk always emits at
/// least one position.
#[derive(Debug, Clone)]
pub(crate) struct RangeWalk {
    /// Collection length the walk was planned against.
    count: isize,
    /// Normalized inclusive bound of the final leg.
    end: isize,
    /// Reduced, non-zero stride.
    step: isize,
    /// Next position to visit; may leave `[0, count)` between legs.
    position: isize,
    /// Whether the walk has entered its final (bounded-by-`end`) leg.
    crossed: bool,
}

impl RangeWalk {
    /// Plans a walk over pre-validated bounds.
    ///
    /// `start` and `end` must already be normalized and `step` already
    /// reduced and non-zero.
    pub(crate) fn new(start: usize, end: usize, step: isize, len: usize) -> Self {
        debug_assert!(len > 0, "RangeWalk requires a non-empty collection");
        debug_assert!(step != 0, "RangeWalk requires a non-zero step");
        debug_assert!(start < len && end < len, "RangeWalk bounds must be normalized");

        let (start, end) = (start as isize, end as isize);
        let wraps = if step > 0 { end < start } else { end > start };
        Self {
            count: len as isize,
            end,
            step,
            position: start,
            crossed: !wraps,
        }
    }
}

impl Iterator for RangeWalk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.crossed {
            // Boundary leg of a circular walk: run off the edge, then
            // resume at the opposite side.
            let inside = if self.step > 0 {
                self.position < self.count
            } else {
                self.position >= 0
            };
            if inside {
                let index = self.position;
                self.position += self.step;
                return Some(index as usize);
            }
            self.position = self.position.rem_euclid(self.count);
            self.crossed = true;
        }

        let inside = if self.step > 0 {
            self.position <= self.end
        } else {
            self.position >= self.end
        };
        if inside {
            let index = self.position;
            self.position += self.step;
            Some(index as usize)
        } else {
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{CollectionError, RangeWalk, normalize_index, plan_range};
    use rstest::rstest;

    fn walk(range: &[isize], len: usize) -> Vec<usize> {
        plan_range(range, len)
            .expect("range should be valid")
            .collect()
    }

    #[rstest]
    #[case(0, 6, 0)]
    #[case(5, 6, 5)]
    #[case(-1, 6, 5)]
    #[case(-6, 6, 0)]
    #[case(-7, 6, 5)]
    #[case(-13, 6, 5)]
    #[case(-1, 1, 0)]
    fn test_normalize_index(#[case] index: isize, #[case] count: usize, #[case] expected: usize) {
        assert_eq!(normalize_index(index, count), expected);
    }

    #[rstest]
    fn test_normalize_index_extreme_negative() {
        assert_eq!(normalize_index(isize::MIN, 1), 0);
    }

    #[rstest]
    fn test_forward_walk() {
        assert_eq!(walk(&[1, 4], 6), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_forward_walk_with_stride() {
        assert_eq!(walk(&[0, 5, 2], 6), vec![0, 2, 4]);
    }

    #[rstest]
    fn test_forward_wraparound() {
        assert_eq!(walk(&[4, 1], 6), vec![4, 5, 0, 1]);
    }

    #[rstest]
    fn test_forward_wraparound_with_stride() {
        // 4, then off the edge: (4 + 3) mod 6 = 1, then 1 + 3 passes end.
        assert_eq!(walk(&[4, 2, 3], 6), vec![4, 1]);
    }

    #[rstest]
    fn test_backward_walk() {
        assert_eq!(walk(&[4, 1, -1], 6), vec![4, 3, 2, 1]);
    }

    #[rstest]
    fn test_backward_wraparound() {
        assert_eq!(walk(&[1, 4, -1], 6), vec![1, 0, 5, 4]);
    }

    #[rstest]
    fn test_backward_wraparound_with_stride() {
        // 1, then off the edge: (1 - 4) mod 6 = 3, then 3 - 4 passes end.
        assert_eq!(walk(&[1, 5, -4], 6), vec![1]);
    }

    #[rstest]
    fn test_full_reverse_via_negative_bounds() {
        assert_eq!(walk(&[-1, 0, -1], 3), vec![2, 1, 0]);
    }

    #[rstest]
    fn test_single_position_walk() {
        assert_eq!(walk(&[3, 3], 6), vec![3]);
    }

    #[rstest]
    fn test_end_defaults_to_last_position() {
        assert_eq!(walk(&[2], 5), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_step_reduces_modulo_count() {
        // A stride of 7 over 6 positions behaves as a stride of 1.
        assert_eq!(walk(&[0, 5, 7], 6), walk(&[0, 5, 1], 6));
        assert_eq!(walk(&[5, 0, -7], 6), walk(&[5, 0, -1], 6));
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[0, 1, 1, 1], 4)]
    fn test_wrong_argument_count(#[case] range: &[isize], #[case] supplied: usize) {
        assert_eq!(
            plan_range(range, 6).unwrap_err(),
            CollectionError::WrongArgumentCount { supplied }
        );
    }

    #[rstest]
    fn test_empty_collection_rejected_before_normalization() {
        assert_eq!(
            plan_range(&[0], 0).unwrap_err(),
            CollectionError::EmptyCollection
        );
    }

    #[rstest]
    fn test_raw_end_at_count_rejected() {
        assert_eq!(
            plan_range(&[0, 6], 6).unwrap_err(),
            CollectionError::ExceededSize { index: 6, len: 6 }
        );
    }

    #[rstest]
    fn test_raw_start_at_count_rejected() {
        assert_eq!(
            plan_range(&[6, 0], 6).unwrap_err(),
            CollectionError::ExceededSize { index: 6, len: 6 }
        );
    }

    #[rstest]
    fn test_negative_end_is_not_caught_by_the_bound_check() {
        // A deeply negative end normalizes instead of raising.
        assert_eq!(walk(&[0, -7], 6), vec![0, 1, 2, 3, 4, 5]);
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-6)]
    #[case(12)]
    fn test_step_reducing_to_zero_rejected(#[case] step: isize) {
        assert_eq!(
            plan_range(&[0, 5, step], 6).unwrap_err(),
            CollectionError::NonZeroStepRequired
        );
    }

    #[rstest]
    fn test_supplied_unit_step_on_single_element_rejected() {
        // Historical quirk: an explicit step folds modulo the count, so
        // step 1 over one element reduces to 0 and is rejected, while the
        // same range without a step succeeds.
        assert_eq!(
            plan_range(&[0, 0, 1], 1).unwrap_err(),
            CollectionError::NonZeroStepRequired
        );
        assert_eq!(walk(&[0, 0], 1), vec![0]);
    }

    #[rstest]
    fn test_walk_emits_at_least_one_position() {
        let positions: Vec<usize> = RangeWalk::new(0, 0, 1, 1).collect();
        assert_eq!(positions, vec![0]);
    }

    #[rstest]
    fn test_error_precedence_end_before_step() {
        // Both the end bound and the step are invalid; the end check wins.
        assert_eq!(
            plan_range(&[0, 9, 0], 6).unwrap_err(),
            CollectionError::ExceededSize { index: 9, len: 6 }
        );
    }
}
