//! Order-statistics index over a fixed universe (Binary Indexed Tree).
//!
//! Maintains a multiset of keys drawn from a precomputed [`Universe`] and
//! answers "how many inserted occurrences compare below `x`" in $O(\log U)$.
//!
//! # Layout
//!
//! Counts are stored 1-indexed in a `Vec<usize>` of length `U + 1` (index 0
//! unused). `counts[i]` holds the number of occurrences whose rank falls in
//! `(i - lowbit(i), i]`, so a prefix count walks `i -= lowbit(i)` and an
//! insert walks `i += lowbit(i)`.
//!
//! # Ranks
//!
//! | Operation | Boundary | Counts ranks |
//! |-----------|----------|--------------|
//! | `count_smaller(x)` | `lower_bound(x)` | `< x` |
//! | `count_smaller_or_equal(x)` | `upper_bound(x)` | `<= x` |
//! | `update(x)` | `upper_bound(x)` | records `x` |
//!
//! Queries accept any probe value; keys between universe members snap to the
//! nearest boundary. Inserts require membership: the universe is built from
//! the same data that will be inserted, so a miss is a caller bug.

use crate::error::{Error, Result};
use crate::universe::Universe;

/// Insert-only multiset over a borrowed universe with logarithmic rank queries.
#[derive(Debug, Clone)]
pub struct OrderStatisticsIndex<'a, T> {
    universe: &'a Universe<T>,
    /// 1-indexed partial counts. `counts[0]` is unused.
    counts: Vec<usize>,
    total: usize,
}

impl<'a, T: Ord> OrderStatisticsIndex<'a, T> {
    /// Create an empty index bound to `universe`.
    pub fn new(universe: &'a Universe<T>) -> Self {
        Self {
            universe,
            counts: vec![0; universe.len() + 1],
            total: 0,
        }
    }

    /// Return the universe this index was built over.
    pub fn universe(&self) -> &'a Universe<T> {
        self.universe
    }

    /// Return the universe size `U`.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len() - 1
    }

    /// Return true if the universe is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of occurrences inserted so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count inserted occurrences strictly less than `value`.
    pub fn count_smaller(&self, value: &T) -> usize {
        self.prefix(self.universe.lower_bound(value))
    }

    /// Count inserted occurrences less than or equal to `value`.
    pub fn count_smaller_or_equal(&self, value: &T) -> usize {
        self.prefix(self.universe.upper_bound(value))
    }

    /// Count inserted occurrences in the closed range `[low, high]`.
    pub fn count_in_range(&self, low: &T, high: &T) -> usize {
        if low > high {
            return 0;
        }
        self.count_smaller_or_equal(high) - self.count_smaller(low)
    }

    /// Record one occurrence of `value`.
    ///
    /// `value` must be a member of the universe. This is checked only in
    /// debug builds; use [`try_update`](Self::try_update) when membership is
    /// not guaranteed by construction.
    pub fn update(&mut self, value: &T) {
        debug_assert!(
            self.universe.contains(value),
            "update with a key outside the index universe"
        );
        let pos = self.universe.upper_bound(value);
        self.add_at(pos);
    }

    /// Record one occurrence of `value`, rejecting keys outside the universe.
    pub fn try_update(&mut self, value: &T) -> Result<()> {
        if !self.universe.contains(value) {
            return Err(Error::KeyNotInUniverse);
        }
        self.update(value);
        Ok(())
    }

    /// Sum of counts at 1-based positions `1..=pos`.
    fn prefix(&self, mut pos: usize) -> usize {
        let mut count = 0;
        while pos > 0 {
            count += self.counts[pos];
            pos -= lowbit(pos);
        }
        count
    }

    fn add_at(&mut self, mut pos: usize) {
        // Position 0 only arises for keys below every member.
        if pos == 0 {
            return;
        }
        self.total += 1;
        while pos < self.counts.len() {
            self.counts[pos] += 1;
            pos += lowbit(pos);
        }
    }
}

/// Lowest set bit of `i`.
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowbit() {
        assert_eq!(lowbit(1), 1);
        assert_eq!(lowbit(6), 2);
        assert_eq!(lowbit(8), 8);
        assert_eq!(lowbit(12), 4);
    }

    #[test]
    fn test_index_basic() {
        let u = Universe::new(vec![1, 2, 5, 6]);
        let mut idx = OrderStatisticsIndex::new(&u);
        assert_eq!(idx.len(), 4);

        idx.update(&5);
        idx.update(&1);
        idx.update(&6);

        assert_eq!(idx.count_smaller(&1), 0);
        assert_eq!(idx.count_smaller(&5), 1);
        assert_eq!(idx.count_smaller(&6), 2);
        assert_eq!(idx.count_smaller_or_equal(&5), 2);
        assert_eq!(idx.count_smaller_or_equal(&6), 3);
        assert_eq!(idx.total(), 3);
    }

    #[test]
    fn test_index_repeated_inserts_are_additive() {
        let u = Universe::new(vec![3, 7, 9]);
        let mut idx = OrderStatisticsIndex::new(&u);

        idx.update(&7);
        idx.update(&7);
        assert_eq!(idx.count_smaller_or_equal(&7), 2);
        assert_eq!(idx.count_smaller(&7), 0);

        idx.update(&9);
        assert_eq!(idx.count_smaller_or_equal(&7), 2);
        assert_eq!(idx.count_smaller_or_equal(&9), 3);
    }

    #[test]
    fn test_index_probes_between_keys() {
        let u = Universe::new(vec![10i64, 20, 30]);
        let mut idx = OrderStatisticsIndex::new(&u);
        for v in [10, 20, 20, 30] {
            idx.update(&v);
        }

        assert_eq!(idx.count_smaller(&15), 1);
        assert_eq!(idx.count_smaller_or_equal(&15), 1);
        assert_eq!(idx.count_smaller(&i64::MIN), 0);
        assert_eq!(idx.count_smaller_or_equal(&i64::MAX), 4);
        assert_eq!(idx.count_in_range(&11, &29), 2);
        assert_eq!(idx.count_in_range(&10, &30), 4);
        assert_eq!(idx.count_in_range(&30, &10), 0);
    }

    #[test]
    fn test_index_empty_universe() {
        let u: Universe<i32> = Universe::new(Vec::new());
        let idx = OrderStatisticsIndex::new(&u);
        assert!(idx.is_empty());
        assert_eq!(idx.count_smaller(&0), 0);
        assert_eq!(idx.count_smaller_or_equal(&0), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the index universe")]
    fn test_update_foreign_key_panics_in_debug() {
        let u = Universe::new(vec![1, 3]);
        let mut idx = OrderStatisticsIndex::new(&u);
        idx.update(&0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_update_below_universe_is_dropped_in_release() {
        let u = Universe::new(vec![1, 3]);
        let mut idx = OrderStatisticsIndex::new(&u);
        idx.update(&0);
        assert_eq!(idx.total(), 0);
        assert_eq!(idx.count_smaller_or_equal(&3), 0);
    }

    #[test]
    fn test_try_update_rejects_foreign_keys() {
        let u = Universe::new(vec![1, 3]);
        let mut idx = OrderStatisticsIndex::new(&u);

        assert_eq!(idx.try_update(&2), Err(Error::KeyNotInUniverse));
        assert_eq!(idx.try_update(&0), Err(Error::KeyNotInUniverse));
        assert_eq!(idx.total(), 0);

        assert!(idx.try_update(&3).is_ok());
        assert_eq!(idx.count_smaller_or_equal(&3), 1);
    }
}
