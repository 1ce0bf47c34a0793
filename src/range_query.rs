//! Counting queries driven by an [`OrderStatisticsIndex`].
//!
//! Both algorithms follow the same shape: derive the full key universe from
//! the input up front, bind an index to it, then make a single pass that
//! interleaves queries with inserts. Total cost is $O(n \log n)$.

use crate::error::{Error, Result};
use crate::fenwick::OrderStatisticsIndex;
use crate::universe::Universe;

/// For every position `i`, count positions `j > i` with `values[j] < values[i]`.
///
/// Scans right to left so that the index only holds elements to the right of
/// the current position when it is queried.
///
/// ```
/// assert_eq!(fenrank::count_smaller_to_right(&[5, 2, 6, 1]), vec![2, 1, 1, 0]);
/// ```
pub fn count_smaller_to_right<T: Ord + Clone>(values: &[T]) -> Vec<usize> {
    let universe = Universe::from_slice(values);

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "count_smaller_to_right",
        n = values.len(),
        universe = universe.len()
    )
    .entered();

    let mut index = OrderStatisticsIndex::new(&universe);
    let mut result = vec![0; values.len()];
    for (i, v) in values.iter().enumerate().rev() {
        result[i] = index.count_smaller(v);
        index.update(v);
    }
    result
}

/// Count contiguous subarrays whose sum lies in `[lower, upper]`.
///
/// With prefix sums `P[0] = 0` and `P[k] = P[k-1] + values[k-1]`, the sum of
/// `values[i..k]` is `P[k] - P[i]`. Scanning `P` left to right, each prefix
/// `s` pairs with every earlier prefix `p` satisfying
/// `s - upper <= p <= s - lower`. The probes `s - upper` and `s - lower` are
/// generally not prefix sums themselves; the index snaps them to the nearest
/// universe boundary.
///
/// Returns [`Error::InvalidRange`] if `lower > upper`.
///
/// ```
/// assert_eq!(fenrank::count_range_sum(&[-2, 5, -1], -2, 2).unwrap(), 3);
/// ```
pub fn count_range_sum(values: &[i32], lower: i64, upper: i64) -> Result<usize> {
    if lower > upper {
        return Err(Error::InvalidRange { lower, upper });
    }

    let sums = prefix_sums(values);
    let universe = Universe::from_slice(&sums);

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "count_range_sum",
        n = values.len(),
        universe = universe.len(),
        lower,
        upper
    )
    .entered();

    let mut index = OrderStatisticsIndex::new(&universe);
    let mut count = 0;
    for s in &sums {
        // Saturation keeps the probe on the correct side of every key.
        let hi = s.saturating_sub(lower);
        let lo = s.saturating_sub(upper);
        count += index.count_smaller_or_equal(&hi) - index.count_smaller(&lo);
        index.update(s);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(count, "range sums counted");

    Ok(count)
}

/// Prefix sums of `values` with a leading zero, widened to `i64`.
fn prefix_sums(values: &[i32]) -> Vec<i64> {
    let mut sums = Vec::with_capacity(values.len() + 1);
    let mut acc = 0i64;
    sums.push(acc);
    for &v in values {
        acc += i64::from(v);
        sums.push(acc);
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_smaller_to_right_basic() {
        assert_eq!(count_smaller_to_right(&[5, 2, 6, 1]), vec![2, 1, 1, 0]);
        assert_eq!(count_smaller_to_right(&[3, 2, 1]), vec![2, 1, 0]);
        assert_eq!(count_smaller_to_right(&[1, 2, 3]), vec![0, 0, 0]);
    }

    #[test]
    fn test_count_smaller_to_right_ties() {
        assert_eq!(count_smaller_to_right(&[1, 1, 1]), vec![0, 0, 0]);
        assert_eq!(count_smaller_to_right(&[2, 0, 2, 1, 0]), vec![3, 0, 2, 1, 0]);
    }

    #[test]
    fn test_count_smaller_to_right_trivial() {
        let empty: [i32; 0] = [];
        assert!(count_smaller_to_right(&empty).is_empty());
        assert_eq!(count_smaller_to_right(&[-42]), vec![0]);
    }

    #[test]
    fn test_count_smaller_to_right_generic_keys() {
        let words = ["pear", "apple", "fig", "apple"];
        assert_eq!(count_smaller_to_right(&words), vec![3, 0, 1, 0]);
    }

    #[test]
    fn test_count_range_sum_basic() {
        assert_eq!(count_range_sum(&[-2, 5, -1], -2, 2).unwrap(), 3);
        assert_eq!(count_range_sum(&[0], 0, 0).unwrap(), 1);
        assert_eq!(count_range_sum(&[0, 0], 0, 0).unwrap(), 3);
    }

    #[test]
    fn test_count_range_sum_empty() {
        assert_eq!(count_range_sum(&[], -5, 5).unwrap(), 0);
    }

    #[test]
    fn test_count_range_sum_invalid_range() {
        assert_eq!(
            count_range_sum(&[1, 2], 3, 1),
            Err(Error::InvalidRange { lower: 3, upper: 1 })
        );
    }

    #[test]
    fn test_count_range_sum_extreme_bounds() {
        let values = [i32::MAX, i32::MAX, i32::MIN];
        // Every one of the six subarrays qualifies.
        assert_eq!(count_range_sum(&values, i64::MIN, i64::MAX).unwrap(), 6);
        assert_eq!(
            count_range_sum(&values, i64::from(i32::MAX) * 2, i64::MAX).unwrap(),
            1
        );
    }

    #[test]
    fn test_prefix_sums_widen() {
        assert_eq!(
            prefix_sums(&[i32::MAX, i32::MAX]),
            vec![0, i64::from(i32::MAX), 2 * i64::from(i32::MAX)]
        );
    }
}
