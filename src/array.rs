//! Array exercises: partitioning, digit-vector arithmetic, permutations,
//! sampling and scans.
//!
//! Digit vectors are big-endian: the most significant digit is at index 0.

use std::collections::HashMap;
use std::ops::Range;

use rand::Rng;

use crate::error::{Error, Result};

/// Move every element satisfying `pred` before every element that does not.
///
/// Returns the number of elements satisfying `pred`. Relative order is not
/// preserved. $O(n)$.
pub fn partition_by<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut i = 0;
    let mut end = v.len();
    while i < end {
        if pred(&v[i]) {
            i += 1;
        } else {
            end -= 1;
            v.swap(i, end);
        }
    }
    i
}

/// Three-way partition around `pivot`: `[< pivot | == pivot | > pivot]`.
///
/// Returns `(lt, gt)` such that `v[..lt] < pivot`, `v[lt..gt] == pivot` and
/// `v[gt..] > pivot`.
pub fn partition_around<T: Ord>(v: &mut [T], pivot: &T) -> (usize, usize) {
    let mut lo = 0;
    let mut mid = 0;
    let mut hi = v.len();
    while mid < hi {
        match v[mid].cmp(pivot) {
            std::cmp::Ordering::Less => {
                v.swap(lo, mid);
                lo += 1;
                mid += 1;
            }
            std::cmp::Ordering::Equal => mid += 1,
            std::cmp::Ordering::Greater => {
                hi -= 1;
                v.swap(mid, hi);
            }
        }
    }
    (lo, hi)
}

/// Move even integers before odd ones. Returns the number of evens.
pub fn even_odd(v: &mut [i32]) -> usize {
    partition_by(v, |x| x % 2 == 0)
}

/// Add one to a non-negative decimal number stored as a digit vector.
pub fn increment(digits: &mut Vec<i32>) -> Result<()> {
    if let Some(&bad) = digits.iter().find(|d| !(0..=9).contains(*d)) {
        return Err(Error::InvalidDigit(bad));
    }

    let mut carry = 1;
    for d in digits.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        *d += carry;
        carry = *d / 10;
        *d %= 10;
    }
    if carry > 0 {
        digits.insert(0, carry);
    }
    Ok(())
}

/// Multiply two decimal numbers stored as digit vectors.
///
/// The leading digit may be negative to mark a negative number. An empty
/// operand is treated as zero, and a zero product is `[0]`. $O(nm)$.
pub fn multiply(a: &[i32], b: &[i32]) -> Result<Vec<i32>> {
    validate_signed_digits(a)?;
    validate_signed_digits(b)?;
    if a.is_empty() || b.is_empty() {
        return Ok(vec![0]);
    }
    let negative = (a[0] < 0) != (b[0] < 0);

    let mut result = vec![0; a.len() + b.len()];
    for i in (0..a.len()).rev() {
        let mut carry = 0;
        for j in (0..b.len()).rev() {
            let cell = &mut result[i + j + 1];
            *cell += a[i].abs() * b[j].abs() + carry;
            carry = *cell / 10;
            *cell %= 10;
        }
        result[i] += carry;
    }

    let first = result.iter().position(|&d| d != 0);
    let mut result = match first {
        Some(p) => result.split_off(p),
        None => return Ok(vec![0]),
    };
    if negative {
        result[0] = -result[0];
    }
    Ok(result)
}

fn validate_signed_digits(digits: &[i32]) -> Result<()> {
    for (i, &d) in digits.iter().enumerate() {
        let ok = if i == 0 {
            (-9..=9).contains(&d)
        } else {
            (0..=9).contains(&d)
        };
        if !ok {
            return Err(Error::InvalidDigit(d));
        }
    }
    Ok(())
}

/// Minimum number of jumps from index 0 to the last index, where `a[i]` is
/// the farthest one may advance from `i`. `None` if the end is unreachable.
///
/// Walks reachable indices in breadth-first layers. $O(n)$.
pub fn can_reach_end(a: &[usize]) -> Option<usize> {
    let last = a.len().checked_sub(1)?;
    let mut steps = 0;
    let mut frontier = 0;
    let mut i = 0;
    while frontier < last {
        let mut next = frontier;
        while i <= frontier {
            next = next.max(i.saturating_add(a[i]));
            i += 1;
        }
        if next == frontier {
            return None;
        }
        steps += 1;
        frontier = next;
    }
    Some(steps)
}

/// Remove duplicates from a sorted vector, returning the new length.
pub fn delete_dupes<T: PartialEq>(v: &mut Vec<T>) -> usize {
    v.dedup();
    v.len()
}

/// Maximum profit from one buy followed by one sell.
pub fn buy_and_sell_stock_once(prices: &[f64]) -> f64 {
    let Some(&first) = prices.first() else {
        return 0.0;
    };
    let mut max_profit = 0.0f64;
    let mut min_price = first;
    for &p in &prices[1..] {
        max_profit = max_profit.max(p - min_price);
        min_price = min_price.min(p);
    }
    max_profit
}

/// Maximum profit from at most two non-overlapping buy/sell rounds.
///
/// A backward pass records the best single trade starting at or after each
/// day; a forward pass combines it with the best trade ending before that.
pub fn buy_and_sell_stock_twice(prices: &[f64]) -> f64 {
    let n = prices.len();
    if n <= 1 {
        return 0.0;
    }

    let mut best_suffix = vec![0.0f64; n];
    let mut max_price = prices[n - 1];
    for i in (0..n - 1).rev() {
        best_suffix[i] = best_suffix[i + 1].max(max_price - prices[i]);
        max_price = max_price.max(prices[i]);
    }

    let mut max_profit = best_suffix[0];
    let mut min_price = prices[0];
    for i in 1..n - 1 {
        max_profit = max_profit.max(prices[i] - min_price + best_suffix[i + 1]);
        min_price = min_price.min(prices[i]);
    }
    max_profit
}

/// A permutation of `1..=n` whose adjacent absolute differences take exactly
/// `k` distinct values, for `1 <= k < n`.
///
/// The first `n - k` slots count up from 1 (all differences 1); the rest
/// alternate between the largest and smallest unused values, producing the
/// differences `k, k-1, ..., 2`. Out-of-range `k` is clamped.
pub fn beautiful_arrangement(n: usize, k: usize) -> Vec<usize> {
    let k = k.clamp(1, n.saturating_sub(1).max(1)).min(n);
    let head = n - k;
    let mut result = vec![0; n];
    for (i, slot) in result.iter_mut().enumerate().take(head) {
        *slot = i + 1;
    }
    let mut high = n;
    for i in (head..n).step_by(2) {
        result[i] = high;
        high -= 1;
    }
    let mut low = head + 1;
    for i in (head + 1..n).step_by(2) {
        result[i] = low;
        low += 1;
    }
    result
}

/// All primes `<= n` (sieve of Eratosthenes). $O(n \log \log n)$.
pub fn generate_primes(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; n + 1];
    let mut primes = Vec::new();
    for p in 2..=n {
        if !is_prime[p] {
            continue;
        }
        primes.push(p);
        let Some(start) = first_unmarked_multiple(p) else {
            continue;
        };
        for m in (start..=n).step_by(p) {
            is_prime[m] = false;
        }
    }
    primes
}

/// `p * p`, where sieving by `p` starts; `None` once it leaves `usize`.
fn first_unmarked_multiple(p: usize) -> Option<usize> {
    p.checked_mul(p)
}

/// Reorder `v` so that `v[i]` moves to index `perm[i]`.
///
/// Follows cycles by swapping, in $O(n)$ time.
pub fn apply_permutation<T>(perm: &[usize], v: &mut [T]) -> Result<()> {
    if perm.len() != v.len() {
        return Err(Error::InvalidPermutation(format!(
            "length {} does not match {} elements",
            perm.len(),
            v.len()
        )));
    }
    let mut seen = vec![false; perm.len()];
    for &p in perm {
        if p >= perm.len() || std::mem::replace(&mut seen[p], true) {
            return Err(Error::InvalidPermutation(format!(
                "target index {p} is out of range or repeated"
            )));
        }
    }

    let mut perm = perm.to_vec();
    for i in 0..perm.len() {
        while perm[i] != i {
            let j = perm[i];
            v.swap(i, j);
            perm.swap(i, j);
        }
    }
    Ok(())
}

/// Rearrange `v` into the next permutation in lexicographic order.
///
/// Returns `false` and leaves `v` unchanged if it is already the last one.
pub fn next_permutation<T: Ord>(v: &mut [T]) -> bool {
    let Some(pivot) = v.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = v.iter().rposition(|x| *x > v[pivot]) else {
        return false;
    };
    v.swap(pivot, successor);
    v[pivot + 1..].reverse();
    true
}

/// Move a uniformly random `k`-subset of `v` to the front and return it.
///
/// `k` larger than `v.len()` selects every element.
pub fn random_sampling<'a, T, R>(v: &'a mut [T], k: usize, rng: &mut R) -> &'a [T]
where
    R: Rng + ?Sized,
{
    let k = k.min(v.len());
    for i in 0..k {
        let j = rng.gen_range(i..v.len());
        v.swap(i, j);
    }
    &v[..k]
}

/// A uniformly random permutation of `0..n`.
pub fn generate_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    random_sampling(&mut perm, n, rng);
    perm
}

/// Reservoir sampler keeping a uniformly random `k`-subset of a stream.
///
/// Each pushed item replaces a random slot with probability `k / seen`.
/// $O(1)$ per item.
#[derive(Debug, Clone)]
pub struct OnlineSampler<T, R> {
    k: usize,
    seen: usize,
    sample: Vec<T>,
    rng: R,
}

impl<T, R: Rng> OnlineSampler<T, R> {
    /// Create a sampler holding at most `k` items.
    pub fn new(k: usize, rng: R) -> Self {
        Self {
            k,
            seen: 0,
            sample: Vec::with_capacity(k),
            rng,
        }
    }

    /// Offer one item from the stream.
    pub fn push(&mut self, item: T) {
        self.seen += 1;
        if self.sample.len() < self.k {
            self.sample.push(item);
            return;
        }
        let j = self.rng.gen_range(0..self.seen);
        if j < self.k {
            self.sample[j] = item;
        }
    }

    /// Return the current sample.
    pub fn sample(&self) -> &[T] {
        &self.sample
    }

    /// Return the number of items offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<T, R: Rng> Extend<T> for OnlineSampler<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// True if `v` has indices `i < j < k` with `v[i] < v[j] < v[k]`. $O(n)$.
pub fn increasing_triplet<T: Ord>(v: &[T]) -> bool {
    let mut first: Option<&T> = None;
    let mut second: Option<&T> = None;
    for x in v {
        match (first, second) {
            (Some(f), _) if x <= f => first = Some(x),
            (None, _) => first = Some(x),
            (_, Some(s)) if x <= s => second = Some(x),
            (_, None) => second = Some(x),
            _ => return true,
        }
    }
    false
}

/// True if `v` has indices `i < j < k` with `v[i] < v[k] < v[j]`.
///
/// Scans right to left keeping a decreasing stack; the largest value popped
/// so far is the best "2" for any "3" already seen. $O(n)$.
pub fn find_132_pattern<T: Ord>(v: &[T]) -> bool {
    let mut stack: Vec<&T> = Vec::new();
    let mut third: Option<&T> = None;
    for x in v.iter().rev() {
        if third.is_some_and(|t| x < t) {
            return true;
        }
        while stack.last().is_some_and(|&top| top < x) {
            third = stack.pop();
        }
        stack.push(x);
    }
    false
}

/// Index of `target` in a sorted slice rotated by an unknown amount.
///
/// $O(\log n)$ for distinct elements; repeated elements can force a linear
/// scan when both ends and the midpoint compare equal.
pub fn search_rotated<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = v.len().checked_sub(1)?;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if v[mid] == *target {
            return Some(mid);
        }
        if v[lo] == v[mid] && v[mid] == v[hi] {
            // Neither half is known to be sorted; both ends are not the target.
            lo += 1;
            hi = hi.checked_sub(1)?;
            continue;
        }
        let go_left = if v[lo] <= v[mid] {
            v[lo] <= *target && *target < v[mid]
        } else {
            !(v[mid] < *target && *target <= v[hi])
        };
        if go_left {
            hi = mid.checked_sub(1)?;
        } else {
            lo = mid + 1;
        }
    }
    None
}

/// Longest subarray holding as many letters as digits.
///
/// Letters count +1 and everything else -1; two prefixes with equal balance
/// bound a balanced subarray. `None` if no non-empty one exists. $O(n)$.
pub fn find_longest_subarray(v: &[char]) -> Option<Range<usize>> {
    let mut first_at: HashMap<i64, usize> = HashMap::new();
    first_at.insert(0, 0);
    let mut balance = 0i64;
    let mut best: Option<Range<usize>> = None;
    for (i, c) in v.iter().enumerate() {
        balance += if c.is_alphabetic() { 1 } else { -1 };
        let start = *first_at.entry(balance).or_insert(i + 1);
        if best.as_ref().map_or(true, |b| i + 1 - start > b.len()) && start <= i {
            best = Some(start..i + 1);
        }
    }
    best
}

/// Tallest tower of `(height, weight)` people where everyone stands on
/// someone strictly taller and heavier.
///
/// Sorts by height, then finds the longest chain increasing in both
/// coordinates. Returned top to bottom (lightest first). $O(n^2)$.
pub fn circus_tower(people: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let mut sorted = people.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();

    // longest[i]: tallest tower with sorted[i] at the bottom.
    let mut longest = vec![1usize; n];
    let mut below: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        for j in 0..i {
            let fits = sorted[j].0 < sorted[i].0 && sorted[j].1 < sorted[i].1;
            if fits && longest[j] + 1 > longest[i] {
                longest[i] = longest[j] + 1;
                below[i] = Some(j);
            }
        }
    }

    let Some(bottom) = (0..n).max_by_key(|&i| longest[i]) else {
        return Vec::new();
    };
    let mut tower = Vec::with_capacity(longest[bottom]);
    let mut at = Some(bottom);
    while let Some(i) = at {
        tower.push(sorted[i]);
        at = below[i];
    }
    tower.reverse();
    tower
}
