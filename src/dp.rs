//! Dynamic programming exercises.

/// Cheapest path of indices from 0 to the last index of `a`.
///
/// From index `i` one may jump to any of `i+1..=i+max_jump`; landing on `i`
/// costs `a[i]`, and `-1` marks an index that cannot be landed on. Among
/// paths of equal cost the lexicographically smallest is returned. Empty if
/// the last index is unreachable. $O(n \cdot b)$.
pub fn cheapest_jump(a: &[i32], max_jump: usize) -> Vec<usize> {
    let n = a.len();
    if n == 0 || a[n - 1] == -1 {
        return Vec::new();
    }

    // cost[i]: cheapest cost from i to the end; next[i]: first hop on it.
    let mut cost: Vec<Option<i64>> = vec![None; n];
    let mut next: Vec<Option<usize>> = vec![None; n];
    cost[n - 1] = Some(i64::from(a[n - 1]));

    for i in (0..n - 1).rev() {
        if a[i] == -1 {
            continue;
        }
        let here = i64::from(a[i]);
        for j in i + 1..n.min(i.saturating_add(max_jump).saturating_add(1)) {
            let Some(rest) = cost[j] else { continue };
            // Strict comparison keeps the smallest j on ties.
            if cost[i].map_or(true, |c| c > here + rest) {
                cost[i] = Some(here + rest);
                next[i] = Some(j);
            }
        }
    }

    if cost[0].is_none() {
        return Vec::new();
    }
    let mut path = vec![0];
    let mut at = 0;
    while let Some(j) = next[at] {
        path.push(j);
        at = j;
    }
    path
}

/// Worst-case number of drops needed to find the critical floor among `n`
/// floors with two eggs.
///
/// `drops[i] = min over k of 1 + max(k - 1, drops[i - k])`: dropping from
/// floor `k` either breaks (scan `k - 1` floors with one egg) or leaves
/// `i - k` floors with both eggs. $O(n^2)$.
pub fn egg_drop(n: usize) -> usize {
    let mut drops = vec![0usize; n + 1];
    for i in 1..=n {
        drops[i] = (1..=i)
            .map(|k| 1 + (k - 1).max(drops[i - k]))
            .min()
            .unwrap_or(0);
    }
    drops[n]
}
