//! Small numeric puzzles.

/// Minimum total Manhattan distance for everyone in `grid` to meet at one cell.
///
/// Non-zero cells mark homes. Row and column distances separate, and each is
/// minimised at the median coordinate. Zero when the grid has no homes.
pub fn min_total_distance(grid: &[Vec<u8>]) -> usize {
    let mut rows = Vec::new();
    let mut cols = Vec::new();
    for (i, row) in grid.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell != 0 {
                rows.push(i);
                cols.push(j);
            }
        }
    }
    axis_distance(&mut rows) + axis_distance(&mut cols)
}

fn axis_distance(coords: &mut [usize]) -> usize {
    if coords.is_empty() {
        return 0;
    }
    let mid = coords.len() / 2;
    let (_, &mut median, _) = coords.select_nth_unstable(mid);
    coords.iter().map(|&c| c.abs_diff(median)).sum()
}

/// Open lockers after `n` toggling passes over `n` lockers.
///
/// A locker is toggled once per divisor, so only perfect squares end open:
/// the answer is $\lfloor \sqrt{n} \rfloor$.
pub fn n_lockers(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    // Float rounding can land one off for large n.
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// Integer addition without arithmetic operators.
///
/// `a ^ b` is the carry-less sum and `(a & b) << 1` the carries; repeat
/// until no carries remain.
pub fn add_without_plus(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let carry = (a & b) << 1;
        a ^= b;
        b = carry;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_total_distance() {
        let grid = vec![
            vec![1, 0, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
        ];
        assert_eq!(min_total_distance(&grid), 6);
        assert_eq!(min_total_distance(&[vec![0, 0]]), 0);
        assert_eq!(min_total_distance(&[]), 0);
    }

    #[test]
    fn test_n_lockers() {
        assert_eq!(n_lockers(0), 0);
        assert_eq!(n_lockers(1), 1);
        assert_eq!(n_lockers(100), 10);
        assert_eq!(n_lockers(99), 9);
        assert_eq!(n_lockers(u64::MAX), u64::from(u32::MAX));
    }

    #[test]
    fn test_add_without_plus() {
        let cases = [(1, 1, 2), (7, 5, 12), (7, -5, 2), (-7, -5, -12), (0, -3, -3)];
        for (a, b, expected) in cases {
            assert_eq!(add_without_plus(a, b), expected);
        }
    }
}
