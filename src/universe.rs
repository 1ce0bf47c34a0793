//! Coordinate-compressed key universe.
//!
//! A `Universe` is the sorted, deduplicated set of every key an index will
//! ever see. Keys are addressed by *rank*: their position under one of two
//! boundary rules.
//!
//! - `lower_bound(x)`: number of keys strictly less than `x`.
//! - `upper_bound(x)`: number of keys less than or equal to `x`.
//!
//! Both run in $O(\log U)$ and return a rank in `0..=U`; `U` means no key
//! compares that way. Probes need not be members of the universe.

/// A sorted, deduplicated sequence of reference keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe<T> {
    keys: Vec<T>,
}

impl<T: Ord> Universe<T> {
    /// Build a universe from arbitrary keys, sorting and deduplicating them.
    pub fn new(mut keys: Vec<T>) -> Self {
        keys.sort_unstable();
        keys.dedup();
        Self { keys }
    }

    /// Build a universe from a slice of keys.
    pub fn from_slice(keys: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(keys.to_vec())
    }

    /// Return the number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return true if the universe has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Return the keys in ascending order.
    pub fn as_slice(&self) -> &[T] {
        &self.keys
    }

    /// Return the key at rank `i`, if any.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.keys.get(i)
    }

    /// Return true if `key` is a member of the universe.
    pub fn contains(&self, key: &T) -> bool {
        self.keys.binary_search(key).is_ok()
    }

    /// Return the index of the first key not less than `key`.
    pub fn lower_bound(&self, key: &T) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Return the index of the first key strictly greater than `key`.
    pub fn upper_bound(&self, key: &T) -> usize {
        self.keys.partition_point(|k| k <= key)
    }
}

impl<T: Ord> FromIterator<T> for Universe<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_sorts_and_dedups() {
        let u = Universe::new(vec![5, 2, 6, 2, 1, 5]);
        assert_eq!(u.as_slice(), &[1, 2, 5, 6]);
        assert_eq!(u.len(), 4);
        assert!(u.contains(&5));
        assert!(!u.contains(&3));
    }

    #[test]
    fn test_universe_bounds() {
        let u: Universe<i64> = [10, 20, 30].into_iter().collect();

        assert_eq!(u.lower_bound(&20), 1);
        assert_eq!(u.upper_bound(&20), 2);

        // Probes between keys snap to the same boundary under both rules.
        assert_eq!(u.lower_bound(&25), 2);
        assert_eq!(u.upper_bound(&25), 2);

        assert_eq!(u.lower_bound(&0), 0);
        assert_eq!(u.upper_bound(&99), 3);
    }

    #[test]
    fn test_universe_empty() {
        let u: Universe<i32> = Universe::new(Vec::new());
        assert!(u.is_empty());
        assert_eq!(u.lower_bound(&7), 0);
        assert_eq!(u.upper_bound(&7), 0);
        assert_eq!(u.get(0), None);
    }
}
