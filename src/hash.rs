//! Polynomial rolling hash used to place keys into buckets

/// Multiplier of the rolling hash
const BASE: u128 = 31;

/// Maps `key` to a bucket index in `0..capacity`.
///
/// Every character contributes `hash = (31 * hash + code) % capacity`, so the
/// result depends on the capacity it is computed against. Callers must hash
/// again after the table grows instead of reusing an old index.
///
/// An empty key always lands in bucket 0. A `capacity` of 0 also yields 0;
/// `HashTable` never calls this with an empty bucket array.
///
/// ```rust
/// use chainmap::polynomial_hash;
///
/// assert_eq!(polynomial_hash("key1", 16), 2);
/// assert_eq!(polynomial_hash("", 16), 0);
/// ```
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn polynomial_hash(key: &str, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    let modulus = capacity as u128;
    let hash = key
        .chars()
        .fold(0u128, |hash, ch| (BASE * hash + u128::from(u32::from(ch))) % modulus);
    // hash < modulus, which came from a usize
    hash as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_indices() {
        assert_eq!(polynomial_hash("key1", 16), 2);
        assert_eq!(polynomial_hash("key2", 16), 3);
        assert_eq!(polynomial_hash("key3", 16), 4);
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(polynomial_hash("", 1), 0);
        assert_eq!(polynomial_hash("", 16), 0);
        assert_eq!(polynomial_hash("", 0), 0);
    }

    #[test]
    fn test_single_bucket() {
        assert_eq!(polynomial_hash("anything", 1), 0);
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(polynomial_hash("a", 64), polynomial_hash("A", 64));
    }

    #[test]
    fn test_index_depends_on_capacity() {
        // 'k' = 107: 107 % 16 = 11, 107 % 32 = 11, 107 % 64 = 43
        assert_eq!(polynomial_hash("k", 16), 11);
        assert_eq!(polynomial_hash("k", 64), 43);
    }

    #[test]
    fn test_huge_capacity_does_not_overflow() {
        let index = polynomial_hash("overflow check with a long key", usize::MAX);
        assert!(index < usize::MAX);
    }

    proptest! {
        #[test]
        fn prop_index_in_range(key in ".*", capacity in 1usize..10_000) {
            prop_assert!(polynomial_hash(&key, capacity) < capacity);
        }

        #[test]
        fn prop_deterministic(key in ".*", capacity in 1usize..10_000) {
            prop_assert_eq!(polynomial_hash(&key, capacity), polynomial_hash(&key, capacity));
        }
    }
}
