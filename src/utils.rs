//! Conversions between `HashTable` and iterators of key-value pairs

use crate::{HashTable, hash_table::Iter};

impl<K, V> Extend<(K, V)> for HashTable<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<V>
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Creates a `HashTable` with default parameters from key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
pub fn from_pairs<K, V, I>(pairs: I) -> HashTable<V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let data = vec![("a", 1), ("b", 2), ("c", 3), ("a", 4)];

        let table = from_pairs(data);

        assert_eq!(table.get("a"), Some(&4));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut table: HashTable<i32> =
            vec![("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();
        table.extend([("c", 3)]);

        let mut keys = table.keys();
        keys.sort(); // Sort for predictable comparison

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_borrowing_for_loop() {
        let table = from_pairs([("x", 2), ("y", 5)]);

        let mut sum = 0;
        for (_, value) in &table {
            sum += value;
        }

        assert_eq!(sum, 7);
    }
}
