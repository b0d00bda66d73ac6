use std::mem;

use log::{debug, trace};

use crate::{HashTableError, hash::polynomial_hash};

/// Bucket count used by [`HashTable::new`]
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Growth threshold used by [`HashTable::new`]
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// Pairs whose keys hash to the same bucket, in insertion order
type Chain<V> = Vec<Entry<V>>;

/// A string-keyed hash table using separate chaining.
///
/// Keys are placed with [`polynomial_hash`] against the current bucket count.
/// Each bucket holds a chain of pairs and is only allocated once a key lands
/// in it. When an insertion of a new key pushes `len()` above
/// `capacity() * load_factor()`, the bucket count doubles and every pair is
/// rehashed before `set` returns.
///
/// Iteration visits buckets in index order and each chain in insertion order.
/// That order is stable until the next growth.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// Bucket array; `None` marks a bucket no key has hashed into yet
    buckets: Vec<Option<Chain<V>>>,
    /// Number of distinct keys stored across all chains
    size: usize,
    /// Ratio of entries to buckets that triggers growth
    load_factor: f64,
    /// Bucket count the table was constructed with, restored by `clear`
    initial_capacity: usize,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocates `capacity` unmaterialized buckets
fn empty_buckets<V>(capacity: usize) -> Vec<Option<Chain<V>>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

impl<V> HashTable<V> {
    /// Creates an empty table with 16 buckets and a load factor of 0.75
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty table with `capacity` buckets and the default load factor.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::ZeroCapacity`] when `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, HashTableError> {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty table with `capacity` buckets that grows once
    /// `len() > capacity() * load_factor`.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::ZeroCapacity`] when `capacity` is 0, and
    /// [`HashTableError::InvalidLoadFactor`] when `load_factor` is not a finite
    /// number greater than 0.
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<Self, HashTableError> {
        if capacity == 0 {
            return Err(HashTableError::ZeroCapacity);
        }
        if !load_factor.is_finite() || load_factor <= 0.0 {
            return Err(HashTableError::InvalidLoadFactor(load_factor));
        }
        Ok(Self::from_parts(capacity, load_factor))
    }

    /// Builds the table from already validated parameters
    fn from_parts(capacity: usize, load_factor: f64) -> Self {
        trace!("creating hash table with {capacity} buckets, load factor {load_factor}");
        Self { buckets: empty_buckets(capacity), size: 0, load_factor, initial_capacity: capacity }
    }

    /// Index of the bucket `key` belongs to at the current capacity
    #[must_use]
    pub fn bucket_index(&self, key: &str) -> usize {
        polynomial_hash(key, self.buckets.len())
    }

    /// Associates `value` with `key`.
    ///
    /// Overwriting an existing key keeps its position in the chain and returns
    /// the previous value. Adding a new key returns `None` and may grow the table.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.bucket_index(&key);
        #[allow(clippy::question_mark, clippy::manual_let_else)]
        let slot = match self.buckets.get_mut(index) {
            Some(slot) => slot,
            None => return None,
        };
        let chain = slot.get_or_insert_with(Vec::new);

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        chain.push(Entry { key, value });
        self.size = self.size.saturating_add(1);

        if self.over_threshold() {
            self.grow();
        }
        None
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets
            .get_mut(index)?
            .as_mut()?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if `key` is stored in the table
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.chain(key).is_some_and(|chain| chain.iter().any(|entry| entry.key == key))
    }

    /// Removes `key`, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands back its value.
    ///
    /// The remaining pairs of the chain keep their relative order. The table
    /// never shrinks.
    pub fn take(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let chain = self.buckets.get_mut(index)?.as_mut()?;
        let position = chain.iter().position(|entry| entry.key == key)?;
        let entry = chain.remove(position);
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Returns the number of keys in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every pair and shrinks the bucket array back to the capacity the
    /// table was constructed with
    pub fn clear(&mut self) {
        debug!(
            "clearing hash table: dropping {} entries, {} -> {} buckets",
            self.size,
            self.buckets.len(),
            self.initial_capacity
        );
        self.buckets = empty_buckets(self.initial_capacity);
        self.size = 0;
    }

    /// Returns the current number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of buckets the table was constructed with
    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the configured growth threshold
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the current ratio of keys to buckets
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn current_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Length of every chain in bucket order, 0 for unmaterialized buckets
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(|bucket| bucket.as_ref().map_or(0, Vec::len)).collect()
    }

    /// Returns an iterator over the key-value pairs in bucket order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: Default::default() }
    }

    /// Chain for the bucket `key` hashes to, if materialized
    fn chain(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets.get(self.bucket_index(key))?.as_ref()
    }

    /// Whether the entry count has passed the growth threshold
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn over_threshold(&self) -> bool {
        self.size as f64 > self.buckets.len() as f64 * self.load_factor
    }

    /// Doubles the bucket count and rehashes every pair against the new count.
    ///
    /// Old buckets are drained in index order so pairs sharing a new bucket
    /// keep their previous relative order.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity.saturating_mul(2);
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for entry in old_buckets.into_iter().flatten().flatten() {
            let index = polynomial_hash(&entry.key, new_capacity);
            if let Some(slot) = self.buckets.get_mut(index) {
                slot.get_or_insert_with(Vec::new).push(entry);
            }
        }

        debug!(
            "grew hash table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.size
        );
    }
}

impl<V: Clone> HashTable<V> {
    /// Returns the keys in iteration order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Returns the values in iteration order
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the key-value pairs in iteration order
    #[must_use]
    pub fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }
}

/// Iterator over the key-value pairs of a [`HashTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Buckets not visited yet
    buckets: std::slice::Iter<'a, Option<Chain<V>>>,
    /// Remaining pairs of the bucket being visited
    chain: std::slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some((entry.key.as_str(), &entry.value));
            }
            self.chain = self.buckets.next()?.as_deref().unwrap_or_default().iter();
        }
    }
}
