//! Errors reported when a `HashTable` is constructed with unusable parameters

/// Construction failures for [`HashTable`](crate::HashTable).
///
/// Lookups never fail: a missing key is reported through `Option` or `bool`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum HashTableError {
    /// The initial bucket count was zero
    #[error("hash table capacity must be at least 1")]
    ZeroCapacity,
    /// The load factor was zero, negative, or not a finite number
    #[error("load factor must be a finite number greater than 0, got {0}")]
    InvalidLoadFactor(f64),
}
