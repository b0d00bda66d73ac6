//! # Chain Map
//!
//! A string-keyed hash table built from first principles on separate chaining.
//!
//! - Keys are placed with a base-31 polynomial rolling hash reduced modulo the
//!   current bucket count (see [`polynomial_hash`]).
//! - Each bucket holds a chain of key-value pairs and is allocated lazily.
//! - When the number of keys passes `capacity * load_factor`, the bucket array
//!   doubles and every key is rehashed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::HashTable;
//!
//! let mut table = HashTable::new();
//! table.set("key1", "value1");
//! table.set("key2", "value2");
//! table.set("key3", "value3");
//!
//! assert_eq!(table.get("key2"), Some(&"value2"));
//! assert!(!table.has("key4"));
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.keys(), vec!["key1", "key2", "key3"]);
//! assert_eq!(table.values(), vec!["value1", "value2", "value3"]);
//!
//! assert!(table.remove("key2"));
//! assert_eq!(table.get("key2"), None);
//! assert_eq!(table.keys(), vec!["key1", "key3"]);
//!
//! table.clear();
//! assert_eq!(table.len(), 0);
//! assert!(table.keys().is_empty());
//! ```
//!
//! ## Tuning
//!
//! ```rust
//! use chainmap::{HashTable, HashTableError};
//!
//! let mut table = HashTable::with_capacity_and_load_factor(4, 0.5)?;
//! for i in 0..3 {
//!     table.set(i.to_string(), i);
//! }
//! assert_eq!(table.capacity(), 8);
//!
//! assert_eq!(HashTable::<u8>::with_capacity(0).unwrap_err(), HashTableError::ZeroCapacity);
//! # Ok::<(), HashTableError>(())
//! ```
//!
//! Iteration order follows bucket index, then chain order, and may change
//! whenever the table grows. The table is not thread-safe.

/// Construction errors
mod error;
/// Polynomial rolling hash
mod hash;
/// Separate chaining hash table
mod hash_table;
/// Conversions from and to iterators
mod utils;

pub use error::HashTableError;
pub use hash::polynomial_hash;
pub use hash_table::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, HashTable, Iter};
pub use utils::from_pairs;
