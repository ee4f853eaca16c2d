//! Item memory: a keyed store of hypervectors used for clean-up
//!
//! A noisy query (for example the result of an unbind) is compared with
//! every stored item by [`sim`](crate::similarity::sim) and the closest
//! keys are returned.

use crate::error::Result;
use crate::similarity::{by_score_desc, sim};
use crate::vector::HyperVector;
use std::collections::HashMap;

/// Keyed associative store with similarity retrieval
///
/// # Performance
///
/// - Store: O(1)
/// - Retrieve: O(M·N) for M stored items of dimension N
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{bphdv, ItemMemory};
///
/// let mut memory = ItemMemory::new();
/// let apple = bphdv(10_000);
/// memory.store("apple", apple.clone());
/// memory.store("pear", bphdv(10_000));
///
/// let results = memory.retrieve(&apple, 0.8).unwrap();
/// assert_eq!(results[0].0, "apple");
/// assert!(results[0].1 > 0.99);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ItemMemory {
    items: HashMap<String, HyperVector>,
}

impl ItemMemory {
    /// Empty memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty memory with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Stores `value` under `key`, returning the previous value if any
    pub fn store(&mut self, key: impl Into<String>, value: HyperVector) -> Option<HyperVector> {
        self.items.insert(key.into(), value)
    }

    /// Items with similarity at least `threshold`, best first
    ///
    /// # Errors
    ///
    /// Fails when the query's variant or length differs from a stored item.
    pub fn retrieve(&self, query: &HyperVector, threshold: f64) -> Result<Vec<(String, f64)>> {
        let mut results = self.score(query)?;
        results.retain(|(_, s)| *s >= threshold);
        Ok(results)
    }

    /// The `k` most similar items, best first
    pub fn retrieve_top_k(&self, query: &HyperVector, k: usize) -> Result<Vec<(String, f64)>> {
        let mut results = self.score(query)?;
        results.truncate(k);
        Ok(results)
    }

    /// Key and similarity of the single closest item, `None` when empty
    pub fn cleanup(&self, query: &HyperVector) -> Result<Option<(String, f64)>> {
        Ok(self.retrieve_top_k(query, 1)?.into_iter().next())
    }

    fn score(&self, query: &HyperVector) -> Result<Vec<(String, f64)>> {
        let mut results = self
            .items
            .iter()
            .map(|(key, vector)| Ok((key.clone(), sim(query, vector)?)))
            .collect::<Result<Vec<_>>>()?;

        results.sort_by(|a, b| by_score_desc(a.1, b.1));
        Ok(results)
    }

    /// Stored vector for `key`
    pub fn get(&self, key: &str) -> Option<&HyperVector> {
        self.items.get(key)
    }

    /// True when `key` is stored
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Removes and returns the vector for `key`
    pub fn remove(&mut self, key: &str) -> Option<HyperVector> {
        self.items.remove(key)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterator over stored keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.items.keys()
    }

    /// Iterator over `(key, vector)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HyperVector)> {
        self.items.iter()
    }
}
