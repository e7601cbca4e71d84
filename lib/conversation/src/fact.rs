//! Fact identifiers and pools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single fact.
///
/// Opaque to the conversation logic; the renderer uses it as the
/// string-resource key for the fact text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactId(String);

impl FactId {
    /// Creates a fact ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The facts of one category not yet told in this session.
///
/// Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactPool(Vec<FactId>);

impl FactPool {
    /// Creates a pool holding the given facts.
    #[must_use]
    pub fn new(facts: Vec<FactId>) -> Self {
        Self(facts)
    }

    /// Returns the number of remaining facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no facts remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the fact has not been told yet.
    #[must_use]
    pub fn contains(&self, fact_id: &FactId) -> bool {
        self.0.contains(fact_id)
    }

    /// Iterates over the remaining facts.
    pub fn iter(&self) -> impl Iterator<Item = &FactId> {
        self.0.iter()
    }

    /// Removes and returns the fact at `index`, moving the last fact into its place.
    pub(crate) fn take(&mut self, index: usize) -> FactId {
        self.0.swap_remove(index)
    }
}

impl FromIterator<FactId> for FactPool {
    fn from_iter<I: IntoIterator<Item = FactId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_take_removes_exactly_one() {
        let mut pool: FactPool = ["a", "b", "c"].into_iter().map(FactId::from).collect();

        let taken = pool.take(0);

        assert_eq!(taken.as_str(), "a");
        assert_eq!(pool.len(), 2);
        assert!(!pool.contains(&taken));
        assert!(pool.contains(&FactId::from("b")));
        assert!(pool.contains(&FactId::from("c")));
    }

    #[test]
    fn pool_serializes_as_plain_list() {
        let pool = FactPool::new(vec![FactId::from("cat_fact_1"), FactId::from("cat_fact_2")]);
        let json = serde_json::to_value(&pool).expect("serialize");
        assert_eq!(json, serde_json::json!(["cat_fact_1", "cat_fact_2"]));
    }
}
