//! The catalog of facts each session starts with.

use crate::category::Category;
use crate::error::CatalogError;
use crate::fact::{FactId, FactPool};
use factdeck_core::Result;
use std::collections::HashSet;
use std::sync::LazyLock;

const HISTORY_FACTS: [&str; 4] = [
    "google_history_fact_1",
    "google_history_fact_2",
    "google_history_fact_3",
    "google_history_fact_4",
];

const HEADQUARTERS_FACTS: [&str; 3] = [
    "google_headquarters_fact_1",
    "google_headquarters_fact_2",
    "google_headquarters_fact_3",
];

const CAT_FACTS: [&str; 3] = ["cat_fact_1", "cat_fact_2", "cat_fact_3"];

static STANDARD: LazyLock<FactCatalog> = LazyLock::new(|| FactCatalog {
    history: HISTORY_FACTS.into_iter().map(FactId::from).collect(),
    headquarters: HEADQUARTERS_FACTS.into_iter().map(FactId::from).collect(),
    cats: CAT_FACTS.into_iter().map(FactId::from).collect(),
});

/// Ordered fact ids per category.
///
/// A catalog is never mutated after construction. Every category holds at
/// least one fact and no category lists a fact twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCatalog {
    history: Vec<FactId>,
    headquarters: Vec<FactId>,
    cats: Vec<FactId>,
}

impl FactCatalog {
    /// Builds a catalog from explicit fact lists.
    ///
    /// # Errors
    ///
    /// Returns an error if a category is empty or repeats a fact id.
    pub fn new(
        history: Vec<FactId>,
        headquarters: Vec<FactId>,
        cats: Vec<FactId>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            history,
            headquarters,
            cats,
        };
        for category in Category::ALL {
            catalog.validate(category)?;
        }
        Ok(catalog)
    }

    /// Returns the process-wide standard catalog.
    #[must_use]
    pub fn standard() -> &'static FactCatalog {
        &STANDARD
    }

    /// Returns the ordered facts of a category.
    #[must_use]
    pub fn facts(&self, category: Category) -> &[FactId] {
        match category {
            Category::History => &self.history,
            Category::Headquarters => &self.headquarters,
            Category::Cats => &self.cats,
        }
    }

    /// Returns the pool a fresh session starts with for `category`.
    #[must_use]
    pub fn initial_pool(&self, category: Category) -> FactPool {
        self.facts(category).iter().cloned().collect()
    }

    fn validate(&self, category: Category) -> Result<(), CatalogError> {
        let facts = self.facts(category);
        if facts.is_empty() {
            return Err(CatalogError::EmptyCategory { category }.into());
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = facts.iter().find(|fact| !seen.insert(*fact)) {
            return Err(CatalogError::DuplicateFact {
                category,
                fact_id: duplicate.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<FactId> {
        names.iter().copied().map(FactId::from).collect()
    }

    #[test]
    fn standard_catalog_sizes() {
        let catalog = FactCatalog::standard();
        assert_eq!(catalog.initial_pool(Category::History).len(), 4);
        assert_eq!(catalog.initial_pool(Category::Headquarters).len(), 3);
        assert_eq!(catalog.initial_pool(Category::Cats).len(), 3);
    }

    #[test]
    fn initial_pool_is_deterministic() {
        let catalog = FactCatalog::standard();
        let first = catalog.initial_pool(Category::History);
        let second = catalog.initial_pool(Category::History);
        assert_eq!(first, second);
        assert_eq!(
            first.iter().next().map(FactId::as_str),
            Some("google_history_fact_1")
        );
    }

    #[test]
    fn standard_catalog_passes_validation() {
        let standard = FactCatalog::standard();
        let rebuilt = FactCatalog::new(
            standard.facts(Category::History).to_vec(),
            standard.facts(Category::Headquarters).to_vec(),
            standard.facts(Category::Cats).to_vec(),
        )
        .expect("standard catalog is valid");
        assert_eq!(&rebuilt, standard);
    }

    #[test]
    fn rejects_empty_category() {
        let result = FactCatalog::new(ids(&["h1"]), Vec::new(), ids(&["c1"]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'headquarters' has no facts"));
    }

    #[test]
    fn rejects_duplicate_fact() {
        let result = FactCatalog::new(ids(&["h1"]), ids(&["q1"]), ids(&["c1", "c2", "c1"]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'c1' listed twice"));
    }
}
