//! Category-keyed fact pools.
use crate::category::Category;
use std::collections::BTreeMap;

/// A fact is a plain display string with no identity beyond its text.
pub type Fact = String;

#[derive(Debug, thiserror::Error)]
pub enum FactStoreError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Category {0} is missing from the fact data")]
    MissingCategory(Category),
    #[error("Category {0} has no facts")]
    EmptyCategory(Category),
}

/// Read-only mapping from category to its ordered fact pool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FactStore {
    pools: BTreeMap<Category, Vec<Fact>>,
}

impl FactStore {
    /// Build a store without checking the non-empty invariant (useful for tests)
    #[must_use]
    pub fn from_pools<I>(pools: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<Fact>)>,
    {
        Self {
            pools: pools.into_iter().collect(),
        }
    }

    /// Parse and validate a `{ "<Category>": ["fact", ...] }` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown category,
    /// omits a category, or leaves a category without facts.
    pub fn from_json(json: &str) -> Result<Self, FactStoreError> {
        let raw: BTreeMap<String, Vec<Fact>> = serde_json::from_str(json)?;
        let mut pools = BTreeMap::new();
        for (name, facts) in raw {
            let category =
                Category::from_name(&name).ok_or(FactStoreError::UnknownCategory(name))?;
            pools.insert(category, facts);
        }
        let store = Self { pools };
        store.validate()?;
        Ok(store)
    }

    /// The fact pools bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails validation.
    pub fn builtin() -> Result<Self, FactStoreError> {
        Self::from_json(include_str!("../data/facts.json"))
    }

    /// Check that every category is present with at least one fact.
    ///
    /// # Errors
    ///
    /// Returns the first missing or empty category in declaration order.
    pub fn validate(&self) -> Result<(), FactStoreError> {
        for category in Category::ALL {
            match self.pools.get(&category) {
                None => return Err(FactStoreError::MissingCategory(category)),
                Some(facts) if facts.is_empty() => {
                    return Err(FactStoreError::EmptyCategory(category));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Facts for one category; empty when the store has no entry for it.
    #[must_use]
    pub fn pool(&self, category: Category) -> &[Fact] {
        self.pools.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Every fact, in category declaration order then in-category order.
    #[must_use]
    pub fn all_facts(&self) -> Vec<&Fact> {
        self.pools.values().flatten().collect()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.pools.keys().copied()
    }

    /// Total number of facts across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_has_a_non_empty_pool_per_category() {
        let store = FactStore::builtin().unwrap();
        for category in Category::ALL {
            assert!(
                !store.pool(category).is_empty(),
                "{category} should have facts"
            );
        }
        assert_eq!(store.len(), 14);
        assert_eq!(store.categories().collect::<Vec<_>>(), Category::ALL);
    }

    #[test]
    fn all_facts_follows_declaration_order() {
        let store = FactStore::builtin().unwrap();
        let all = store.all_facts();
        assert_eq!(
            all.first().map(|f| f.as_str()),
            Some("The Bible is the most translated book in history.")
        );
        assert_eq!(
            all.last().map(|f| f.as_str()),
            Some("CRISPR enables precise gene editing.")
        );
        let cosmos = store.pool(Category::Cosmos);
        assert_eq!(all[2], &cosmos[0]);
        assert_eq!(all[3], &cosmos[1]);
    }

    #[test]
    fn duplicates_are_kept() {
        let store = FactStore::from_pools([
            (Category::Love, vec!["same".to_string()]),
            (Category::Cars, vec!["same".to_string(), "same".to_string()]),
        ]);
        assert_eq!(store.all_facts().len(), 3);
    }

    #[test]
    fn missing_pool_reads_as_empty_slice() {
        let store = FactStore::from_pools([(Category::Love, vec!["x".to_string()])]);
        assert!(store.pool(Category::Cosmos).is_empty());
        assert_eq!(store.categories().collect::<Vec<_>>(), vec![Category::Love]);
        assert!(matches!(
            store.validate(),
            Err(FactStoreError::MissingCategory(Category::Religion))
        ));
    }

    #[test]
    fn from_json_rejects_unknown_and_empty_categories() {
        let err = FactStore::from_json(r#"{"Sports": ["x"]}"#).unwrap_err();
        assert!(matches!(err, FactStoreError::UnknownCategory(name) if name == "Sports"));

        let mut doc = serde_json::Map::new();
        for category in Category::ALL {
            doc.insert(
                category.name().to_string(),
                serde_json::json!(["a fact"]),
            );
        }
        doc.insert("Phones".to_string(), serde_json::json!([]));
        let text = serde_json::Value::Object(doc).to_string();
        let err = FactStore::from_json(&text).unwrap_err();
        assert!(matches!(err, FactStoreError::EmptyCategory(Category::Phones)));
        assert!(err.to_string().contains("Phones"));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        assert!(matches!(
            FactStore::from_json("not json"),
            Err(FactStoreError::Json(_))
        ));
    }
}
