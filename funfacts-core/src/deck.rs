//! Fact delivery: combines the store with a random source.
use crate::category::Category;
use crate::constants::NO_FACTS_MESSAGE;
use crate::select::{SelectError, pick};
use crate::store::FactStore;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Text shown for a category reveal, e.g. `(Cosmos) Neutron stars ...`.
#[must_use]
pub fn format_category_fact(category: Category, fact: &str) -> String {
    format!("({category}) {fact}")
}

/// Owns the fact pools and the random source that draws from them.
#[derive(Debug, Clone)]
pub struct FactDeck<R = ChaCha20Rng> {
    store: FactStore,
    rng: R,
}

impl FactDeck<ChaCha20Rng> {
    #[must_use]
    pub fn seeded(store: FactStore, seed: u64) -> Self {
        Self::new(store, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> FactDeck<R> {
    pub const fn new(store: FactStore, rng: R) -> Self {
        Self { store, rng }
    }

    #[must_use]
    pub const fn store(&self) -> &FactStore {
        &self.store
    }

    /// Draw from the union of every category.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::EmptyPool`] if the store holds no facts at all.
    pub fn random_global_fact(&mut self) -> Result<String, SelectError> {
        let all = self.store.all_facts();
        pick(&mut self.rng, &all).map(|fact| (*fact).clone())
    }

    /// Draw from one category and prefix it with the category name.
    /// An empty pool yields [`NO_FACTS_MESSAGE`] instead of an error.
    pub fn category_fact(&mut self, category: Category) -> String {
        match pick(&mut self.rng, self.store.pool(category)) {
            Ok(fact) => format_category_fact(category, fact),
            Err(SelectError::EmptyPool) => NO_FACTS_MESSAGE.to_string(),
        }
    }
}
