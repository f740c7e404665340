use crate::core::{filters::candidate_set, sampling::sample};
use crate::models::{DishRecord, RecommendationResult, SelectionParams};
use crate::services::DishCatalog;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by the recommendation selector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("Dish '{0}' not found in dataset.")]
    NotFound(String),

    #[error("No similar dishes found for '{0}'.")]
    NoSimilarDishes(String),

    #[error("No dishes found")]
    EmptyCatalog,
}

/// Recommendation selector over a shared, read-only catalog
///
/// # Selection
/// 1. Resolve the seed dish by exact name
/// 2. Collect dishes sharing its cuisine or diet type
/// 3. Sample the candidates with a fixed seed
/// 4. Sample an unrelated "recently rated" list from the whole catalog
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<DishCatalog>,
    params: SelectionParams,
}

impl Recommender {
    pub fn new(catalog: Arc<DishCatalog>, params: SelectionParams) -> Self {
        Self { catalog, params }
    }

    pub fn with_default_params(catalog: Arc<DishCatalog>) -> Self {
        Self::new(catalog, SelectionParams::default())
    }

    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    pub fn params(&self) -> &SelectionParams {
        &self.params
    }

    /// Recommend dishes similar to `seed_dish_name`
    ///
    /// The name must match a catalog entry exactly. Output is a pure function
    /// of the catalog and the configured seeds.
    pub fn recommend(&self, seed_dish_name: &str) -> Result<RecommendationResult, RecommendError> {
        let seed = self
            .catalog
            .lookup(seed_dish_name)
            .ok_or_else(|| RecommendError::NotFound(seed_dish_name.to_string()))?;

        let candidates = candidate_set(self.catalog.all(), seed);
        if candidates.is_empty() {
            return Err(RecommendError::NoSimilarDishes(seed_dish_name.to_string()));
        }

        tracing::debug!(
            "Seed '{}' has {} candidates (cuisine={:?}, diet_type={:?})",
            seed.dish_name,
            candidates.len(),
            seed.cuisine,
            seed.diet_type
        );

        let recommendations = sample(
            &candidates,
            self.params.recommendation_limit,
            self.params.recommendation_seed,
        )
        .into_iter()
        .map(|record| record.clone().normalized())
        .collect();

        let recently_rated = self.sample_catalog(
            self.params.recently_rated_limit,
            self.params.recently_rated_seed,
        );

        Ok(RecommendationResult {
            favorite_dish: seed_dish_name.to_string(),
            recommendations,
            recently_rated,
        })
    }

    /// Deterministic sample of up to `count` catalog dishes
    pub fn featured(&self, count: usize, seed: u64) -> Result<Vec<DishRecord>, RecommendError> {
        if self.catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        Ok(self.sample_catalog(count, seed))
    }

    /// Featured dishes using the configured count and seed
    pub fn featured_default(&self) -> Result<Vec<DishRecord>, RecommendError> {
        self.featured(self.params.featured_limit, self.params.featured_seed)
    }

    /// Full record for a dish, matched ignoring case
    pub fn details_by_name(&self, name: &str) -> Result<DishRecord, RecommendError> {
        self.catalog
            .find_case_insensitive(name)
            .map(|record| record.clone().normalized())
            .ok_or_else(|| RecommendError::NotFound(name.to_string()))
    }

    fn sample_catalog(&self, count: usize, seed: u64) -> Vec<DishRecord> {
        sample(self.catalog.all(), count, seed)
            .into_iter()
            .map(DishRecord::normalized)
            .collect()
    }
}
