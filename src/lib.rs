//! Dish Recommender - recommendation service over a static food catalog
//!
//! This library provides the catalog loader, the recommendation selector and
//! the HTTP routes used by the service binary.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, RecommendError};
pub use models::{DishRecord, FeaturedDish, RecommendationResult, SelectionParams};
pub use services::{DishCatalog, CatalogError, LoadOptions};
