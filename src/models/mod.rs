// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{DishRecord, FeaturedDish, RecommendationResult, SelectionParams};
pub use requests::RecommendRequest;
pub use responses::{FeaturedResponse, HealthResponse, ErrorResponse};
