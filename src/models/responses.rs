use serde::{Deserialize, Serialize};
use crate::models::domain::FeaturedDish;

/// Response for the home endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedResponse {
    pub featured_dishes: Vec<FeaturedDish>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dishes: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
