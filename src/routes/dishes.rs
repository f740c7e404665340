use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{RecommendError, Recommender};
use crate::error::ApiError;
use crate::models::{FeaturedResponse, HealthResponse, RecommendRequest};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

/// Configure all dish-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::get().to(recommend_usage))
        .route("/recommend", web::post().to(recommend))
        .route("/home", web::get().to(home))
        .route("/dish/{dish_name}", web::get().to(dish_details));
}

/// Service banner
async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Indian Food Recommender API is active!",
        "endpoints": {
            "POST /recommend": { "body": { "favorite_dish": "Paneer Tikka" } },
            "GET /home": {},
            "GET /dish/<dish_name>": {}
        }
    }))
}

/// Usage hint for clients that GET the recommend endpoint
async fn recommend_usage() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Use POST with JSON { 'favorite_dish': 'Paneer Tikka' } to get recommendations."
    }))
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dishes: state.recommender.catalog().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend dishes similar to a favorite
///
/// POST /recommend
///
/// Request body:
/// ```json
/// { "favorite_dish": "Paneer Tikka" }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return Err(ApiError::BadRequest(
            "Missing 'favorite_dish' field in request.".to_string(),
        ));
    }

    // `{"favorite_dish": null}` names no dish at all
    let Some(favorite_dish) = req.favorite_dish.as_ref().and_then(|name| name.as_deref()) else {
        tracing::warn!("Recommendation requested for a null dish name");
        return Err(RecommendError::NotFound("null".to_string()).into());
    };

    tracing::info!("Recommending dishes for: {}", favorite_dish);

    let result = state.recommender.recommend(favorite_dish).map_err(|e| {
        tracing::warn!("Recommendation failed for '{}': {}", favorite_dish, e);
        e
    })?;

    tracing::info!(
        "Returning {} recommendations and {} recently rated for '{}'",
        result.recommendations.len(),
        result.recently_rated.len(),
        favorite_dish
    );

    Ok(HttpResponse::Ok().json(result))
}

/// Featured dishes for the home page
async fn home(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let featured = state.recommender.featured_default()?;

    Ok(HttpResponse::Ok().json(FeaturedResponse {
        featured_dishes: featured.iter().map(|dish| dish.featured()).collect(),
    }))
}

/// Full details for one dish
///
/// GET /dish/{dish_name}, matched ignoring case
async fn dish_details(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    // The extractor has already percent-decoded the segment (`Rajma%20Chawal`)
    let dish_name = path.into_inner();

    tracing::debug!("Looking up dish details for: {}", dish_name);

    let dish = state.recommender.details_by_name(&dish_name)?;
    Ok(HttpResponse::Ok().json(dish))
}
