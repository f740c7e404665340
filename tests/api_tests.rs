// HTTP-level tests for Dish Recommender

use actix_web::{http::StatusCode, test, web, App};
use dish_recommender::models::{ErrorResponse, FeaturedResponse, HealthResponse};
use dish_recommender::routes::{self, AppState, DEV_CONTENT_SECURITY_POLICY};
use dish_recommender::{DishCatalog, DishRecord, Recommender, RecommendationResult};
use serde_json::{json, Value};
use std::sync::Arc;

fn dish(name: &str, cuisine: Option<&str>, diet: Option<&str>) -> DishRecord {
    let mut record = DishRecord::named(name);
    record.cuisine = cuisine.map(str::to_string);
    record.diet_type = diet.map(str::to_string);
    record.rating = Some(4.2);
    record
}

fn create_state(records: Vec<DishRecord>) -> AppState {
    AppState {
        recommender: Recommender::with_default_params(Arc::new(DishCatalog::from_records(records))),
    }
}

fn sample_state() -> AppState {
    let mut rajma = dish("Rajma Chawal", Some("North Indian"), Some("Veg"));
    rajma.img_url = Some("https://images.example.com/rajma.jpg".to_string());
    rajma.average_cost = Some(150.0);

    create_state(vec![
        dish("Paneer Tikka", Some("North Indian"), Some("Veg")),
        dish("Chole Bhature", Some("North Indian"), Some("Veg")),
        dish("Dosa", Some("South Indian"), Some("Veg")),
        rajma,
        dish("Lonely Dish", None, None),
    ])
}

macro_rules! init_app {
    ($state:expr, $development:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(routes::json_config())
                .wrap(routes::security_headers($development))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_index_is_static() {
    let app = init_app!(create_state(vec![]), false);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
    assert!(body["endpoints"].is_object());
}

#[actix_web::test]
async fn test_recommend_get_usage_hint() {
    let app = init_app!(create_state(vec![]), false);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/recommend").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("favorite_dish"));
}

#[actix_web::test]
async fn test_recommend_success() {
    let app = init_app!(sample_state(), false);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "favorite_dish": "Paneer Tikka" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let result: RecommendationResult = test::read_body_json(resp).await;
    assert_eq!(result.favorite_dish, "Paneer Tikka");
    assert_eq!(result.recommendations.len(), 3);
    assert!(result.recommendations.iter().all(|r| r.dish_name != "Paneer Tikka"));
    assert!(result.recommendations.iter().all(|r| r.dish_name != "Lonely Dish"));
    assert_eq!(result.recently_rated.len(), 5);
}

#[actix_web::test]
async fn test_recommend_emits_null_for_missing_values() {
    let app = init_app!(sample_state(), false);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "favorite_dish": "Dosa" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let first = &body["recommendations"][0];
    assert!(first.get("calories").is_some());
    assert!(first["calories"].is_null());
    assert!(first["restaurant_name"].is_null());
}

#[actix_web::test]
async fn test_recommend_missing_field() {
    let app = init_app!(sample_state(), false);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "dish": "Paneer Tikka" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 400);
    assert!(body.message.contains("favorite_dish"));
}

#[actix_web::test]
async fn test_recommend_invalid_json() {
    let app = init_app!(sample_state(), false);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_recommend_null_name_is_not_found() {
    let app = init_app!(sample_state(), false);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "favorite_dish": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "not_found");
}

#[actix_web::test]
async fn test_recommend_unknown_dish() {
    let app = init_app!(sample_state(), false);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "favorite_dish": "Unknown Dish XYZ" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "not_found");
}

#[actix_web::test]
async fn test_recommend_no_similar_dishes() {
    let app = init_app!(sample_state(), false);

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "favorite_dish": "Lonely Dish" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "no_similar_dishes");
}

#[actix_web::test]
async fn test_home_renames_fields() {
    let app = init_app!(sample_state(), false);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/home").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let featured = body["featured_dishes"].as_array().unwrap();
    assert_eq!(featured.len(), 5);
    for entry in featured {
        assert!(entry["food_name"].is_string());
        assert!(entry.get("image").is_some());
        assert!(entry.get("dish_name").is_none());
        assert!(entry.get("img_url").is_none());
    }
}

#[actix_web::test]
async fn test_home_is_deterministic() {
    let app = init_app!(sample_state(), false);

    let first: FeaturedResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/home").to_request()).await;
    let second: FeaturedResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/home").to_request()).await;

    assert_eq!(first.featured_dishes, second.featured_dishes);
}

#[actix_web::test]
async fn test_home_empty_catalog() {
    let app = init_app!(create_state(vec![]), false);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/home").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_dish_details_decodes_spaces_and_ignores_case() {
    let app = init_app!(sample_state(), false);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/dish/rajma%20chawal").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let dish: DishRecord = test::read_body_json(resp).await;
    assert_eq!(dish.dish_name, "Rajma Chawal");
    assert_eq!(dish.average_cost, Some(150.0));
    assert_eq!(dish.img_url.as_deref(), Some("https://images.example.com/rajma.jpg"));
}

#[actix_web::test]
async fn test_dish_details_keeps_literal_percent_sequences() {
    let app = init_app!(
        create_state(vec![
            dish("50%25 Off Thali", Some("North Indian"), Some("Veg")),
            dish("100%20Veg Thali", Some("Gujarati"), Some("Veg")),
        ]),
        false
    );

    for name in ["50%25 Off Thali", "100%20Veg Thali"] {
        let uri = format!("/dish/{}", urlencoding::encode(name));
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "lookup failed for {}", uri);

        let found: DishRecord = test::read_body_json(resp).await;
        assert_eq!(found.dish_name, name);
    }
}

#[actix_web::test]
async fn test_dish_details_not_found() {
    let app = init_app!(sample_state(), false);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/dish/Pizza%20Margherita").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_reports_catalog_size() {
    let app = init_app!(sample_state(), false);

    let health: HealthResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(health.status, "healthy");
    assert_eq!(health.dishes, 5);
}

#[actix_web::test]
async fn test_development_adds_csp_header() {
    let app = init_app!(sample_state(), true);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    let csp = resp.headers().get("Content-Security-Policy").unwrap();
    assert_eq!(csp.to_str().unwrap(), DEV_CONTENT_SECURITY_POLICY);
}

#[actix_web::test]
async fn test_production_has_no_csp_header() {
    let app = init_app!(sample_state(), false);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert!(resp.headers().get("Content-Security-Policy").is_none());
}
