// HTTP tests for the career recommender API

use actix_web::{http::StatusCode, test, web, App};
use career_recommender::core::Predictor;
use career_recommender::error::handle_json_payload_error;
use career_recommender::models::{ErrorResponse, HealthResponse, OptionsResponse, RecommendResponse};
use career_recommender::routes::{configure_routes, AppState};
use career_recommender::services::{LinearTextModel, RecommendationCache};
use serde_json::json;
use std::sync::Arc;

const MODEL_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/models/career_recommender_model.json");

fn app_state() -> AppState {
    let model = LinearTextModel::load(MODEL_PATH).expect("bundled model should load");
    AppState {
        predictor: Predictor::with_defaults(Arc::new(model)),
        cache: RecommendationCache::new(100, 60),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_recommend_returns_three_careers() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({
            "age": 22,
            "education": "Bachelor's",
            "skills": ["Python", "Data Analysis"],
            "interests": ["Research", "Technology"]
        }))
        .to_request();
    let resp: RecommendResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.recommendations.len(), 3);
    assert_eq!(resp.display.len(), 3);
    assert_eq!(resp.recommendations[0].rank, 1);
    assert_eq!(resp.recommendations[0].career, "Data Scientist");
    assert!(!resp.cached);
    assert!(!resp.request_id.is_empty());
}

#[actix_web::test]
async fn test_repeated_request_is_served_from_cache() {
    let app = init_app!();
    let body = json!({
        "age": 35,
        "education": "Master's",
        "skills": ["Finance", "Excel"],
        "interests": ["Finance"]
    });

    let first: RecommendResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post().uri("/api/v1/recommend").set_json(&body).to_request(),
    )
    .await;
    let second: RecommendResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post().uri("/api/v1/recommend").set_json(&body).to_request(),
    )
    .await;

    assert!(!first.cached);
    assert!(second.cached);
    assert_eq!(first.recommendations, second.recommendations);
}

#[actix_web::test]
async fn test_empty_skills_is_a_warning() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({
            "age": 22,
            "education": "PhD",
            "skills": [],
            "interests": ["Science"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "empty_selection");
    assert_eq!(body.message, "Please select at least one skill and one interest.");
}

#[actix_web::test]
async fn test_age_out_of_range_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({
            "age": 70,
            "education": "PhD",
            "skills": ["R"],
            "interests": ["Science"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "validation_failed");
}

#[actix_web::test]
async fn test_blank_skill_is_malformed() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({
            "age": 30,
            "education": "PhD",
            "skills": ["   "],
            "interests": ["Science"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "malformed_input");
}

#[actix_web::test]
async fn test_invalid_json_and_unknown_education() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({
            "age": 30,
            "education": "Kindergarten",
            "skills": ["R"],
            "interests": ["Science"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_options_lists_catalog() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/options").to_request();
    let resp: OptionsResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.min_age, 15);
    assert_eq!(resp.max_age, 60);
    assert_eq!(resp.default_age, 22);
    assert_eq!(resp.education_levels, vec!["High School", "Bachelor's", "Master's", "PhD"]);
    assert!(resp.skills.contains(&"Python".to_string()));
    assert!(resp.interests.contains(&"Research".to_string()));
}

#[actix_web::test]
async fn test_health_reports_model() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.status, "healthy");
    assert_eq!(resp.model, "career-recommender");
    assert_eq!(resp.classes, 6);
}

#[actix_web::test]
async fn test_index_serves_form() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/api/v1/recommend"));
}
