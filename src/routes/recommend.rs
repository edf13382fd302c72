use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Predictor;
use crate::error::RecommendError;
use crate::models::{
    catalog, ErrorResponse, HealthResponse, OptionsResponse, RecommendRequest, RecommendResponse,
};
use crate::services::RecommendationCache;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
    pub cache: RecommendationCache,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/options", web::get().to(options))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let classifier = state.predictor.classifier();
    let classes = classifier.classes().len();
    let status = if classes > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        model: classifier.name().to_string(),
        classes,
    })
}

/// Form choices endpoint
///
/// GET /api/v1/options
async fn options() -> impl Responder {
    HttpResponse::Ok().json(OptionsResponse {
        min_age: catalog::MIN_AGE,
        max_age: catalog::MAX_AGE,
        default_age: catalog::DEFAULT_AGE,
        education_levels: owned(&catalog::education_levels()),
        skills: owned(catalog::SKILLS),
        interests: owned(catalog::INTERESTS),
    })
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Recommend careers endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "age": 22,
///   "education": "Bachelor's",
///   "skills": ["Python", "Data Analysis"],
///   "interests": ["Research", "Technology"]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, RecommendError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    if req.skills.is_empty() || req.interests.is_empty() {
        let field = if req.skills.is_empty() { "skills" } else { "interests" };
        tracing::info!("Recommend request without {}, skipping prediction", field);
        return Err(RecommendError::EmptySelection(field));
    }

    let query = req.to_query();
    let request_id = uuid::Uuid::new_v4().to_string();

    let (recommendation, cached) = match state.cache.get(&query).await {
        Some(hit) => (hit, true),
        None => {
            let fresh = state.predictor.recommend_query(&query).map_err(|e| {
                tracing::error!("Recommendation {} failed: {}", request_id, e);
                e
            })?;
            state.cache.insert(query.clone(), fresh.clone()).await;
            (fresh, false)
        }
    };

    tracing::info!(
        "Recommendation {}: {} careers for age={} education={} (cached: {})",
        request_id,
        recommendation.len(),
        query.age,
        query.education,
        cached
    );

    Ok(HttpResponse::Ok().json(RecommendResponse {
        request_id,
        display: recommendation.render_lines(),
        recommendations: recommendation.predictions,
        cached,
    }))
}
