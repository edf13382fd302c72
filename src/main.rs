use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use career_recommender::config::Settings;
use career_recommender::core::Predictor;
use career_recommender::error::{handle_json_payload_error, handle_query_payload_error};
use career_recommender::routes::{self, AppState};
use career_recommender::services::{LinearTextModel, RecommendationCache};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting career recommender service...");

    // The model is required; without it no request can be served
    let model = match LinearTextModel::load(&settings.model.path) {
        Ok(model) => Arc::new(model),
        Err(e) => {
            error!("Model unavailable, refusing to start: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()));
        }
    };

    let predictor = match Predictor::try_new(
        model,
        settings.recommendation.top_k,
        settings.recommendation.delimiter.clone(),
    ) {
        Ok(predictor) => predictor,
        Err(e) => {
            error!("Predictor misconfigured, refusing to start: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    info!("Predictor initialized: {:?}", predictor);

    let cache = RecommendationCache::new(settings.cache.capacity, settings.cache.ttl_secs);

    info!(
        "Recommendation cache initialized (capacity: {}, TTL: {}s)",
        settings.cache.capacity, settings.cache.ttl_secs
    );

    // Build application state
    let app_state = AppState { predictor, cache };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
