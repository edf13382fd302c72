use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

/// Recommendation form
///
/// The page loads its choices from `/api/v1/options` and posts to
/// `/api/v1/recommend`.
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
