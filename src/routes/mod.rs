// Route exports
pub mod form;
pub mod recommend;

use actix_web::web;

pub use recommend::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommend::configure),
    )
    .configure(form::configure);
}
