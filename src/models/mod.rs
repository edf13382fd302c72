// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CareerPrediction, Education, FeatureRecord, Query, Recommendation};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, OptionsResponse, RecommendResponse};
