use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message shown when the form is submitted without a skill or interest
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one skill and one interest.";

/// Errors raised while loading or evaluating a model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),

    #[error("Model splits text on {model:?} but the predictor joins with {configured:?}")]
    DelimiterMismatch { model: String, configured: String },

    #[error("Classifier returned {got} probabilities for {expected} classes")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Classifier returned probability {value} for class {class}")]
    InvalidProbability { class: String, value: f64 },
}

/// Errors returned by the recommendation pipeline
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Empty selection: no {0} selected")]
    EmptySelection(&'static str),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ModelError),
}

impl RecommendError {
    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            RecommendError::ModelUnavailable(_) => "model_unavailable",
            RecommendError::EmptySelection(_) => "empty_selection",
            RecommendError::MalformedInput(_) => "malformed_input",
            RecommendError::Classifier(_) => "classifier_error",
        }
    }

    fn user_message(&self) -> String {
        match self {
            RecommendError::EmptySelection(_) => EMPTY_SELECTION_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for RecommendError {
    fn status_code(&self) -> StatusCode {
        match self {
            RecommendError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RecommendError::EmptySelection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RecommendError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            RecommendError::Classifier(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.user_message(),
            status_code: status.as_u16(),
        })
    }
}

/// JSON error response for request payload errors
#[derive(Debug)]
pub struct JsonError(ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: actix_web::error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    })
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: actix_web::error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError(ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RecommendError::ModelUnavailable("gone".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            RecommendError::EmptySelection("skills").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            RecommendError::MalformedInput("blank".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RecommendError::from(ModelError::ShapeMismatch { expected: 3, got: 2 }).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_empty_selection_message_is_user_facing() {
        let err = RecommendError::EmptySelection("interests");
        assert_eq!(err.user_message(), EMPTY_SELECTION_MESSAGE);
        assert_eq!(err.code(), "empty_selection");
    }
}
