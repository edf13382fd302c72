use serde::{Deserialize, Serialize};
use crate::models::domain::CareerPrediction;

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub recommendations: Vec<CareerPrediction>,
    /// Pre-formatted ranked lines, e.g. `1. Data Scientist - Probability: 0.6123`
    pub display: Vec<String>,
    pub cached: bool,
}

/// Choices the recommendation form offers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    #[serde(rename = "minAge")]
    pub min_age: u8,
    #[serde(rename = "maxAge")]
    pub max_age: u8,
    #[serde(rename = "defaultAge")]
    pub default_age: u8,
    #[serde(rename = "educationLevels")]
    pub education_levels: Vec<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub model: String,
    pub classes: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
