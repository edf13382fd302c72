//! Career Recommender - serves a trained career classifier behind a web form
//!
//! A user submits age, education, skills and interests; the service builds a
//! single feature record, scores every career with the loaded classifier and
//! returns the three most probable careers.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ClassifierCapability, Predictor, combine_text, top_k_indices};
pub use error::{ModelError, RecommendError};
pub use models::{CareerPrediction, Education, FeatureRecord, Query, Recommendation, RecommendRequest, RecommendResponse};
pub use services::{LinearTextModel, RecommendationCache};
