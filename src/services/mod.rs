// Service exports
pub mod cache;
pub mod model;

pub use cache::{CacheStats, RecommendationCache};
pub use model::{AgeScaler, ClassWeights, LinearTextModel, ModelArtifact};
