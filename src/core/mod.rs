// Core algorithm exports
pub mod classifier;
pub mod features;
pub mod predictor;
pub mod ranking;

pub use classifier::ClassifierCapability;
pub use features::{build_feature_record, combine_text, DEFAULT_DELIMITER};
pub use predictor::{Predictor, DEFAULT_TOP_K};
pub use ranking::top_k_indices;
