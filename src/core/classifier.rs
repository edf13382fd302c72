use crate::error::ModelError;
use crate::models::FeatureRecord;

/// Probability-scoring capability of a trained classifier
///
/// Implementations are loaded once and shared read-only across requests.
pub trait ClassifierCapability: Send + Sync {
    /// Class labels, in the order probabilities are returned
    fn classes(&self) -> &[String];

    /// Probability for every class in [`classes`](Self::classes) order
    fn predict_proba(&self, record: &FeatureRecord) -> Result<Vec<f64>, ModelError>;

    /// Name used in logs and health checks
    fn name(&self) -> &str {
        "classifier"
    }

    /// Separator the model splits `Combined_Text` on, if it tokenizes text itself
    fn delimiter(&self) -> Option<&str> {
        None
    }
}
