use std::fmt;
use std::sync::Arc;

use crate::core::{
    classifier::ClassifierCapability,
    features::{build_feature_record, DEFAULT_DELIMITER},
    ranking::top_k_indices,
};
use crate::error::{ModelError, RecommendError};
use crate::models::{CareerPrediction, Query, Recommendation};

/// Number of careers returned by default
pub const DEFAULT_TOP_K: usize = 3;

/// Turns a query into ranked career suggestions
///
/// # Pipeline
/// 1. Build the single-row feature record
/// 2. Score every class once with the classifier
/// 3. Keep the `top_k` most probable classes
///
/// The classifier is shared read-only; cloning a `Predictor` is cheap.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn ClassifierCapability>,
    top_k: usize,
    delimiter: String,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn ClassifierCapability>, top_k: usize, delimiter: impl Into<String>) -> Self {
        Self {
            classifier,
            top_k,
            delimiter: delimiter.into(),
        }
    }

    /// Build a predictor, checking it against the classifier it wraps
    ///
    /// Fails when `top_k` is zero or when `delimiter` differs from the one the
    /// classifier splits on; either would silently degrade every ranking.
    pub fn try_new(
        classifier: Arc<dyn ClassifierCapability>,
        top_k: usize,
        delimiter: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let delimiter = delimiter.into();
        if top_k == 0 {
            return Err(ModelError::Invalid("top_k must be at least 1".to_string()));
        }
        if let Some(expected) = classifier.delimiter() {
            if expected != delimiter {
                return Err(ModelError::DelimiterMismatch {
                    model: expected.to_string(),
                    configured: delimiter,
                });
            }
        }
        Ok(Self::new(classifier, top_k, delimiter))
    }

    /// Predictor returning the top 3, joining with the classifier's own delimiter
    pub fn with_defaults(classifier: Arc<dyn ClassifierCapability>) -> Self {
        let delimiter = classifier
            .delimiter()
            .unwrap_or(DEFAULT_DELIMITER)
            .to_string();
        Self::new(classifier, DEFAULT_TOP_K, delimiter)
    }

    pub fn classifier(&self) -> &dyn ClassifierCapability {
        self.classifier.as_ref()
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Recommend careers for the given profile
    ///
    /// # Arguments
    /// * `age` - Age in years; range checks belong to the caller
    /// * `education` - Education label as the model knows it
    /// * `skills` - Selected skills, must not be empty
    /// * `interests` - Selected interests, must not be empty
    ///
    /// # Returns
    /// Up to `top_k` careers, most probable first
    pub fn recommend<S, I>(
        &self,
        age: u8,
        education: &str,
        skills: S,
        interests: I,
    ) -> Result<Recommendation, RecommendError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.recommend_query(&Query::new(age, education, skills, interests))
    }

    /// Recommend careers for an already normalized query
    pub fn recommend_query(&self, query: &Query) -> Result<Recommendation, RecommendError> {
        let classes = self.classifier.classes();
        if classes.is_empty() {
            return Err(RecommendError::ModelUnavailable(format!(
                "{} exposes no classes",
                self.classifier.name()
            )));
        }

        let record = build_feature_record(query, &self.delimiter)?;
        let probabilities = self.classifier.predict_proba(&record)?;

        if probabilities.len() != classes.len() {
            return Err(ModelError::ShapeMismatch {
                expected: classes.len(),
                got: probabilities.len(),
            }
            .into());
        }
        if let Some((i, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(ModelError::InvalidProbability {
                class: classes[i].clone(),
                value,
            }
            .into());
        }

        let predictions = top_k_indices(&probabilities, self.top_k)
            .into_iter()
            .enumerate()
            .map(|(rank, i)| CareerPrediction {
                rank: rank + 1,
                career: classes[i].clone(),
                probability: probabilities[i],
            })
            .collect();

        tracing::debug!(
            "Scored {} classes for age={} education={:?} text={:?}",
            classes.len(),
            record.age,
            record.education,
            record.combined_text
        );

        Ok(Recommendation { predictions })
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("classifier", &self.classifier.name())
            .field("classes", &self.classifier.classes().len())
            .field("top_k", &self.top_k)
            .field("delimiter", &self.delimiter)
            .finish()
    }
}
