use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;

use crate::core::ClassifierCapability;
use crate::error::ModelError;
use crate::models::FeatureRecord;

/// Age standardization parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgeScaler {
    pub mean: f64,
    pub scale: f64,
}

/// Per-class weights of the exported logistic regression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassWeights {
    pub label: String,
    #[serde(default)]
    pub intercept: f64,
    #[serde(default)]
    pub age: f64,
    #[serde(default)]
    pub education: HashMap<String, f64>,
    #[serde(default)]
    pub tokens: HashMap<String, f64>,
}

/// Serialized form of a trained career model
///
/// Mirrors the training pipeline: scaled age, one-hot education and TF-IDF
/// over the delimiter-split text, followed by a multinomial logistic
/// regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    pub age: AgeScaler,
    pub idf: HashMap<String, f64>,
    pub classes: Vec<ClassWeights>,
}

fn default_name() -> String { "career-model".to_string() }
fn default_delimiter() -> String { ";".to_string() }
fn default_lowercase() -> bool { true }

/// Linear text classifier evaluated from a [`ModelArtifact`]
///
/// The vocabulary is compiled into fixed columns at load time so every
/// sum runs in the same order and repeated calls agree bit for bit.
#[derive(Debug, Clone)]
pub struct LinearTextModel {
    artifact: ModelArtifact,
    labels: Vec<String>,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    token_weights: Vec<Vec<f64>>,
}

impl LinearTextModel {
    /// Validate an artifact and build a model from it
    pub fn from_artifact(mut artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact.classes.is_empty() {
            return Err(ModelError::Invalid("artifact defines no classes".to_string()));
        }
        if artifact.delimiter.is_empty() {
            return Err(ModelError::Invalid("delimiter must not be empty".to_string()));
        }
        if !(artifact.age.scale.is_finite() && artifact.age.scale > 0.0) || !artifact.age.mean.is_finite() {
            return Err(ModelError::Invalid(format!(
                "age scaler must have a finite mean and positive scale, got {:?}",
                artifact.age
            )));
        }

        let mut seen = HashSet::new();
        for class in &artifact.classes {
            if !seen.insert(class.label.as_str()) {
                return Err(ModelError::Invalid(format!("duplicate class label {:?}", class.label)));
            }
            let finite = class.intercept.is_finite()
                && class.age.is_finite()
                && class.education.values().all(|w| w.is_finite())
                && class.tokens.values().all(|w| w.is_finite());
            if !finite {
                return Err(ModelError::Invalid(format!(
                    "class {:?} has non-finite weights",
                    class.label
                )));
            }
        }
        if let Some((token, _)) = artifact.idf.iter().find(|(_, w)| !(w.is_finite() && **w > 0.0)) {
            return Err(ModelError::Invalid(format!("idf weight for {:?} must be positive", token)));
        }

        // Token weights are looked up with the same casing the tokenizer produces
        if artifact.lowercase {
            artifact.idf = lowercase_keys(std::mem::take(&mut artifact.idf), "idf")?;
            for class in &mut artifact.classes {
                let context = format!("class {:?} tokens", class.label);
                class.tokens = lowercase_keys(std::mem::take(&mut class.tokens), &context)?;
            }
        }

        let vocabulary: BTreeMap<String, usize> = artifact
            .idf
            .keys()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(column, token)| (token, column))
            .collect();

        let mut idf = vec![0.0; vocabulary.len()];
        for (token, &column) in &vocabulary {
            idf[column] = artifact.idf[token];
        }

        // Tokens without an idf entry can never fire and are dropped here
        let token_weights = artifact
            .classes
            .iter()
            .map(|class| {
                let mut weights = vec![0.0; vocabulary.len()];
                for (token, &w) in &class.tokens {
                    if let Some(&column) = vocabulary.get(token) {
                        weights[column] = w;
                    }
                }
                weights
            })
            .collect();

        let labels = artifact.classes.iter().map(|c| c.label.clone()).collect();
        Ok(Self {
            artifact,
            labels,
            vocabulary,
            idf,
            token_weights,
        })
    }

    /// Parse and validate an artifact from JSON text
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    /// Load an artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model = Self::from_json(&json)?;

        tracing::info!(
            "Loaded model {} ({} classes, {} vocabulary terms) from {}",
            model.artifact.name,
            model.labels.len(),
            model.vocabulary.len(),
            path.display()
        );
        Ok(model)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Split combined text into vocabulary tokens
    fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split(self.artifact.delimiter.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(move |t| {
                if self.artifact.lowercase {
                    t.to_lowercase()
                } else {
                    t.to_string()
                }
            })
    }

    /// L2-normalized TF-IDF weights as (column, weight), ordered by column
    fn tfidf(&self, text: &str) -> Vec<(usize, f64)> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in self.tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| (column, count * self.idf[column]))
            .collect();

        let norm = weights.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in weights.iter_mut() {
                *value /= norm;
            }
        }
        weights
    }

    /// Raw linear score for every class
    fn decision_function(&self, record: &FeatureRecord) -> Vec<f64> {
        let age = (record.age as f64 - self.artifact.age.mean) / self.artifact.age.scale;
        let text = self.tfidf(&record.combined_text);

        self.artifact
            .classes
            .iter()
            .zip(&self.token_weights)
            .map(|(class, weights)| {
                let education = class.education.get(&record.education).copied().unwrap_or(0.0);
                let tokens: f64 = text
                    .iter()
                    .map(|&(column, value)| value * weights[column])
                    .sum();
                class.intercept + class.age * age + education + tokens
            })
            .collect()
    }
}

/// Lowercase map keys, rejecting keys that only differ by case
fn lowercase_keys(
    map: HashMap<String, f64>,
    context: &str,
) -> Result<HashMap<String, f64>, ModelError> {
    let mut out = HashMap::with_capacity(map.len());
    for (token, w) in map {
        let lowered = token.to_lowercase();
        if out.insert(lowered.clone(), w).is_some() {
            return Err(ModelError::Invalid(format!(
                "{} contain {:?} more than once when lowercased",
                context, lowered
            )));
        }
    }
    Ok(out)
}

/// Numerically stable softmax
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

impl ClassifierCapability for LinearTextModel {
    fn classes(&self) -> &[String] {
        &self.labels
    }

    fn predict_proba(&self, record: &FeatureRecord) -> Result<Vec<f64>, ModelError> {
        Ok(softmax(&self.decision_function(record)))
    }

    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn delimiter(&self) -> Option<&str> {
        Some(self.artifact.delimiter.as_str())
    }
}
