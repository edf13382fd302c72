use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest education level a user can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::HighSchool,
        Education::Bachelors,
        Education::Masters,
        Education::Phd,
    ];

    /// Label used by the trained model for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::HighSchool => "High School",
            Education::Bachelors => "Bachelor's",
            Education::Masters => "Master's",
            Education::Phd => "PhD",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recommendation request
///
/// Skills and interests behave as ordered sets: entries are trimmed and
/// repeated entries keep only their first position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    pub age: u8,
    pub education: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

impl Query {
    pub fn new<S, I>(age: u8, education: impl Into<String>, skills: S, interests: I) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let education: String = education.into();
        Self {
            age,
            education: education.trim().to_string(),
            skills: dedup_ordered(skills),
            interests: dedup_ordered(interests),
        }
    }
}

fn dedup_ordered<T>(items: T) -> Vec<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.as_ref().trim();
        if !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Single-row feature record handed to the classifier
///
/// Field names on the wire match the columns the model was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Combined_Text")]
    pub combined_text: String,
}

/// One ranked career suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPrediction {
    pub rank: usize,
    pub career: String,
    pub probability: f64,
}

impl fmt::Display for CareerPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - Probability: {:.4}",
            self.rank, self.career, self.probability
        )
    }
}

/// Ranked career suggestions, highest probability first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub predictions: Vec<CareerPrediction>,
}

impl Recommendation {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// (label, probability) pairs in rank order
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.predictions
            .iter()
            .map(|p| (p.career.as_str(), p.probability))
            .collect()
    }

    /// Human-readable ranked lines with 4-decimal probabilities
    pub fn render_lines(&self) -> Vec<String> {
        self.predictions.iter().map(ToString::to_string).collect()
    }
}
