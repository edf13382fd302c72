use crate::error::RecommendError;
use crate::models::{FeatureRecord, Query};

/// Default separator between skill and interest tokens
pub const DEFAULT_DELIMITER: &str = ";";

/// Join skills then interests into the single text column the model reads
///
/// Entries containing the delimiter are passed through unchanged; how they
/// split is up to the model's tokenizer.
pub fn combine_text(skills: &[String], interests: &[String], delimiter: &str) -> String {
    let mut combined = skills.join(delimiter);
    combined.push_str(delimiter);
    combined.push_str(&interests.join(delimiter));
    combined
}

/// Build the feature record for a query
///
/// Fails with `EmptySelection` when either list is empty and with
/// `MalformedInput` when education or any entry is blank.
pub fn build_feature_record(query: &Query, delimiter: &str) -> Result<FeatureRecord, RecommendError> {
    if query.skills.is_empty() {
        return Err(RecommendError::EmptySelection("skills"));
    }
    if query.interests.is_empty() {
        return Err(RecommendError::EmptySelection("interests"));
    }
    if query.education.trim().is_empty() {
        return Err(RecommendError::MalformedInput("education must not be empty".to_string()));
    }

    for (field, entries) in [("skills", &query.skills), ("interests", &query.interests)] {
        if entries.iter().any(|e| e.trim().is_empty()) {
            return Err(RecommendError::MalformedInput(format!(
                "{} must not contain blank entries",
                field
            )));
        }
        if let Some(entry) = entries.iter().find(|e| e.contains(delimiter)) {
            tracing::warn!(
                "{} entry {:?} contains the delimiter {:?}; tokenization is left to the model",
                field,
                entry,
                delimiter
            );
        }
    }

    Ok(FeatureRecord {
        age: query.age,
        education: query.education.clone(),
        combined_text: combine_text(&query.skills, &query.interests, delimiter),
    })
}
