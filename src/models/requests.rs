use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Education, Query};

/// Request to recommend careers
///
/// Skills and interests default to empty so that a missing list is reported
/// as an empty selection instead of a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(range(min = 15, max = 60))]
    pub age: u8,
    pub education: Education,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl RecommendRequest {
    pub fn to_query(&self) -> Query {
        Query::new(
            self.age,
            self.education.as_str(),
            &self.skills,
            &self.interests,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(age: u8) -> RecommendRequest {
        RecommendRequest {
            age,
            education: Education::Masters,
            skills: vec!["Python".to_string()],
            interests: vec!["Science".to_string()],
        }
    }

    #[test]
    fn test_age_bounds() {
        assert!(request(15).validate().is_ok());
        assert!(request(60).validate().is_ok());
        assert!(request(14).validate().is_err());
        assert!(request(61).validate().is_err());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"age": 30, "education": "PhD"}"#).unwrap();
        assert!(req.skills.is_empty());
        assert!(req.interests.is_empty());
    }

    #[test]
    fn test_to_query_uses_education_label() {
        let query = request(25).to_query();
        assert_eq!(query.education, "Master's");
        assert_eq!(query.skills, vec!["Python"]);
    }
}
