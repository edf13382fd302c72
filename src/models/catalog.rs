//! Choices offered by the recommendation form.
//!
//! These mirror the vocabulary the model was trained on. Requests are not
//! restricted to them; tokens the model has never seen simply carry no weight.

use crate::models::domain::Education;

/// Youngest age the form accepts
pub const MIN_AGE: u8 = 15;

/// Oldest age the form accepts
pub const MAX_AGE: u8 = 60;

/// Age pre-filled in the form
pub const DEFAULT_AGE: u8 = 22;

pub const SKILLS: &[&str] = &[
    "Accounting",
    "Algorithms",
    "Analysis",
    "Analytics",
    "Auditing",
    "AutoCAD",
    "Behavior Analysis",
    "Branding",
    "Business Analysis",
    "Business Strategy",
    "C++",
    "CAD",
    "CRM",
    "Circuits",
    "Communication",
    "Conflict Resolution",
    "Construction",
    "Coordination",
    "Counseling",
    "Creativity",
    "Critical Thinking",
    "Cybersecurity",
    "Data Analysis",
    "Data Science",
    "Design",
    "Documentation",
    "Electronics",
    "Excel",
    "Finance",
    "Firewalls",
    "Illustrator",
    "Java",
    "Leadership",
    "Learning",
    "Linux",
    "Logistics",
    "Machine Learning",
    "Management",
    "Manufacturing",
    "Marketing",
    "MATLAB",
    "Mechanical Design",
    "Modeling",
    "Negotiation",
    "Networking",
    "NoSQL",
    "Numerical Methods",
    "NumPy",
    "Observation",
    "Operations",
    "Patience",
    "Photoshop",
    "Planning",
    "Power BI",
    "Power Systems",
    "Predictive Modeling",
    "Problem Solving",
    "Prototyping",
    "Public Speaking",
    "Python",
    "R",
    "Recruitment",
    "Reporting",
    "Research",
    "Risk Taking",
    "Roadmapping",
    "SEO",
    "SQL",
    "Statistics",
    "Structural Analysis",
    "Surveying",
    "Teaching",
    "Team Management",
    "Teamwork",
    "Thermodynamics",
    "Threat Analysis",
    "Tally",
    "UI/UX",
    "Visualization",
    "Wireframing",
    "Writing",
];

pub const INTERESTS: &[&str] = &[
    "Art",
    "Design",
    "Entrepreneurship",
    "Finance",
    "Management",
    "Marketing",
    "Problem Solving",
    "Public Speaking",
    "Research",
    "Science",
    "Teaching",
    "Technology",
    "Travel",
];

/// Education labels in the order the form lists them
pub fn education_levels() -> Vec<&'static str> {
    Education::ALL.iter().map(Education::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_are_unique() {
        for list in [SKILLS, INTERESTS] {
            let mut seen = std::collections::HashSet::new();
            for entry in list {
                assert!(seen.insert(*entry), "duplicate catalog entry: {}", entry);
            }
        }
    }

    #[test]
    fn test_catalog_entries_avoid_default_delimiter() {
        assert!(SKILLS.iter().chain(INTERESTS).all(|e| !e.contains(';')));
    }

    #[test]
    fn test_education_levels_order() {
        assert_eq!(
            education_levels(),
            vec!["High School", "Bachelor's", "Master's", "PhD"]
        );
        assert!(MIN_AGE <= DEFAULT_AGE && DEFAULT_AGE <= MAX_AGE);
    }
}
