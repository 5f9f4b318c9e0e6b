//! Candidate data model — plain per-request value objects, no persistence.
//!
//! Everything below the HTTP layer is optional or defaulted: a missing field
//! never aborts rendering, it degrades to an explicit placeholder. Wire names
//! are camelCase to match the form client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured candidate data submitted with each generation request.
///
/// `skills` maps a category label ("languages", "frameworks", …) to a list of
/// skill strings. Category iteration order is the JSON insertion order
/// (serde_json `preserve_order`), which the skills formatter relies on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub education: Vec<EducationItem>,
    pub skills: Map<String, Value>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub institute: Option<String>,
    pub duration: Option<String>,
    pub degree: Option<String>,
    pub gpa: Option<String>,
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: Option<String>,
    pub tech_stack: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: Option<String>,
    pub duration: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub bullets: Vec<String>,
}

impl UserData {
    /// Skill categories in map order, with each value coerced to a list of
    /// strings. Non-array values and non-string members are ignored.
    pub fn skill_categories(&self) -> Vec<(&str, Vec<&str>)> {
        self.skills
            .iter()
            .map(|(category, value)| {
                let members = value
                    .as_array()
                    .map(|items| items.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                (category.as_str(), members)
            })
            .collect()
    }

    /// True when no category has any members.
    pub fn skills_empty(&self) -> bool {
        self.skill_categories()
            .iter()
            .all(|(_, members)| members.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_data_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "name": "Jane Doe",
            "title": "Engineer",
            "projects": [{"name": "Indexer", "techStack": "Rust, Tokio", "bullets": []}],
            "experience": [{
                "company": "Acme",
                "duration": "2020-2022",
                "title": "Dev",
                "bullets": ["Improved throughput by 30%"]
            }]
        });
        let user: UserData = serde_json::from_value(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("Jane Doe"));
        assert_eq!(user.projects[0].tech_stack.as_deref(), Some("Rust, Tokio"));
        assert_eq!(user.experience[0].bullets.len(), 1);
        assert!(user.email.is_none());
        assert!(user.certifications.is_empty());
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let user: UserData = serde_json::from_str("{}").unwrap();
        assert!(user.name.is_none());
        assert!(user.education.is_empty());
        assert!(user.skills.is_empty());
        assert!(user.skills_empty());
    }

    #[test]
    fn test_skill_categories_preserve_json_order() {
        let json = r#"{
            "skills": {
                "tools": ["Git"],
                "languages": ["Rust", "Go"],
                "frameworks": []
            }
        }"#;
        let user: UserData = serde_json::from_str(json).unwrap();
        let categories = user.skill_categories();
        assert_eq!(categories[0].0, "tools");
        assert_eq!(categories[1].0, "languages");
        assert_eq!(categories[1].1, vec!["Rust", "Go"]);
        assert_eq!(categories[2].0, "frameworks");
        assert!(!user.skills_empty());
    }

    #[test]
    fn test_skill_categories_ignore_non_list_values() {
        let json = r#"{"skills": {"languages": "Rust", "tools": ["Git"]}}"#;
        let user: UserData = serde_json::from_str(json).unwrap();
        let categories = user.skill_categories();
        assert!(categories[0].1.is_empty());
        assert_eq!(categories[1].1, vec!["Git"]);
    }
}
