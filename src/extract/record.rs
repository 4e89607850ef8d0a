//! The unified structured output schema for a parsed resume
//!
//! Every field defaults to an empty string or empty sequence rather than
//! being absent, so downstream consumers can assume all keys exist
//! regardless of which extraction path produced the record.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub work_experience: Vec<WorkEntry>,
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// The generation prompt historically called this field "name".
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// The model sometimes groups skills by category ("technical", "soft")
/// even when asked for a flat list. Accept both shapes and flatten;
/// category labels are discarded.
fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SkillsShape {
        Flat(Vec<String>),
        Grouped(BTreeMap<String, Vec<String>>),
    }

    Ok(match SkillsShape::deserialize(deserializer)? {
        SkillsShape::Flat(list) => list,
        SkillsShape::Grouped(groups) => groups.into_values().flatten().collect(),
    })
}

impl ResumeRecord {
    /// True when no extraction path detected anything at all.
    pub fn is_empty(&self) -> bool {
        *self == ResumeRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fill_defaults() {
        let record: ResumeRecord =
            serde_json::from_str(r#"{"full_name": "Jane Doe"}"#).unwrap();
        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.contact_info, ContactInfo::default());
        assert!(record.education.is_empty());
        assert!(record.skills.is_empty());
        assert_eq!(record.summary, "");
    }

    #[test]
    fn test_grouped_skills_flatten() {
        let record: ResumeRecord = serde_json::from_str(
            r#"{"skills": {"soft": ["Teamwork"], "technical": ["Python", "Go"]}}"#,
        )
        .unwrap();
        assert_eq!(record.skills, vec!["Teamwork", "Python", "Go"]);
    }

    #[test]
    fn test_flat_skills_pass_through() {
        let record: ResumeRecord =
            serde_json::from_str(r#"{"skills": ["Rust", "SQL"]}"#).unwrap();
        assert_eq!(record.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_project_name_alias() {
        let record: ResumeRecord = serde_json::from_str(
            r#"{"projects": [{"name": "Parser", "description": "", "technologies": []}]}"#,
        )
        .unwrap();
        assert_eq!(record.projects[0].title, "Parser");
    }

    #[test]
    fn test_serializes_all_top_level_keys() {
        let json = serde_json::to_value(ResumeRecord::default()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "full_name",
            "contact_info",
            "education",
            "work_experience",
            "skills",
            "certifications",
            "projects",
            "summary",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
    }
}
