//! StructuredResume: the record passed between extraction, transform, sizing and rendering.
//!
//! Every field deserializes with a default so collaborators that omit a section (or send
//! `null`) still produce a record whose sequences are empty rather than absent.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// End-date values that mean "still in this role".
const PRESENT_MARKERS: &[&str] = &["present", "current", "now", "היום"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredResume {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub other: Vec<OtherSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    /// Display string, never parsed.
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// A titled free-form section (skills, awards, certifications, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherSection {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

impl StructuredResume {
    /// Prepares a record that just crossed an extraction/transform boundary.
    ///
    /// - Entry ids are made unique within the record (empty or repeated ids get a fresh UUID).
    /// - Work entries whose end date is a present-tense marker are flagged `current`.
    ///
    /// Text content is left untouched.
    pub fn normalize(mut self) -> Self {
        let mut seen: HashSet<String> = HashSet::new();

        for entry in &mut self.work_experience {
            assign_unique_id(&mut entry.id, &mut seen);
            if is_present_marker(&entry.end_date) {
                entry.current = true;
            }
        }
        for entry in &mut self.education {
            assign_unique_id(&mut entry.id, &mut seen);
        }
        for section in &mut self.other {
            assign_unique_id(&mut section.id, &mut seen);
        }

        self
    }

    /// True when no text field carries any content.
    pub fn is_empty(&self) -> bool {
        *self == StructuredResume::default()
    }
}

/// Returns true if an end-date string means the role is ongoing.
pub fn is_present_marker(end_date: &str) -> bool {
    let trimmed = end_date.trim().to_lowercase();
    PRESENT_MARKERS.iter().any(|m| trimmed == *m)
}

fn assign_unique_id(id: &mut String, seen: &mut HashSet<String>) {
    if id.trim().is_empty() || seen.contains(id.as_str()) {
        *id = Uuid::new_v4().to_string();
    }
    seen.insert(id.clone());
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_work(id: &str, end_date: &str) -> WorkExperience {
        WorkExperience {
            id: id.to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2019".to_string(),
            end_date: end_date.to_string(),
            ..Default::default()
        }
    }

    // ── deserialization defaults ────────────────────────────────────────────

    #[test]
    fn test_missing_sections_deserialize_as_empty() {
        let resume: StructuredResume =
            serde_json::from_value(json!({ "personal_info": { "name": "Asaf Magen" } })).unwrap();
        assert_eq!(resume.personal_info.name, "Asaf Magen");
        assert!(resume.work_experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.other.is_empty());
    }

    #[test]
    fn test_null_sections_deserialize_as_empty() {
        let resume: StructuredResume = serde_json::from_value(json!({
            "personal_info": null,
            "work_experience": null,
            "education": null,
            "other": null,
            "skills": null
        }))
        .unwrap();
        assert!(resume.is_empty());
    }

    #[test]
    fn test_camel_case_dates_on_the_wire() {
        let resume: StructuredResume = serde_json::from_value(json!({
            "work_experience": [{
                "company": "Acme",
                "startDate": "2016",
                "endDate": "היום",
                "current": null,
                "bullets": ["Shipped it"]
            }],
            "education": [{ "institution": "Technion", "graduationDate": "2014" }]
        }))
        .unwrap();
        assert_eq!(resume.work_experience[0].start_date, "2016");
        assert_eq!(resume.work_experience[0].end_date, "היום");
        assert!(!resume.work_experience[0].current);
        assert_eq!(resume.education[0].graduation_date, "2014");

        let back = serde_json::to_value(&resume).unwrap();
        assert_eq!(back["work_experience"][0]["startDate"], "2016");
        assert_eq!(back["education"][0]["graduationDate"], "2014");
    }

    // ── normalize ───────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_assigns_missing_and_duplicate_ids() {
        let resume = StructuredResume {
            work_experience: vec![make_work("a", "2020"), make_work("a", "2021"), make_work("", "")],
            other: vec![OtherSection {
                id: "a".to_string(),
                title: "Skills".to_string(),
                items: vec!["Rust".to_string()],
            }],
            ..Default::default()
        }
        .normalize();

        let ids: Vec<&str> = resume
            .work_experience
            .iter()
            .map(|w| w.id.as_str())
            .chain(resume.other.iter().map(|o| o.id.as_str()))
            .collect();
        assert_eq!(ids[0], "a", "first occurrence keeps its id");
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "ids must be unique: {ids:?}");
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_normalize_marks_present_roles_current() {
        let resume = StructuredResume {
            work_experience: vec![
                make_work("1", " Present "),
                make_work("2", "היום"),
                make_work("3", "2020"),
            ],
            ..Default::default()
        }
        .normalize();
        assert!(resume.work_experience[0].current);
        assert!(resume.work_experience[1].current);
        assert!(!resume.work_experience[2].current);
    }

    #[test]
    fn test_normalize_preserves_text() {
        let original = StructuredResume {
            personal_info: PersonalInfo {
                name: "אסף מגן".to_string(),
                email: "asafmagen2@gmail.com".to_string(),
                ..Default::default()
            },
            work_experience: vec![WorkExperience {
                id: "w1".to_string(),
                bullets: vec!["Reduced costs by $50K".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let normalized = original.clone().normalize();
        assert_eq!(normalized, original);
    }

    #[test]
    fn test_is_present_marker() {
        assert!(is_present_marker("PRESENT"));
        assert!(is_present_marker("now"));
        assert!(!is_present_marker(""));
        assert!(!is_present_marker("2024"));
        assert!(!is_present_marker("Present day job"));
    }
}
