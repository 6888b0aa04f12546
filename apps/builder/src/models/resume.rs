use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::section::{EducationEntry, ExperienceEntry};
use crate::sections::dedupe_ids;
use crate::sections::skills::normalize_skills;

/// Resume content without identity or timestamps: the working copy the editor
/// shows before it is saved, and the payload of [`crate::ResumeStore::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ResumeDraft {
    /// The example resume a fresh editor starts from.
    pub fn sample() -> Self {
        Self {
            file_name: None,
            full_name: "John Doe".to_string(),
            summary: "Experienced software developer with 5+ years in full-stack development. \
                Passionate about creating scalable solutions and leading development teams."
                .to_string(),
            experience: vec![ExperienceEntry {
                id: Uuid::new_v4(),
                title: "Senior Software Engineer".to_string(),
                company: "Tech Corp".to_string(),
                duration: "2020 - Present".to_string(),
                description: "Led development of microservices architecture, \
                    resulting in 40% performance improvement."
                    .to_string(),
            }],
            education: vec![EducationEntry {
                id: Uuid::new_v4(),
                degree: "Bachelor of Computer Science".to_string(),
                school: "University of Technology".to_string(),
                year: "2018".to_string(),
            }],
            skills: ["JavaScript", "React", "Node.js", "Python", "AWS"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Restores the sub-list and skills invariants: repeated entry ids get a
    /// fresh id, skills are trimmed with empties and repeats dropped.
    pub fn normalize(&mut self) {
        dedupe_ids(&mut self.experience);
        dedupe_ids(&mut self.education);
        self.skills = normalize_skills(std::mem::take(&mut self.skills));
    }

    /// Merges every field present in `patch`. Touched lists are normalized.
    pub fn apply(&mut self, patch: ResumePatch) {
        let ResumePatch {
            file_name,
            full_name,
            summary,
            experience,
            education,
            skills,
        } = patch;

        if let Some(file_name) = file_name {
            self.file_name = Some(file_name);
        }
        if let Some(full_name) = full_name {
            self.full_name = full_name;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(mut experience) = experience {
            dedupe_ids(&mut experience);
            self.experience = experience;
        }
        if let Some(mut education) = education {
            dedupe_ids(&mut education);
            self.education = education;
        }
        if let Some(skills) = skills {
            self.skills = normalize_skills(skills);
        }
    }
}

/// A saved resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub content: ResumeDraft,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub(crate) fn new(mut content: ResumeDraft, now: DateTime<Utc>) -> Self {
        content.normalize();
        Self {
            id: Uuid::new_v4(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges `patch` and moves `updated_at` forward. The timestamp never goes
    /// backwards even if the wall clock does.
    pub(crate) fn apply(&mut self, patch: ResumePatch, now: DateTime<Utc>) {
        self.content.apply(patch);
        self.updated_at = now.max(self.updated_at);
    }

    /// Title shown in lists and the "Editing:" banner.
    pub fn display_name(&self) -> &str {
        if self.content.full_name.trim().is_empty() {
            "Untitled Resume"
        } else {
            &self.content.full_name
        }
    }
}

/// Partial update of a resume. Identity and timestamps are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl ResumePatch {
    pub fn full_name(value: impl Into<String>) -> Self {
        Self {
            full_name: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn summary(value: impl Into<String>) -> Self {
        Self {
            summary: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn experience(entries: Vec<ExperienceEntry>) -> Self {
        Self {
            experience: Some(entries),
            ..Default::default()
        }
    }

    pub fn education(entries: Vec<EducationEntry>) -> Self {
        Self {
            education: Some(entries),
            ..Default::default()
        }
    }

    pub fn skills(skills: Vec<String>) -> Self {
        Self {
            skills: Some(skills),
            ..Default::default()
        }
    }
}

/// Whatever the editor is currently showing: a saved record or the draft.
/// Serializes to the same JSON shape the save service and export expect.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ResumeDocument<'a> {
    Saved(&'a ResumeRecord),
    Draft(&'a ResumeDraft),
}

impl ResumeDocument<'_> {
    pub fn content(&self) -> &ResumeDraft {
        match self {
            ResumeDocument::Saved(record) => &record.content,
            ResumeDocument::Draft(draft) => draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_camel_case_flat() {
        let record = ResumeRecord::new(ResumeDraft::sample(), Utc::now());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["fullName"], json!("John Doe"));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("content").is_none());
        assert_eq!(value["skills"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_record_deserializes_from_wire_shape() {
        let value = json!({
            "id": "4b0d6f6e-8f5e-4a57-9f0e-7d2a8d3c6f11",
            "fileName": "cv.pdf",
            "fullName": "Ada",
            "summary": "",
            "experience": [],
            "education": [],
            "skills": ["Rust"],
            "createdAt": "2026-01-05T10:00:00Z",
            "updatedAt": "2026-01-06T10:00:00Z"
        });
        let record: ResumeRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.content.file_name.as_deref(), Some("cv.pdf"));
        assert_eq!(record.content.skills, vec!["Rust".to_string()]);
        assert!(record.updated_at >= record.created_at);
    }

    #[test]
    fn test_apply_normalizes_skills_and_ids() {
        let mut draft = ResumeDraft::default();
        let shared = Uuid::new_v4();
        let first = entry(shared, "A");
        let second = entry(shared, "B");
        draft.apply(ResumePatch {
            experience: Some(vec![first, second]),
            skills: Some(vec![" Rust ".into(), "".into(), "Rust".into(), "Go".into()]),
            ..Default::default()
        });
        assert_eq!(draft.skills, vec!["Rust".to_string(), "Go".to_string()]);
        assert_eq!(draft.experience.len(), 2);
        assert_eq!(draft.experience[0].id, shared);
        assert_ne!(draft.experience[1].id, shared);
        assert_eq!(draft.experience[1].title, "B");
    }

    #[test]
    fn test_display_name_falls_back() {
        let record = ResumeRecord::new(ResumeDraft::default(), Utc::now());
        assert_eq!(record.display_name(), "Untitled Resume");
    }

    fn entry(id: Uuid, title: &str) -> ExperienceEntry {
        ExperienceEntry {
            id,
            title: title.to_string(),
            company: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }
}
