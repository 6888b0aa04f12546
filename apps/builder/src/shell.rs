//! Page shell: which view is showing and what it renders from the store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::ResumeRecord;

/// Number of skills shown on a resume card before the "+N more" badge.
pub const CARD_SKILL_PREVIEW: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Route {
    #[default]
    Home,
    MyResumes,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::MyResumes => "/my-resumes",
        }
    }
}

/// What the home route shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub show_upload: bool,
    pub show_editor: bool,
    pub show_actions: bool,
    /// Text after "Editing:" when the editor is showing.
    pub editing_label: Option<String>,
}

impl HomeView {
    pub fn new(active: Option<&ResumeRecord>, uploaded: Option<&str>) -> Self {
        let show_editor = active.is_some() || uploaded.is_some();
        let editing_label = match (active, uploaded) {
            (Some(record), _) => Some(record.display_name().to_string()),
            (None, Some(file_name)) => Some(file_name.to_string()),
            (None, None) => None,
        };
        Self {
            show_upload: active.is_none() && uploaded.is_none(),
            show_editor,
            show_actions: show_editor,
            editing_label,
        }
    }
}

/// One entry of the "My Resumes" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeCard {
    pub id: Uuid,
    pub title: String,
    pub updated: String,
    pub summary: String,
    pub skills: Vec<String>,
    /// Skills not shown on the card.
    pub more_skills: usize,
}

impl ResumeCard {
    pub fn from_record(record: &ResumeRecord) -> Self {
        let skills = &record.content.skills;
        let summary = if record.content.summary.trim().is_empty() {
            "No summary provided".to_string()
        } else {
            record.content.summary.clone()
        };
        Self {
            id: record.id,
            title: record.display_name().to_string(),
            updated: format!("Updated {}", format_date(record.updated_at)),
            summary,
            skills: skills.iter().take(CARD_SKILL_PREVIEW).cloned().collect(),
            more_skills: skills.len().saturating_sub(CARD_SKILL_PREVIEW),
        }
    }
}

/// `Jan 5, 2026`
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
