use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{ResumeDraft, ResumePatch, ResumeRecord};

/// Session-lifetime collection of saved resumes plus the one being edited.
///
/// The active resume is held by value: it is either a copy of a saved record
/// (kept in sync by [`ResumeStore::update`]) or a transient draft that was
/// never added to the collection.
#[derive(Debug, Default)]
pub struct ResumeStore {
    saved: Vec<ResumeRecord>,
    active: Option<ResumeRecord>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `draft` as a new record and makes it active.
    pub fn create(&mut self, draft: ResumeDraft) -> &ResumeRecord {
        let record = ResumeRecord::new(draft, Utc::now());
        info!("Created resume {}", record.id);
        self.active = Some(record.clone());
        self.saved.push(record);
        &self.saved[self.saved.len() - 1]
    }

    /// Merges `patch` into the record with `id` and refreshes its `updated_at`.
    ///
    /// The active copy follows the same merge. Returns `None` without touching
    /// anything when neither a saved record nor the active draft has `id`.
    pub fn update(&mut self, id: Uuid, patch: ResumePatch) -> Option<&ResumeRecord> {
        let now = Utc::now();
        let active_matches = self.active.as_ref().is_some_and(|r| r.id == id);

        if let Some(index) = self.saved.iter().position(|r| r.id == id) {
            self.saved[index].apply(patch, now);
            if active_matches {
                self.active = Some(self.saved[index].clone());
            }
            return Some(&self.saved[index]);
        }

        match self.active.as_mut() {
            Some(active) if active_matches => {
                active.apply(patch, now);
                Some(&*active)
            }
            _ => {
                debug!("Ignoring update for unknown resume {id}");
                None
            }
        }
    }

    /// Deletes the record with `id`, clearing the active reference if it
    /// pointed at it. Returns the removed record.
    pub fn remove(&mut self, id: Uuid) -> Option<ResumeRecord> {
        let index = self.saved.iter().position(|r| r.id == id);
        let Some(index) = index else {
            debug!("Ignoring remove for unknown resume {id}");
            return None;
        };

        let removed = self.saved.remove(index);
        if self.active.as_ref().is_some_and(|r| r.id == id) {
            self.active = None;
        }
        info!("Removed resume {id}");
        Some(removed)
    }

    /// Replaces the active reference. The saved collection is untouched.
    pub fn set_active(&mut self, record: Option<ResumeRecord>) {
        self.active = record;
    }

    pub fn active(&self) -> Option<&ResumeRecord> {
        self.active.as_ref()
    }

    /// Whether the active resume is one of the saved records.
    pub fn active_is_saved(&self) -> bool {
        self.active.as_ref().is_some_and(|r| self.contains(r.id))
    }

    pub fn get(&self, id: Uuid) -> Option<&ResumeRecord> {
        self.saved.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Saved records in creation order.
    pub fn list(&self) -> &[ResumeRecord] {
        &self.saved
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::{ExperienceEntry, SectionItem};

    fn draft_with_skills(skills: &[&str]) -> ResumeDraft {
        ResumeDraft {
            full_name: "Ada Lovelace".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_assigns_unique_ids_and_equal_timestamps() {
        let mut store = ResumeStore::new();
        let mut ids = HashSet::new();
        for _ in 0..50 {
            let record = store.create(ResumeDraft::sample());
            assert_eq!(record.created_at, record.updated_at);
            ids.insert(record.id);
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn test_create_sets_active() {
        let mut store = ResumeStore::new();
        let id = store.create(ResumeDraft::sample()).id;
        assert_eq!(store.active().map(|r| r.id), Some(id));
        assert!(store.active_is_saved());
    }

    #[test]
    fn test_create_normalizes_skills() {
        let mut store = ResumeStore::new();
        let record = store.create(draft_with_skills(&["A", " A", "", "B"]));
        assert_eq!(record.content.skills, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_update_preserves_untouched_fields() {
        let mut store = ResumeStore::new();
        let original = store.create(ResumeDraft::sample()).clone();

        let updated = store
            .update(original.id, ResumePatch::summary("Rewritten"))
            .unwrap()
            .clone();

        assert_eq!(updated.content.summary, "Rewritten");
        assert_eq!(updated.content.full_name, original.content.full_name);
        assert_eq!(updated.content.experience, original.content.experience);
        assert_eq!(updated.content.education, original.content.education);
        assert_eq!(updated.content.skills, original.content.skills);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_update_mirrors_into_active() {
        let mut store = ResumeStore::new();
        let id = store.create(ResumeDraft::sample()).id;
        store.update(id, ResumePatch::full_name("Grace Hopper"));

        let active = store.active().unwrap();
        assert_eq!(active.content.full_name, "Grace Hopper");
        assert_eq!(active, store.get(id).unwrap());
    }

    #[test]
    fn test_update_non_active_leaves_active_alone() {
        let mut store = ResumeStore::new();
        let first = store.create(ResumeDraft::sample()).id;
        let second = store.create(ResumeDraft::sample()).id;

        store.update(first, ResumePatch::full_name("Changed"));

        let active = store.active().unwrap();
        assert_eq!(active.id, second);
        assert_eq!(active.content.full_name, "John Doe");
        assert_eq!(store.get(first).unwrap().content.full_name, "Changed");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = ResumeStore::new();
        store.create(ResumeDraft::sample());
        let before = store.list().to_vec();

        assert!(store
            .update(Uuid::new_v4(), ResumePatch::summary("x"))
            .is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_update_transient_active_draft() {
        let mut store = ResumeStore::new();
        let transient = ResumeRecord::new(ResumeDraft::default(), Utc::now());
        let id = transient.id;
        store.set_active(Some(transient));

        let merged = store.update(id, ResumePatch::summary("draft")).unwrap();
        assert_eq!(merged.content.summary, "draft");
        assert!(store.is_empty());
        assert!(!store.active_is_saved());
    }

    #[test]
    fn test_update_repeated_entry_ids_are_reassigned() {
        let mut store = ResumeStore::new();
        let id = store.create(ResumeDraft::default()).id;
        let shared = Uuid::new_v4();
        let entries = vec![ExperienceEntry::blank(shared); 2];

        let record = store.update(id, ResumePatch::experience(entries)).unwrap();
        assert_ne!(record.content.experience[0].id, record.content.experience[1].id);
    }

    #[test]
    fn test_remove_active_clears_reference() {
        let mut store = ResumeStore::new();
        let id = store.create(ResumeDraft::sample()).id;

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.active().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_other_keeps_active() {
        let mut store = ResumeStore::new();
        let other = store.create(ResumeDraft::sample()).id;
        let active = store.create(ResumeDraft::sample()).id;

        store.remove(other);
        assert_eq!(store.active().map(|r| r.id), Some(active));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = ResumeStore::new();
        let id = store.create(ResumeDraft::sample()).id;
        assert!(store.remove(Uuid::new_v4()).is_none());
        assert!(store.contains(id));
        assert_eq!(store.active().map(|r| r.id), Some(id));
    }

    #[test]
    fn test_set_active_does_not_touch_collection() {
        let mut store = ResumeStore::new();
        let id = store.create(ResumeDraft::sample()).id;
        store.set_active(None);
        assert!(store.active().is_none());
        assert!(store.contains(id));

        let record = store.get(id).cloned();
        store.set_active(record);
        assert_eq!(store.active().map(|r| r.id), Some(id));
        assert_eq!(store.len(), 1);
    }
}
