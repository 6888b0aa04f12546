//! The editor session: the explicit context object the page is built on.
//!
//! Every edit goes through here. When a resume is active the edit is merged
//! into the store (auto-save); otherwise it lands in the working draft.

mod enhance;
mod remote;

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::errors::BuilderError;
use crate::models::{
    EducationEntry, EducationPatch, EnhanceTarget, ExperienceEntry, ExperiencePatch,
    ResumeDocument, ResumeDraft, ResumePatch,
};
use crate::notify::{Notification, Notifier};
use crate::sections::{SectionEditor, SkillsEditor};
use crate::shell::{HomeView, ResumeCard, Route};
use crate::store::ResumeStore;
use crate::upload::{pick_upload, UploadedFile};

pub use enhance::{EnhanceTicket, ENHANCE_FAILED};
pub use remote::{DOWNLOAD_STARTED, SAVE_FAILED};

pub const ALREADY_AUTO_SAVED: &str = "Resume is already being auto-saved";
pub const SAVED_LOCALLY: &str = "Resume Saved Successfully";
pub const UPLOAD_REJECTED: &str = "Please upload a PDF or DOCX file.";

/// File name given to a resume saved without an upload.
const NEW_RESUME_FILE_NAME: &str = "New Resume";

#[derive(Debug)]
pub struct EditorSession {
    store: ResumeStore,
    /// What the editor shows while no resume is active.
    draft: ResumeDraft,
    /// Bumped whenever the draft is saved or discarded.
    draft_epoch: u64,
    /// Draft epochs that were saved, and the resume each became.
    promoted: HashMap<u64, Uuid>,
    experience: SectionEditor<ExperienceEntry>,
    education: SectionEditor<EducationEntry>,
    skills: SkillsEditor,
    pending: HashSet<EnhanceTarget>,
    uploaded: Option<UploadedFile>,
    route: Route,
    notifier: Notifier,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(ResumeStore::new())
    }
}

impl EditorSession {
    /// A session over `store`, with the sample resume as working draft.
    pub fn new(store: ResumeStore) -> Self {
        Self {
            store,
            draft: ResumeDraft::sample(),
            draft_epoch: 0,
            promoted: HashMap::new(),
            experience: SectionEditor::new(),
            education: SectionEditor::new(),
            skills: SkillsEditor,
            pending: HashSet::new(),
            uploaded: None,
            route: Route::Home,
            notifier: Notifier::default(),
        }
    }

    pub fn store(&self) -> &ResumeStore {
        &self.store
    }

    /// Content the editor is showing: the active resume, else the draft.
    pub fn content(&self) -> &ResumeDraft {
        self.store
            .active()
            .map(|record| &record.content)
            .unwrap_or(&self.draft)
    }

    pub fn document(&self) -> ResumeDocument<'_> {
        match self.store.active() {
            Some(record) => ResumeDocument::Saved(record),
            None => ResumeDocument::Draft(&self.draft),
        }
    }

    // ── Personal info / summary ────────────────────────────────────────────

    pub fn set_full_name(&mut self, value: &str) {
        self.commit(ResumePatch::full_name(value));
    }

    pub fn set_summary(&mut self, value: &str) {
        self.commit(ResumePatch::summary(value));
    }

    // ── Experience ─────────────────────────────────────────────────────────

    /// Appends a blank experience entry and opens it. Returns its id.
    pub fn add_experience(&mut self) -> Uuid {
        let mut items = self.content().experience.clone();
        let id = self.experience.add(&mut items);
        self.commit(ResumePatch::experience(items));
        id
    }

    pub fn update_experience(&mut self, id: Uuid, patch: ExperiencePatch) -> bool {
        let mut items = self.content().experience.clone();
        if !self.experience.update_field(&mut items, id, patch) {
            debug!("No experience entry {id} to update");
            return false;
        }
        self.commit(ResumePatch::experience(items));
        true
    }

    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        let mut items = self.content().experience.clone();
        if !self.experience.remove(&mut items, id) {
            return false;
        }
        self.commit(ResumePatch::experience(items));
        true
    }

    pub fn open_experience(&mut self, id: Uuid) {
        self.experience.start_editing(id);
    }

    pub fn close_experience(&mut self) {
        self.experience.finish_editing();
    }

    pub fn editing_experience(&self) -> Option<Uuid> {
        self.experience.editing()
    }

    // ── Education ──────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> Uuid {
        let mut items = self.content().education.clone();
        let id = self.education.add(&mut items);
        self.commit(ResumePatch::education(items));
        id
    }

    pub fn update_education(&mut self, id: Uuid, patch: EducationPatch) -> bool {
        let mut items = self.content().education.clone();
        if !self.education.update_field(&mut items, id, patch) {
            debug!("No education entry {id} to update");
            return false;
        }
        self.commit(ResumePatch::education(items));
        true
    }

    pub fn remove_education(&mut self, id: Uuid) -> bool {
        let mut items = self.content().education.clone();
        if !self.education.remove(&mut items, id) {
            return false;
        }
        self.commit(ResumePatch::education(items));
        true
    }

    pub fn open_education(&mut self, id: Uuid) {
        self.education.start_editing(id);
    }

    pub fn close_education(&mut self) {
        self.education.finish_editing();
    }

    pub fn editing_education(&self) -> Option<Uuid> {
        self.education.editing()
    }

    // ── Skills ─────────────────────────────────────────────────────────────

    /// Adds a skill. Empty and repeated skills are ignored without a notice.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let mut skills = self.content().skills.clone();
        match self.skills.add(&mut skills, skill) {
            Ok(_) => {
                self.commit(ResumePatch::skills(skills));
                true
            }
            Err(rejection) => {
                debug!("Skill ignored: {rejection}");
                false
            }
        }
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let mut skills = self.content().skills.clone();
        if !self.skills.remove(&mut skills, skill) {
            return false;
        }
        self.commit(ResumePatch::skills(skills));
        true
    }

    // ── Saving, upload, navigation ─────────────────────────────────────────

    /// Saves the working draft as a new resume. A saved active resume is
    /// already kept up to date, so this only tells the user so.
    pub fn save_local(&mut self) -> Option<Uuid> {
        if self.store.active_is_saved() {
            self.notifier.info(ALREADY_AUTO_SAVED);
            return None;
        }

        let mut draft = self.content().clone();
        if draft.file_name.is_none() {
            let file_name = self
                .uploaded
                .as_ref()
                .map(|file| file.name.clone())
                .unwrap_or_else(|| NEW_RESUME_FILE_NAME.to_string());
            draft.file_name = Some(file_name);
        }

        let from_draft = self.store.active().is_none();
        let id = self.store.create(draft).id;
        if from_draft {
            self.promoted.insert(self.draft_epoch, id);
            self.draft_epoch += 1;
        }
        self.notifier.success(SAVED_LOCALLY);
        Some(id)
    }

    /// Takes the first PDF/DOCX of `files` as the uploaded resume. The file is
    /// not parsed; only its name is kept.
    pub fn upload(&mut self, files: Vec<UploadedFile>) -> bool {
        match pick_upload(files) {
            Some(file) => {
                self.notifier
                    .success(format!("{} has been processed.", file.name));
                self.draft.file_name = Some(file.name.clone());
                self.uploaded = Some(file);
                true
            }
            None => {
                self.notifier.error(UPLOAD_REJECTED);
                false
            }
        }
    }

    pub fn uploaded(&self) -> Option<&UploadedFile> {
        self.uploaded.as_ref()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating to {}", route.path());
        self.route = route;
    }

    pub fn home_view(&self) -> HomeView {
        HomeView::new(
            self.store.active(),
            self.uploaded.as_ref().map(|file| file.name.as_str()),
        )
    }

    pub fn resume_cards(&self) -> Vec<ResumeCard> {
        self.store.list().iter().map(ResumeCard::from_record).collect()
    }

    /// Makes a saved resume active and returns to the editor.
    pub fn open_resume(&mut self, id: Uuid) -> Result<(), BuilderError> {
        let record = self.store.get(id).cloned().ok_or(BuilderError::NotFound(id))?;
        self.store.set_active(Some(record));
        self.experience.finish_editing();
        self.education.finish_editing();
        self.navigate(Route::Home);
        Ok(())
    }

    pub fn delete_resume(&mut self, id: Uuid) -> bool {
        self.store.remove(id).is_some()
    }

    /// Starts over with a blank draft on the home route.
    pub fn new_resume(&mut self) {
        self.store.set_active(None);
        self.draft = ResumeDraft::default();
        self.draft_epoch += 1;
        self.uploaded = None;
        self.experience.finish_editing();
        self.education.finish_editing();
        self.navigate(Route::Home);
    }

    // ── Notifications ──────────────────────────────────────────────────────

    pub fn notifications(&self) -> &[Notification] {
        self.notifier.pending()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain()
    }

    fn commit(&mut self, patch: ResumePatch) {
        match self.store.active().map(|record| record.id) {
            Some(id) => {
                self.store.update(id, patch);
            }
            None => self.draft.apply(patch),
        }
    }
}
