//! Editors for the list-shaped parts of a resume.
//!
//! Editors hold no resume data themselves. They operate on the slice handed
//! to them by the session and keep only the "which entry is open" flag.

pub mod skills;

use std::collections::HashSet;
use std::marker::PhantomData;

use tracing::debug;
use uuid::Uuid;

use crate::models::SectionItem;

pub use skills::{SkillRejection, SkillsEditor};

/// Add / edit / remove over an ordered list of [`SectionItem`]s.
#[derive(Debug)]
pub struct SectionEditor<T> {
    editing: Option<Uuid>,
    _item: PhantomData<T>,
}

impl<T> Default for SectionEditor<T> {
    fn default() -> Self {
        Self {
            editing: None,
            _item: PhantomData,
        }
    }
}

impl<T: SectionItem> SectionEditor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank entry and opens it for editing. Returns its id.
    pub fn add(&mut self, items: &mut Vec<T>) -> Uuid {
        let id = Uuid::new_v4();
        items.push(T::blank(id));
        self.editing = Some(id);
        id
    }

    /// Merges `patch` into the entry with `id`. Returns `false` if no entry matched.
    pub fn update_field(&self, items: &mut [T], id: Uuid, patch: T::Patch) -> bool {
        match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Deletes the entry with `id`, keeping the order of the rest.
    pub fn remove(&mut self, items: &mut Vec<T>, id: Uuid) -> bool {
        let before = items.len();
        items.retain(|item| item.id() != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        items.len() != before
    }

    pub fn start_editing(&mut self, id: Uuid) {
        self.editing = Some(id);
    }

    pub fn finish_editing(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }
}

/// Gives every entry whose id repeats an earlier one a fresh id.
pub fn dedupe_ids<T: SectionItem>(items: &mut [T]) {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items.iter_mut() {
        if !seen.insert(item.id()) {
            let fresh = Uuid::new_v4();
            debug!("Reassigning repeated entry id {} to {}", item.id(), fresh);
            item.set_id(fresh);
            seen.insert(fresh);
        }
    }
}
