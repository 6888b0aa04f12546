use tracing::{debug, warn};
use uuid::Uuid;

use super::EditorSession;
use crate::client::EnhancementService;
use crate::errors::ServiceError;
use crate::models::{EnhanceTarget, ExperiencePatch, ResumeDraft, ResumePatch};

pub const ENHANCE_FAILED: &str = "Something went wrong while contacting AI service.";

/// What the editor was showing when a request started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Resume(Uuid),
    /// The working draft at the given epoch.
    Draft(u64),
}

/// An enhancement request in flight. While it exists its target is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceTicket {
    target: EnhanceTarget,
    owner: Owner,
    content: String,
}

impl EnhanceTicket {
    pub fn target(&self) -> EnhanceTarget {
        self.target
    }

    pub fn section(&self) -> &'static str {
        self.target.section().as_str()
    }

    /// Text sent for rewriting.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl EditorSession {
    /// Whether `target` has a request in flight (its control is disabled).
    pub fn is_enhancing(&self, target: EnhanceTarget) -> bool {
        self.pending.contains(&target)
    }

    /// Marks `target` as pending and captures the text to send.
    ///
    /// Returns `None` when `target` already has a request in flight or names an
    /// experience entry that does not exist.
    pub fn begin_enhance(&mut self, target: EnhanceTarget) -> Option<EnhanceTicket> {
        if self.pending.contains(&target) {
            debug!("Enhancement already pending for {target:?}");
            return None;
        }

        let content = current_text(self.content(), target)?;
        self.pending.insert(target);
        let owner = match self.store.active() {
            Some(record) => Owner::Resume(record.id),
            None => Owner::Draft(self.draft_epoch),
        };
        Some(EnhanceTicket {
            target,
            owner,
            content,
        })
    }

    /// Applies the outcome of a request started with [`Self::begin_enhance`].
    ///
    /// Success replaces the target text and notifies once; failure leaves the
    /// text alone and notifies once. Returns whether the text was replaced.
    pub fn finish_enhance(
        &mut self,
        ticket: EnhanceTicket,
        result: Result<String, ServiceError>,
    ) -> bool {
        self.pending.remove(&ticket.target);

        match result {
            Ok(enhanced) => {
                let applied = self.apply_enhancement(&ticket, enhanced);
                if applied {
                    self.notifier.success(format!(
                        "Your {} has been enhanced with AI suggestions.",
                        ticket.section()
                    ));
                }
                applied
            }
            Err(e) => {
                warn!("Enhancement of {} failed: {e}", ticket.section());
                self.notifier.error(ENHANCE_FAILED);
                false
            }
        }
    }

    /// Runs a whole enhancement round trip against `service`.
    pub async fn enhance(
        &mut self,
        service: &dyn EnhancementService,
        target: EnhanceTarget,
    ) -> bool {
        let Some(ticket) = self.begin_enhance(target) else {
            return false;
        };
        let result = service.enhance(ticket.section(), ticket.content()).await;
        self.finish_enhance(ticket, result)
    }

    fn apply_enhancement(&mut self, ticket: &EnhanceTicket, enhanced: String) -> bool {
        let Some(owner) = self.resolve_owner(ticket.owner) else {
            warn!("Draft edited at request time was discarded; dropping enhancement");
            return false;
        };

        let patch = match ticket.target {
            EnhanceTarget::Summary => ResumePatch::summary(enhanced),
            EnhanceTarget::ExperienceDescription(entry_id) => {
                let Some(content) = self.content_of(owner) else {
                    warn!("Resume edited at request time is gone; dropping enhancement");
                    return false;
                };
                let mut items = content.experience.clone();
                let patch = ExperiencePatch {
                    description: Some(enhanced),
                    ..Default::default()
                };
                if !self.experience.update_field(&mut items, entry_id, patch) {
                    warn!("Experience entry {entry_id} is gone; dropping enhancement");
                    return false;
                }
                ResumePatch::experience(items)
            }
        };

        match owner {
            Owner::Resume(id) => {
                if self.store.update(id, patch).is_none() {
                    warn!("Resume {id} is gone; dropping enhancement");
                    return false;
                }
            }
            Owner::Draft(_) => self.draft.apply(patch),
        }
        true
    }

    /// Follows a draft that has since been saved to the resume it became.
    /// `None` when the draft was thrown away by [`Self::new_resume`].
    fn resolve_owner(&self, owner: Owner) -> Option<Owner> {
        match owner {
            Owner::Draft(epoch) if epoch != self.draft_epoch => {
                self.promoted.get(&epoch).copied().map(Owner::Resume)
            }
            owner => Some(owner),
        }
    }

    fn content_of(&self, owner: Owner) -> Option<&ResumeDraft> {
        match owner {
            Owner::Resume(id) => self
                .store
                .get(id)
                .or_else(|| self.store.active().filter(|record| record.id == id))
                .map(|record| &record.content),
            Owner::Draft(_) => Some(&self.draft),
        }
    }
}

fn current_text(content: &ResumeDraft, target: EnhanceTarget) -> Option<String> {
    match target {
        EnhanceTarget::Summary => Some(content.summary.clone()),
        EnhanceTarget::ExperienceDescription(id) => {
            let entry = content.experience.iter().find(|entry| entry.id == id);
            if entry.is_none() {
                debug!("No experience entry {id} to enhance");
            }
            entry.map(|entry| entry.description.clone())
        }
    }
}
