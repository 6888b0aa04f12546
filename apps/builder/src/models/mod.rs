pub mod resume;
pub mod section;

pub use resume::{ResumeDocument, ResumeDraft, ResumePatch, ResumeRecord};
pub use section::{
    EducationEntry, EducationPatch, EnhanceTarget, ExperienceEntry, ExperiencePatch, Section,
    SectionItem,
};
