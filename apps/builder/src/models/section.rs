use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The independently editable parts of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
}

impl Section {
    /// Name sent to the enhancement service and shown in notifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "personal_info",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

/// A text field that can be rewritten by the enhancement service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnhanceTarget {
    Summary,
    /// Description of the experience entry with this id.
    ExperienceDescription(Uuid),
}

impl EnhanceTarget {
    pub fn section(&self) -> Section {
        match self {
            EnhanceTarget::Summary => Section::Summary,
            EnhanceTarget::ExperienceDescription(_) => Section::Experience,
        }
    }
}

/// An entry of an ordered resume sub-list with its own identifier.
pub trait SectionItem: Clone {
    type Patch;

    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);

    /// An entry with every text field empty.
    fn blank(id: Uuid) -> Self;

    fn apply(&mut self, patch: Self::Patch);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update for an [`ExperienceEntry`]; `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl SectionItem for ExperienceEntry {
    type Patch = ExperiencePatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn blank(id: Uuid) -> Self {
        Self {
            id,
            title: String::new(),
            company: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }

    fn apply(&mut self, patch: ExperiencePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub year: String,
}

/// Partial update for an [`EducationEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub year: Option<String>,
}

impl SectionItem for EducationEntry {
    type Patch = EducationPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn blank(id: Uuid) -> Self {
        Self {
            id,
            degree: String::new(),
            school: String::new(),
            year: String::new(),
        }
    }

    fn apply(&mut self, patch: EducationPatch) {
        if let Some(degree) = patch.degree {
            self.degree = degree;
        }
        if let Some(school) = patch.school {
            self.school = school;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
    }
}
