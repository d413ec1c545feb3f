use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The resume being edited. Created empty at startup and never persisted.
///
/// No field carries a validation invariant: any string, including the empty
/// string, is legal at every stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub summary: String,
    /// Comma-separated, exactly as typed.
    pub skills_text: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ResumeDraft {
    /// Splits `skills_text` on commas for display. Blank items are dropped.
    pub fn skills(&self) -> Vec<&str> {
        self.skills_text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Generated once at creation; locates the entry, never displayed.
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn new_empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            job_title: String::new(),
            company: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    pub fn set(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::JobTitle => &mut self.job_title,
            ExperienceField::Company => &mut self.company,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub graduation_date: String,
}

impl EducationEntry {
    pub fn new_empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            degree: String::new(),
            institution: String::new(),
            graduation_date: String::new(),
        }
    }

    pub fn set(&mut self, field: EducationField, value: String) {
        let slot = match field {
            EducationField::Degree => &mut self.degree,
            EducationField::Institution => &mut self.institution,
            EducationField::GraduationDate => &mut self.graduation_date,
        };
        *slot = value;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field names
// ────────────────────────────────────────────────────────────────────────────

/// Scalar (non-repeating) fields of a `ResumeDraft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    FullName,
    Email,
    Phone,
    LinkedinUrl,
    Summary,
    SkillsText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    JobTitle,
    Company,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    Institution,
    GraduationDate,
}
