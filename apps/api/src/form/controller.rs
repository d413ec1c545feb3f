//! Form Controller — the single owner of the resume draft.
//!
//! Every mutation builds a fresh `ResumeDraft` and swaps the held `Arc`, so a
//! snapshot handed out earlier never changes underneath its reader.
//! Updates and removals addressed to an unknown entry id are silent no-ops.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::models::resume::{
    EducationEntry, EducationField, ExperienceEntry, ExperienceField, ResumeDraft, ScalarField,
};

#[derive(Debug, Default)]
pub struct FormController {
    draft: Arc<ResumeDraft>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable view of the draft as of this instant.
    pub fn snapshot(&self) -> Arc<ResumeDraft> {
        Arc::clone(&self.draft)
    }

    pub fn update_field(&mut self, field: ScalarField, value: String) {
        debug!("update_field: {:?}", field);
        self.replace(|draft| {
            let slot = match field {
                ScalarField::FullName => &mut draft.full_name,
                ScalarField::Email => &mut draft.email,
                ScalarField::Phone => &mut draft.phone,
                ScalarField::LinkedinUrl => &mut draft.linkedin_url,
                ScalarField::Summary => &mut draft.summary,
                ScalarField::SkillsText => &mut draft.skills_text,
            };
            *slot = value;
        });
    }

    // ────────────────────────────────────────────────────────────────────────
    // Experience
    // ────────────────────────────────────────────────────────────────────────

    /// Appends an empty entry and returns its freshly generated id.
    pub fn add_experience(&mut self) -> Uuid {
        let entry = ExperienceEntry::new_empty();
        let id = entry.id;
        debug!("add_experience: {id}");
        self.replace(|draft| draft.experience.push(entry));
        id
    }

    pub fn update_experience_field(&mut self, id: Uuid, field: ExperienceField, value: String) {
        if !self.draft.experience.iter().any(|e| e.id == id) {
            debug!("update_experience_field: no entry {id}, ignoring");
            return;
        }
        debug!("update_experience_field: {id} {:?}", field);
        self.replace(|draft| {
            if let Some(entry) = draft.experience.iter_mut().find(|e| e.id == id) {
                entry.set(field, value);
            }
        });
    }

    pub fn remove_experience(&mut self, id: Uuid) {
        if !self.draft.experience.iter().any(|e| e.id == id) {
            debug!("remove_experience: no entry {id}, ignoring");
            return;
        }
        debug!("remove_experience: {id}");
        self.replace(|draft| draft.experience.retain(|e| e.id != id));
    }

    // ────────────────────────────────────────────────────────────────────────
    // Education
    // ────────────────────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> Uuid {
        let entry = EducationEntry::new_empty();
        let id = entry.id;
        debug!("add_education: {id}");
        self.replace(|draft| draft.education.push(entry));
        id
    }

    pub fn update_education_field(&mut self, id: Uuid, field: EducationField, value: String) {
        if !self.draft.education.iter().any(|e| e.id == id) {
            debug!("update_education_field: no entry {id}, ignoring");
            return;
        }
        debug!("update_education_field: {id} {:?}", field);
        self.replace(|draft| {
            if let Some(entry) = draft.education.iter_mut().find(|e| e.id == id) {
                entry.set(field, value);
            }
        });
    }

    pub fn remove_education(&mut self, id: Uuid) {
        if !self.draft.education.iter().any(|e| e.id == id) {
            debug!("remove_education: no entry {id}, ignoring");
            return;
        }
        debug!("remove_education: {id}");
        self.replace(|draft| draft.education.retain(|e| e.id != id));
    }

    /// Applies `edit` to a copy of the current draft and installs the copy.
    fn replace(&mut self, edit: impl FnOnce(&mut ResumeDraft)) {
        let mut next = ResumeDraft::clone(&self.draft);
        edit(&mut next);
        self.draft = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience_ids(form: &FormController) -> Vec<Uuid> {
        form.snapshot().experience.iter().map(|e| e.id).collect()
    }

    fn education_ids(form: &FormController) -> Vec<Uuid> {
        form.snapshot().education.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_update_field_sets_only_that_field() {
        let mut form = FormController::new();
        form.update_field(ScalarField::FullName, "Ada Lovelace".to_string());
        form.update_field(ScalarField::SkillsText, "Rust, Go".to_string());

        let draft = form.snapshot();
        assert_eq!(draft.full_name, "Ada Lovelace");
        assert_eq!(draft.skills_text, "Rust, Go");
        assert!(draft.email.is_empty());
        assert!(draft.summary.is_empty());
    }

    #[test]
    fn test_update_field_accepts_empty_value() {
        let mut form = FormController::new();
        form.update_field(ScalarField::Email, "a@b.c".to_string());
        form.update_field(ScalarField::Email, String::new());
        assert_eq!(form.snapshot().email, "");
    }

    #[test]
    fn test_add_experience_appends_empty_entry() {
        let mut form = FormController::new();
        let first = form.add_experience();
        let second = form.add_experience();

        assert_ne!(first, second);
        assert_eq!(experience_ids(&form), vec![first, second]);
        let draft = form.snapshot();
        assert!(draft.experience[1].job_title.is_empty());
        assert!(draft.experience[1].end_date.is_empty());
    }

    #[test]
    fn test_update_experience_field_targets_entry_by_id() {
        let mut form = FormController::new();
        let a = form.add_experience();
        let b = form.add_experience();
        form.update_experience_field(b, ExperienceField::Company, "Acme".to_string());

        let draft = form.snapshot();
        assert!(draft.experience[0].company.is_empty());
        assert_eq!(draft.experience[1].company, "Acme");
        assert_eq!(draft.experience[0].id, a);
    }

    #[test]
    fn test_update_unknown_experience_is_noop() {
        let mut form = FormController::new();
        form.add_experience();
        let before = form.snapshot();

        form.update_experience_field(Uuid::new_v4(), ExperienceField::JobTitle, "X".to_string());

        assert_eq!(*form.snapshot(), *before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut form = FormController::new();
        form.add_experience();
        form.add_education();
        let before = form.snapshot();

        form.remove_experience(Uuid::new_v4());
        form.remove_education(Uuid::new_v4());

        assert_eq!(*form.snapshot(), *before);
        assert_eq!(form.snapshot().experience.len(), 1);
        assert_eq!(form.snapshot().education.len(), 1);
    }

    #[test]
    fn test_mixed_operations_preserve_relative_order() {
        let mut form = FormController::new();
        let ids: Vec<Uuid> = (0..5).map(|_| form.add_experience()).collect();

        form.remove_experience(ids[1]);
        form.update_experience_field(ids[3], ExperienceField::Description, "Led".to_string());
        let late = form.add_experience();
        form.remove_experience(ids[4]);
        form.remove_experience(ids[1]);

        assert_eq!(experience_ids(&form), vec![ids[0], ids[2], ids[3], late]);
        assert_eq!(form.snapshot().experience[2].description, "Led");
    }

    #[test]
    fn test_education_operations_mirror_experience() {
        let mut form = FormController::new();
        let a = form.add_education();
        let b = form.add_education();
        let c = form.add_education();

        form.update_education_field(c, EducationField::Degree, "BSc".to_string());
        form.remove_education(b);
        form.update_education_field(b, EducationField::Degree, "ignored".to_string());

        assert_eq!(education_ids(&form), vec![a, c]);
        assert_eq!(form.snapshot().education[1].degree, "BSc");
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_mutations() {
        let mut form = FormController::new();
        form.update_field(ScalarField::Summary, "before".to_string());
        let id = form.add_education();
        let snapshot = form.snapshot();

        form.update_field(ScalarField::Summary, "after".to_string());
        form.update_education_field(id, EducationField::Institution, "Oxford".to_string());
        form.remove_education(id);

        assert_eq!(snapshot.summary, "before");
        assert_eq!(snapshot.education.len(), 1);
        assert!(snapshot.education[0].institution.is_empty());
    }
}
