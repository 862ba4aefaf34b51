//! Create/edit object form model.
//!
//! DESIGN
//! ======
//! The form holds only plain data. Pending image files stay in the browser
//! side registry (`util::image_queue`), keyed by their preview URL, so the
//! form can live inside a signal and be tested natively.
//!
//! ERROR HANDLING
//! ==============
//! Every check returns a [`FormError`] whose `title()`/`Display` pair is shown
//! as a toast. The image cap is enforced both when files are added and again
//! before submit, ahead of any upload.

#[cfg(test)]
#[path = "object_form_test.rs"]
mod object_form_test;

use crate::net::types::{Object, ObjectCategory, ObjectDraft, ObjectStatus};

pub const MAX_IMAGES: usize = 5;
pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_CONDITION_CHARS: usize = 50;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Preencha o campo \"{0}\".")]
    Required(&'static str),
    #[error("O campo \"{field}\" aceita no máximo {max} caracteres.")]
    TooLong { field: &'static str, max: usize },
    #[error("Você pode adicionar no máximo {max} imagens por objeto.")]
    ImageLimit { max: usize },
    #[error("Você não tem permissão para editar este objeto.")]
    NotOwner,
}

impl FormError {
    /// Toast title for the error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Required(_) | Self::TooLong { .. } => "Dados inválidos",
            Self::ImageLimit { .. } => "Limite de imagens",
            Self::NotOwner => "Acesso negado",
        }
    }
}

/// A selected file waiting for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingImage {
    pub name: String,
    pub preview_url: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectForm {
    pub title: String,
    pub description: String,
    pub category: Option<ObjectCategory>,
    pub condition: String,
    pub status: ObjectStatus,
    pub existing_images: Vec<String>,
    pub pending_images: Vec<PendingImage>,
}

impl ObjectForm {
    /// Pre-fill the form from a stored object.
    pub fn from_object(object: &Object) -> Self {
        Self {
            title: object.title.clone(),
            description: object.description.clone(),
            category: Some(object.category.clone()),
            condition: object.condition.clone(),
            status: object.status.clone(),
            existing_images: object.images.clone(),
            pending_images: Vec::new(),
        }
    }

    pub fn image_count(&self) -> usize {
        self.existing_images.len() + self.pending_images.len()
    }

    pub fn remaining_image_slots(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.image_count())
    }

    /// Queue a batch of files. A batch that would pass the cap is rejected whole.
    pub fn add_images(&mut self, batch: Vec<PendingImage>) -> Result<(), FormError> {
        validate_image_total(self.existing_images.len(), self.pending_images.len() + batch.len())?;
        self.pending_images.extend(batch);
        Ok(())
    }

    pub fn remove_existing_image(&mut self, index: usize) -> Option<String> {
        (index < self.existing_images.len()).then(|| self.existing_images.remove(index))
    }

    pub fn remove_pending_image(&mut self, index: usize) -> Option<PendingImage> {
        (index < self.pending_images.len()).then(|| self.pending_images.remove(index))
    }

    /// Validate every field and the image cap. Runs before any request.
    pub fn validate(&self) -> Result<ObjectCategory, FormError> {
        let title = required("Título", &self.title)?;
        check_len("Título", title, MAX_TITLE_CHARS)?;
        let description = required("Descrição", &self.description)?;
        check_len("Descrição", description, MAX_DESCRIPTION_CHARS)?;
        let category = self.category.clone().ok_or(FormError::Required("Categoria"))?;
        let condition = required("Condição", &self.condition)?;
        check_len("Condição", condition, MAX_CONDITION_CHARS)?;
        validate_image_total(self.existing_images.len(), self.pending_images.len())?;
        Ok(category)
    }

    /// Build the row payload once uploads have produced their public URLs.
    pub fn to_draft(&self, uploaded: Vec<String>) -> Result<ObjectDraft, FormError> {
        let category = self.validate()?;
        let images = merge_images(&self.existing_images, uploaded);
        validate_image_total(images.len(), 0)?;
        Ok(ObjectDraft {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category,
            condition: self.condition.trim().to_owned(),
            status: self.status.clone(),
            images,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed)
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    if value.chars().count() > max {
        return Err(FormError::TooLong { field, max });
    }
    Ok(())
}

pub fn validate_image_total(existing: usize, pending: usize) -> Result<(), FormError> {
    if existing + pending > MAX_IMAGES {
        return Err(FormError::ImageLimit { max: MAX_IMAGES });
    }
    Ok(())
}

/// Existing URLs first, then newly uploaded ones.
pub fn merge_images(existing: &[String], uploaded: Vec<String>) -> Vec<String> {
    let mut merged = existing.to_vec();
    merged.extend(uploaded);
    merged
}

pub fn ensure_owner(object: &Object, user_id: &str) -> Result<(), FormError> {
    if object.owner_id != user_id {
        return Err(FormError::NotOwner);
    }
    Ok(())
}
