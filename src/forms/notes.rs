use serde::Deserialize;
use validator::Validate;

use crate::domain::lead_note::NewLeadNote;
use crate::domain::types::{LeadId, NoteAuthor, NoteContent};
use crate::forms::{FormError, not_blank};

#[derive(Debug, Default, Deserialize, Validate)]
/// Body of `POST /api/leads/{id}/notes`.
pub struct NoteForm {
    #[validate(required, custom(function = "not_blank"))]
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Validated note body, not yet bound to a lead.
#[derive(Debug)]
pub struct NotePayload {
    pub content: NoteContent,
    pub author: NoteAuthor,
}

impl NotePayload {
    pub fn for_lead(self, lead_id: LeadId) -> NewLeadNote {
        NewLeadNote::new(lead_id, self.content, self.author)
    }
}

impl TryFrom<NoteForm> for NotePayload {
    type Error = FormError;

    fn try_from(form: NoteForm) -> Result<Self, Self::Error> {
        form.validate().map_err(|source| FormError::Validation {
            message: "Note content is required",
            source,
        })?;

        Ok(Self {
            content: NoteContent::new(form.content.unwrap_or_default())?,
            author: NoteAuthor::or_default(form.author),
        })
    }
}
