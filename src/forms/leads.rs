use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{NewLead, UpdateLead};
use crate::domain::types::{ContactEmail, LeadName, LeadSource, LeadStatus, NoteContent};
use crate::forms::{FormError, not_blank};

const REQUIRED_MESSAGE: &str = "Name and email are required";

#[derive(Debug, Default, Deserialize, Validate)]
/// Body of `POST /api/leads` and `PUT /api/leads/{id}`.
pub struct LeadForm {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,
    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    /// Optional first note, only honoured on create.
    pub notes: Option<String>,
}

/// Validated payload for creating a lead and its optional first note.
#[derive(Debug)]
pub struct CreateLeadPayload {
    pub lead: NewLead,
    pub note: Option<NoteContent>,
}

struct Common {
    name: LeadName,
    email: ContactEmail,
    source: LeadSource,
    status: LeadStatus,
}

impl LeadForm {
    fn common(&self) -> Result<Common, FormError> {
        self.validate().map_err(|source| FormError::Validation {
            message: REQUIRED_MESSAGE,
            source,
        })?;

        Ok(Common {
            name: LeadName::new(self.name.clone().unwrap_or_default())?,
            email: ContactEmail::new(self.email.clone().unwrap_or_default())?,
            source: LeadSource::or_default(self.source.clone()),
            status: LeadStatus::or_default(self.status.as_deref())?,
        })
    }

    /// Builds the insert payload; `today` becomes the last-contacted date.
    pub fn into_create_payload(self, today: NaiveDate) -> Result<CreateLeadPayload, FormError> {
        let Common {
            name,
            email,
            source,
            status,
        } = self.common()?;

        let note = self.notes.and_then(|text| NoteContent::new(text).ok());
        let lead = NewLead::new(name, email, self.phone, self.company, source, status, today);

        Ok(CreateLeadPayload { lead, note })
    }

    /// Builds the full-overwrite update. Any `notes` value is ignored.
    pub fn into_update(self) -> Result<UpdateLead, FormError> {
        let Common {
            name,
            email,
            source,
            status,
        } = self.common()?;

        Ok(UpdateLead::new(
            name,
            email,
            self.phone,
            self.company,
            source,
            status,
        ))
    }
}
