use crate::domain::lead_note::LeadNote;
use crate::domain::types::LeadId;
use crate::forms::notes::{NoteForm, NotePayload};
use crate::repository::{LeadNoteReader, LeadNoteWriter};
use crate::services::leads::lead_id;
use crate::services::{ServiceError, ServiceResult};

/// Lists the notes of a lead, newest first. Unknown leads have no notes.
pub fn list_notes<R>(repo: &R, lead_id: i32) -> ServiceResult<Vec<LeadNote>>
where
    R: LeadNoteReader + ?Sized,
{
    let Ok(lead_id) = LeadId::new(lead_id) else {
        return Ok(Vec::new());
    };

    repo.list_lead_notes(lead_id).map_err(|err| {
        log::error!("Failed to list notes for lead {lead_id}: {err}");
        err.into()
    })
}

/// Appends a note to a lead.
pub fn add_note<R>(repo: &R, raw_lead_id: i32, form: NoteForm) -> ServiceResult<LeadNote>
where
    R: LeadNoteWriter + ?Sized,
{
    let payload = NotePayload::try_from(form)?;
    let new_note = payload.for_lead(lead_id(raw_lead_id)?);

    repo.create_lead_note(&new_note).map_err(|err| {
        log::error!("Failed to add note to lead {raw_lead_id}: {err}");
        ServiceError::from(err)
    })
}
