//! Lead workflows: listing, creation with an optional first note, full
//! overwrite updates and hard deletes.

use chrono::NaiveDate;

use crate::domain::lead::Lead;
use crate::domain::lead_note::NewLeadNote;
use crate::domain::types::{LeadId, NoteAuthor};
use crate::forms::leads::LeadForm;
use crate::repository::{LeadNoteWriter, LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

/// Interprets a raw path identifier; ids that can never exist map to not-found.
pub(crate) fn lead_id(raw: i32) -> ServiceResult<LeadId> {
    LeadId::new(raw).map_err(|_| ServiceError::NotFound)
}

/// Returns every lead, newest first.
pub fn list_leads<R>(repo: &R) -> ServiceResult<Vec<Lead>>
where
    R: LeadReader + ?Sized,
{
    repo.list_leads().map_err(|err| {
        log::error!("Failed to list leads: {err}");
        err.into()
    })
}

/// Fetches a single lead.
pub fn get_lead<R>(repo: &R, id: i32) -> ServiceResult<Lead>
where
    R: LeadReader + ?Sized,
{
    let id = lead_id(id)?;
    repo.get_lead_by_id(id)
        .map_err(|err| {
            log::error!("Failed to get lead {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}

/// Inserts a lead and, when supplied, its first note authored by "User".
///
/// The note is written after the lead in a separate statement. If that second
/// write fails the lead stays persisted and the error is still returned.
pub fn create_lead<R>(repo: &R, form: LeadForm, today: NaiveDate) -> ServiceResult<Lead>
where
    R: LeadWriter + LeadNoteWriter + ?Sized,
{
    let payload = form.into_create_payload(today)?;

    let lead = repo.create_lead(&payload.lead).map_err(|err| {
        log::error!("Failed to create lead: {err}");
        ServiceError::from(err)
    })?;

    if let Some(content) = payload.note {
        let note = NewLeadNote::new(lead.id, content, NoteAuthor::or_default(None));
        repo.create_lead_note(&note).map_err(|err| {
            log::error!("Lead {} created but its first note failed: {err}", lead.id);
            ServiceError::from(err)
        })?;
    }

    log::info!("Created lead {}", lead.id);
    Ok(lead)
}

/// Overwrites the editable fields, then re-reads the stored row.
///
/// The write and the read are separate statements; a concurrent change in
/// between is visible in the returned lead.
pub fn update_lead<R>(repo: &R, id: i32, form: LeadForm) -> ServiceResult<Lead>
where
    R: LeadReader + LeadWriter + ?Sized,
{
    let updates = form.into_update()?;
    let id = lead_id(id)?;

    let affected = repo.update_lead(id, &updates).map_err(|err| {
        log::error!("Failed to update lead {id}: {err}");
        ServiceError::from(err)
    })?;
    if affected == 0 {
        return Err(ServiceError::NotFound);
    }

    get_lead(repo, id.get())
}

/// Hard-deletes a lead; its notes are removed by the store's cascade.
pub fn delete_lead<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    let id = lead_id(id)?;

    let affected = repo.delete_lead(id).map_err(|err| {
        log::error!("Failed to delete lead {id}: {err}");
        ServiceError::from(err)
    })?;

    if affected == 0 {
        return Err(ServiceError::NotFound);
    }
    Ok(())
}
