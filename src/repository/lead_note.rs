use diesel::prelude::*;

use crate::domain::lead_note::{LeadNote, NewLeadNote};
use crate::domain::types::LeadId;
use crate::models::lead_note::{LeadNote as DbLeadNote, NewLeadNote as DbNewLeadNote};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, LeadNoteReader, LeadNoteWriter};

impl LeadNoteReader for DieselRepository {
    fn list_lead_notes(&self, lead_id: LeadId) -> RepositoryResult<Vec<LeadNote>> {
        use crate::schema::lead_notes;

        let mut conn = self.conn()?;

        let db_notes = lead_notes::table
            .filter(lead_notes::lead_id.eq(lead_id.get()))
            .order((lead_notes::created_at.desc(), lead_notes::id.desc()))
            .load::<DbLeadNote>(&mut conn)?;

        db_notes
            .into_iter()
            .map(|note| LeadNote::try_from(note).map_err(RepositoryError::from))
            .collect()
    }
}

impl LeadNoteWriter for DieselRepository {
    fn create_lead_note(&self, new_note: &NewLeadNote) -> RepositoryResult<LeadNote> {
        use crate::schema::lead_notes;

        let mut conn = self.conn()?;

        let insertable: DbNewLeadNote = new_note.into();

        let db_note = diesel::insert_into(lead_notes::table)
            .values(&insertable)
            .get_result::<DbLeadNote>(&mut conn)?;

        LeadNote::try_from(db_note).map_err(RepositoryError::from)
    }
}
