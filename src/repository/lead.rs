//! Repository implementation for leads.

use diesel::prelude::*;

use crate::{
    domain::{
        lead::{Lead, NewLead, UpdateLead},
        types::LeadId,
    },
    models::lead::{Lead as DbLead, NewLead as DbNewLead, UpdateLead as DbUpdateLead},
    repository::{
        DieselRepository, LeadReader, LeadWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(db_lead: DbLead) -> RepositoryResult<Lead> {
    Lead::try_from(db_lead).map_err(RepositoryError::from)
}

impl LeadReader for DieselRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        leads::table
            .order((leads::created_at.desc(), leads::id.desc()))
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect()
    }

    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let db_lead = leads::table
            .find(id.get())
            .first::<DbLead>(&mut conn)
            .optional()?;

        db_lead.map(into_domain).transpose()
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let insertable: DbNewLead = new_lead.into();

        let db_lead = diesel::insert_into(leads::table)
            .values(&insertable)
            .get_result::<DbLead>(&mut conn)?;

        into_domain(db_lead)
    }

    fn update_lead(&self, id: LeadId, updates: &UpdateLead) -> RepositoryResult<usize> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let changes: DbUpdateLead = updates.into();

        let affected = diesel::update(leads::table.find(id.get()))
            .set(&changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_lead(&self, id: LeadId) -> RepositoryResult<usize> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let affected = diesel::delete(leads::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
