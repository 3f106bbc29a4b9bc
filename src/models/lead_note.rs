//! Diesel models for storing lead notes.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead_note::{LeadNote as DomainLeadNote, NewLeadNote as DomainNewLeadNote};
use crate::domain::types::TypeConstraintError;
use crate::models::lead::Lead;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Lead, foreign_key = lead_id))]
#[diesel(table_name = crate::schema::lead_notes)]
pub struct LeadNote {
    pub id: i32,
    pub lead_id: i32,
    pub content: String,
    pub author: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::lead_notes)]
pub struct NewLeadNote<'a> {
    pub lead_id: i32,
    pub content: &'a str,
    pub author: &'a str,
}

impl TryFrom<LeadNote> for DomainLeadNote {
    type Error = TypeConstraintError;

    fn try_from(note: LeadNote) -> Result<Self, Self::Error> {
        DomainLeadNote::try_new(
            note.id,
            note.lead_id,
            note.content,
            note.author,
            note.created_at,
        )
    }
}

impl<'a> From<&'a DomainNewLeadNote> for NewLeadNote<'a> {
    fn from(note: &'a DomainNewLeadNote) -> Self {
        Self {
            lead_id: note.lead_id.get(),
            content: note.content.as_str(),
            author: note.author.as_str(),
        }
    }
}
