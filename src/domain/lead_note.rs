use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadId, LeadNoteId, NoteAuthor, NoteContent, TypeConstraintError};

/// Immutable annotation attached to a single lead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeadNote {
    pub id: LeadNoteId,
    pub lead_id: LeadId,
    pub content: NoteContent,
    pub author: NoteAuthor,
    pub created_at: NaiveDateTime,
}

impl LeadNote {
    pub fn try_new(
        id: i32,
        lead_id: i32,
        content: String,
        author: String,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: LeadNoteId::new(id)?,
            lead_id: LeadId::new(lead_id)?,
            content: NoteContent::new(content)?,
            author: NoteAuthor::new(author)?,
            created_at,
        })
    }

    /// Human readable creation time in UTC, e.g. `03/07/2026, 09:05 PM`.
    pub fn display_timestamp(&self) -> String {
        self.created_at.format("%m/%d/%Y, %I:%M %p").to_string()
    }
}

#[derive(Clone, Debug)]
pub struct NewLeadNote {
    pub lead_id: LeadId,
    pub content: NoteContent,
    pub author: NoteAuthor,
}

impl NewLeadNote {
    #[must_use]
    pub fn new(lead_id: LeadId, content: NoteContent, author: NoteAuthor) -> Self {
        Self {
            lead_id,
            content,
            author,
        }
    }
}
