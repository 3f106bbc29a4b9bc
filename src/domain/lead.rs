use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ContactEmail, LeadId, LeadName, LeadSource, LeadStatus, TypeConstraintError, optional_text,
};

/// Prospective contact tracked through the sales pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: LeadId,
    pub name: LeadName,
    pub email: ContactEmail,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub last_contacted: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl Lead {
    /// Builds a lead from raw storage values, validating every field.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        id: i32,
        name: String,
        email: String,
        phone: Option<String>,
        company: Option<String>,
        source: String,
        status: String,
        last_contacted: Option<NaiveDate>,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: LeadId::new(id)?,
            name: LeadName::new(name)?,
            email: ContactEmail::new(email)?,
            phone,
            company,
            source: LeadSource::new(source)?,
            status: status.parse()?,
            last_contacted,
            created_at,
        })
    }
}

/// Lead data ready to be inserted.
#[derive(Clone, Debug)]
pub struct NewLead {
    pub name: LeadName,
    pub email: ContactEmail,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub last_contacted: NaiveDate,
}

impl NewLead {
    #[must_use]
    pub fn new(
        name: LeadName,
        email: ContactEmail,
        phone: Option<String>,
        company: Option<String>,
        source: LeadSource,
        status: LeadStatus,
        last_contacted: NaiveDate,
    ) -> Self {
        Self {
            name,
            email,
            phone: optional_text(phone),
            company: optional_text(company),
            source,
            status,
            last_contacted,
        }
    }
}

/// Full overwrite of the editable lead fields.
///
/// `last_contacted` and `created_at` are intentionally absent.
#[derive(Clone, Debug)]
pub struct UpdateLead {
    pub name: LeadName,
    pub email: ContactEmail,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
}

impl UpdateLead {
    #[must_use]
    pub fn new(
        name: LeadName,
        email: ContactEmail,
        phone: Option<String>,
        company: Option<String>,
        source: LeadSource,
        status: LeadStatus,
    ) -> Self {
        Self {
            name,
            email,
            phone: optional_text(phone),
            company: optional_text(company),
            source,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_unknown_status() {
        let created_at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let result = Lead::try_new(
            1,
            "Ada".into(),
            "ada@x.com".into(),
            None,
            None,
            "Website".into(),
            "archived".into(),
            None,
            created_at,
        );

        assert!(matches!(result, Err(TypeConstraintError::InvalidStatus(_))));
    }

    #[test]
    fn new_lead_drops_blank_optional_fields() {
        let lead = NewLead::new(
            LeadName::new("Ada").unwrap(),
            ContactEmail::new("ada@x.com").unwrap(),
            Some("   ".into()),
            Some(" Acme ".into()),
            LeadSource::or_default(None),
            LeadStatus::default(),
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
        );

        assert_eq!(lead.phone, None);
        assert_eq!(lead.company.as_deref(), Some("Acme"));
        assert_eq!(lead.source.as_str(), "Website");
    }
}
