//! DTOs exposed by the JSON API endpoints.
//!
//! Identifiers are rendered as strings and field names use camelCase.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::dashboard::{DashboardSummary, SourceCount};
use crate::domain::lead::Lead;
use crate::domain::lead_note::LeadNote;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: String,
    pub status: String,
    pub last_contacted: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl From<Lead> for LeadDto {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.to_string(),
            name: lead.name.into_inner(),
            email: lead.email.into_inner(),
            phone: lead.phone,
            company: lead.company,
            source: lead.source.into_inner(),
            status: lead.status.to_string(),
            last_contacted: lead.last_contacted,
            created_at: lead.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.to_string(),
            name: client.name.into_inner(),
            email: client.email,
            company: client.company,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadNoteDto {
    pub id: String,
    pub lead_id: String,
    pub content: String,
    pub author: String,
    /// Machine readable creation time.
    pub created_at: NaiveDateTime,
    /// Display string, e.g. `03/07/2026, 09:05 PM`.
    pub timestamp: String,
}

impl From<LeadNote> for LeadNoteDto {
    fn from(note: LeadNote) -> Self {
        let timestamp = note.display_timestamp();
        Self {
            id: note.id.to_string(),
            lead_id: note.lead_id.to_string(),
            content: note.content.into_inner(),
            author: note.author.into_inner(),
            created_at: note.created_at,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub total: i64,
    pub new_leads: i64,
    pub contacted: i64,
    pub converted: i64,
    pub sources: Vec<SourceCount>,
}

impl From<DashboardSummary> for DashboardDto {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total: summary.total,
            new_leads: summary.new_leads,
            contacted: summary.contacted,
            converted: summary.converted,
            sources: summary.sources,
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthDto {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lead_dto_serializes_camel_case_with_string_id() {
        let created_at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let lead = Lead::try_new(
            12,
            "Ada".into(),
            "ada@x.com".into(),
            None,
            Some("Analytical Engines".into()),
            "Referral".into(),
            "contacted".into(),
            Some(created_at.date()),
            created_at,
        )
        .unwrap();

        let value = serde_json::to_value(LeadDto::from(lead)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "12",
                "name": "Ada",
                "email": "ada@x.com",
                "phone": null,
                "company": "Analytical Engines",
                "source": "Referral",
                "status": "contacted",
                "lastContacted": "2026-10-18",
                "createdAt": "2026-10-18T09:30:00",
            })
        );
    }

    #[test]
    fn note_dto_carries_raw_and_display_timestamps() {
        let created_at = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(8, 7, 0)
            .unwrap();
        let note = LeadNote::try_new(3, 12, "Call back".into(), "User".into(), created_at).unwrap();

        let value = serde_json::to_value(LeadNoteDto::from(note)).unwrap();

        assert_eq!(value["id"], "3");
        assert_eq!(value["leadId"], "12");
        assert_eq!(value["createdAt"], "2026-01-05T08:07:00");
        assert_eq!(value["timestamp"], "01/05/2026, 08:07 AM");
    }

    #[test]
    fn dashboard_dto_uses_new_leads_key() {
        let dto = DashboardDto::from(DashboardSummary {
            total: 2,
            new_leads: 1,
            contacted: 1,
            converted: 0,
            sources: vec![SourceCount {
                source: "Website".into(),
                count: 2,
            }],
        });

        let value = serde_json::to_value(dto).unwrap();

        assert_eq!(value["newLeads"], 1);
        assert_eq!(value["sources"][0], json!({"source": "Website", "count": 2}));
    }
}
