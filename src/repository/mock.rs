//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::dashboard::DashboardSummary;
use crate::domain::lead::{Lead, NewLead, UpdateLead};
use crate::domain::lead_note::{LeadNote, NewLeadNote};
use crate::domain::types::{ClientId, LeadId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientReader, ClientWriter, DashboardReader, LeadNoteReader, LeadNoteWriter, LeadReader,
    LeadWriter,
};

mock! {
    pub Repository {}

    impl LeadReader for Repository {
        fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
        fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>>;
    }

    impl LeadWriter for Repository {
        fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
        fn update_lead(&self, id: LeadId, updates: &UpdateLead) -> RepositoryResult<usize>;
        fn delete_lead(&self, id: LeadId) -> RepositoryResult<usize>;
    }

    impl ClientReader for Repository {
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn delete_client(&self, id: ClientId) -> RepositoryResult<usize>;
    }

    impl LeadNoteReader for Repository {
        fn list_lead_notes(&self, lead_id: LeadId) -> RepositoryResult<Vec<LeadNote>>;
    }

    impl LeadNoteWriter for Repository {
        fn create_lead_note(&self, new_note: &NewLeadNote) -> RepositoryResult<LeadNote>;
    }

    impl DashboardReader for Repository {
        fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary>;
    }
}
