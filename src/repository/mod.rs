//! Query gateway: repository traits and their Diesel implementation.
//!
//! Every method checks a connection out of the shared pool, runs one or more
//! parameterized statements and hands the connection back. No method retries
//! and no method wraps its statements in a transaction.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient},
        dashboard::DashboardSummary,
        lead::{Lead, NewLead, UpdateLead},
        lead_note::{LeadNote, NewLeadNote},
        types::{ClientId, LeadId},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod dashboard;
pub mod errors;
pub mod lead;
pub mod lead_note;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository sharing a single connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait LeadReader {
    /// All leads, newest first.
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    /// Overwrites the editable fields, returning the number of affected rows.
    fn update_lead(&self, id: LeadId, updates: &UpdateLead) -> RepositoryResult<usize>;
    /// Hard delete, returning the number of affected rows.
    fn delete_lead(&self, id: LeadId) -> RepositoryResult<usize>;
}

pub trait ClientReader {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn delete_client(&self, id: ClientId) -> RepositoryResult<usize>;
}

pub trait LeadNoteReader {
    /// Notes attached to the lead, newest first.
    fn list_lead_notes(&self, lead_id: LeadId) -> RepositoryResult<Vec<LeadNote>>;
}

pub trait LeadNoteWriter {
    fn create_lead_note(&self, new_note: &NewLeadNote) -> RepositoryResult<LeadNote>;
}

pub trait DashboardReader {
    fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary>;
}
