//! Business logic sitting between the HTTP routes and the repositories.

pub mod clients;
pub mod dashboard;
pub mod errors;
pub mod leads;
pub mod notes;

pub use errors::{ServiceError, ServiceResult};
