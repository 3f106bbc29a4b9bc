//! Domain aggregates exposed by the lead management service layer.

pub mod client;
pub mod dashboard;
pub mod lead;
pub mod lead_note;
pub mod types;
