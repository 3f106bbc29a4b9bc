//! Database models shared across the lead management repository.

pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod lead;
pub mod lead_note;
