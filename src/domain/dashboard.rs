use serde::{Deserialize, Serialize};

/// Number of leads attributed to a single source label.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceCount {
    pub source: String,
    pub count: i64,
}

/// Lead counts shown on the dashboard overview.
///
/// Each figure comes from a separate read, so they may describe slightly
/// different instants when leads change concurrently.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total: i64,
    pub new_leads: i64,
    pub contacted: i64,
    pub converted: i64,
    pub sources: Vec<SourceCount>,
}
