//! Dashboard aggregation queries.

use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::dashboard::{DashboardSummary, SourceCount};
use crate::domain::types::LeadStatus;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DashboardReader, DieselRepository};

fn count_by_status(conn: &mut DbConnection, status: LeadStatus) -> QueryResult<i64> {
    use crate::schema::leads;

    leads::table
        .filter(leads::status.eq(status.as_str()))
        .count()
        .get_result(conn)
}

impl DashboardReader for DieselRepository {
    /// Runs five independent reads on one connection without a transaction,
    /// so the counts are not a consistent snapshot.
    fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary> {
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let total: i64 = leads::table.count().get_result(&mut conn)?;
        let new_leads = count_by_status(&mut conn, LeadStatus::New)?;
        let contacted = count_by_status(&mut conn, LeadStatus::Contacted)?;
        let converted = count_by_status(&mut conn, LeadStatus::Converted)?;

        let sources = leads::table
            .group_by(leads::source)
            .select((leads::source, count_star()))
            .order(leads::source.asc())
            .load::<(String, i64)>(&mut conn)?
            .into_iter()
            .map(|(source, count)| SourceCount { source, count })
            .collect();

        Ok(DashboardSummary {
            total,
            new_leads,
            contacted,
            converted,
            sources,
        })
    }
}
