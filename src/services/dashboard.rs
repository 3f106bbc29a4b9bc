use crate::domain::dashboard::DashboardSummary;
use crate::repository::DashboardReader;
use crate::services::ServiceResult;

/// Loads the dashboard counts. Any failing read fails the whole summary.
pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardSummary>
where
    R: DashboardReader + ?Sized,
{
    repo.dashboard_summary().map_err(|err| {
        log::error!("Failed to load dashboard: {err}");
        err.into()
    })
}
