use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::DashboardDto;
use crate::repository::DieselRepository;
use crate::routes::{blocking, failure_response};
use crate::services::dashboard as dashboard_service;

#[get("/dashboard")]
/// Lead totals by status and by source.
pub async fn show_dashboard(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    match blocking(move || dashboard_service::load_dashboard(repo.as_ref())).await {
        Ok(summary) => HttpResponse::Ok().json(DashboardDto::from(summary)),
        Err(err) => failure_response(err, "Failed to load dashboard"),
    }
}
