//! Routes for `/api/leads`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use chrono::Utc;

use crate::dto::api::LeadDto;
use crate::forms::leads::LeadForm;
use crate::repository::DieselRepository;
use crate::routes::{blocking, error_response, failure_response};
use crate::services::{ServiceError, leads as leads_service};

fn lead_not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Lead not found")
}

#[get("/leads")]
/// List every lead, newest first.
pub async fn list_leads(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    match blocking(move || leads_service::list_leads(repo.as_ref())).await {
        Ok(leads) => {
            HttpResponse::Ok().json(leads.into_iter().map(LeadDto::from).collect::<Vec<_>>())
        }
        Err(err) => failure_response(err, "Failed to fetch leads"),
    }
}

#[get("/leads/{id}")]
pub async fn get_lead(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let id = id.into_inner();
    let repo = repo.into_inner();
    match blocking(move || leads_service::get_lead(repo.as_ref(), id)).await {
        Ok(lead) => HttpResponse::Ok().json(LeadDto::from(lead)),
        Err(ServiceError::NotFound) => lead_not_found(),
        Err(err) => failure_response(err, "Failed to fetch lead"),
    }
}

#[post("/leads")]
/// Create a lead, optionally with a first note.
pub async fn create_lead(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LeadForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    let today = Utc::now().date_naive();
    match blocking(move || leads_service::create_lead(repo.as_ref(), form, today)).await {
        Ok(lead) => HttpResponse::Created().json(LeadDto::from(lead)),
        Err(err) => failure_response(err, "Failed to create lead"),
    }
}

#[put("/leads/{id}")]
/// Overwrite a lead and return the row as stored afterwards.
pub async fn update_lead(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LeadForm>,
) -> impl Responder {
    let id = id.into_inner();
    let repo = repo.into_inner();
    match blocking(move || leads_service::update_lead(repo.as_ref(), id, form)).await {
        Ok(lead) => HttpResponse::Ok().json(LeadDto::from(lead)),
        Err(ServiceError::NotFound) => lead_not_found(),
        Err(err) => failure_response(err, "Failed to update lead"),
    }
}

#[delete("/leads/{id}")]
pub async fn delete_lead(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let id = id.into_inner();
    let repo = repo.into_inner();
    match blocking(move || leads_service::delete_lead(repo.as_ref(), id)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => lead_not_found(),
        Err(err) => failure_response(err, "Failed to delete lead"),
    }
}
