//! Routes for `/api/leads/{id}/notes`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::api::LeadNoteDto;
use crate::forms::notes::NoteForm;
use crate::repository::DieselRepository;
use crate::routes::{blocking, error_response, failure_response};
use crate::services::{ServiceError, notes as notes_service};

#[get("/leads/{id}/notes")]
pub async fn list_notes(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let lead_id = id.into_inner();
    let repo = repo.into_inner();
    match blocking(move || notes_service::list_notes(repo.as_ref(), lead_id)).await {
        Ok(notes) => HttpResponse::Ok().json(
            notes
                .into_iter()
                .map(LeadNoteDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => failure_response(err, "Failed to fetch notes"),
    }
}

#[post("/leads/{id}/notes")]
pub async fn add_note(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NoteForm>,
) -> impl Responder {
    let lead_id = id.into_inner();
    let repo = repo.into_inner();
    match blocking(move || notes_service::add_note(repo.as_ref(), lead_id, form)).await {
        Ok(note) => HttpResponse::Created().json(LeadNoteDto::from(note)),
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, "Lead not found"),
        Err(err) => failure_response(err, "Failed to add note"),
    }
}
