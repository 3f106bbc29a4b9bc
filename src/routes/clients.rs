use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::dto::api::{ClientDto, MessageDto};
use crate::forms::clients::ClientForm;
use crate::repository::DieselRepository;
use crate::routes::{blocking, failure_response};
use crate::services::clients as clients_service;

#[get("/clients")]
pub async fn list_clients(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    match blocking(move || clients_service::list_clients(repo.as_ref())).await {
        Ok(clients) => HttpResponse::Ok().json(
            clients
                .into_iter()
                .map(ClientDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => failure_response(err, "Failed to fetch clients"),
    }
}

#[post("/clients")]
pub async fn create_client(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    match blocking(move || clients_service::create_client(repo.as_ref(), form)).await {
        Ok(client) => HttpResponse::Ok().json(ClientDto::from(client)),
        Err(err) => failure_response(err, "Failed to add client"),
    }
}

#[delete("/clients/{id}")]
/// Delete a client. Succeeds whether or not the client existed.
pub async fn delete_client(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    let repo = repo.into_inner();
    match blocking(move || clients_service::delete_client(repo.as_ref(), id)).await {
        Ok(()) => HttpResponse::Ok().json(MessageDto {
            message: "Client Deleted".to_string(),
        }),
        Err(err) => failure_response(err, "Failed to delete client"),
    }
}
