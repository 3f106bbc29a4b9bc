use actix_web::{HttpResponse, Responder, get};

use crate::dto::api::HealthDto;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthDto {
        ok: true,
        message: "Lead Management API is running".to_string(),
    })
}
