//! Liveness probe.

use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// Process liveness; registered outside the `/api` scope.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is up")),
    tags = ["ops"],
    operation_id = "healthz"
)]
#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}
