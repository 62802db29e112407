//! Attraction HTTP handlers.
//!
//! ```text
//! GET    /api/attractions
//! POST   /api/attractions
//! PUT    /api/attractions/{id}
//! DELETE /api/attractions/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::{ApiResult, HttpState};

/// List all attractions, ascending by name.
#[utoipa::path(
    get,
    path = "/api/attractions",
    responses((status = 200, description = "All attractions")),
    tags = ["attractions"],
    operation_id = "listAttractions"
)]
#[get("/attractions")]
pub async fn list_attractions(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.attractions.list().await))
}

/// Create an attraction.
#[utoipa::path(
    post,
    path = "/api/attractions",
    responses(
        (status = 201, description = "Created attraction"),
        (status = 400, description = "Invalid payload", body = ErrorBody)
    ),
    tags = ["attractions"],
    operation_id = "createAttraction"
)]
#[post("/attractions")]
pub async fn create_attraction(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let created = state.attractions.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Partially update an attraction.
#[utoipa::path(
    put,
    path = "/api/attractions/{id}",
    params(("id" = String, Path, description = "Attraction identifier")),
    responses(
        (status = 200, description = "Merged document"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["attractions"],
    operation_id = "updateAttraction"
)]
#[put("/attractions/{id}")]
pub async fn update_attraction(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let updated = state
        .attractions
        .update(&path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete an attraction.
#[utoipa::path(
    delete,
    path = "/api/attractions/{id}",
    params(("id" = String, Path, description = "Attraction identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["attractions"],
    operation_id = "deleteAttraction"
)]
#[delete("/attractions/{id}")]
pub async fn delete_attraction(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.attractions.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
