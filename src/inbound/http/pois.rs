//! Point-of-interest HTTP handlers.
//!
//! ```text
//! GET    /api/pois
//! POST   /api/pois
//! PUT    /api/pois/{id}
//! DELETE /api/pois/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::{ApiResult, HttpState};

/// List all points of interest, ascending by name.
#[utoipa::path(
    get,
    path = "/api/pois",
    responses((status = 200, description = "All points of interest")),
    tags = ["pois"],
    operation_id = "listPois"
)]
#[get("/pois")]
pub async fn list_pois(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.pois.list().await))
}

/// Create a point of interest.
#[utoipa::path(
    post,
    path = "/api/pois",
    responses(
        (status = 201, description = "Created point of interest"),
        (status = 400, description = "Invalid payload", body = ErrorBody)
    ),
    tags = ["pois"],
    operation_id = "createPoi"
)]
#[post("/pois")]
pub async fn create_poi(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let created = state.pois.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Partially update a point of interest.
#[utoipa::path(
    put,
    path = "/api/pois/{id}",
    params(("id" = String, Path, description = "Point of interest identifier")),
    responses(
        (status = 200, description = "Merged document"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["pois"],
    operation_id = "updatePoi"
)]
#[put("/pois/{id}")]
pub async fn update_poi(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let updated = state
        .pois
        .update(&path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a point of interest.
#[utoipa::path(
    delete,
    path = "/api/pois/{id}",
    params(("id" = String, Path, description = "Point of interest identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["pois"],
    operation_id = "deletePoi"
)]
#[delete("/pois/{id}")]
pub async fn delete_poi(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.pois.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
