//! Hydrophone HTTP handlers.
//!
//! ```text
//! GET    /api/hydrophone/latest
//! POST   /api/hydrophone/update
//! GET    /api/hydro/history
//! POST   /api/hydro/history
//! DELETE /api/hydro/history/{id}
//! POST   /api/hydro/history/{id}/send
//! ```
//!
//! The `/api/hydrophone` and `/api/hydro` prefixes are both part of the
//! published surface and are kept as-is.

use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::{Value, json};

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::{ApiResult, HttpState};

/// The current snapshot reading.
#[utoipa::path(
    get,
    path = "/api/hydrophone/latest",
    responses((status = 200, description = "Current snapshot; empty object before the first update")),
    tags = ["hydrophone"],
    operation_id = "latestSnapshot"
)]
#[get("/hydrophone/latest")]
pub async fn latest_snapshot(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.hydrophone.latest().await))
}

/// Overwrite the snapshot wholesale.
#[utoipa::path(
    post,
    path = "/api/hydrophone/update",
    responses(
        (status = 201, description = "Snapshot replaced"),
        (status = 400, description = "Invalid payload", body = ErrorBody)
    ),
    tags = ["hydrophone"],
    operation_id = "updateSnapshot"
)]
#[post("/hydrophone/update")]
pub async fn update_snapshot(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    state.hydrophone.update_snapshot(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"ok": true})))
}

/// List history records, newest first.
#[utoipa::path(
    get,
    path = "/api/hydro/history",
    responses((status = 200, description = "All history records")),
    tags = ["hydrophone"],
    operation_id = "listHistory"
)]
#[get("/hydro/history")]
pub async fn list_history(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.hydrophone.history().await))
}

/// Record a new history entry.
#[utoipa::path(
    post,
    path = "/api/hydro/history",
    responses(
        (status = 201, description = "Created history record"),
        (status = 400, description = "Invalid payload", body = ErrorBody)
    ),
    tags = ["hydrophone"],
    operation_id = "createHistory"
)]
#[post("/hydro/history")]
pub async fn create_history(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let created = state.hydrophone.record_history(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Delete a history record.
#[utoipa::path(
    delete,
    path = "/api/hydro/history/{id}",
    params(("id" = String, Path, description = "History record identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["hydrophone"],
    operation_id = "deleteHistory"
)]
#[delete("/hydro/history/{id}")]
pub async fn delete_history(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.hydrophone.delete_history(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Apply a history record to the snapshot.
#[utoipa::path(
    post,
    path = "/api/hydro/history/{id}/send",
    params(("id" = String, Path, description = "History record identifier")),
    responses(
        (status = 200, description = "Applied snapshot"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["hydrophone"],
    operation_id = "sendHistory"
)]
#[post("/hydro/history/{id}/send")]
pub async fn send_history(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let snapshot = state.hydrophone.send(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}
