//! Route HTTP handlers.
//!
//! ```text
//! GET    /api/routes
//! POST   /api/routes
//! PUT    /api/routes/{id}
//! DELETE /api/routes/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::{ApiResult, HttpState};

/// List all routes, newest first.
#[utoipa::path(
    get,
    path = "/api/routes",
    responses((status = 200, description = "All routes")),
    tags = ["routes"],
    operation_id = "listRoutes"
)]
#[get("/routes")]
pub async fn list_routes(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.routes.list().await))
}

/// Create a route.
#[utoipa::path(
    post,
    path = "/api/routes",
    responses(
        (status = 201, description = "Created route"),
        (status = 400, description = "Invalid payload", body = ErrorBody)
    ),
    tags = ["routes"],
    operation_id = "createRoute"
)]
#[post("/routes")]
pub async fn create_route(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let created = state.routes.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Partially update a route.
#[utoipa::path(
    put,
    path = "/api/routes/{id}",
    params(("id" = String, Path, description = "Route identifier")),
    responses(
        (status = 200, description = "Merged document"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["routes"],
    operation_id = "updateRoute"
)]
#[put("/routes/{id}")]
pub async fn update_route(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let updated = state
        .routes
        .update(&path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a route.
#[utoipa::path(
    delete,
    path = "/api/routes/{id}",
    params(("id" = String, Path, description = "Route identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown identifier", body = ErrorBody)
    ),
    tags = ["routes"],
    operation_id = "deleteRoute"
)]
#[delete("/routes/{id}")]
pub async fn delete_route(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.routes.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
