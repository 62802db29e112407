//! Usage statistics and audit log HTTP handlers.
//!
//! ```text
//! GET /api/stats
//! GET /api/logs
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::{ApiResult, HttpState};

/// Request counts keyed by `"VERB path"`.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses((status = 200, description = "Usage counters")),
    tags = ["ops"],
    operation_id = "usageStats"
)]
#[get("/stats")]
pub async fn usage_stats(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.usage.snapshot().await))
}

/// Audit log entries, most recent first.
#[utoipa::path(
    get,
    path = "/api/logs",
    responses((status = 200, description = "Audit log, capped at 500 entries")),
    tags = ["ops"],
    operation_id = "auditLogs"
)]
#[get("/logs")]
pub async fn audit_logs(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.audit.entries().await))
}
