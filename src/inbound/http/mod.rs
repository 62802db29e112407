//! HTTP inbound adapter exposing the REST endpoints.

pub mod attractions;
pub mod error;
pub mod health;
pub mod hydrophone;
pub mod pois;
pub mod routes;
pub mod state;
pub mod stats;

use actix_web::{Scope, web};

pub use error::ApiResult;
pub use state::HttpState;

use crate::domain::DomainError;

/// The `/api` scope with every collection endpoint registered.
///
/// Malformed JSON bodies map to the same `{"message": "Invalid payload"}`
/// envelope as validation failures.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(
            web::JsonConfig::default()
                .error_handler(|_err, _req| DomainError::invalid_request("Invalid payload").into()),
        )
        .service(pois::list_pois)
        .service(pois::create_poi)
        .service(pois::update_poi)
        .service(pois::delete_poi)
        .service(routes::list_routes)
        .service(routes::create_route)
        .service(routes::update_route)
        .service(routes::delete_route)
        .service(attractions::list_attractions)
        .service(attractions::create_attraction)
        .service(attractions::update_attraction)
        .service(attractions::delete_attraction)
        .service(hydrophone::latest_snapshot)
        .service(hydrophone::update_snapshot)
        .service(hydrophone::list_history)
        .service(hydrophone::create_history)
        .service(hydrophone::delete_history)
        .service(hydrophone::send_history)
        .service(stats::usage_stats)
        .service(stats::audit_logs)
}
