//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::inbound::http;

/// Aggregated OpenAPI description, served as JSON in debug builds.
#[derive(OpenApi)]
#[openapi(
    paths(
        http::pois::list_pois,
        http::pois::create_poi,
        http::pois::update_poi,
        http::pois::delete_poi,
        http::routes::list_routes,
        http::routes::create_route,
        http::routes::update_route,
        http::routes::delete_route,
        http::attractions::list_attractions,
        http::attractions::create_attraction,
        http::attractions::update_attraction,
        http::attractions::delete_attraction,
        http::hydrophone::latest_snapshot,
        http::hydrophone::update_snapshot,
        http::hydrophone::list_history,
        http::hydrophone::create_history,
        http::hydrophone::delete_history,
        http::hydrophone::send_history,
        http::stats::usage_stats,
        http::stats::audit_logs,
        http::health::healthz,
    ),
    tags(
        (name = "pois", description = "Points of interest"),
        (name = "routes", description = "Routes"),
        (name = "attractions", description = "Attractions"),
        (name = "hydrophone", description = "Hydrophone snapshot and history"),
        (name = "ops", description = "Statistics, audit log, and health")
    )
)]
pub struct ApiDoc;
