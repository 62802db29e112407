//! Backend entry-point: wires the document store, services, middleware, and
//! REST endpoints.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use tidemap::Usage;
use tidemap::domain::DocumentStore;
use tidemap::inbound::http::{self, HttpState};
use tidemap::outbound::persistence::JsonFileStore;

/// Record-keeping backend for the Tidemap mapping application.
#[derive(Debug, Parser)]
#[command(name = "tidemap", version, about)]
struct Cli {
    /// Directory holding the per-collection JSON files.
    #[arg(long, env = "TIDEMAP_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "TIDEMAP_BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let store: Arc<dyn DocumentStore> = Arc::new(JsonFileStore::new(&cli.data_dir));
    let state = HttpState::new(store);

    info!(data_dir = %cli.data_dir.display(), bind_addr = %cli.bind_addr, "starting server");

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Usage::new(state.usage.clone()))
            .service(http::api_scope())
            .service(http::health::healthz);

        #[cfg(debug_assertions)]
        let app = app.route(
            "/api-docs/openapi.json",
            web::get().to(|| async {
                use utoipa::OpenApi;
                actix_web::HttpResponse::Ok().json(tidemap::ApiDoc::openapi())
            }),
        );

        app
    })
    .bind(cli.bind_addr)?
    .run()
    .await
}
