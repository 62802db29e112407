//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data` so they depend on
//! domain services only and remain testable against an in-memory store.

use std::sync::Arc;

use crate::domain::{
    AttractionService, AuditLog, DocumentStore, HydrophoneService, PoiService, RouteService,
    UsageCounters,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Point-of-interest service.
    pub pois: PoiService,
    /// Route service.
    pub routes: RouteService,
    /// Attraction service.
    pub attractions: AttractionService,
    /// Hydrophone snapshot and history service.
    pub hydrophone: HydrophoneService,
    /// Audit log, read by `/api/logs`.
    pub audit: AuditLog,
    /// Usage counters, incremented by middleware and read by `/api/stats`.
    pub usage: UsageCounters,
}

impl HttpState {
    /// Wire every service onto one document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let audit = AuditLog::new(store.clone());
        Self {
            pois: PoiService::new(store.clone(), audit.clone()),
            routes: RouteService::new(store.clone(), audit.clone()),
            attractions: AttractionService::new(store.clone(), audit.clone()),
            hydrophone: HydrophoneService::new(store.clone(), audit.clone()),
            usage: UsageCounters::new(store),
            audit,
        }
    }
}
