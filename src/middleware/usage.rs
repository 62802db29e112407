//! Middleware counting every inbound request.
//!
//! Increments the usage counter for `"VERB path"` before the request is
//! dispatched, per the core data flow: counters first, then the handler. The
//! key includes the query string verbatim — counting is literal, not
//! normalised.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::domain::UsageCounters;

/// Usage-counting middleware.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use actix_web::App;
/// use tidemap::Usage;
/// use tidemap::domain::UsageCounters;
/// use tidemap::outbound::persistence::JsonFileStore;
///
/// let counters = UsageCounters::new(Arc::new(JsonFileStore::new("data")));
/// let app = App::new().wrap(Usage::new(counters));
/// ```
#[derive(Clone)]
pub struct Usage {
    counters: UsageCounters,
}

impl Usage {
    /// Wrap the given counters.
    pub fn new(counters: UsageCounters) -> Self {
        Self { counters }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Usage
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = UsageMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(UsageMiddleware {
            service,
            counters: self.counters.clone(),
        }))
    }
}

/// Service wrapper produced by [`Usage`].
pub struct UsageMiddleware<S> {
    service: S,
    counters: UsageCounters,
}

impl<S, B> Service<ServiceRequest> for UsageMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let counters = self.counters.clone();
        let verb = req.method().to_string();
        let path = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned());
        let fut = self.service.call(req);
        Box::pin(async move {
            counters.increment(&verb, &path).await;
            fut.await
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, HttpResponse, test, web};
    use serde_json::json;

    use super::*;
    use crate::test_support::MemoryStore;

    #[actix_web::test]
    async fn every_request_is_counted_before_dispatch() {
        let store = Arc::new(MemoryStore::new());
        let counters = UsageCounters::new(store.clone() as Arc<dyn crate::domain::DocumentStore>);
        let app = test::init_service(
            App::new()
                .wrap(Usage::new(counters.clone()))
                .route("/api/pois", web::get().to(HttpResponse::Ok)),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/api/pois").to_request();
            test::call_service(&app, req).await;
        }

        assert_eq!(
            counters.snapshot().await.get("GET /api/pois"),
            Some(&json!(2))
        );
    }

    #[actix_web::test]
    async fn query_strings_count_separately() {
        let store = Arc::new(MemoryStore::new());
        let counters = UsageCounters::new(store.clone() as Arc<dyn crate::domain::DocumentStore>);
        let app = test::init_service(
            App::new()
                .wrap(Usage::new(counters.clone()))
                .route("/api/pois", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/pois?tag=park")
            .to_request();
        test::call_service(&app, req).await;

        let snapshot = counters.snapshot().await;
        assert_eq!(snapshot.get("GET /api/pois?tag=park"), Some(&json!(1)));
        assert!(!snapshot.contains_key("GET /api/pois"));
    }

    #[actix_web::test]
    async fn unmatched_routes_are_still_counted() {
        let store = Arc::new(MemoryStore::new());
        let counters = UsageCounters::new(store.clone() as Arc<dyn crate::domain::DocumentStore>);
        let app = test::init_service(App::new().wrap(Usage::new(counters.clone()))).await;

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        test::call_service(&app, req).await;

        assert_eq!(
            counters.snapshot().await.get("GET /nowhere"),
            Some(&json!(1))
        );
    }
}
