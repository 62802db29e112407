//! Tidemap backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

#[cfg(test)]
pub mod test_support;

/// Public OpenAPI surface used by tooling and the debug docs route.
pub use doc::ApiDoc;
pub use middleware::usage::Usage;
