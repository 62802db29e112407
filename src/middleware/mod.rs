//! Actix middleware.

pub mod usage;

pub use usage::Usage;
