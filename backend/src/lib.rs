//! Catalogue REST API library.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the entities,
//! validation, and services; [`inbound`] adapts HTTP onto the services;
//! [`outbound`] implements the storage ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
