//! Inbound HTTP adapter: handlers, DTOs, and the error envelope.

pub mod categories;
pub mod error;
pub mod extractors;
pub mod health;
pub mod products;
pub mod state;

pub use error::{ApiError, ApiResult};
