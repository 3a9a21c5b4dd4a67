//! Domain entities, validation, and services.
//!
//! This layer is transport agnostic: it knows nothing about HTTP or the
//! concrete store. Services orchestrate CRUD over the [`ports::Repository`]
//! storage port and return [`Error`] values for adapters to translate.

pub mod category;
pub mod category_service;
pub mod error;
pub mod ports;
pub mod product;
pub mod product_service;

pub use self::category::{Category, CategoryDraft, CategoryId, CategoryTitle, CategoryUpdate};
pub use self::category_service::CategoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::product::{Product, ProductDraft, ProductId, ProductPatch, ProductWithCategory};
pub use self::product_service::ProductService;
