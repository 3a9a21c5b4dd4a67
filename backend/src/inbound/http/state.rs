//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend on
//! the domain services only and stay testable with swapped storage adapters.

use std::sync::Arc;

use crate::domain::{Category, CategoryService, Product, ProductService};
use crate::outbound::persistence::MemoryRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub categories: CategoryService,
    pub products: ProductService,
}

impl HttpState {
    /// Bundle pre-built services.
    pub fn new(categories: CategoryService, products: ProductService) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Wire both services over a fresh in-memory store.
    ///
    /// The category repository is shared between services so product reads
    /// resolve against the same data category writes go to.
    pub fn in_memory() -> Self {
        let category_repo = Arc::new(MemoryRepository::<Category>::new());
        let product_repo = Arc::new(MemoryRepository::<Product>::new());
        Self {
            categories: CategoryService::new(category_repo.clone()),
            products: ProductService::new(product_repo, category_repo),
        }
    }
}
