//! Product CRUD orchestration, including category resolution.

use std::sync::Arc;

use super::category::{Category, CategoryId};
use super::error::Error;
use super::ports::{Repository, StorageError};
use super::product::{Product, ProductDraft, ProductId, ProductPatch, ProductWithCategory};

/// CRUD service for [`Product`] records.
///
/// Reads eagerly resolve the referenced [`Category`]; writes intentionally do
/// not verify that the reference exists (see the design notes on the
/// preserved integrity gap). Updates are field-merge: only title,
/// description, and price are copied onto the stored record, leaving the
/// category assignment untouched.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn Repository<Product>>,
    categories: Arc<dyn Repository<Category>>,
}

impl ProductService {
    /// Create a service over the given storage adapters.
    pub fn new(
        products: Arc<dyn Repository<Product>>,
        categories: Arc<dyn Repository<Category>>,
    ) -> Self {
        Self {
            products,
            categories,
        }
    }

    fn map_storage_error(error: StorageError) -> Error {
        Error::internal(error.to_string())
    }

    async fn resolve(&self, product: Product) -> Result<ProductWithCategory, StorageError> {
        let category = self
            .categories
            .find_by_id(product.category_id().as_uuid())
            .await?;
        Ok(ProductWithCategory { product, category })
    }

    async fn resolve_all(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<ProductWithCategory>, StorageError> {
        let mut resolved = Vec::with_capacity(products.len());
        for product in products {
            resolved.push(self.resolve(product).await?);
        }
        Ok(resolved)
    }

    /// Return all products, each with its category resolved.
    pub async fn list(&self) -> Result<Vec<ProductWithCategory>, Error> {
        let products = self
            .products
            .list()
            .await
            .map_err(Self::map_storage_error)?;
        self.resolve_all(products)
            .await
            .map_err(Self::map_storage_error)
    }

    /// Fetch a single product with its category resolved.
    pub async fn get(&self, id: ProductId) -> Result<ProductWithCategory, Error> {
        let product = self
            .products
            .find_by_id(id.as_uuid())
            .await
            .map_err(Self::map_storage_error)?
            .ok_or_else(|| Error::not_found("no product with the given id"))?;
        self.resolve(product).await.map_err(Self::map_storage_error)
    }

    /// Return the products referencing `category_id`.
    ///
    /// The nil identifier is rejected as a degenerate query; a valid but
    /// unmatched id yields an empty list, not an error.
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<ProductWithCategory>, Error> {
        if category_id.is_nil() {
            return Err(Error::not_found("no products for the nil category id"));
        }
        let products = self
            .products
            .list()
            .await
            .map_err(Self::map_storage_error)?
            .into_iter()
            .filter(|product| product.category_id() == category_id)
            .collect();
        self.resolve_all(products)
            .await
            .map_err(Self::map_storage_error)
    }

    /// Persist a new product, assigning a fresh id.
    ///
    /// The category reference is stored as given, without an existence check.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, Error> {
        let product = Product::new(
            ProductId::random(),
            draft.title,
            draft.description,
            draft.price,
            draft.category_id,
        );
        self.products
            .insert(product.clone())
            .await
            .map_err(Self::map_storage_error)?;
        Ok(product)
    }

    /// Merge `patch` onto the stored record and persist the result.
    pub async fn update(&self, patch: ProductPatch) -> Result<Product, Error> {
        let existing = self
            .products
            .find_by_id(patch.id.as_uuid())
            .await
            .map_err(Self::map_storage_error)?
            .ok_or_else(|| Error::not_found("no product with the given id"))?;

        // Field-merge: the category assignment always survives the update.
        let merged = Product::new(
            existing.id(),
            patch.title,
            patch.description,
            patch.price,
            existing.category_id(),
        );
        self.products
            .replace(merged.clone())
            .await
            .map_err(Self::map_storage_error)?;
        Ok(merged)
    }

    /// Remove a product by id; absent ids are a checked not-found outcome.
    pub async fn delete(&self, id: ProductId) -> Result<(), Error> {
        let existing = self
            .products
            .find_by_id(id.as_uuid())
            .await
            .map_err(Self::map_storage_error)?;
        if existing.is_none() {
            return Err(Error::not_found("no product with the given id"));
        }
        self.products
            .remove(id.as_uuid())
            .await
            .map_err(Self::map_storage_error)
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
