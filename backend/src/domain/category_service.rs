//! Category CRUD orchestration.

use std::sync::Arc;

use serde_json::json;

use super::category::{Category, CategoryDraft, CategoryId, CategoryTitle, CategoryUpdate};
use super::error::Error;
use super::ports::{Repository, StorageError};

/// Validation + CRUD service for [`Category`] records.
///
/// Updates are full-replace: the stored record is overwritten wholesale by
/// the incoming model. The service does not pre-check existence on update;
/// replacing a missing row surfaces as a storage fault (and maps to an
/// internal error), matching the persisted contract.
#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn Repository<Category>>,
}

impl CategoryService {
    /// Create a service over the given storage adapter.
    pub fn new(categories: Arc<dyn Repository<Category>>) -> Self {
        Self { categories }
    }

    fn map_storage_error(error: StorageError) -> Error {
        Error::internal(error.to_string())
    }

    fn validate_title(title: &str) -> Result<CategoryTitle, Error> {
        CategoryTitle::new(title).map_err(|err| {
            Error::invalid_request("category model is invalid")
                .with_details(json!({ "fieldErrors": { "title": err.to_string() } }))
        })
    }

    /// Return all categories as a read-only snapshot.
    pub async fn list(&self) -> Result<Vec<Category>, Error> {
        self.categories
            .list()
            .await
            .map_err(Self::map_storage_error)
    }

    /// Fetch a single category by id.
    pub async fn get(&self, id: CategoryId) -> Result<Category, Error> {
        self.categories
            .find_by_id(id.as_uuid())
            .await
            .map_err(Self::map_storage_error)?
            .ok_or_else(|| Error::not_found("no category with the given id"))
    }

    /// Validate and persist a new category, assigning a fresh id.
    pub async fn create(&self, draft: CategoryDraft) -> Result<Category, Error> {
        let title = Self::validate_title(&draft.title)?;
        let category = Category::new(CategoryId::random(), title);
        self.categories
            .insert(category.clone())
            .await
            .map_err(Self::map_storage_error)?;
        Ok(category)
    }

    /// Validate and persist a full-replace update.
    pub async fn update(&self, update: CategoryUpdate) -> Result<Category, Error> {
        let title = Self::validate_title(&update.title)?;
        let category = Category::new(update.id, title);
        self.categories
            .replace(category.clone())
            .await
            .map_err(Self::map_storage_error)?;
        Ok(category)
    }

    /// Remove a category by id; absent ids are a checked not-found outcome.
    pub async fn delete(&self, id: CategoryId) -> Result<(), Error> {
        let existing = self
            .categories
            .find_by_id(id.as_uuid())
            .await
            .map_err(Self::map_storage_error)?;
        if existing.is_none() {
            return Err(Error::not_found("no category with the given id"));
        }
        self.categories
            .remove(id.as_uuid())
            .await
            .map_err(Self::map_storage_error)
    }
}

#[cfg(test)]
#[path = "category_service_tests.rs"]
mod tests;
