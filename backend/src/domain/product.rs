//! Product data model.

use std::fmt;

use uuid::Uuid;

use super::category::{Category, CategoryId};

/// Stable product identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ProductId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted product record.
///
/// The record references its category by id only; the associated
/// [`Category`] is resolved at read time and never owned by the product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    title: String,
    description: Option<String>,
    price: f64,
    category_id: CategoryId,
}

impl Product {
    /// Assemble a record from its parts.
    pub const fn new(
        id: ProductId,
        title: String,
        description: Option<String>,
        price: f64,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            title,
            description,
            price,
            category_id,
        }
    }

    /// Primary key.
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Product title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Optional free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Unit price.
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Foreign key to the owning category.
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

/// Read-model pairing a product with its resolved category.
///
/// `category` is `None` when the referenced category no longer exists in the
/// store; the reference itself is not enforced at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category: Option<Category>,
}

/// Input for creating a product; the service assigns the identifier.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: CategoryId,
}

/// Input for the field-merge product update.
///
/// Deliberately has no category field: only title, description, and price are
/// ever copied onto the stored record.
#[derive(Debug, Clone)]
pub struct ProductPatch {
    pub id: ProductId,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
}
