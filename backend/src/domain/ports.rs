//! Storage ports defining the edge between the domain and its adapters.
//!
//! The services only see the [`Repository`] trait; adapters (in-memory today,
//! a durable store tomorrow) implement it per entity kind and map their
//! failures into [`StorageError`] instead of leaking backend types.

use async_trait::async_trait;
use uuid::Uuid;

use self::macros::define_port_error;
use super::category::Category;
use super::product::Product;

mod macros;

define_port_error! {
    /// Faults raised by storage adapters.
    ///
    /// Services treat every variant as an unexpected failure; there is no
    /// finer-grained client-observable taxonomy behind the storage boundary.
    pub enum StorageError {
        /// The backend is unreachable or its shared state is unusable.
        Connection { message: String } => "storage connection failed: {message}",
        /// A read or write failed during execution.
        Query { message: String } => "storage query failed: {message}",
    }
}

/// A record type persisted through a [`Repository`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Stable label used in adapter diagnostics.
    const KIND: &'static str;

    /// Primary key of the record.
    fn id(&self) -> Uuid;
}

impl Entity for Category {
    const KIND: &'static str = "category";

    fn id(&self) -> Uuid {
        Category::id(self).as_uuid()
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> Uuid {
        Product::id(self).as_uuid()
    }
}

/// Storage adapter contract for one entity kind.
///
/// Adapters must provide at least per-record atomicity for the write
/// operations; concurrent writes to the same record may race
/// (last-writer-wins).
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Return all records in storage-natural order.
    async fn list(&self) -> Result<Vec<E>, StorageError>;

    /// Fetch a record by primary key.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, StorageError>;

    /// Persist a new record. Inserting a duplicate key is a storage fault.
    async fn insert(&self, record: E) -> Result<(), StorageError>;

    /// Overwrite the stored record with the same key. Replacing a missing
    /// record is a storage fault, not a checked outcome.
    async fn replace(&self, record: E) -> Result<(), StorageError>;

    /// Remove a record by primary key. Removing a missing record is a
    /// storage fault; callers check existence first where absence is an
    /// expected outcome.
    async fn remove(&self, id: Uuid) -> Result<(), StorageError>;
}
