//! Non-durable in-memory storage adapter.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{Entity, Repository, StorageError};

/// In-memory [`Repository`] implementation backed by a `RwLock`-guarded map.
///
/// Every operation takes the lock once, so writes are atomic per record.
/// Data does not survive a restart; the service layer never assumes
/// durability, so a durable adapter can replace this one behind the same
/// port.
///
/// Listing follows the map's key order. The contract only promises a
/// storage-natural order, so callers must not rely on insertion order.
pub struct MemoryRepository<E: Entity> {
    rows: RwLock<BTreeMap<Uuid, E>>,
}

impl<E: Entity> MemoryRepository<E> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<Uuid, E>>, StorageError> {
        self.rows
            .read()
            .map_err(|_| StorageError::connection(format!("{} table lock poisoned", E::KIND)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<Uuid, E>>, StorageError> {
        self.rows
            .write()
            .map_err(|_| StorageError::connection(format!("{} table lock poisoned", E::KIND)))
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>, StorageError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, StorageError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn insert(&self, record: E) -> Result<(), StorageError> {
        let mut rows = self.write()?;
        let id = record.id();
        if rows.contains_key(&id) {
            return Err(StorageError::query(format!(
                "duplicate {} primary key {id}",
                E::KIND
            )));
        }
        rows.insert(id, record);
        Ok(())
    }

    async fn replace(&self, record: E) -> Result<(), StorageError> {
        let mut rows = self.write()?;
        let id = record.id();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = record;
                Ok(())
            }
            None => Err(StorageError::query(format!(
                "no {} row with primary key {id}",
                E::KIND
            ))),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<(), StorageError> {
        let removed = self.write()?.remove(&id);
        if removed.is_none() {
            return Err(StorageError::query(format!(
                "no {} row with primary key {id}",
                E::KIND
            )));
        }
        Ok(())
    }
}
