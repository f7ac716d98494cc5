//! Generic keyed in-memory repository.

use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::id::EntityId;

/// In-memory store for entities of a single type, keyed by [`EntityId`].
///
/// Every key maps to exactly one entity and no two entities share a key;
/// both are enforced by [`Repository::add`]. Enumeration is key-ordered.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    records: BTreeMap<EntityId, T>,
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Insert `item` under its own id.
    ///
    /// Fails with [`DomainError::DuplicateKey`] if the key is taken; the
    /// repository is unchanged on failure.
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        let id = item.id();
        if self.records.contains_key(&id) {
            return Err(DomainError::DuplicateKey(id));
        }
        self.records.insert(id, item);
        Ok(())
    }

    /// Look up the entity stored under `id`.
    pub fn get(&self, id: EntityId) -> DomainResult<&T> {
        self.records.get(&id).ok_or(DomainError::NotFound(id))
    }

    /// Mutable lookup. Callers must not change the entity's id.
    pub fn get_mut(&mut self, id: EntityId) -> DomainResult<&mut T> {
        self.records.get_mut(&id).ok_or(DomainError::NotFound(id))
    }

    /// Delete and return the entity stored under `id`.
    pub fn remove(&mut self, id: EntityId) -> DomainResult<T> {
        self.records.remove(&id).ok_or(DomainError::NotFound(id))
    }

    /// Apply `f` to the entity stored under `id`.
    ///
    /// `f` must validate before mutating so a returned error leaves the
    /// stored entity unchanged.
    pub fn update<F>(&mut self, id: EntityId, f: F) -> DomainResult<()>
    where
        F: FnOnce(&mut T) -> DomainResult<()>,
    {
        let item = self.get_mut(id)?;
        f(item)
    }

    /// Snapshot of all stored entities, key-ordered.
    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records.values().cloned().collect()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
