use std::any::type_name;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use entikit_core::{DomainError, Entity};

use crate::error::{StoreError, StoreResult};

/// Keyed collection of entities, addressed by their [`Entity`] identifier.
pub trait EntityStore<Id, E>: Send + Sync
where
    E: Entity<Id>,
{
    /// Add a new entity. Fails with a conflict if its id is already present.
    fn insert(&self, entity: E) -> StoreResult<()>;

    /// Insert or replace the entity stored under the same id.
    fn upsert(&self, entity: E) -> StoreResult<()>;

    fn get(&self, id: &Id) -> Option<E>;

    /// All entities, in insertion order.
    fn select_all(&self) -> Vec<E>;

    /// Entities matching `predicate`, in insertion order.
    fn select_where(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E>;

    /// Remove one entity; returns whether anything was removed.
    fn delete_by_id(&self, id: &Id) -> bool;

    /// Remove every entity; returns how many were removed.
    fn delete_all(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert each entity in turn, stopping at the first conflict.
    fn insert_all<I>(&self, entities: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        let mut inserted = 0;
        for entity in entities {
            self.insert(entity)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    fn select_first(&self, predicate: &dyn Fn(&E) -> bool) -> Option<E> {
        self.select_where(predicate).into_iter().next()
    }

    /// At most one match; several matches are an error.
    fn select_one(&self, predicate: &dyn Fn(&E) -> bool) -> StoreResult<Option<E>> {
        let mut matches = self.select_where(predicate);
        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            n => Err(DomainError::non_unique(n).into()),
        }
    }
}

impl<Id, E, S> EntityStore<Id, E> for Arc<S>
where
    E: Entity<Id>,
    S: EntityStore<Id, E> + ?Sized,
{
    fn insert(&self, entity: E) -> StoreResult<()> {
        (**self).insert(entity)
    }

    fn upsert(&self, entity: E) -> StoreResult<()> {
        (**self).upsert(entity)
    }

    fn get(&self, id: &Id) -> Option<E> {
        (**self).get(id)
    }

    fn select_all(&self) -> Vec<E> {
        (**self).select_all()
    }

    fn select_where(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E> {
        (**self).select_where(predicate)
    }

    fn delete_by_id(&self, id: &Id) -> bool {
        (**self).delete_by_id(id)
    }

    fn delete_all(&self) -> usize {
        (**self).delete_all()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[derive(Debug)]
struct Entries<Id, E> {
    by_id: HashMap<Id, E>,
    order: Vec<Id>,
}

/// In-memory entity store for tests/dev.
#[derive(Debug)]
pub struct InMemoryEntityStore<Id, E> {
    inner: RwLock<Entries<Id, E>>,
}

impl<Id, E> InMemoryEntityStore<Id, E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Entries {
                by_id: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl<Id, E> Default for InMemoryEntityStore<Id, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, E> EntityStore<Id, E> for InMemoryEntityStore<Id, E>
where
    Id: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    E: Entity<Id> + Clone + Send + Sync + 'static,
{
    fn insert(&self, entity: E) -> StoreResult<()> {
        let id = entity.id();
        let mut entries = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        if entries.by_id.contains_key(&id) {
            warn!(entity = type_name::<E>(), id = ?id, "duplicate id rejected");
            return Err(DomainError::conflict(format!(
                "{} with id {id:?} already present",
                type_name::<E>()
            ))
            .into());
        }

        debug!(entity = type_name::<E>(), id = ?id, "inserted");
        entries.order.push(id.clone());
        entries.by_id.insert(id, entity);
        Ok(())
    }

    fn upsert(&self, entity: E) -> StoreResult<()> {
        let id = entity.id();
        let mut entries = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        if entries.by_id.insert(id.clone(), entity).is_none() {
            entries.order.push(id.clone());
        }
        debug!(entity = type_name::<E>(), id = ?id, "upserted");
        Ok(())
    }

    fn get(&self, id: &Id) -> Option<E> {
        let entries = self.inner.read().ok()?;
        entries.by_id.get(id).cloned()
    }

    fn select_all(&self) -> Vec<E> {
        self.select_where(&|_| true)
    }

    fn select_where(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E> {
        let entries = match self.inner.read() {
            Ok(e) => e,
            Err(_) => return vec![],
        };

        let selected: Vec<E> = entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id))
            .filter(|entity| predicate(*entity))
            .cloned()
            .collect();

        debug!(entity = type_name::<E>(), count = selected.len(), "selected");
        selected
    }

    fn delete_by_id(&self, id: &Id) -> bool {
        let Ok(mut entries) = self.inner.write() else {
            return false;
        };

        let removed = entries.by_id.remove(id).is_some();
        if removed {
            entries.order.retain(|existing| existing != id);
            debug!(entity = type_name::<E>(), id = ?id, "deleted");
        }
        removed
    }

    fn delete_all(&self) -> usize {
        let Ok(mut entries) = self.inner.write() else {
            return 0;
        };

        let removed = entries.by_id.len();
        entries.by_id.clear();
        entries.order.clear();
        debug!(entity = type_name::<E>(), count = removed, "deleted all");
        removed
    }

    fn len(&self) -> usize {
        self.inner.read().map(|e| e.by_id.len()).unwrap_or(0)
    }
}
