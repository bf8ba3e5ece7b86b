use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use bookmatch_core::{Book, BookPatch, EntityId, Match, MatchPatch, User, UserPatch};
use bookmatch_logging::{bm_debug, bm_trace};

use crate::latency::simulate;
use crate::{EntityKind, LatencySettings, RandomSource, StoreError};

/// A record kept in a [`MemoryRepository`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Partial update. Patches never carry an id, so ids cannot change.
    type Patch: Send + 'static;
    const KIND: EntityKind;

    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);
    fn apply(&mut self, patch: Self::Patch);
}

impl Entity for Book {
    type Patch = BookPatch;
    const KIND: EntityKind = EntityKind::Book;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply(&mut self, patch: BookPatch) {
        patch.apply(self);
    }
}

impl Entity for User {
    type Patch = UserPatch;
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply(&mut self, patch: UserPatch) {
        patch.apply(self);
    }
}

impl Entity for Match {
    type Patch = MatchPatch;
    const KIND: EntityKind = EntityKind::Match;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply(&mut self, patch: MatchPatch) {
        patch.apply(self);
    }
}

/// CRUD contract shared by every collection.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;
    async fn get_by_id(&self, id: EntityId) -> Result<T, StoreError>;
    /// Stores `entity` under `max(existing ids, 0) + 1`, whatever id it carried.
    async fn create(&self, entity: T) -> Result<T, StoreError>;
    async fn update(&self, id: EntityId, patch: T::Patch) -> Result<T, StoreError>;
    async fn delete(&self, id: EntityId) -> Result<(), StoreError>;
}

/// Process-local collection with simulated latency. Callers always receive
/// copies; the stored records only change through the CRUD operations.
pub struct MemoryRepository<T> {
    items: Mutex<Vec<T>>,
    latency: LatencySettings,
    random: Arc<dyn RandomSource>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new(items: Vec<T>, latency: LatencySettings, random: Arc<dyn RandomSource>) -> Self {
        Self {
            items: Mutex::new(items),
            latency,
            random,
        }
    }

    pub fn latency(&self) -> &LatencySettings {
        &self.latency
    }

    // The lock is never held across an await, so a poisoned lock still holds
    // a consistent collection.
    fn items(&self) -> MutexGuard<'_, Vec<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: EntityId) -> StoreError {
        StoreError::NotFound { kind: T::KIND, id }
    }

    /// Up to `count` records drawn without replacement.
    pub async fn random_sample(&self, count: usize) -> Vec<T> {
        simulate(self.latency.list).await;
        let items = self.items();
        self.random
            .permutation(items.len())
            .into_iter()
            .take(count)
            .map(|index| items[index].clone())
            .collect()
    }

    /// Records matching `predicate`, in stored order.
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        self.filter_after(self.latency.query, predicate).await
    }

    pub(crate) async fn filter_after<F>(&self, delay: Duration, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        simulate(delay).await;
        self.items()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub(crate) async fn first(&self) -> Result<T, StoreError> {
        simulate(self.latency.lookup).await;
        self.items()
            .first()
            .cloned()
            .ok_or(StoreError::Empty { kind: T::KIND })
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        simulate(self.latency.list).await;
        Ok(self.items().clone())
    }

    async fn get_by_id(&self, id: EntityId) -> Result<T, StoreError> {
        simulate(self.latency.lookup).await;
        self.items()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, mut entity: T) -> Result<T, StoreError> {
        simulate(self.latency.write).await;
        let mut items = self.items();
        let next_id = items.iter().map(Entity::id).max().unwrap_or(0) + 1;
        entity.set_id(next_id);
        items.push(entity.clone());
        bm_debug!("{} created id={}", T::KIND, next_id);
        Ok(entity)
    }

    async fn update(&self, id: EntityId, patch: T::Patch) -> Result<T, StoreError> {
        simulate(self.latency.write).await;
        let mut items = self.items();
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        item.apply(patch);
        bm_trace!("{} updated id={}", T::KIND, id);
        Ok(item.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        simulate(self.latency.delete).await;
        let mut items = self.items();
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        items.remove(index);
        bm_debug!("{} deleted id={}", T::KIND, id);
        Ok(())
    }
}
