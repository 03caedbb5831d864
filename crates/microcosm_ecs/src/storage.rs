use std::{any::type_name, cell::RefCell, rc::Rc};

#[cfg(feature = "debug")]
use log::trace;

use rustc_hash::FxHashMap;

use crate::{error::EcsError, EntityId};

/// Type-erased view of a component storage.
///
/// Cross-cutting operations (entity destruction, world-wide clears)
/// go through this surface. Typed access stays on [`Storage`] so that
/// `add`/`get` keep their compile-time component type.
pub trait ComponentStorage {
  fn has(&self, entity: EntityId) -> bool;
  fn remove(&mut self, entity: EntityId);
  fn clear(&mut self);
}

/// Shared handle to a storage with its component type erased.
pub type StorageHandle = Rc<RefCell<dyn ComponentStorage>>;

/// Maps entities to their `T` values, one instance per component kind
/// per world.
///
/// Storages are shared as `Rc<RefCell<Storage<T>>>` between the world
/// registry, systems and the host. `RefCell` panics on aliased
/// borrows, so systems that mutate a storage must collect the entity
/// set they iterate before taking the mutable borrow.
pub struct Storage<T> {
  components: FxHashMap<EntityId, T>,
}

impl<T> Storage<T> {
  pub fn new() -> Self {
    Storage::default()
  }

  /// Adds a component to an entity, overwriting any previous value.
  pub fn add(&mut self, entity: EntityId, component: T) {
    #[cfg(feature = "debug")]
    trace!(
      "Adding Component {} to Entity {}",
      type_name::<T>(),
      entity
    );

    self.components.insert(entity, component);
  }

  pub fn get(&self, entity: EntityId) -> Result<&T, EcsError> {
    self
      .components
      .get(&entity)
      .ok_or(EcsError::ComponentNotFound {
        entity,
        component: type_name::<T>(),
      })
  }

  pub fn get_mut(&mut self, entity: EntityId) -> Result<&mut T, EcsError> {
    self
      .components
      .get_mut(&entity)
      .ok_or(EcsError::ComponentNotFound {
        entity,
        component: type_name::<T>(),
      })
  }

  /// Returns all entities that have this component. Iteration order is
  /// not significant.
  pub fn get_all(&self) -> &FxHashMap<EntityId, T> {
    &self.components
  }

  pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &T)> {
    self.components.iter()
  }

  pub fn has(&self, entity: EntityId) -> bool {
    self.components.contains_key(&entity)
  }

  /// Removes the entity's component if present, a no-op otherwise.
  pub fn remove(&mut self, entity: EntityId) {
    #[cfg(feature = "debug")]
    trace!(
      "Removing Component {} from Entity {}",
      type_name::<T>(),
      entity
    );

    self.components.remove(&entity);
  }

  pub fn clear(&mut self) {
    self.components.clear();
  }

  pub fn len(&self) -> usize {
    self.components.len()
  }

  pub fn is_empty(&self) -> bool {
    self.components.is_empty()
  }
}

impl<T> Default for Storage<T> {
  fn default() -> Self {
    Storage {
      components: FxHashMap::default(),
    }
  }
}

impl<T> ComponentStorage for Storage<T> {
  fn has(&self, entity: EntityId) -> bool {
    self.has(entity)
  }

  fn remove(&mut self, entity: EntityId) {
    self.remove(entity);
  }

  fn clear(&mut self) {
    self.clear();
  }
}

#[cfg(test)]
mod test {
  use super::Storage;
  use crate::error::EcsError;

  #[derive(Debug)]
  struct A(usize);

  #[test]
  fn round_trip() {
    let mut storage = Storage::new();

    storage.add(1, A(42));

    assert!(storage.has(1));
    assert_eq!(storage.get(1).unwrap().0, 42);
  }

  #[test]
  fn add_overwrites() {
    let mut storage = Storage::new();

    storage.add(1, A(1));
    storage.add(1, A(2));

    assert_eq!(storage.get(1).unwrap().0, 2);
    assert_eq!(storage.len(), 1);
  }

  #[test]
  fn get_missing() {
    let storage: Storage<A> = Storage::new();

    let err = storage.get(7).unwrap_err();
    assert_eq!(
      err,
      EcsError::ComponentNotFound {
        entity: 7,
        component: std::any::type_name::<A>(),
      }
    );
  }

  #[test]
  fn get_mut_updates_in_place() {
    let mut storage = Storage::new();

    storage.add(1, A(1));
    storage.get_mut(1).unwrap().0 = 9;

    assert_eq!(storage.get(1).unwrap().0, 9);
  }

  #[test]
  fn remove_then_get_fails() {
    let mut storage = Storage::new();

    storage.add(1, A(1));
    storage.remove(1);

    assert!(!storage.has(1));
    assert!(storage.get(1).is_err());
  }

  #[test]
  fn remove_missing_is_noop() {
    let mut storage: Storage<A> = Storage::new();

    storage.remove(1);

    assert!(storage.is_empty());
  }

  #[test]
  fn clear_empties() {
    let mut storage = Storage::new();

    for i in 0..10 {
      storage.add(i, A(i as usize));
    }
    storage.clear();

    assert!(storage.is_empty());
    for i in 0..10 {
      assert!(!storage.has(i));
    }
  }

  #[test]
  fn get_all_yields_every_entry() {
    let mut storage = Storage::new();

    for i in 0..10 {
      storage.add(i, A(i as usize));
    }

    let mut sum = 0;
    for (entity, a) in storage.get_all() {
      assert_eq!(*entity as usize, a.0);
      sum += a.0;
    }
    assert_eq!(sum, 45);
  }

  #[test]
  fn iter_yields_every_entry() {
    let mut storage = Storage::new();

    for i in 0..5 {
      storage.add(i, A(i as usize));
    }

    assert_eq!(storage.iter().count(), storage.len());
    assert!(storage.iter().all(|(entity, a)| *entity as usize == a.0));
  }
}
