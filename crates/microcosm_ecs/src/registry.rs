use std::{
  any::{type_name, TypeId},
  cell::RefCell,
  rc::Rc,
};

use log::debug;
use rustc_hash::FxHashMap;

use crate::{
  storage::{ComponentStorage, StorageHandle},
  ComponentId, EntityId,
};

/// Binds every distinct storage type to a stable [`ComponentId`] and
/// keeps a type-erased handle to each registered storage.
///
/// The two maps stay consistent: every issued id has exactly one
/// handle and vice versa.
#[derive(Default)]
pub struct ComponentRegistry {
  next_id: ComponentId,
  ids: FxHashMap<TypeId, ComponentId>,
  storages: FxHashMap<ComponentId, StorageHandle>,
}

impl ComponentRegistry {
  pub fn new() -> Self {
    ComponentRegistry::default()
  }

  /// Registers a storage and returns its id.
  ///
  /// Ids are keyed on the storage's type, so registering a second
  /// storage of an already registered type returns the existing id
  /// and keeps the first handle.
  pub fn register<S: ComponentStorage + 'static>(&mut self, storage: Rc<RefCell<S>>) -> ComponentId {
    let type_id = TypeId::of::<S>();
    if let Some(&id) = self.ids.get(&type_id) {
      return id;
    }

    let id = self.next_id;
    self.next_id += 1;

    debug!("Registering Storage {} as Component {}", type_name::<S>(), id);

    self.ids.insert(type_id, id);
    self.storages.insert(id, storage);
    id
  }

  /// Returns the type-erased handle for `id` if this registry issued
  /// it.
  pub fn get_storage(&self, id: ComponentId) -> Option<StorageHandle> {
    self.storages.get(&id).cloned()
  }

  /// Removes `entity`'s data from every registered storage.
  pub(crate) fn remove_entity(&self, entity: EntityId) {
    for storage in self.storages.values() {
      let mut storage = storage.borrow_mut();
      if storage.has(entity) {
        storage.remove(entity);
      }
    }
  }

  /// Empties every registered storage. Id assignments and the handles
  /// themselves are kept.
  pub fn clear(&self) {
    for storage in self.storages.values() {
      storage.borrow_mut().clear();
    }
  }
}
