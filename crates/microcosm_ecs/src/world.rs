use std::{any::type_name, cell::RefCell, rc::Rc};

use log::debug;
#[cfg(feature = "debug")]
use log::trace;

use crate::{
  entity::EntityManager,
  registry::ComponentRegistry,
  storage::{ComponentStorage, StorageHandle},
  systems::{StoredSystem, System},
  ComponentId, EntityId,
};

/// Composition root owning the entity ids, the storage registry and
/// the ordered system list.
#[derive(Default)]
pub struct World {
  entities: EntityManager,
  components: ComponentRegistry,
  systems: Vec<StoredSystem>,
}

impl World {
  pub fn new() -> Self {
    debug!("Creating World");
    World::default()
  }

  pub fn create_entity(&mut self) -> EntityId {
    self.entities.create()
  }

  /// Recycles `entity`'s id and removes its data from every registered
  /// storage. One scan over the registered component types, not over
  /// entities.
  pub fn destroy_entity(&mut self, entity: EntityId) {
    #[cfg(feature = "debug")]
    trace!("Destroying Entity {}", entity);

    self.entities.destroy(entity);
    self.components.remove_entity(entity);
  }

  pub fn register_storage<S: ComponentStorage + 'static>(
    &mut self,
    storage: Rc<RefCell<S>>,
  ) -> ComponentId {
    self.components.register(storage)
  }

  /// Appends a system; systems run in the order they were added.
  pub fn add_system<S: System + 'static>(&mut self, system: S) {
    debug!("Adding System {}", type_name::<S>());

    self.systems.push(Box::new(system));
  }

  /// Runs every system once, synchronously, in registration order.
  pub fn update(&mut self, dt: f64) {
    #[cfg(feature = "debug")]
    trace!("Updating World");

    for system in &mut self.systems {
      system.update(dt);
    }
  }

  /// Empties every component storage and drops all systems.
  ///
  /// Entity id bookkeeping is untouched: previously issued ids stay
  /// spent and the recycle pool keeps its contents.
  pub fn clear(&mut self) {
    debug!("Clearing World");

    self.components.clear();
    self.systems = Vec::new();
  }

  pub fn get_storage(&self, id: ComponentId) -> Option<StorageHandle> {
    self.components.get_storage(id)
  }
}
