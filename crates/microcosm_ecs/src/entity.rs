#[cfg(feature = "debug")]
use log::trace;

use crate::EntityId;

/// Issues entity ids and recycles destroyed ones.
///
/// Ids are opaque handles; all entity state lives in component
/// storages keyed by the id. Uniqueness only holds among currently
/// live entities, destroyed ids are reused most recent first.
#[derive(Default)]
pub struct EntityManager {
  top_id: EntityId,
  recycled: Vec<EntityId>,
}

impl EntityManager {
  pub fn new() -> Self {
    EntityManager::default()
  }

  /// Returns an id no live entity currently holds. The first id ever
  /// issued is 1.
  pub fn create(&mut self) -> EntityId {
    #[cfg(feature = "debug")]
    trace!("Creating Entity");

    if let Some(id) = self.recycled.pop() {
      return id;
    }

    self.top_id += 1;
    self.top_id
  }

  /// Recycles `entity` for a future `create`.
  ///
  /// The id is not checked against the set of issued or live ids.
  /// Destroying the same id twice, or an id that was never issued,
  /// makes `create` hand out duplicates later.
  pub fn destroy(&mut self, entity: EntityId) {
    #[cfg(feature = "debug")]
    trace!("Destroying Entity {}", entity);

    self.recycled.push(entity);
  }
}
