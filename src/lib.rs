pub use microcosm_ecs as ecs;

pub use microcosm_ecs::{ComponentId, EntityId, Id};

pub use log;

pub mod prelude {
  pub use microcosm_ecs::{
    error::EcsError,
    storage::{ComponentStorage, Storage, StorageHandle},
    systems::System,
    world::World,
    ComponentId, EntityId,
  };
}
