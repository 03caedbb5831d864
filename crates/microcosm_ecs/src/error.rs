use thiserror::Error;

use crate::EntityId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EcsError {
  #[error("entity {entity} does not have component {component}")]
  ComponentNotFound {
    entity: EntityId,
    component: &'static str,
  },
}
