pub mod entity;
pub mod error;
pub mod registry;
pub mod storage;
pub mod systems;
pub mod world;

pub type Id = u64;
pub type EntityId = Id;
pub type ComponentId = u32;
