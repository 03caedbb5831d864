/// Behavior invoked once per world tick.
///
/// Systems capture handles to the storages they read and write at
/// construction time; the world only drives tick ordering.
pub trait System {
  fn update(&mut self, dt: f64);
}

pub(crate) type StoredSystem = Box<dyn System>;
