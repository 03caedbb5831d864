use std::{cell::RefCell, rc::Rc, time::Instant};

use microcosm::prelude::{Storage, System, World};

struct Position {
  x: f32,
  y: f32,
}

struct Velocity {
  x: f32,
  y: f32,
}

struct MovementSystem {
  positions: Rc<RefCell<Storage<Position>>>,
  velocities: Rc<RefCell<Storage<Velocity>>>,
}

impl System for MovementSystem {
  fn update(&mut self, dt: f64) {
    let velocities = self.velocities.borrow();
    let mut positions = self.positions.borrow_mut();

    for (entity, velocity) in velocities.get_all() {
      if let Ok(position) = positions.get_mut(*entity) {
        position.x += velocity.x * dt as f32;
        position.y += velocity.y * dt as f32;
      }
    }
  }
}

fn main() {
  env_logger::init();

  let mut world = World::new();

  let positions: Rc<RefCell<Storage<Position>>> = Rc::new(RefCell::new(Storage::new()));
  let velocities: Rc<RefCell<Storage<Velocity>>> = Rc::new(RefCell::new(Storage::new()));

  world.register_storage(positions.clone());
  world.register_storage(velocities.clone());

  for i in 0..100_000 {
    let entity = world.create_entity();
    positions.borrow_mut().add(
      entity,
      Position {
        x: i as f32,
        y: 0.0,
      },
    );
    velocities.borrow_mut().add(entity, Velocity { x: 1.0, y: 1.0 });
  }

  world.add_system(MovementSystem {
    positions: positions.clone(),
    velocities: velocities.clone(),
  });

  let start = Instant::now();

  for _ in 0..100 {
    world.update(1.0 / 60.0);
  }

  println!("{:?}", start.elapsed());
}
