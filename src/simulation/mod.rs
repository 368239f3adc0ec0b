//! World Provider: owns the flock and hands out snapshots
//!
//! The world is the unit square. Animals carry a normalized position and a
//! heading; stepping moves each animal forward and wraps it at the edges.

pub mod animal;
pub mod food;
pub mod snapshot;
pub mod world;

pub use animal::Animal;
pub use food::Food;
pub use snapshot::{AnimalView, FoodView, WorldProvider, WorldSnapshot};
pub use world::World;

use rand::RngCore;

use crate::core::config::SimulationConfig;

/// Simulation step counter
pub type Tick = u64;

#[derive(Debug, Clone)]
pub struct Simulation {
    world: World,
    tick: Tick,
}

impl Simulation {
    pub fn new(world: World) -> Self {
        Self { world, tick: 0 }
    }

    pub fn random(rng: &mut dyn RngCore, config: &SimulationConfig) -> Self {
        let world = World::random(rng, config);

        tracing::info!(
            animals = world.animals().len(),
            food = world.food().len(),
            "created random world"
        );

        Self::new(world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Advance every animal by one step
    pub fn step(&mut self) {
        for animal in &mut self.world.animals {
            animal.advance();
        }
        self.tick += 1;
    }
}
