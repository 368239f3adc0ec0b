//! Frozen, renderer-facing view of the world
//!
//! Snapshots hold plain copies, never references back into the simulation,
//! so a renderer cannot observe or cause mutation while drawing.

use serde::{Deserialize, Serialize};

use super::world::World;
use super::Simulation;

/// One animal as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimalView {
    /// Normalized horizontal position, conventionally in [0, 1]
    pub x: f32,
    /// Normalized vertical position, conventionally in [0, 1]
    pub y: f32,
    /// Heading in radians
    pub rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodView {
    pub x: f32,
    pub y: f32,
}

/// Entities in provider order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub animals: Vec<AnimalView>,
    pub food: Vec<FoodView>,
}

/// Source of world snapshots for rendering.
///
/// A snapshot is taken fresh on every call; callers must not assume two
/// calls return the same entities.
pub trait WorldProvider {
    fn snapshot(&self) -> WorldSnapshot;
}

impl From<&World> for WorldSnapshot {
    fn from(world: &World) -> Self {
        let animals = world
            .animals()
            .iter()
            .map(|animal| AnimalView {
                x: animal.position().x,
                y: animal.position().y,
                rotation: animal.rotation(),
            })
            .collect();

        let food = world
            .food()
            .iter()
            .map(|food| FoodView {
                x: food.position().x,
                y: food.position().y,
            })
            .collect();

        Self { animals, food }
    }
}

impl WorldProvider for World {
    fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::from(self)
    }
}

impl WorldProvider for Simulation {
    fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::from(self.world())
    }
}

impl WorldProvider for WorldSnapshot {
    fn snapshot(&self) -> WorldSnapshot {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{Animal, Food};
    use glam::Vec2;

    #[test]
    fn test_snapshot_preserves_order_and_values() {
        let world = World::new(
            vec![
                Animal::new(Vec2::new(0.1, 0.2), 0.3, 0.02),
                Animal::new(Vec2::new(0.9, 0.8), 1.5, 0.02),
            ],
            vec![Food::new(Vec2::new(0.4, 0.6))],
        );

        let snapshot = world.snapshot();
        assert_eq!(
            snapshot.animals,
            vec![
                AnimalView { x: 0.1, y: 0.2, rotation: 0.3 },
                AnimalView { x: 0.9, y: 0.8, rotation: 1.5 },
            ]
        );
        assert_eq!(snapshot.food, vec![FoodView { x: 0.4, y: 0.6 }]);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let snapshot = WorldSnapshot {
            animals: vec![AnimalView { x: 0.5, y: 0.25, rotation: 0.0 }],
            food: vec![],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert!(json.contains("\"rotation\":0.0"));
    }
}
