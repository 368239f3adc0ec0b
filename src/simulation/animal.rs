use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, RngCore};

/// A flying animal in the unit-square world
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    /// Normalized position, each axis in [0, 1)
    pub(crate) position: Vec2,
    /// Heading in radians
    pub(crate) rotation: f32,
    /// Distance covered per step, in world units
    pub(crate) speed: f32,
}

impl Animal {
    pub fn new(position: Vec2, rotation: f32, speed: f32) -> Self {
        Self {
            position,
            rotation,
            speed,
        }
    }

    /// Uniform position in the unit square, uniform heading in [0, 2π)
    pub fn random(rng: &mut dyn RngCore, speed: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen(), rng.gen()),
            rotation: rng.gen_range(0.0..TAU),
            speed,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Unit vector the animal is facing
    pub fn heading(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    /// Move one step forward, wrapping around the world edges
    pub(crate) fn advance(&mut self) {
        self.position += self.heading() * self.speed;
        self.position.x = wrap(self.position.x);
        self.position.y = wrap(self.position.y);
    }
}

/// Wrap a coordinate into [0, 1)
fn wrap(value: f32) -> f32 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
