use glam::Vec2;
use rand::{Rng, RngCore};

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub(crate) position: Vec2,
}

impl Food {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self {
            position: Vec2::new(rng.gen(), rng.gen()),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}
