use rand::RngCore;

use super::animal::Animal;
use super::food::Food;
use crate::core::config::SimulationConfig;

#[derive(Debug, Clone, Default)]
pub struct World {
    pub(crate) animals: Vec<Animal>,
    pub(crate) food: Vec<Food>,
}

impl World {
    pub fn new(animals: Vec<Animal>, food: Vec<Food>) -> Self {
        Self { animals, food }
    }

    pub fn random(rng: &mut dyn RngCore, config: &SimulationConfig) -> Self {
        let animals = (0..config.animal_count)
            .map(|_| Animal::random(rng, config.animal_speed))
            .collect();

        let food = (0..config.food_count).map(|_| Food::random(rng)).collect();

        Self { animals, food }
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }
}
