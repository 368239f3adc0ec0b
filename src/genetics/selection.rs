use rand::seq::SliceRandom;
use rand::RngCore;

use super::individual::Individual;

pub trait SelectionMethod {
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> &'a I
    where
        I: Individual;
}

/// Fitness-proportionate selection
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionMethod for RouletteWheelSelection {
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> &'a I
    where
        I: Individual,
    {
        population
            .choose_weighted(rng, |individual| individual.fitness().max(0.0))
            .expect("got an empty population or no positive fitness")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::individual::TestIndividual;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeMap;

    #[test]
    fn test_select_follows_fitness_proportions() {
        let method = RouletteWheelSelection::new();
        let mut rng = ChaCha8Rng::from_seed(Default::default());
        let population = vec![
            TestIndividual::new(2.0),
            TestIndividual::new(1.0),
            TestIndividual::new(4.0),
            TestIndividual::new(3.0),
        ];

        let histogram: BTreeMap<i32, u32> = (0..10_000)
            .map(|_| method.select(&mut rng, &population))
            .fold(BTreeMap::new(), |mut histogram, individual| {
                *histogram.entry(individual.fitness() as i32).or_default() += 1;
                histogram
            });

        // Expected shares are fitness / 10; allow sampling noise
        for (fitness, count) in histogram {
            let share = count as f32 / 10_000.0;
            let expected = fitness as f32 / 10.0;
            assert!(
                (share - expected).abs() < 0.03,
                "fitness {} chosen {:.3} of the time, expected ~{:.1}",
                fitness,
                share,
                expected
            );
        }
    }

    #[test]
    fn test_zero_fitness_never_selected() {
        let method = RouletteWheelSelection::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let population = vec![TestIndividual::new(0.0), TestIndividual::new(1.0)];

        for _ in 0..100 {
            assert_eq!(method.select(&mut rng, &population).fitness(), 1.0);
        }
    }

    #[test]
    #[should_panic]
    fn test_empty_population_panics() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        RouletteWheelSelection::new().select(&mut rng, &Vec::<TestIndividual>::new());
    }
}
