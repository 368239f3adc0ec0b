//! Genetic algorithm
//!
//! Breeds a new population from an old one: two parents are picked by the
//! selection method, their chromosomes are combined by the crossover method,
//! and the child is perturbed by the mutation method before being rebuilt
//! into an individual. The population size never changes between generations.

pub mod chromosome;
pub mod crossover;
pub mod individual;
pub mod mutation;
pub mod selection;
pub mod statistics;

pub use chromosome::Chromosome;
pub use crossover::{CrossoverMethod, UniformCrossover};
pub use individual::Individual;
pub use mutation::{GaussianMutation, MutationMethod};
pub use selection::{RouletteWheelSelection, SelectionMethod};
pub use statistics::Statistics;

use rand::RngCore;

pub struct GeneticAlgorithm<S> {
    selection_method: S,
    crossover_method: Box<dyn CrossoverMethod>,
    mutation_method: Box<dyn MutationMethod>,
}

impl<S> GeneticAlgorithm<S>
where
    S: SelectionMethod,
{
    pub fn new(
        selection_method: S,
        crossover_method: impl CrossoverMethod + 'static,
        mutation_method: impl MutationMethod + 'static,
    ) -> Self {
        Self {
            selection_method,
            crossover_method: Box::new(crossover_method),
            mutation_method: Box::new(mutation_method),
        }
    }

    /// Breed the next generation; panics on an empty population
    pub fn evolve<I>(&self, rng: &mut dyn RngCore, population: &[I]) -> Vec<I>
    where
        I: Individual,
    {
        assert!(!population.is_empty());

        (0..population.len())
            .map(|_| {
                let parent_a = self.selection_method.select(rng, population).chromosome();
                let parent_b = self.selection_method.select(rng, population).chromosome();

                let mut child = self.crossover_method.crossover(rng, parent_a, parent_b);
                self.mutation_method.mutate(rng, &mut child);

                I::create(child)
            })
            .collect()
    }

    /// Like [`GeneticAlgorithm::evolve`], also summarizing the parent generation
    pub fn evolve_with_stats<I>(&self, rng: &mut dyn RngCore, population: &[I]) -> (Vec<I>, Statistics)
    where
        I: Individual,
    {
        let stats = Statistics::new(population);
        let next = self.evolve(rng, population);

        tracing::debug!(
            population = population.len(),
            min = stats.min_fitness,
            max = stats.max_fitness,
            avg = stats.avg_fitness,
            "evolved generation"
        );

        (next, stats)
    }
}
