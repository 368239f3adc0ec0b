use rand::{Rng, RngCore};

use super::chromosome::Chromosome;

pub trait MutationMethod {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome);
}

/// Nudges genes by `± coeff * U[0, 1)`
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    /// Probability of changing a gene (0.0 = never, 1.0 = always)
    chance: f32,

    /// Magnitude of the change (0.0 = genes stay as they are)
    coeff: f32,
}

impl GaussianMutation {
    pub fn new(chance: f32, coeff: f32) -> Self {
        assert!((0.0..=1.0).contains(&chance));

        Self { chance, coeff }
    }
}

impl MutationMethod for GaussianMutation {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome) {
        for gene in child.iter_mut() {
            let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };

            if rng.gen_bool(self.chance as f64) {
                *gene += sign * self.coeff * rng.gen::<f32>();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn mutated(chance: f32, coeff: f32) -> Vec<f32> {
        let mut rng = ChaCha8Rng::from_seed(Default::default());
        let mut child: Chromosome = vec![1.0, 2.0, 3.0, 4.0, 5.0].into_iter().collect();

        GaussianMutation::new(chance, coeff).mutate(&mut rng, &mut child);

        child.into_iter().collect()
    }

    #[test]
    fn test_zero_chance_leaves_genes() {
        assert_eq!(mutated(0.0, 0.5), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_zero_coeff_leaves_genes() {
        assert_eq!(mutated(1.0, 0.0), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_full_chance_changes_every_gene_within_coeff() {
        let genes = [1.0, 2.0, 3.0, 4.0, 5.0];
        let actual = mutated(1.0, 0.5);

        for (gene, before) in actual.iter().zip(genes) {
            let delta = (gene - before).abs();
            assert!(delta <= 0.5, "gene moved by {}", delta);
        }
        assert_ne!(actual, genes.to_vec());
    }

    #[test]
    #[should_panic]
    fn test_chance_out_of_range_panics() {
        GaussianMutation::new(1.5, 0.1);
    }
}
