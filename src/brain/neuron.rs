//! Single ReLU neuron

use rand::{Rng, RngCore};

#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub bias: f32,
    pub weights: Vec<f32>,
}

impl Neuron {
    pub fn new(bias: f32, weights: Vec<f32>) -> Self {
        assert!(!weights.is_empty());

        Self { bias, weights }
    }

    /// Random bias and weights, each uniform in [-1, 1]
    pub fn random(input_size: usize, rng: &mut dyn RngCore) -> Self {
        assert!(input_size > 0);

        let bias = rng.gen_range(-1.0..=1.0);

        let weights = (0..input_size)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();

        Self { bias, weights }
    }

    /// Rebuild a neuron from `bias, w0, w1, ...`, consuming exactly
    /// `input_size + 1` values.
    pub(crate) fn from_weights(input_size: usize, weights: &mut dyn Iterator<Item = f32>) -> Self {
        let bias = weights.next().expect("weight stream ended early");

        let weights = (0..input_size)
            .map(|_| weights.next().expect("weight stream ended early"))
            .collect();

        Self::new(bias, weights)
    }

    pub fn propagate(&self, inputs: &[f32]) -> f32 {
        assert_eq!(inputs.len(), self.weights.len());

        let output = inputs
            .iter()
            .zip(&self.weights)
            .map(|(input, weight)| input * weight)
            .sum::<f32>();

        (output + self.bias).max(0.0)
    }
}
