use rand::RngCore;

use super::neuron::Neuron;

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new(neurons: Vec<Neuron>) -> Self {
        assert!(!neurons.is_empty());

        let input_size = neurons[0].weights.len();
        assert!(neurons.iter().all(|n| n.weights.len() == input_size));

        Self { neurons }
    }

    pub fn random(input_size: usize, output_size: usize, rng: &mut dyn RngCore) -> Self {
        assert!(output_size > 0);

        let neurons = (0..output_size)
            .map(|_| Neuron::random(input_size, rng))
            .collect();

        Self { neurons }
    }

    pub(crate) fn from_weights(
        input_size: usize,
        output_size: usize,
        weights: &mut dyn Iterator<Item = f32>,
    ) -> Self {
        let neurons = (0..output_size)
            .map(|_| Neuron::from_weights(input_size, weights))
            .collect();

        Self::new(neurons)
    }

    pub fn propagate(&self, inputs: Vec<f32>) -> Vec<f32> {
        self.neurons
            .iter()
            .map(|neuron| neuron.propagate(&inputs))
            .collect()
    }
}
