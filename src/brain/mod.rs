//! Feed-forward neural network
//!
//! Fully connected layers of ReLU neurons. A network can be flattened into
//! a plain weight vector and rebuilt from one, which is how brains travel
//! through the genetic algorithm as chromosomes.

mod layer;
mod neuron;

pub use layer::Layer;
pub use neuron::Neuron;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::error::{AviaryError, Result};

/// Width of one network layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerTopology {
    pub neurons: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    pub fn new(layers: Vec<Layer>) -> Self {
        assert!(!layers.is_empty());

        Self { layers }
    }

    /// Random network with one layer per adjacent pair of topologies
    pub fn random(topology: &[LayerTopology], rng: &mut dyn RngCore) -> Self {
        assert!(topology.len() > 1);
        assert!(topology.iter().all(|layer| layer.neurons > 0));

        let layers = topology
            .windows(2)
            .map(|pair| Layer::random(pair[0].neurons, pair[1].neurons, rng))
            .collect();

        Self { layers }
    }

    /// Number of weights (biases included) a network of this shape holds
    pub fn weight_count(topology: &[LayerTopology]) -> usize {
        topology
            .windows(2)
            .map(|pair| (pair[0].neurons + 1) * pair[1].neurons)
            .sum()
    }

    /// Rebuild a network from a flat weight vector produced by [`Network::weights`]
    pub fn from_weights(topology: &[LayerTopology], weights: impl IntoIterator<Item = f32>) -> Result<Self> {
        assert!(topology.len() > 1);

        if let Some(index) = topology.iter().position(|layer| layer.neurons == 0) {
            return Err(AviaryError::InvalidTopology(format!(
                "layer {} has no neurons",
                index
            )));
        }

        let weights: Vec<f32> = weights.into_iter().collect();
        let expected = Self::weight_count(topology);
        if weights.len() != expected {
            return Err(AviaryError::WeightCount {
                expected,
                actual: weights.len(),
            });
        }

        let mut stream = weights.into_iter();
        let layers = topology
            .windows(2)
            .map(|pair| Layer::from_weights(pair[0].neurons, pair[1].neurons, &mut stream))
            .collect();

        Ok(Self { layers })
    }

    /// Flatten to `bias, weights...` per neuron, layer by layer
    pub fn weights(&self) -> impl Iterator<Item = f32> + '_ {
        self.layers
            .iter()
            .flat_map(|layer| layer.neurons.iter())
            .flat_map(|neuron| std::iter::once(&neuron.bias).chain(&neuron.weights))
            .copied()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn propagate(&self, inputs: Vec<f32>) -> Vec<f32> {
        self.layers
            .iter()
            .fold(inputs, |inputs, layer| layer.propagate(inputs))
    }
}
