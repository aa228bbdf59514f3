pub mod dense;

use std::fmt::Debug;

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::activation::ActivationType;

#[derive(Debug, Clone)]
pub struct LayerParams {
    pub neurons: usize,
    pub inputs: usize,
    /// (inputs × neurons)
    pub weights: Array2<f64>,
    pub bias: Array1<f64>,
    pub activation: ActivationType,
    pub weight_grads: Array2<f64>,
    pub bias_grads: Array1<f64>,
    pub input_cache: Array2<f64>,
    pub preactivation_cache: Array2<f64>,
}

pub trait Layer: Debug {
    /// Batch forward pass that caches what `backward` needs.
    fn forward(&mut self, input: &Array2<f64>) -> Array2<f64>;

    /// Batch forward pass without touching the caches.
    fn predict(&self, input: &Array2<f64>) -> Array2<f64>;

    /// Stores the parameter gradients and returns the gradient with respect
    /// to the layer's input.
    fn backward(&mut self, grad_output: &Array2<f64>) -> Array2<f64>;

    /// Takes one fixed step against the stored gradients.
    fn update(&mut self, learning_rate: f64);

    fn clone_box(&self) -> Box<dyn Layer>;

    fn params(&self) -> &LayerParams;
    fn params_mut(&mut self) -> &mut LayerParams;

    fn parameter_count(&self) -> usize {
        let params = self.params();
        params.weights.len() + params.bias.len()
    }
}

impl Clone for Box<dyn Layer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Weight initialization strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightInitStrategy {
    /// Uniform random initialization between -1 and 1
    Random,

    /// Xavier/Glorot uniform initialization
    Xavier,

    /// He initialization (good for ReLU networks)
    HeNormal,
}

impl WeightInitStrategy {
    pub fn weights<R: Rng>(&self, inputs: usize, neurons: usize, rng: &mut R) -> Array2<f64> {
        match self {
            WeightInitStrategy::Random => {
                Array2::from_shape_fn((inputs, neurons), |_| rng.random_range(-1.0..1.0))
            }
            WeightInitStrategy::Xavier => {
                let limit = (6.0 / (inputs + neurons) as f64).sqrt();
                Array2::from_shape_fn((inputs, neurons), |_| rng.random_range(-limit..limit))
            }
            WeightInitStrategy::HeNormal => {
                let std_dev = (2.0 / inputs as f64).sqrt();
                Array2::from_shape_fn((inputs, neurons), |_| {
                    std_dev * rng.sample::<f64, _>(StandardNormal)
                })
            }
        }
    }
}

pub use dense::Dense;
