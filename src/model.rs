use log::{debug, info};
use ndarray::Array2;
use rand::{rngs::StdRng, SeedableRng};

use crate::activation::ActivationType;
use crate::layers::{Dense, Layer, WeightInitStrategy};
use crate::optimizer::progress_interval;
use crate::{Hyperparameters, Loss};

/// A small feed forward network trained with full batch gradient descent.
#[derive(Debug, Clone)]
pub struct Model {
    pub layers: Vec<Box<dyn Layer>>,
    pub loss: Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerConfig {
    pub inputs: usize,
    pub neurons: usize,
    pub activation: ActivationType,
}

impl LayerConfig {
    pub fn new(inputs: usize, neurons: usize, activation: ActivationType) -> Self {
        LayerConfig {
            inputs,
            neurons,
            activation,
        }
    }
}

impl Model {
    /// Create a new neural network model with specified layer configurations
    ///
    /// # Arguments
    ///
    /// * `layer_configs` - Layers from input to output
    /// * `loss` - Loss minimized by `train_step`
    /// * `weight_init` - Weight initialization strategy for every layer
    /// * `seed` - Seed of the generator drawing the initial weights
    pub fn new(
        layer_configs: &[LayerConfig],
        loss: Loss,
        weight_init: WeightInitStrategy,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let layers = layer_configs
            .iter()
            .map(|config| {
                Box::new(Dense::new(
                    config.inputs,
                    config.neurons,
                    config.activation,
                    weight_init,
                    &mut rng,
                )) as Box<dyn Layer>
            })
            .collect();

        Model { layers, loss }
    }

    /// Pure forward pass over a batch, one example per row
    pub fn predict(&self, input: &Array2<f64>) -> Array2<f64> {
        self.layers
            .iter()
            .fold(input.clone(), |current, layer| layer.predict(&current))
    }

    fn forward(&mut self, input: &Array2<f64>) -> Array2<f64> {
        let mut current = input.clone();
        for layer in &mut self.layers {
            current = layer.forward(&current);
        }
        current
    }

    fn backward(&mut self, output: &Array2<f64>, target: &Array2<f64>) {
        let mut grad = self.loss.gradient(output, target);
        for layer in self.layers.iter_mut().rev() {
            grad = layer.backward(&grad);
        }
    }

    /// One full batch step: every gradient is computed from the current
    /// parameters before any layer is updated. Returns the loss before the
    /// update.
    pub fn train_step(&mut self, input: &Array2<f64>, target: &Array2<f64>, learning_rate: f64) -> f64 {
        let output = self.forward(input);
        let loss = self.loss.calculate(&output, target);

        self.backward(&output, target);
        for layer in &mut self.layers {
            layer.update(learning_rate);
        }

        loss
    }

    /// Trains for `hp.iterations` epochs and returns the loss of each one.
    pub fn fit(&mut self, input: &Array2<f64>, target: &Array2<f64>, hp: &Hyperparameters) -> Vec<f64> {
        let interval = progress_interval(hp.iterations);
        let mut losses = Vec::with_capacity(hp.iterations);

        for epoch in 0..hp.iterations {
            let loss = self.train_step(input, target, hp.learning_rate);
            losses.push(loss);

            if epoch % interval == 0 {
                info!("Epoch {epoch:>6}: Loss {loss:0.4e}");
            }
        }

        debug!("Finished {} epochs with {} parameters", hp.iterations, self.parameter_count());
        losses
    }

    pub fn calculate_loss(&self, input: &Array2<f64>, target: &Array2<f64>) -> f64 {
        self.loss.calculate(&self.predict(input), target)
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.parameter_count()).sum()
    }
}
