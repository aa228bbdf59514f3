use ndarray::{Array1, Array2, Axis};
use rand::Rng;

use super::{Layer, LayerParams, WeightInitStrategy};
use crate::activation::ActivationType;

/// Fully connected layer: `activation(input · weights + bias)`.
#[derive(Debug, Clone)]
pub struct Dense {
    pub params: LayerParams,
}

impl Dense {
    pub fn new<R: Rng>(
        inputs: usize,
        neurons: usize,
        activation: ActivationType,
        weight_init: WeightInitStrategy,
        rng: &mut R,
    ) -> Self {
        let weights = weight_init.weights(inputs, neurons, rng);
        Self::with_weights(weights, Array1::zeros(neurons), activation)
    }

    /// Builds a layer around known parameters, `weights` is (inputs × neurons).
    pub fn with_weights(weights: Array2<f64>, bias: Array1<f64>, activation: ActivationType) -> Self {
        let (inputs, neurons) = weights.dim();
        assert_eq!(bias.len(), neurons, "Bias size does not match layer's neuron count");

        let params = LayerParams {
            neurons,
            inputs,
            weights,
            bias,
            activation,
            weight_grads: Array2::zeros((inputs, neurons)),
            bias_grads: Array1::zeros(neurons),
            input_cache: Array2::zeros((0, inputs)),
            preactivation_cache: Array2::zeros((0, neurons)),
        };

        Dense { params }
    }

    fn preactivation(&self, input: &Array2<f64>) -> Array2<f64> {
        assert_eq!(
            input.ncols(),
            self.params.inputs,
            "Input size does not match layer's input size"
        );

        input.dot(&self.params.weights) + &self.params.bias
    }
}

impl Layer for Dense {
    fn forward(&mut self, input: &Array2<f64>) -> Array2<f64> {
        let z = self.preactivation(input);
        let activation = self.params.activation;
        let output = z.mapv(|v| activation.apply(v));

        self.params.input_cache = input.clone();
        self.params.preactivation_cache = z;
        output
    }

    fn predict(&self, input: &Array2<f64>) -> Array2<f64> {
        let activation = self.params.activation;
        self.preactivation(input).mapv(|v| activation.apply(v))
    }

    fn backward(&mut self, grad_output: &Array2<f64>) -> Array2<f64> {
        let activation = self.params.activation;
        let dz = grad_output * &self.params.preactivation_cache.mapv(|v| activation.derivative(v));

        self.params.weight_grads = self.params.input_cache.t().dot(&dz);
        self.params.bias_grads = dz.sum_axis(Axis(0));

        // (batch × neurons) · (neurons × inputs)
        dz.dot(&self.params.weights.t())
    }

    fn update(&mut self, learning_rate: f64) {
        let params = &mut self.params;
        params.weights.scaled_add(-learning_rate, &params.weight_grads);
        params.bias.scaled_add(-learning_rate, &params.bias_grads);
    }

    fn clone_box(&self) -> Box<dyn Layer> {
        Box::new(self.clone())
    }

    fn params(&self) -> &LayerParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut LayerParams {
        &mut self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_layer_initialization() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Dense::new(3, 4, ActivationType::ReLU, WeightInitStrategy::Xavier, &mut rng);

        assert_eq!(layer.params.inputs, 3);
        assert_eq!(layer.params.neurons, 4);
        assert_eq!(layer.params.weights.dim(), (3, 4));
        assert_eq!(layer.params.bias.len(), 4);
        assert_eq!(layer.parameter_count(), 3 * 4 + 4);
    }

    #[test]
    fn test_weight_initialization_strategies() {
        let strategies = vec![
            WeightInitStrategy::Random,
            WeightInitStrategy::Xavier,
            WeightInitStrategy::HeNormal,
        ];

        for strategy in strategies {
            let mut rng = StdRng::seed_from_u64(11);
            let layer = Dense::new(3, 4, ActivationType::ReLU, strategy, &mut rng);

            assert!(
                layer.params.weights.iter().any(|&w| w != 0.0),
                "Failed with strategy: {:?}",
                strategy
            );
        }
    }

    #[test]
    fn test_forward_known_weights() {
        let mut layer = Dense::with_weights(
            array![[1.0, -1.0], [2.0, 0.5]],
            array![0.5, 0.0],
            ActivationType::ReLU,
        );

        let output = layer.forward(&array![[1.0, 1.0], [0.0, -2.0]]);
        // z = [[3.5, -0.5], [-3.5, -1.0]]
        assert_eq!(output, array![[3.5, 0.0], [0.0, 0.0]]);
        assert_eq!(output, layer.predict(&array![[1.0, 1.0], [0.0, -2.0]]));
    }

    #[test]
    #[should_panic(expected = "Input size does not match layer's input size")]
    fn test_forward_invalid_input_size() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Dense::new(3, 2, ActivationType::ReLU, WeightInitStrategy::Xavier, &mut rng);

        layer.predict(&array![[1.0, 2.0]]);
    }

    #[test]
    fn test_backward_linear_gradients() {
        let mut layer = Dense::with_weights(array![[2.0], [-1.0]], array![0.0], ActivationType::Linear);
        let input = array![[1.0, 3.0]];

        layer.forward(&input);
        let grad_input = layer.backward(&array![[0.5]]);

        assert_eq!(layer.params.weight_grads, array![[0.5], [1.5]]);
        assert_eq!(layer.params.bias_grads, array![0.5]);
        assert_eq!(grad_input, array![[1.0, -0.5]]);

        layer.update(0.1);
        let expected = array![[1.95], [-1.15]];
        assert!((&layer.params.weights - &expected).iter().all(|d| d.abs() < 1e-12));
        assert!((layer.params.bias[0] + 0.05).abs() < 1e-12);
    }
}
