use ndarray::array;
use rand::{rngs::StdRng, SeedableRng};

use gdlab::{ActivationType, Dense, Layer, WeightInitStrategy};

#[test]
fn test_layer_initialization() {
    let mut rng = StdRng::seed_from_u64(4);
    let layer = Dense::new(3, 4, ActivationType::ReLU, WeightInitStrategy::Xavier, &mut rng);

    assert_eq!(layer.params().inputs, 3);
    assert_eq!(layer.params().neurons, 4);
    assert_eq!(layer.params().weights.len(), 3 * 4);
    assert_eq!(layer.params().bias, array![0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_xavier_weights_within_limit() {
    let mut rng = StdRng::seed_from_u64(4);
    let layer = Dense::new(10, 5, ActivationType::Tanh, WeightInitStrategy::Xavier, &mut rng);
    let limit = (6.0_f64 / 15.0).sqrt();

    assert!(layer.params().weights.iter().all(|w| w.abs() <= limit));
}

#[test]
fn test_forward_relu_non_negative() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut layer = Dense::new(3, 2, ActivationType::ReLU, WeightInitStrategy::HeNormal, &mut rng);

    let output = layer.forward(&array![[1.0, 2.0, 3.0], [-1.0, 0.5, -2.0]]);

    assert_eq!(output.dim(), (2, 2));
    assert!(output.iter().all(|&v| v >= 0.0));
}

#[test]
fn test_boxed_layer_clone_is_independent() {
    let mut rng = StdRng::seed_from_u64(4);
    let layer: Box<dyn Layer> = Box::new(Dense::new(2, 2, ActivationType::Linear, WeightInitStrategy::Random, &mut rng));
    let mut copy = layer.clone();

    copy.params_mut().weights.fill(0.0);
    assert!(layer.params().weights.iter().any(|&w| w != 0.0));
}
