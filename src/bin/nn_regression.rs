use anyhow::Result;
use log::info;
use ndarray::Axis;

use gdlab::dataset;
use gdlab::features::zscore_normalize;
use gdlab::plot;
use gdlab::{ActivationType, Hyperparameters, LayerConfig, Loss, Model, WeightInitStrategy};

const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A single linear neuron is linear regression.
    let line = dataset::synthetic_line(2.0, 1.0, 50, 1.0, SEED);
    let x = line.x.clone().insert_axis(Axis(1));
    let y = line.y.clone().insert_axis(Axis(1));

    let mut linear = Model::new(
        &[LayerConfig::new(1, 1, ActivationType::Linear)],
        Loss::MeanSquaredError,
        WeightInitStrategy::Random,
        SEED,
    );
    let losses = linear.fit(&x, &y, &Hyperparameters::new(0.01, 2000));
    let params = linear.layers[0].params();
    println!(
        "Linear neuron: w = {:0.4}, b = {:0.4}, loss = {:0.4}",
        params.weights[[0, 0]],
        params.bias[0],
        losses.last().copied().unwrap_or(f64::NAN)
    );
    plot::scatter_with_fit(
        "plots/nn_linear.svg",
        "Linear neuron",
        &line.x,
        &line.y,
        &linear.predict(&x).column(0).to_owned(),
    )?;

    // A hidden ReLU layer bends the fit around a parabola.
    let curve = dataset::quadratic_curve(20);
    let normalized = zscore_normalize(&curve.x.clone().insert_axis(Axis(1)));
    let target = curve.y.clone().insert_axis(Axis(1));

    let mut network = Model::new(
        &[
            LayerConfig::new(1, 8, ActivationType::ReLU),
            LayerConfig::new(8, 1, ActivationType::Linear),
        ],
        Loss::MeanSquaredError,
        WeightInitStrategy::HeNormal,
        SEED,
    );
    let losses = network.fit(&normalized.x_norm, &target, &Hyperparameters::new(0.0005, 20000));
    info!("{} parameters in the hidden layer network", network.parameter_count());
    println!("ReLU network loss = {:0.4}", losses.last().copied().unwrap_or(f64::NAN));

    plot::scatter_with_fit(
        "plots/nn_curve.svg",
        "ReLU network",
        &curve.x,
        &curve.y,
        &network.predict(&normalized.x_norm).column(0).to_owned(),
    )?;
    plot::cost_history("plots/nn_curve_loss.svg", "Loss vs. epoch", &losses)?;

    Ok(())
}
