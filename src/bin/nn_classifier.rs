use anyhow::Result;
use log::info;
use ndarray::{array, Axis};

use gdlab::dataset;
use gdlab::features::zscore_normalize;
use gdlab::plot;
use gdlab::{ActivationType, Hyperparameters, LayerConfig, Loss, Model, WeightInitStrategy};

const SEED: u64 = 1234;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data = dataset::coffee_roasting(200, SEED);
    let normalized = zscore_normalize(&data.x);
    let target = data.y.clone().insert_axis(Axis(1));
    info!("Temperature mean {:0.2}, Duration mean {:0.2}", normalized.mu[0], normalized.mu[1]);

    let mut model = Model::new(
        &[
            LayerConfig::new(2, 3, ActivationType::Sigmoid),
            LayerConfig::new(3, 1, ActivationType::Sigmoid),
        ],
        Loss::BinaryCrossEntropy,
        WeightInitStrategy::Xavier,
        SEED,
    );
    println!("Model with {} parameters", model.parameter_count());

    let losses = model.fit(&normalized.x_norm, &target, &Hyperparameters::new(1.0, 5000));
    println!("Final loss {:0.4}", losses.last().copied().unwrap_or(f64::NAN));

    for (i, layer) in model.layers.iter().enumerate() {
        let params = layer.params();
        println!("W{}:\n{:0.3}\nb{}: {:0.3}", i + 1, params.weights, i + 1, params.bias);
    }

    let probabilities = model.predict(&normalized.x_norm);
    let correct = probabilities
        .iter()
        .zip(data.y.iter())
        .filter(|(p, y)| (**p >= 0.5) == (**y == 1.0))
        .count();
    println!("Training accuracy {:0.1}%", 100.0 * correct as f64 / data.len() as f64);

    let tests = array![[200.0, 13.9], [200.0, 17.0]];
    let decisions = model.predict(&normalized.apply(&tests));
    for (row, p) in tests.rows().into_iter().zip(decisions.iter()) {
        println!(
            "{:.0}C for {:.1} minutes: probability {:0.3}, decision {}",
            row[0],
            row[1],
            p,
            u8::from(*p >= 0.5)
        );
    }

    plot::decision_surface("plots/coffee_roasting.svg", "Coffee Roasting", &data.x, &data.y, |grid| {
        model.predict(&normalized.apply(grid))
    })?;
    plot::cost_history("plots/coffee_roasting_loss.svg", "Loss vs. epoch", &losses)?;

    Ok(())
}
