use anyhow::Result;
use log::info;
use ndarray::{array, Array1};

use gdlab::dataset;
use gdlab::features::{peak_to_peak, zscore_normalize};
use gdlab::plot;
use gdlab::regression::{compute_cost_multi, compute_gradient_multi};
use gdlab::{GradientDescent, LinearModel};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data = dataset::house_features();
    let w_init = Array1::zeros(data.features());

    // Raw features need a tiny step, the size column dominates the gradient.
    let raw = GradientDescent::new(5.0e-7, 1000).run(
        &data.x,
        &data.y,
        w_init.clone(),
        0.0,
        compute_cost_multi,
        compute_gradient_multi,
    );
    println!("b,w found by gradient descent on raw features: {:0.2},{:0.2}", raw.b, raw.w);

    let normalized = zscore_normalize(&data.x);
    println!("Peak to Peak range by column in Raw        X:{}", peak_to_peak(&data.x));
    println!("Peak to Peak range by column in Normalized X:{:0.2}", peak_to_peak(&normalized.x_norm));

    let scaled = GradientDescent::new(1.0e-1, 1000).run(
        &normalized.x_norm,
        &data.y,
        w_init,
        0.0,
        compute_cost_multi,
        compute_gradient_multi,
    );
    println!("b,w found by gradient descent on normalized features: {:0.2},{:0.2}", scaled.b, scaled.w);

    let model = LinearModel::from(&scaled);
    let predictions = model.predict(&normalized.x_norm);
    for (prediction, target) in predictions.iter().zip(data.y.iter()) {
        println!("prediction: {prediction:0.2}, target value: {target}");
    }

    let house = array![1200.0, 3.0, 1.0, 40.0];
    let price = model.predict_one(&normalized.apply_row(&house));
    println!(
        "predicted price of a house with 1200 sqft, 3 bedrooms, 1 floor, 40 years old = ${:0.0}",
        price * 1000.0
    );
    info!(
        "Final costs: raw {:?}, normalized {:?}",
        raw.history.last_cost(),
        scaled.history.last_cost()
    );

    plot::cost_history("plots/multivariate_raw_cost.svg", "Cost vs. iteration (raw)", &raw.history.costs)?;
    plot::cost_history(
        "plots/multivariate_cost.svg",
        "Cost vs. iteration (normalized)",
        &scaled.history.costs,
    )?;
    plot::scatter_with_fit(
        "plots/multivariate_size.svg",
        "Price against size",
        &data.x.column(0).to_owned(),
        &data.y,
        &predictions,
    )?;

    Ok(())
}
