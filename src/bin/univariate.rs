use anyhow::Result;
use log::info;

use gdlab::dataset;
use gdlab::plot;
use gdlab::regression::{compute_cost, compute_gradient};
use gdlab::{GradientDescent, Hyperparameters, LinearModel};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // size in 1000 sqft, price in 1000s of dollars
    let data = dataset::house_prices();
    let hp = Hyperparameters::default();
    info!("Training on {} examples with {:?}", data.len(), hp);

    let descent = GradientDescent::from_hyperparameters(&hp).run(
        &data.x,
        &data.y,
        0.0,
        0.0,
        compute_cost,
        compute_gradient,
    );
    println!("(w,b) found by gradient descent: ({:8.4},{:8.4})", descent.w, descent.b);

    let model = LinearModel::from(&descent);
    for size in [1.0, 1.2, 2.0] {
        println!(
            "{:.0} sqft house prediction {:.1} Thousand dollars",
            size * 1000.0,
            model.predict_one(size)
        );
    }

    plot::scatter_with_fit(
        "plots/univariate_fit.svg",
        "Housing Prices",
        &data.x,
        &data.y,
        &model.predict(&data.x),
    )?;
    plot::cost_history("plots/univariate_cost.svg", "Cost vs. iteration", &descent.history.costs)?;

    Ok(())
}
