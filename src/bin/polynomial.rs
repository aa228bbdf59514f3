use anyhow::Result;
use ndarray::Array1;

use gdlab::dataset;
use gdlab::features::{engineered_features, polynomial_features, zscore_normalize};
use gdlab::plot;
use gdlab::regression::{compute_cost_multi, compute_gradient_multi};
use gdlab::{GradientDescent, LinearModel};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data = dataset::quadratic_curve(20);

    // A straight line cannot follow the curve.
    let x_linear = engineered_features(&data.x, &[1]);
    let linear = GradientDescent::new(1.0e-2, 1000).run(
        &x_linear,
        &data.y,
        Array1::zeros(1),
        0.0,
        compute_cost_multi,
        compute_gradient_multi,
    );
    println!("w,b found by gradient descent with x: {:0.4}, {:0.4}", linear.w, linear.b);
    plot::scatter_with_fit(
        "plots/polynomial_linear.svg",
        "no feature engineering",
        &data.x,
        &data.y,
        &LinearModel::from(&linear).predict(&x_linear),
    )?;

    // x² as the only feature
    let x_squared = engineered_features(&data.x, &[2]);
    let squared = GradientDescent::new(1.0e-5, 10000).run(
        &x_squared,
        &data.y,
        Array1::zeros(1),
        0.0,
        compute_cost_multi,
        compute_gradient_multi,
    );
    println!("w,b found by gradient descent with x²: {:0.4}, {:0.4}", squared.w, squared.b);
    plot::scatter_with_fit(
        "plots/polynomial_squared.svg",
        "Added x**2 feature",
        &data.x,
        &data.y,
        &LinearModel::from(&squared).predict(&x_squared),
    )?;

    // x, x², x³ scaled so one learning rate suits every column
    let normalized = zscore_normalize(&polynomial_features(&data.x, 3));
    let cubic = GradientDescent::new(1.0e-1, 100000).run(
        &normalized.x_norm,
        &data.y,
        Array1::zeros(3),
        0.0,
        compute_cost_multi,
        compute_gradient_multi,
    );
    println!("w,b found by gradient descent with normalized x, x², x³: {:0.4}, {:0.4}", cubic.w, cubic.b);
    plot::scatter_with_fit(
        "plots/polynomial_normalized.svg",
        "Normalized x, x**2, x**3 features",
        &data.x,
        &data.y,
        &LinearModel::from(&cubic).predict(&normalized.x_norm),
    )?;
    plot::cost_history("plots/polynomial_cost.svg", "Cost vs. iteration", &cubic.history.costs)?;

    Ok(())
}
