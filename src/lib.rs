mod activation;
pub mod dataset;
mod error;
pub mod features;
mod hyperparameters;
pub mod layers;
mod loss;
mod model;
pub mod optimizer;
pub mod plot;
pub mod regression;

pub use activation::ActivationType;
pub use error::{GdError, Result};
pub use hyperparameters::Hyperparameters;
pub use layers::{Dense, Layer, WeightInitStrategy};
pub use loss::Loss;
pub use model::{LayerConfig, Model};
pub use optimizer::{gradient_descent, Descent, GradientDescent, History, Weight};
pub use regression::LinearModel;
