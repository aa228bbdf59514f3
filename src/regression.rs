use ndarray::{Array1, Array2};

use crate::optimizer::{Descent, Weight};

/// Predictions `w * x_i + b` for a single feature.
pub fn predict(x: &Array1<f64>, w: f64, b: f64) -> Array1<f64> {
    x.mapv(|xi| w * xi + b)
}

/// Predictions `w · x_i + b` for every row of `x`.
pub fn predict_multi(x: &Array2<f64>, w: &Array1<f64>, b: f64) -> Array1<f64> {
    x.dot(w) + b
}

/// Squared error cost `(1 / 2m) Σ (w x_i + b - y_i)²`.
pub fn compute_cost(x: &Array1<f64>, y: &Array1<f64>, w: &f64, b: f64) -> f64 {
    halved_mse(&(predict(x, *w, b) - y))
}

/// Squared error cost for multiple features.
pub fn compute_cost_multi(x: &Array2<f64>, y: &Array1<f64>, w: &Array1<f64>, b: f64) -> f64 {
    halved_mse(&(predict_multi(x, w, b) - y))
}

/// Returns `(dj_dw, dj_db)`, the mean over examples of `err_i * x_i` and `err_i`.
pub fn compute_gradient(x: &Array1<f64>, y: &Array1<f64>, w: &f64, b: f64) -> (f64, f64) {
    let m = x.len() as f64;
    let err = predict(x, *w, b) - y;

    let dj_dw = (&err * x).sum() / m;
    let dj_db = err.sum() / m;
    (dj_dw, dj_db)
}

/// Gradient of [`compute_cost_multi`], `dj_dw` has one entry per feature.
pub fn compute_gradient_multi(
    x: &Array2<f64>,
    y: &Array1<f64>,
    w: &Array1<f64>,
    b: f64,
) -> (Array1<f64>, f64) {
    let m = x.nrows() as f64;
    let err = predict_multi(x, w, b) - y;

    let dj_dw = x.t().dot(&err) / m;
    let dj_db = err.sum() / m;
    (dj_dw, dj_db)
}

// An empty residual gives 0 / 0, left as NaN.
fn halved_mse(err: &Array1<f64>) -> f64 {
    let m = err.len() as f64;
    err.mapv(|e| e * e).sum() / (2.0 * m)
}

/// Fitted linear model.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<W> {
    pub w: W,
    pub b: f64,
}

impl<W: Weight> From<&Descent<W>> for LinearModel<W> {
    fn from(descent: &Descent<W>) -> Self {
        LinearModel {
            w: descent.w.clone(),
            b: descent.b,
        }
    }
}

impl LinearModel<f64> {
    pub fn predict(&self, x: &Array1<f64>) -> Array1<f64> {
        predict(x, self.w, self.b)
    }

    pub fn predict_one(&self, x: f64) -> f64 {
        self.w * x + self.b
    }
}

impl LinearModel<Array1<f64>> {
    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        predict_multi(x, &self.w, self.b)
    }

    pub fn predict_one(&self, x: &Array1<f64>) -> f64 {
        x.dot(&self.w) + self.b
    }
}
