use ndarray::{Array1, Array2, Axis};

/// Columns `x, x², …, x^degree`.
pub fn polynomial_features(x: &Array1<f64>, degree: u32) -> Array2<f64> {
    let exponents: Vec<i32> = (1..=degree as i32).collect();
    engineered_features(x, &exponents)
}

/// One column per exponent, `x^e`.
pub fn engineered_features(x: &Array1<f64>, exponents: &[i32]) -> Array2<f64> {
    Array2::from_shape_fn((x.len(), exponents.len()), |(i, j)| x[i].powi(exponents[j]))
}

/// Per-column range `max - min`.
pub fn peak_to_peak(x: &Array2<f64>) -> Array1<f64> {
    x.map_axis(Axis(0), |col| {
        let max = col.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        let min = col.fold(f64::INFINITY, |acc, &v| acc.min(v));
        max - min
    })
}

/// Z-score normalized features with the statistics used to produce them.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub x_norm: Array2<f64>,
    pub mu: Array1<f64>,
    pub sigma: Array1<f64>,
}

impl Normalized {
    /// Scales new rows with the stored mean and standard deviation.
    pub fn apply(&self, x: &Array2<f64>) -> Array2<f64> {
        (x - &self.mu) / &self.sigma
    }

    /// Scales a single row.
    pub fn apply_row(&self, x: &Array1<f64>) -> Array1<f64> {
        (x - &self.mu) / &self.sigma
    }
}

/// Centers every column on its mean and divides by its population standard
/// deviation. A constant column ends up as NaN.
pub fn zscore_normalize(x: &Array2<f64>) -> Normalized {
    let mu = x
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::from_elem(x.ncols(), f64::NAN));
    let sigma = x.std_axis(Axis(0), 0.0);
    let x_norm = (x - &mu) / &sigma;

    Normalized { x_norm, mu, sigma }
}
