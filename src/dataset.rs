use ndarray::{array, Array1, Array2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::{GdError, Result};

/// A training set: inputs `x` (one entry or row per example) and targets `y`.
#[derive(Debug, Clone)]
pub struct Dataset<X> {
    pub x: X,
    pub y: Array1<f64>,
}

impl Dataset<Array1<f64>> {
    pub fn univariate(x: Vec<f64>, y: Vec<f64>) -> Self {
        Dataset {
            x: Array1::from_vec(x),
            y: Array1::from_vec(y),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl Dataset<Array2<f64>> {
    /// Builds a multi-feature set from row vectors. Ragged rows are a shape error.
    pub fn from_rows(rows: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let x = Array2::from_shape_vec((nrows, ncols), flat)?;

        if y.len() != nrows {
            return Err(GdError::SizeMismatch {
                what: "targets",
                got: y.len(),
                expected: nrows,
            });
        }

        Ok(Dataset {
            x,
            y: Array1::from_vec(y),
        })
    }

    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    pub fn features(&self) -> usize {
        self.x.ncols()
    }
}

/// Two houses: 1000 sqft for 300k and 2000 sqft for 500k.
pub fn house_prices() -> Dataset<Array1<f64>> {
    Dataset::univariate(vec![1.0, 2.0], vec![300.0, 500.0])
}

/// Size (sqft), bedrooms, floors and age of three houses with their prices in 1000s.
pub fn house_features() -> Dataset<Array2<f64>> {
    Dataset {
        x: array![
            [2104.0, 5.0, 1.0, 45.0],
            [1416.0, 3.0, 2.0, 40.0],
            [852.0, 2.0, 1.0, 35.0]
        ],
        y: array![460.0, 232.0, 178.0],
    }
}

/// `y = 1 + x²` sampled at `x = 0, 1, …, n - 1`.
pub fn quadratic_curve(n: usize) -> Dataset<Array1<f64>> {
    let x = Array1::from_iter((0..n).map(|i| i as f64));
    let y = x.mapv(|v| 1.0 + v * v);
    Dataset { x, y }
}

/// `n` samples of `y = a x + c` with `x` uniform in `[0, 10)` and optional
/// gaussian noise of standard deviation `noise`.
pub fn synthetic_line(a: f64, c: f64, n: usize, noise: f64, seed: u64) -> Dataset<Array1<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = Array1::from_shape_fn(n, |_| rng.random_range(0.0..10.0));
    let y = x.mapv(|v| {
        let eps: f64 = if noise > 0.0 { rng.sample(StandardNormal) } else { 0.0 };
        a * v + c + noise * eps
    });

    Dataset { x, y }
}

/// Roasting temperature (Celsius) and duration (minutes) with label 1 for a
/// good roast.
///
/// A roast is good inside the band of temperatures 175..260 and durations
/// 12..15 minutes where the duration limit shrinks as the temperature rises.
pub fn coffee_roasting(n: usize, seed: u64) -> Dataset<Array2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x = Array2::zeros((n, 2));
    let mut y = Array1::zeros(n);

    for i in 0..n {
        let temperature = rng.random_range(150.0..285.0);
        let duration = rng.random_range(11.5..15.5);
        x[[i, 0]] = temperature;
        x[[i, 1]] = duration;

        let line = -3.0 / (260.0 - 175.0) * temperature + 21.0;
        let good = temperature > 175.0 && temperature < 260.0 && duration > 12.0 && duration < line;
        y[i] = if good { 1.0 } else { 0.0 };
    }

    Dataset { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let dataset = Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![0.0, 1.0]).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.features(), 2);
        assert_eq!(dataset.x[[1, 0]], 3.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0]], vec![0.0, 1.0]);
        assert!(matches!(result, Err(GdError::Shape(_))));
    }

    #[test]
    fn test_from_rows_target_mismatch() {
        let result = Dataset::from_rows(vec![vec![1.0], vec![3.0]], vec![0.0]);
        assert!(matches!(
            result,
            Err(GdError::SizeMismatch {
                got: 1,
                expected: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_synthetic_line_is_seeded() {
        let a = synthetic_line(2.0, 1.0, 20, 0.5, 7);
        let b = synthetic_line(2.0, 1.0, 20, 0.5, 7);
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn test_synthetic_line_noise_free() {
        let data = synthetic_line(3.0, -4.0, 10, 0.0, 1);
        for (x, y) in data.x.iter().zip(data.y.iter()) {
            assert_eq!(*y, 3.0 * x - 4.0);
        }
    }

    #[test]
    fn test_coffee_roasting_has_both_labels() {
        let data = coffee_roasting(200, 2);
        let good = data.y.iter().filter(|&&v| v == 1.0).count();

        assert_eq!(data.len(), 200);
        assert!(good > 0 && good < 200);
    }

    #[test]
    fn test_quadratic_curve() {
        let data = quadratic_curve(4);
        assert_eq!(data.y.to_vec(), vec![1.0, 2.0, 5.0, 10.0]);
    }
}
