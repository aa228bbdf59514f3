use ndarray::Array2;

const EPSILON: f64 = 1e-15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    MeanSquaredError,
    BinaryCrossEntropy,
}

impl Loss {
    /// Mean loss over every element of the batch
    pub fn calculate(&self, prediction: &Array2<f64>, target: &Array2<f64>) -> f64 {
        let n = prediction.len() as f64;
        match self {
            Loss::MeanSquaredError => (prediction - target).mapv(|d| d * d).sum() / n,
            Loss::BinaryCrossEntropy => {
                // -(y ln p + (1 - y) ln(1 - p)), predictions clipped away from 0 and 1
                let p = prediction.mapv(clip);
                let losses = target * &p.mapv(f64::ln) + &(1.0 - target) * &p.mapv(|v| (1.0 - v).ln());
                -losses.sum() / n
            }
        }
    }

    /// Derivative of [`Loss::calculate`] with respect to every prediction
    pub fn gradient(&self, prediction: &Array2<f64>, target: &Array2<f64>) -> Array2<f64> {
        let n = prediction.len() as f64;
        match self {
            Loss::MeanSquaredError => (prediction - target) * (2.0 / n),
            Loss::BinaryCrossEntropy => {
                let p = prediction.mapv(clip);
                (&p - target) / (&p * &(1.0 - &p)) / n
            }
        }
    }
}

fn clip(x: f64) -> f64 {
    x.clamp(EPSILON, 1.0 - EPSILON)
}
