use serde::{Deserialize, Serialize};

use crate::Result;

/// Hyperparameters for a gradient descent run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    /// Fixed step size applied to every gradient
    pub learning_rate: f64,

    /// Number of iterations (epochs for the networks)
    pub iterations: usize,
}

impl Hyperparameters {
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Hyperparameters {
            learning_rate,
            iterations,
        }
    }

    /// Reads hyperparameters from a JSON document. Missing fields take their
    /// default value.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Hyperparameters {
            learning_rate: 0.01,
            iterations: 10000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hyperparameters() {
        let hp = Hyperparameters::default();

        assert_eq!(hp.learning_rate, 0.01);
        assert_eq!(hp.iterations, 10000);
    }

    #[test]
    fn test_from_json_partial() {
        let hp = Hyperparameters::from_json(r#"{ "learning_rate": 0.1 }"#).unwrap();

        assert_eq!(hp.learning_rate, 0.1);
        assert_eq!(hp.iterations, 10000);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Hyperparameters::from_json("not json").is_err());
        assert!(Hyperparameters::from_json(r#"{ "iterations": "many" }"#).is_err());
    }

    #[test]
    fn test_from_json_sequence_form() {
        // serde also reads a struct from a JSON array in field order
        let hp = Hyperparameters::from_json("[1, 2]").unwrap();
        assert_eq!(hp, Hyperparameters::new(1.0, 2));
    }
}
