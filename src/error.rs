use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, GdError>;

/// Failures at the edges of the crate: building arrays, reading
/// configuration and rendering plots. The numeric routines never return it.
#[derive(Debug)]
pub enum GdError {
    Shape(ndarray::ShapeError),
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    Config(serde_json::Error),
    Plot(String),
    Io(std::io::Error),
}

impl Display for GdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GdError::Shape(err) => write!(f, "Invalid array shape: {err}"),
            GdError::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch in {what}, got {got} and expected {expected}"
            ),
            GdError::Config(err) => write!(f, "Failed to parse hyperparameters: {err}"),
            GdError::Plot(msg) => write!(f, "Failed to draw plot: {msg}"),
            GdError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl Error for GdError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GdError::Shape(err) => Some(err),
            GdError::Config(err) => Some(err),
            GdError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for GdError {
    fn from(err: ndarray::ShapeError) -> Self {
        GdError::Shape(err)
    }
}

impl From<serde_json::Error> for GdError {
    fn from(err: serde_json::Error) -> Self {
        GdError::Config(err)
    }
}

impl From<std::io::Error> for GdError {
    fn from(err: std::io::Error) -> Self {
        GdError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_display() {
        let err = GdError::SizeMismatch {
            what: "targets",
            got: 2,
            expected: 3,
        };

        assert_eq!(
            err.to_string(),
            "There's a size mismatch in targets, got 2 and expected 3"
        );
    }

    #[test]
    fn test_config_error_has_source() {
        let err: GdError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to parse hyperparameters"));
    }
}
