//! Error types for the geoquiz core engine

use thiserror::Error;

/// Main error type for the geoquiz core engine
///
/// Most of the engine degrades silently (bad answers score zero, out-of-phase
/// transitions are ignored). Only malformed data surfaces here.
#[derive(Error, Debug)]
pub enum GeoQuizError {
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    #[error("Candidate pool is empty, cannot pick a target country")]
    EmptyCandidatePool,

    #[error("Invalid continent: {0}")]
    InvalidContinent(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for GeoQuizError {
    fn from(err: serde_json::Error) -> Self {
        GeoQuizError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<GeoQuizError> for pyo3::PyErr {
    fn from(err: GeoQuizError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        match err {
            GeoQuizError::CountryNotFound(code) => {
                PyKeyError::new_err(format!("Country not found: {}", code))
            }
            GeoQuizError::EmptyCandidatePool => PyRuntimeError::new_err(
                "Candidate pool is empty, cannot pick a target country",
            ),
            GeoQuizError::InvalidContinent(label) => {
                PyValueError::new_err(format!("Invalid continent: {}", label))
            }
            GeoQuizError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the geoquiz core engine
pub type Result<T> = std::result::Result<T, GeoQuizError>;
