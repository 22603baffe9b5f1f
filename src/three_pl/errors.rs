//! Error types for the simplified 3PL model layer.
//!
//! Two enums cover the model surface:
//!
//! - [`ModelError`]: user-facing failures of the estimator — premature
//!   parameter access, convergence failures, and optimizer errors that
//!   bubbled up from the optimization layer.
//! - [`ParamError`]: structural problems with a parameter vector or pair
//!   (wrong length, non-finite entries), raised by the θ-space ↔ model-
//!   space mapping in [`params`](crate::three_pl::params).
//!
//! Both follow the crate convention: struct-style variants, manual
//! `Display`, and `From` conversions at module boundaries so callers of
//! the model API only ever see [`ModelError`].
use crate::optimization::errors::OptError;

/// Result alias for model-level operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Result alias for parameter mapping operations.
pub type ParamResult<T> = Result<T, ParamError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Fitted parameters requested before a successful fit.
    ModelNotFitted,

    /// The optimizer terminated without meeting its convergence
    /// criterion (e.g., iteration cap reached).
    FitDidNotConverge {
        status: String,
    },

    /// The optimization layer failed at runtime.
    Optimization {
        err: OptError,
    },

    /// Parameter vector or pair was structurally invalid.
    Param {
        err: ParamError,
    },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet")
            }
            ModelError::FitDidNotConverge { status } => {
                write!(f, "Optimization did not converge: {status}")
            }
            ModelError::Optimization { err } => {
                write!(f, "Optimization failed: {err}")
            }
            ModelError::Param { err } => {
                write!(f, "Invalid parameters: {err}")
            }
        }
    }
}

impl From<OptError> for ModelError {
    fn from(err: OptError) -> Self {
        ModelError::Optimization { err }
    }
}

impl From<ParamError> for ModelError {
    fn from(err: ParamError) -> Self {
        ModelError::Param { err }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Theta length mismatch for ThreePLParams.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Theta coordinates need to be finite.
    NonFiniteTheta {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            ParamError::NonFiniteTheta { index, value } => {
                write!(f, "Invalid theta at index {index}: {value}, must be finite")
            }
        }
    }
}
