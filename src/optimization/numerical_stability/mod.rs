//! numerical_stability — numerically robust nonlinear transformations.
//!
//! Purpose
//! -------
//! Collect numerically stable scalar transforms for mapping unconstrained
//! reals into the open unit interval and back. This module centralizes the
//! transform logic so the rest of the optimization and model layers can
//! assume well-conditioned `f64` arithmetic.
//!
//! Key behaviors
//! -------------
//! - Provide a stable logistic transform (`safe_logistic`) for mapping
//!   unconstrained reals into (0, 1) without overflow.
//! - Provide its inverse (`safe_logit`) for mapping (0, 1) back to ℝ.
//!
//! Invariants & assumptions
//! ------------------------
//! - All public transforms assume finite `f64` inputs; domain and shape
//!   validation is enforced in the model and optimizer layers, not here.
//! - For very large |x|, `safe_logistic` saturates to exactly 0.0 or 1.0
//!   in `f64`; callers that feed its output into logarithms are
//!   responsible for handling that regime.
//!
//! Conventions
//! -----------
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for use inside tight inner loops.
//! - Panics and `unsafe` are avoided under normal usage.
//!
//! Downstream usage
//! ----------------
//! - The 3PL model uses `safe_logistic` both to recover the base rate
//!   `c = logistic(logit_c)` and to evaluate the difficulty response
//!   curve.
//! - Test code uses `safe_logit` to construct logit-space inputs from
//!   target probabilities.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with the naïve
//!   formula on a safe grid, tail saturation, symmetry, and round-trip
//!   consistency of the logistic/logit pair.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{safe_logistic, safe_logit};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use psychometrics::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{safe_logistic, safe_logit};
}
