//! optimization — derivative-free MLE stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting, combining an
//! Argmin-backed log-likelihood optimizer, numerically stable parameter
//! transforms, and a single error/result surface. Callers implement a
//! log-likelihood, choose tolerances, and obtain fitted parameters and
//! diagnostics without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`) via a derivative-free Nelder–Mead simplex
//!   search, including configuration of stopping criteria.
//! - Supply shared numerical primitives (`numerical_stability`) for
//!   mapping unconstrained reals into (0, 1) and back.
//! - Normalize configuration issues, numerical failures, and backend
//!   solver errors into a single enum (`errors::OptError`) with a common
//!   result alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate in an unconstrained parameter space `θ` and assume
//!   that inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Log-likelihood implementations are expected to treat domain
//!   violations as recoverable errors surfaced through the optimization
//!   layer.
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize a log-likelihood `ℓ(θ)` by
//!   minimizing an internal cost `c(θ) = -ℓ(θ)`; user-facing APIs and
//!   outcomes are expressed in terms of `ℓ`.
//! - Parameters are represented using `ndarray`-based aliases (`Theta`);
//!   any mapping between unconstrained θ-space and structured model
//!   parameters (e.g., a logit-space base rate) happens in the model
//!   layer via numerical-stability helpers.
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors or model-specific error enums.
//!
//! Downstream usage
//! ----------------
//! - Model code implements `LogLikelihood` for its types and calls
//!   `maximize` with a parameter guess, data payload, and `MLEOptions` to
//!   obtain an `OptimOutcome` (via `loglik_optimizer`).
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the submodule preludes and
//!   the core error types.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns:
//!   - `loglik_optimizer`: solver wiring, tolerance handling, and basic
//!     MLE behavior on toy objectives.
//!   - `numerical_stability`: agreement with naïve formulas on safe
//!     grids and well-behaved tails.
//! - Higher-level integration tests exercise end-to-end MLE workflows.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use psychometrics::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
