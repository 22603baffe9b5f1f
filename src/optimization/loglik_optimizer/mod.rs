//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run a derivative-free
//! Nelder–Mead simplex search with configurable tolerances.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - seeds a Nelder–Mead simplex around `theta0` via [`builders`],
//!   - executes the solver via [`run::run_nelder_mead`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`MLEOptions`])
//!   and validation logic ([`validation`]) so downstream code can assume
//!   sane, finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** a log-likelihood `ℓ(θ)` by
//!   minimizing a cost `c(θ) = -ℓ(θ)`; user code must implement `ℓ(θ)`,
//!   **never** the cost directly.
//! - [`LogLikelihood::value`] must treat invalid inputs as recoverable
//!   [`OptError`](crate::optimization::errors::OptError) values, not
//!   panics.
//! - Vectors use the canonical alias [`Theta`]; all entries are assumed
//!   finite whenever optimization proceeds.
//! - Configuration types ([`Tolerances`], [`MLEOptions`]) are validated
//!   on construction and are treated as internally consistent by the
//!   solver layer.
//!
//! Conventions
//! -----------
//! - Parameters live in an unconstrained optimizer space as [`Theta`]
//!   (`Array1<f64>`). Any mapping from constrained → unconstrained space
//!   happens in the model layer.
//! - The solver is derivative-free: no gradient is ever requested from
//!   the model, and no finite-difference fallback exists.
//! - Errors bubble up as `OptResult<T>` / `OptError`; this module and its
//!   children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - Model code implements [`LogLikelihood`] for its types, then calls
//!   [`maximize`] with:
//!   - a model instance `&M`,
//!   - an initial parameter vector [`Theta`],
//!   - a data payload `&M::Data`, and
//!   - an [`MLEOptions`] configuration (tolerances, simplex step).
//! - Higher-level front-ends are expected to interact only with the
//!   re-exported surface: [`maximize`], [`LogLikelihood`], [`MLEOptions`],
//!   [`Tolerances`], [`OptimOutcome`], plus numeric aliases from
//!   [`types`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover:
//!   - sign conventions and non-finite rejection in [`adapter`],
//!   - simplex seeding and solver construction in [`builders`],
//!   - tolerance and outcome validation in [`validation`] and [`traits`],
//!   - a full toy solve in [`api`].
//! - The end-to-end MLE path on real model likelihoods is exercised by
//!   the integration suite.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_SIMPLEX_STEP, FnEvalMap, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use psychometrics::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Theta};
}
