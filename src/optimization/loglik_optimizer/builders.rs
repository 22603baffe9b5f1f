//! loglik_optimizer::builders — Nelder–Mead solver construction helpers.
//!
//! Purpose
//! -------
//! Provide a small, focused builder for the derivative-free Nelder–Mead
//! solver used by the log-likelihood optimizer. The helper hides Argmin’s
//! generic wiring and applies crate-level options (tolerance, simplex
//! seeding) so that higher-level code can request a configured solver
//! without touching Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Seed the initial simplex from `theta0`: one vertex at `theta0`
//!   itself plus one vertex per coordinate, offset by the configured
//!   step along that axis (`n + 1` vertices for `n` parameters).
//! - Apply the optional simplex standard-deviation tolerance from
//!   [`MLEOptions`] via Argmin’s `with_sd_tolerance`.
//! - Leave the maximum iteration count to the runner/executor layer,
//!   keeping this builder side-effect free.
//!
//! Invariants & assumptions
//! ------------------------
//! - The solver operates on the canonical optimizer numeric types
//!   [`Theta`] and `Cost` as defined in `loglik_optimizer::types`.
//! - The simplex step is either provided via `opts.simplex_step` or
//!   defaults to [`DEFAULT_SIMPLEX_STEP`]; options validation has already
//!   guaranteed it is finite and positive.
//! - Any invalid tolerance passed into Argmin’s `with_sd_tolerance` is
//!   surfaced as an [`OptError`](crate::optimization::errors::OptError)
//!   via the crate’s `From<Error>` implementation.
//!
//! Conventions
//! -----------
//! - The builder does **not** set `max_iters`; that is treated as a
//!   runtime concern and applied by the runner (`run_nelder_mead`).
//! - Errors are always reported via [`OptResult`]; the underlying
//!   `argmin::core::Error` values never leak directly across module
//!   boundaries.
//!
//! Downstream usage
//! ----------------
//! - The high-level optimization entry point (`api::maximize`) calls
//!   [`build_nelder_mead`] and passes the returned solver to the runner
//!   along with an adapted problem.
//!
//! Testing notes
//! -------------
//! - Unit tests for this module verify simplex construction from
//!   `theta0` and propagation of `simplex_step`.
//! - Integration tests in the optimizer layer exercise this builder
//!   indirectly by running full Nelder–Mead solves.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{DEFAULT_SIMPLEX_STEP, NelderMeadSolver, Theta},
    },
};

/// Construct a Nelder–Mead solver with a simplex seeded around `theta0`.
///
/// Builds the `n + 1` vertex simplex `{θ₀, θ₀ + h·e₁, …, θ₀ + h·eₙ}`
/// where `h` is `opts.simplex_step` (or [`DEFAULT_SIMPLEX_STEP`]) and
/// applies the configured standard-deviation tolerance.
///
/// # Parameters
/// - `theta0`: initial parameter vector; the simplex is anchored here.
/// - `opts`: optimizer options. This builder consults
///   `opts.simplex_step` and `opts.tols.tol_sd`.
///
/// # Returns
/// `OptResult<NelderMeadSolver>` — the configured solver, or an error if
/// Argmin rejects the tolerance setting.
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) when
///   `with_sd_tolerance` rejects the tolerance.
pub fn build_nelder_mead(theta0: &Theta, opts: &MLEOptions) -> OptResult<NelderMeadSolver> {
    let step = opts.simplex_step.unwrap_or(DEFAULT_SIMPLEX_STEP);
    let simplex = seed_simplex(theta0, step);
    let mut solver = NelderMeadSolver::new(simplex);
    if let Some(tol) = opts.tols.tol_sd {
        solver = solver.with_sd_tolerance(tol)?;
    }
    Ok(solver)
}

/// Seed the initial simplex: `theta0` plus one axis-offset vertex per
/// coordinate.
fn seed_simplex(theta0: &Theta, step: f64) -> Vec<Theta> {
    let mut simplex = Vec::with_capacity(theta0.len() + 1);
    simplex.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[i] += step;
        simplex.push(vertex);
    }
    simplex
}
