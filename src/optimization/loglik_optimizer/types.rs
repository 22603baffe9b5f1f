//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and solver aliases used by the
//! log-likelihood optimizer. By defining these in one place, the rest of
//! the optimization code can stay agnostic to `ndarray` and Argmin
//! generics and can more easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors and scalar costs
//!   (`Theta`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose a pre-wired Nelder–Mead solver alias using the common
//!   `(Theta, Cost)` numeric shapes.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are represented as `ndarray` containers over
//!   `f64`.
//! - `Cost` is always a scalar `f64`; higher layers handle any sign flips
//!   between cost and log-likelihood.
//!
//! Conventions
//! -----------
//! - `Theta` is treated conceptually as a column vector with length equal
//!   to the number of free parameters.
//! - `DEFAULT_SIMPLEX_STEP` encodes the per-coordinate offset used to
//!   seed the initial simplex; callers may override it via per-run
//!   options.
//! - This module defines no runtime behavior beyond what `ndarray` and
//!   Argmin require when these types are instantiated elsewhere.
//!
//! Downstream usage
//! ----------------
//! - Other optimizer modules import these aliases instead of referring
//!   directly to `ndarray` or Argmin generics.
//! - Solver construction uses [`NelderMeadSolver`] as the concrete
//!   derivative-free solver type.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; there are no
//!   dedicated unit tests. Correctness is exercised indirectly by tests
//!   in the surrounding optimizer modules.
use argmin::solver::neldermead::NelderMead;
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default per-coordinate step used to build the initial simplex around
/// `theta0`.
pub const DEFAULT_SIMPLEX_STEP: f64 = 0.1;

/// Default simplex standard-deviation tolerance for convergence.
pub const DEFAULT_TOL_SD: f64 = 1e-8;

/// Default iteration cap, matching the common `200 × n_params` heuristic
/// for two-parameter Nelder–Mead runs.
pub const DEFAULT_MAX_ITER: usize = 400;

/// Nelder–Mead solver specialized to this crate’s numeric types.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;
