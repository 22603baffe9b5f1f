//! Public API surface for log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait users implement for their model.
//! - [`MLEOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`OptimOutcome`]: normalized result returned by the high-level
//!   `maximize` API.
//!
//! Convention: we *maximize* a user log-likelihood `ℓ(θ)` by minimizing
//! the cost `c(θ) = -ℓ(θ)`. The solver is Nelder–Mead, so no gradient is
//! ever requested from the model.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Theta,
        types::{DEFAULT_MAX_ITER, DEFAULT_TOL_SD},
        validation::{validate_theta_hat, validate_value, verify_tol_sd},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented log-likelihood interface.
///
/// You maximize `ℓ(θ)`; internally we minimize the cost `c(θ) = -ℓ(θ)`.
///
/// - `type Data`: per-model data carried into `value`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `ℓ(θ)`.
///   - Errors: return a descriptive `OptError` for invalid inputs or
///     model failures.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
pub trait LogLikelihood {
    type Data: 'static;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `simplex_step: Option<f64>` — per-coordinate offset used to seed the
///   initial Nelder–Mead simplex around `theta0`; defaults to
///   [`DEFAULT_SIMPLEX_STEP`](super::types::DEFAULT_SIMPLEX_STEP) when
///   `None`.
/// - `verbose: bool` — if `true`, attaches an observer (behind the
///   `obs_slog` feature) and prints progress.
///
/// Constructor:
/// - `new(tols, simplex_step, verbose) -> OptResult<Self>` — builds
///   options; validation of the tolerances is handled in
///   [`Tolerances::new`].
///
/// Default:
/// - `tols`: `tol_sd = 1e-8`, `max_iter = 400`
/// - `simplex_step`: `None` (uses the default of 0.1)
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub simplex_step: Option<f64>,
    pub verbose: bool,
}

impl MLEOptions {
    /// Create a new set of optimizer options.
    ///
    /// This constructor does not mutate values; validation of the
    /// tolerance fields is performed inside [`Tolerances::new`].
    ///
    /// # Errors
    /// Returns [`OptError::InvalidSimplexStep`] if `simplex_step` is
    /// provided but non-finite or ≤ 0.0.
    pub fn new(tols: Tolerances, simplex_step: Option<f64>, verbose: bool) -> OptResult<Self> {
        if let Some(step) = simplex_step {
            if !step.is_finite() {
                return Err(OptError::InvalidSimplexStep {
                    step,
                    reason: "Simplex step must be finite.",
                });
            }
            if step <= 0.0 {
                return Err(OptError::InvalidSimplexStep {
                    step,
                    reason: "Simplex step must be positive.",
                });
            }
        }
        Ok(Self { tols, simplex_step, verbose })
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::new(Some(DEFAULT_TOL_SD), Some(DEFAULT_MAX_ITER)).unwrap(),
            simplex_step: None,
            verbose: false,
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_sd`: terminate when the standard deviation of the cost values
///   at the simplex vertices falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Either field can be `None` but **at least one** of the two must be
/// provided (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_sd: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_sd` or `max_iter` must be `Some`.
    /// - If provided, `tol_sd` must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if both are `None`.
    /// - [`OptError::InvalidTolSd`] for a non-finite or non-positive
    ///   tolerance.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_sd: Option<f64>, max_iter: Option<usize>) -> OptResult<Self> {
        if tol_sd.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_sd(tol_sd)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_sd, max_iter })
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best **log-likelihood** value `ℓ(θ)` (not the cost).
/// - `converged`: `true` if the solver met its convergence criterion
///   (simplex spread below tolerance or target cost reached). Hitting
///   the iteration cap does **not** count as convergence.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
///   Keys follow argmin’s counters, e.g., cost_count.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`; only
    ///   `SolverConverged` and `TargetCostReached` count as converged.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let converged = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (converged, format!("{reason:?}"))
            }
        };
        let iterations = iterations as usize;
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals })
    }
}
