//! Execution helper that runs the Nelder–Mead solver on a log-likelihood
//! problem and returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        LogLikelihood, MLEOptions, OptimOutcome, adapter::ArgMinAdapter, types::NelderMeadSolver,
    },
};
use argmin::core::{Executor, State};

/// Run an `argmin` Nelder–Mead optimization for a log-likelihood problem.
///
/// This is the shared runner used by the high-level `maximize` entry
/// point. It wires up:
/// - the user model via [`ArgMinAdapter`],
/// - a fully constructed [`NelderMeadSolver`] (its initial simplex is
///   already seeded, so no initial parameter is set on the state),
/// - optional observers (behind the `obs_slog` feature),
/// - optional `max_iters`,
///   then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Type Parameters
/// - `F`: Your log-likelihood type implementing [`LogLikelihood`].
///
/// # Arguments
/// - `opts`: Optimizer options (tolerances, verbosity, max iters).
/// - `problem`: An [`ArgMinAdapter`] wrapping the user’s model and data.
/// - `solver`: A fully constructed Nelder–Mead solver (from
///   [`build_nelder_mead`](crate::optimization::loglik_optimizer::builders::build_nelder_mead)).
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a
/// terminal slog observer is attached with `ObserverMode::Always`.
///
/// # Returns
/// An [`OptimOutcome`] containing the best parameter found, best
/// log-likelihood value ℓ(θ̂), termination status, iteration count, and
/// function-evaluation counts.
///
/// # Errors
/// - Propagates any `argmin` runtime error (observer failures, solver
///   errors, cost-evaluation failures) via the crate’s
///   `From<argmin::core::Error>` conversion.
/// - Propagates any validation errors encountered when constructing
///   [`OptimOutcome`].
///
/// # Examples
/// ```ignore
/// let problem = ArgMinAdapter::new(&model, &data);
/// let solver  = build_nelder_mead(&theta0, &opts)?;
/// let out     = run_nelder_mead(&opts, problem, solver)?;
/// println!("done in {} iters, status: {}", out.iterations, out.status);
/// ```
pub fn run_nelder_mead<F>(
    opts: &MLEOptions, problem: ArgMinAdapter<'_, F>, solver: NelderMeadSolver,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
{
    let mut optimizer = Executor::new(problem, solver);
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        termination,
        iterations,
        function_counts,
    )
}
