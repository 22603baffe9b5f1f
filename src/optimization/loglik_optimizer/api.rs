//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! This seeds a Nelder–Mead simplex around the caller's initial guess,
//! wraps the model in an `ArgMinAdapter` (which *minimizes* `-ℓ(θ)`), and
//! delegates the run to `run_nelder_mead`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::build_nelder_mead,
        run::run_nelder_mead,
        traits::{LogLikelihood, MLEOptions},
    },
};

/// Maximize a log-likelihood `ℓ(θ)` using derivative-free Nelder–Mead.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` that exposes a *minimization*
///   problem `c(θ) = -ℓ(θ)` to `argmin`.
/// - Builds a Nelder–Mead solver whose initial simplex is seeded around
///   `theta0` per `opts.simplex_step`.
/// - Calls `run_nelder_mead`, which configures the executor (max iters,
///   optional observers) and returns an `OptimOutcome`.
///
/// # Parameters
/// - `f`: Your model implementing [`LogLikelihood`].
/// - `theta0`: Initial parameter vector.
/// - `data`: Model data passed through to `value`/`check`.
/// - `opts`: Optimizer options (tolerances, simplex step, verbosity).
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_nelder_mead`.
/// - Propagates runtime errors from `run_nelder_mead` (e.g., a cost
///   evaluation that produced a non-finite value).
///
/// # Returns
/// An [`OptimOutcome`] containing `theta_hat`, best value `ℓ(θ̂)`,
/// termination status, iteration count, and function evaluation counts.
/// Note that `converged` may be `false` (e.g., iteration cap reached);
/// deciding whether that is an error is left to the caller.
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use psychometrics::optimization::{
///     errors::OptResult,
///     loglik_optimizer::{LogLikelihood, MLEOptions, Theta, maximize},
/// };
///
/// struct MyLL;
/// impl LogLikelihood for MyLL {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         // Simple concave log-likelihood: -(θ·θ)
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let f = MyLL;
/// let theta0 = array![0.1, -0.2];
/// let opts = MLEOptions::default();
///
/// let out = maximize(&f, theta0, &(), &opts)?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), psychometrics::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    let solver = build_nelder_mead(&theta0, opts)?;
    run_nelder_mead(opts, problem, solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::{OptError, OptResult};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A full Nelder–Mead solve on a smooth concave toy log-likelihood.
    // - Propagation of `check` failures before any optimization happens.
    //
    // They intentionally DO NOT cover:
    // - The 3PL model itself; that is exercised in the model unit tests
    //   and the integration suite.
    // -------------------------------------------------------------------------

    struct QuadraticLogLik;

    impl LogLikelihood for QuadraticLogLik {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<f64> {
            // Maximum at θ = (2, -1).
            let d0 = theta[0] - 2.0;
            let d1 = theta[1] + 1.0;
            Ok(-(d0 * d0 + d1 * d1))
        }

        fn check(&self, theta: &Theta, _data: &()) -> OptResult<()> {
            if theta.len() != 2 {
                return Err(OptError::ThetaLengthMismatch { expected: 2, actual: theta.len() });
            }
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure `maximize` drives the simplex to the known maximum of a
    // concave quadratic log-likelihood and reports convergence.
    //
    // Given
    // -----
    // - ℓ(θ) with maximum at (2, -1), initial guess (0, 0), default
    //   options.
    //
    // Expect
    // ------
    // - `converged == true`, `theta_hat ≈ (2, -1)` within 1e-3, and a
    //   best value near 0.
    fn maximize_finds_quadratic_maximum() {
        // Arrange
        let f = QuadraticLogLik;
        let theta0 = array![0.0, 0.0];
        let opts = MLEOptions::default();

        // Act
        let out = maximize(&f, theta0, &(), &opts).expect("solve should succeed");

        // Assert
        assert!(out.converged, "solver should converge, got status {}", out.status);
        assert_abs_diff_eq!(out.theta_hat[0], 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(out.theta_hat[1], -1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(out.value, 0.0, epsilon = 1e-5);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a failing `check` aborts the run before the solver
    // starts.
    //
    // Given
    // -----
    // - The same toy model with a wrong-length initial guess.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch` is returned directly.
    fn maximize_propagates_check_failures() {
        // Arrange
        let f = QuadraticLogLik;
        let theta0 = array![0.0, 0.0, 0.0];
        let opts = MLEOptions::default();

        // Act
        let result = maximize(&f, theta0, &(), &opts);

        // Assert
        assert_eq!(result, Err(OptError::ThetaLengthMismatch { expected: 2, actual: 3 }));
    }
}
