//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a
//! *minimization* problem by defining the cost as `c(θ) = -ℓ(θ)`. The
//! Nelder–Mead solver only ever asks for cost values, so this adapter
//! implements `CostFunction` alone; no gradient plumbing exists anywhere
//! in the optimizer.
use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        traits::LogLikelihood,
        types::{Cost, Theta},
    },
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)` (negative log-likelihood).
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// - Calls the user's `value(θ, data)` and checks the result is finite.
    /// - Returns `Error(NonFiniteCost)` if the value is not finite. This is
    ///   how a saturated likelihood term (log of a probability that hit
    ///   exactly 0 or 1) surfaces during optimization.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user’s `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The sign convention: cost is the negated log-likelihood.
    // - Rejection of non-finite log-likelihood values.
    //
    // They intentionally DO NOT cover:
    // - Any concrete model; a toy quadratic log-likelihood is enough here.
    // -------------------------------------------------------------------------

    struct ToyLogLik;

    impl LogLikelihood for ToyLogLik {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            // Concave toy log-likelihood: -(θ·θ).
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    struct NanLogLik;

    impl LogLikelihood for NanLogLik {
        type Data = ();

        fn value(&self, _theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(f64::NAN)
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that the adapter negates the user log-likelihood.
    //
    // Given
    // -----
    // - A toy model with ℓ(θ) = -(θ·θ) and θ = (3, 4).
    //
    // Expect
    // ------
    // - `cost(θ)` returns +25.0.
    fn adapter_negates_the_log_likelihood() {
        let model = ToyLogLik;
        let adapter = ArgMinAdapter::new(&model, &());
        let cost = adapter.cost(&array![3.0, 4.0]).expect("finite cost");
        assert_eq!(cost, 25.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-finite log-likelihood is rejected rather than handed
    // to the solver.
    //
    // Given
    // -----
    // - A model whose `value` always returns NaN.
    //
    // Expect
    // ------
    // - `cost` returns an error (downcastable to `NonFiniteCost`).
    fn adapter_rejects_non_finite_values() {
        let model = NanLogLik;
        let adapter = ArgMinAdapter::new(&model, &());
        let err = adapter.cost(&array![0.0]).expect_err("NaN must be rejected");
        let opt_err: OptError = err.into();
        assert!(matches!(opt_err, OptError::NonFiniteCost { .. }));
    }
}
