//! Parameter mapping between optimizer θ-space and the 3PL model space.
//!
//! The model has two free parameters: discrimination `a` (unconstrained)
//! and the base guessing rate `c`, which must stay strictly inside
//! (0, 1). Following the standard reparameterization strategy, `c` is
//! stored and optimized as its logit, so the optimizer works over all of
//! ℝ² while the reported base rate is structurally valid. The probability
//! `c` itself is recovered via [`safe_logistic`] only on read.
use crate::{
    optimization::numerical_stability::transformations::safe_logistic,
    three_pl::errors::{ParamError, ParamResult},
};
use ndarray::{Array1, ArrayView1};

/// Number of free parameters in the simplified 3PL model.
pub const N_PARAMS: usize = 2;

/// Simplified 3PL parameters in optimizer space.
///
/// - `discrimination`: the `a` parameter; unconstrained real.
/// - `logit_base_rate`: logit of the base rate `c`; unconstrained real.
///
/// Both fields are guaranteed finite by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePLParams {
    pub discrimination: f64,
    pub logit_base_rate: f64,
}

impl ThreePLParams {
    /// Construct parameters from a `(a, logit_c)` pair.
    ///
    /// # Errors
    /// Returns [`ParamError::NonFiniteTheta`] if either value is NaN or
    /// infinite; the index identifies the offending slot (0 = `a`,
    /// 1 = `logit_c`).
    pub fn new(discrimination: f64, logit_base_rate: f64) -> ParamResult<Self> {
        if !discrimination.is_finite() {
            return Err(ParamError::NonFiniteTheta { index: 0, value: discrimination });
        }
        if !logit_base_rate.is_finite() {
            return Err(ParamError::NonFiniteTheta { index: 1, value: logit_base_rate });
        }
        Ok(Self { discrimination, logit_base_rate })
    }

    /// Map an unconstrained optimizer vector `θ = (a, logit_c)` into
    /// model parameters.
    ///
    /// # Errors
    /// - [`ParamError::ThetaLengthMismatch`] if `theta.len() != 2`.
    /// - [`ParamError::NonFiniteTheta`] for NaN or infinite entries.
    pub fn from_theta(theta: ArrayView1<'_, f64>) -> ParamResult<Self> {
        if theta.len() != N_PARAMS {
            return Err(ParamError::ThetaLengthMismatch {
                expected: N_PARAMS,
                actual: theta.len(),
            });
        }
        Self::new(theta[0], theta[1])
    }

    /// Serialize back into a θ-vector, e.g. to seed an optimizer run.
    pub fn to_theta(&self) -> Array1<f64> {
        Array1::from_vec(vec![self.discrimination, self.logit_base_rate])
    }

    /// The base rate `c = logistic(logit_c)`, strictly inside (0, 1) for
    /// any finite logit (up to `f64` saturation far in the tails).
    pub fn base_rate(&self) -> f64 {
        safe_logistic(self.logit_base_rate)
    }
}
