//! Simplified 3PL model: response curve, likelihood, and MLE fitting.
//!
//! This module wires the simplified three-parameter logistic model to the
//! `LogLikelihood` trait. The model has five fixed difficulty levels and
//! two free parameters — discrimination `a` and a base guessing rate `c`
//! held in logit space — fitted by derivative-free maximum likelihood.
//!
//! Key ideas:
//! - Parameters live in unconstrained space: `θ = (a, logit_c)` with
//!   `c = logistic(logit_c)` recovered on read, so the simplex search is
//!   unconstrained while the reported base rate is always in (0, 1).
//! - Per-condition correct-response probabilities follow
//!   `p(d) = c + (1 − c) · logistic(a · (−d))` over the fixed difficulty
//!   order `{2, 1, 0, −1, −2}`.
//! - The fitted/unfitted distinction is an explicit two-variant state,
//!   not a flag plus nullable fields: a successful `fit` is the only
//!   transition into `Fitted`, and there is no way back.
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{
            LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize, validation::validate_theta,
        },
        numerical_stability::transformations::safe_logistic,
    },
    three_pl::{
        data::{ConditionRecord, DataSummary, Experiment},
        errors::{ModelError, ModelResult},
        params::{N_PARAMS, ThreePLParams},
    },
};
use ndarray::Array1;

/// Fixed difficulty values, one per condition, in positional order.
///
/// These are a constant of the model, not configurable; condition `i` of
/// the experiment is always paired with `DIFFICULTIES[i]`.
pub const DIFFICULTIES: [f64; 5] = [2.0, 1.0, 0.0, -1.0, -2.0];

/// Fixed initial guess `(a, logit_c)` used by `fit`.
pub const INITIAL_GUESS: [f64; N_PARAMS] = [1.0, 0.0];

/// Estimation state of a [`SimplifiedThreePL`] instance.
///
/// The transition `Unfitted → Fitted` happens exactly once, on the first
/// successful `fit`; a failed fit leaves the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum FitState {
    Unfitted,
    Fitted {
        params: ThreePLParams,
        outcome: OptimOutcome,
    },
}

/// Simplified 3PL estimator over an externally supplied experiment.
///
/// Borrows the experiment immutably for its whole lifetime; the estimator
/// never mutates the data. `summary`, `predict`, and
/// `negative_log_likelihood` are valid in either state; the parameter
/// accessors require a successful `fit` first.
///
/// The experiment capability is enforced by the `E: Experiment` bound, so
/// constructing the estimator over the wrong kind of collaborator is a
/// compile-time error.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedThreePL<'a, E: Experiment> {
    experiment: &'a E,
    state: FitState,
}

impl<'a, E: Experiment> SimplifiedThreePL<'a, E> {
    /// Construct an unfitted estimator over `experiment`.
    pub fn new(experiment: &'a E) -> Self {
        Self { experiment, state: FitState::Unfitted }
    }

    /// Aggregate response counts across all conditions.
    ///
    /// Works for any experiment length, including zero conditions (all
    /// counts zero). Pure; no dependence on the fit state.
    pub fn summary(&self) -> DataSummary {
        let conditions = self.experiment.conditions();
        let n_correct: u64 = conditions.iter().map(|c| c.n_correct()).sum();
        let n_incorrect: u64 = conditions.iter().map(|c| c.n_incorrect()).sum();
        DataSummary {
            n_total: n_correct + n_incorrect,
            n_correct,
            n_incorrect,
            n_conditions: conditions.len(),
        }
    }

    /// Per-condition probabilities of a correct response.
    ///
    /// For each fixed difficulty `d` in [`DIFFICULTIES`] order, computes
    /// `p(d) = c + (1 − c) · logistic(a · (−d))` with
    /// `c = logistic(logit_c)`. Every returned probability lies in
    /// `[0, 1]` for any finite parameters; the closed endpoints are only
    /// reachable through `f64` saturation of the logistic far in the
    /// tails. Pure function of the parameters and the fixed constants.
    pub fn predict(&self, params: &ThreePLParams) -> Array1<f64> {
        let a = params.discrimination;
        let c = params.base_rate();
        DIFFICULTIES.iter().map(|&d| c + (1.0 - c) * safe_logistic(a * (-d))).collect()
    }

    /// Negative log-likelihood of the observed counts under `params`.
    ///
    /// Pairs each condition record positionally with its predicted
    /// probability and sums
    /// `n_correct · ln(p) + n_incorrect · ln(1 − p)`, returning the
    /// negation.
    ///
    /// Known hazard: when a predicted probability saturates to exactly
    /// 0 or 1, the corresponding log term is infinite and the result is
    /// non-finite. The logit parameterization keeps the optimizer away
    /// from that regime, but this function itself does not clamp or
    /// special-case it.
    pub fn negative_log_likelihood(&self, params: &ThreePLParams) -> f64 {
        let probabilities = self.predict(params);
        let loglik: f64 = self
            .experiment
            .conditions()
            .iter()
            .zip(probabilities.iter())
            .map(|(cond, &p)| {
                cond.n_correct() as f64 * p.ln() + cond.n_incorrect() as f64 * (1.0 - p).ln()
            })
            .sum();
        -loglik
    }

    /// Fit by maximum likelihood with default optimizer options.
    ///
    /// See [`fit_with`](Self::fit_with).
    pub fn fit(&mut self) -> ModelResult<()> {
        self.fit_with(&MLEOptions::default())
    }

    /// Fit by maximum likelihood from the fixed initial guess
    /// `(a, logit_c) = (1.0, 0.0)`.
    ///
    /// ## Steps
    /// 1. Run the derivative-free simplex search on `−ℓ(θ)` via
    ///    `maximize`.
    /// 2. Require the solver to have met its convergence criterion;
    ///    hitting the iteration cap is a failure.
    /// 3. Map `theta_hat` into [`ThreePLParams`] and transition to
    ///    `Fitted`, caching the optimizer outcome.
    ///
    /// ## Errors
    /// - [`ModelError::Optimization`] for optimizer runtime failures
    ///   (including a likelihood evaluation that went non-finite).
    /// - [`ModelError::FitDidNotConverge`] if the solver stopped without
    ///   converging.
    ///
    /// On any error the estimator is left exactly as it was before the
    /// call: either it fully succeeds or it changes nothing observable.
    pub fn fit_with(&mut self, opts: &MLEOptions) -> ModelResult<()> {
        let theta0 = Array1::from_vec(INITIAL_GUESS.to_vec());
        let outcome = maximize(&*self, theta0, &(), opts)?;
        if !outcome.converged {
            return Err(ModelError::FitDidNotConverge { status: outcome.status });
        }
        let params = ThreePLParams::from_theta(outcome.theta_hat.view())?;
        self.state = FitState::Fitted { params, outcome };
        Ok(())
    }

    /// Whether a successful `fit` has completed.
    pub fn is_fitted(&self) -> bool {
        matches!(self.state, FitState::Fitted { .. })
    }

    /// The fitted discrimination parameter `a`.
    ///
    /// # Errors
    /// [`ModelError::ModelNotFitted`] before a successful `fit`.
    pub fn discrimination(&self) -> ModelResult<f64> {
        Ok(self.fitted_params()?.discrimination)
    }

    /// The fitted base rate `c = logistic(logit_c)`, always in (0, 1).
    ///
    /// # Errors
    /// [`ModelError::ModelNotFitted`] before a successful `fit`.
    pub fn base_rate(&self) -> ModelResult<f64> {
        Ok(self.fitted_params()?.base_rate())
    }

    /// The optimizer outcome cached by the last successful `fit`, if any.
    pub fn fit_outcome(&self) -> Option<&OptimOutcome> {
        match &self.state {
            FitState::Fitted { outcome, .. } => Some(outcome),
            FitState::Unfitted => None,
        }
    }

    /// The full fitted parameter set.
    ///
    /// # Errors
    /// [`ModelError::ModelNotFitted`] before a successful `fit`.
    pub fn fitted_params(&self) -> ModelResult<&ThreePLParams> {
        match &self.state {
            FitState::Fitted { params, .. } => Ok(params),
            FitState::Unfitted => Err(ModelError::ModelNotFitted),
        }
    }
}

impl<'a, E: Experiment> LogLikelihood for SimplifiedThreePL<'a, E> {
    type Data = ();

    /// Log-likelihood `ℓ(θ) = −NLL(θ)` at the unconstrained vector
    /// `θ = (a, logit_c)`.
    ///
    /// # Errors
    /// Returns an [`OptError`] if `θ` has the wrong length or non-finite
    /// entries.
    fn value(&self, theta: &Theta, _data: &()) -> OptResult<f64> {
        let params = ThreePLParams::from_theta(theta.view()).map_err(OptError::from)?;
        Ok(-self.negative_log_likelihood(&params))
    }

    /// Validate an unconstrained parameter vector `θ` (length 2, all
    /// entries finite).
    fn check(&self, theta: &Theta, _data: &()) -> OptResult<()> {
        validate_theta(theta.view(), N_PARAMS)
    }
}
