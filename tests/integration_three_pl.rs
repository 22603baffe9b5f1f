//! Integration tests for the simplified 3PL estimator.
//!
//! Purpose
//! -------
//! - Validate the end-to-end fitting pipeline: from a signal-detection
//!   style experiment, through derivative-free MLE, to the fitted
//!   discrimination and base-rate accessors.
//! - Exercise realistic count data and optimizer settings rather than
//!   toy edge cases only.
//!
//! Coverage
//! --------
//! - `three_pl::data`:
//!   - A realistic `ConditionRecord` implementation that derives its
//!     correct/incorrect split from hit/miss/false-alarm/correct-
//!     rejection tallies.
//! - `three_pl::model::SimplifiedThreePL`:
//!   - Construction, summary, default `fit`, tuned `fit_with`, fitted
//!     accessors, and the all-or-nothing behavior of a failed fit.
//! - `optimization::loglik_optimizer`:
//!   - Use of Nelder–Mead via `MLEOptions` and `Tolerances` from a
//!     downstream model's perspective.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (parameter
//!   mapping, theta validation, numerical stability helpers) — these are
//!   covered by unit tests.
//! - Exhaustive stress testing over parameter grids — those belong in
//!   targeted property tests.
use psychometrics::{
    optimization::loglik_optimizer::{MLEOptions, Tolerances},
    three_pl::{
        data::{ConditionRecord, Experiment},
        errors::ModelError,
        model::SimplifiedThreePL,
        params::ThreePLParams,
    },
};

/// Per-condition signal-detection tallies.
///
/// The model only consumes the correct/incorrect split: correct
/// responses are hits plus correct rejections, incorrect responses are
/// misses plus false alarms.
struct SignalDetection {
    hits: u64,
    misses: u64,
    false_alarms: u64,
    correct_rejections: u64,
}

impl ConditionRecord for SignalDetection {
    fn n_correct(&self) -> u64 {
        self.hits + self.correct_rejections
    }

    fn n_incorrect(&self) -> u64 {
        self.misses + self.false_alarms
    }
}

struct Study {
    conditions: Vec<SignalDetection>,
}

impl Experiment for Study {
    type Record = SignalDetection;

    fn conditions(&self) -> &[SignalDetection] {
        &self.conditions
    }
}

/// Purpose
/// -------
/// Build a five-condition study from `(correct, incorrect)` pairs, with
/// each condition's counts split evenly between the signal-present and
/// signal-absent tallies.
///
/// Parameters
/// ----------
/// - `counts`: One `(n_correct, n_incorrect)` pair per condition, in the
///   fixed difficulty order `{2, 1, 0, −1, −2}`.
///
/// Returns
/// -------
/// - A `Study` whose derived per-condition splits reproduce `counts`
///   exactly (pairs with odd totals round the hit share down).
///
/// Usage
/// -----
/// - Used by every fitting test below; the split into hits vs correct
///   rejections is irrelevant to the model and deliberately arbitrary.
fn make_study(counts: &[(u64, u64)]) -> Study {
    Study {
        conditions: counts
            .iter()
            .map(|&(correct, incorrect)| SignalDetection {
                hits: correct / 2,
                correct_rejections: correct - correct / 2,
                misses: incorrect / 2,
                false_alarms: incorrect - incorrect / 2,
            })
            .collect(),
    }
}

/// Counts whose accuracy falls as the condition gets harder: 25% correct
/// at difficulty 2 rising to 75% at difficulty −2, 40 responses per
/// condition. This is the shape a positive discrimination generates.
fn harder_is_worse_counts() -> Vec<(u64, u64)> {
    vec![(10, 30), (15, 25), (20, 20), (25, 15), (30, 10)]
}

#[test]
// Purpose
// -------
// End-to-end fit on data where accuracy declines as difficulty rises:
// the recovered discrimination must be positive and the base rate a
// proper probability.
//
// Given
// -----
// - The harder-is-worse study (200 responses) and default options.
//
// Expect
// ------
// - `fit` succeeds, `is_fitted` flips to true, discrimination > 0,
//   base rate strictly inside (0, 1), and an optimizer outcome with at
//   least one iteration is cached.
fn fit_recovers_positive_discrimination_when_accuracy_falls_with_difficulty() {
    // Arrange
    let study = make_study(&harder_is_worse_counts());
    let mut model = SimplifiedThreePL::new(&study);
    assert_eq!(model.summary().n_total, 200);

    // Act
    model.fit().expect("default fit should converge on well-behaved counts");

    // Assert
    assert!(model.is_fitted());
    let a = model.discrimination().expect("fitted");
    let c = model.base_rate().expect("fitted");
    assert!(a > 0.0, "accuracy falls with difficulty, so a should be positive, got {a}");
    assert!(c > 0.0 && c < 1.0, "base rate must be a probability, got {c}");

    let outcome = model.fit_outcome().expect("outcome cached after fit");
    assert!(outcome.converged);
    assert!(outcome.iterations >= 1);
    assert!(outcome.value.is_finite());
}

#[test]
// Purpose
// -------
// Mirroring the counts across the difficulty axis must flip the sign of
// the recovered discrimination: data where accuracy *rises* with the
// signed difficulty value can only be explained by a negative slope.
//
// Given
// -----
// - The harder-is-worse study and its condition-reversed mirror.
//
// Expect
// ------
// - Both fits converge; the discriminations have opposite signs and
//   (by the symmetry of the counts) roughly equal magnitude.
fn mirrored_counts_flip_the_discrimination_sign() {
    // Arrange
    let counts = harder_is_worse_counts();
    let mirrored: Vec<(u64, u64)> = counts.iter().rev().copied().collect();
    let study = make_study(&counts);
    let mirror_study = make_study(&mirrored);
    let mut model = SimplifiedThreePL::new(&study);
    let mut mirror_model = SimplifiedThreePL::new(&mirror_study);

    // Act
    model.fit().expect("fit should converge");
    mirror_model.fit().expect("mirrored fit should converge");

    // Assert
    let a = model.discrimination().expect("fitted");
    let a_mirror = mirror_model.discrimination().expect("fitted");
    assert!(a > 0.0 && a_mirror < 0.0, "got a = {a}, mirrored a = {a_mirror}");
    assert!((a + a_mirror).abs() < 0.05, "magnitudes should roughly match");
    let c_mirror = mirror_model.base_rate().expect("fitted");
    assert!(c_mirror > 0.0 && c_mirror < 1.0, "base rate must be a probability, got {c_mirror}");
}

#[test]
// Purpose
// -------
// The fitted parameters must actually describe the data: predictions at
// the fitted point track the observed per-condition accuracies.
//
// Given
// -----
// - The harder-is-worse study, fitted with default options.
//
// Expect
// ------
// - The predicted probability sequence is strictly increasing along the
//   fixed difficulty order (as the observed accuracies are) and every
//   prediction is within 0.1 of its observed accuracy.
fn fitted_predictions_track_observed_accuracies() {
    // Arrange
    let counts = harder_is_worse_counts();
    let study = make_study(&counts);
    let mut model = SimplifiedThreePL::new(&study);

    // Act
    model.fit().expect("fit should converge");
    let params = *model.fitted_params().expect("fitted");
    let probabilities = model.predict(&params);

    // Assert
    for pair in probabilities.windows(2) {
        assert!(pair[0] < pair[1], "expected increasing predictions, got {probabilities:?}");
    }
    for (i, (&(correct, incorrect), &p)) in counts.iter().zip(probabilities.iter()).enumerate() {
        let observed = correct as f64 / (correct + incorrect) as f64;
        assert!(
            (p - observed).abs() < 0.1,
            "condition {i}: predicted {p}, observed {observed}"
        );
    }
}

#[test]
// Purpose
// -------
// `fit_with` honors caller-supplied optimizer settings and the fitted
// point is at least as likely as the fixed initial guess.
//
// Given
// -----
// - The harder-is-worse study with explicit tolerances, a tighter
//   simplex step, and a generous iteration cap.
//
// Expect
// ------
// - The fit converges, and the cached best log-likelihood is at least
//   the log-likelihood at the initial guess (a, logit_c) = (1, 0).
fn fit_with_honors_custom_optimizer_settings() {
    // Arrange
    let study = make_study(&harder_is_worse_counts());
    let mut model = SimplifiedThreePL::new(&study);
    let tols = Tolerances::new(Some(1e-7), Some(1000)).expect("valid tolerances");
    let opts = MLEOptions::new(tols, Some(0.05), false).expect("valid options");
    let params0 = ThreePLParams::new(1.0, 0.0).expect("finite initial guess");
    let ll_at_guess = -model.negative_log_likelihood(&params0);

    // Act
    model.fit_with(&opts).expect("tuned fit should converge");

    // Assert
    let outcome = model.fit_outcome().expect("outcome cached after fit");
    assert!(outcome.converged);
    assert!(
        outcome.value >= ll_at_guess,
        "best ℓ = {} should not be worse than ℓ at the initial guess = {ll_at_guess}",
        outcome.value
    );
}

#[test]
// Purpose
// -------
// Premature access fails cleanly: parameter accessors on an unfitted
// estimator return the not-fitted error and never panic.
//
// Given
// -----
// - A fresh estimator over a valid study, never fitted.
//
// Expect
// ------
// - Both accessors return `ModelNotFitted`; `is_fitted` is false.
fn parameter_access_before_fit_is_an_error() {
    // Arrange
    let study = make_study(&harder_is_worse_counts());
    let model = SimplifiedThreePL::new(&study);

    // Assert
    assert!(!model.is_fitted());
    assert_eq!(model.discrimination(), Err(ModelError::ModelNotFitted));
    assert_eq!(model.base_rate(), Err(ModelError::ModelNotFitted));
    assert!(model.fit_outcome().is_none());
}

#[test]
// Purpose
// -------
// A fit that stops without converging is all-or-nothing: the error names
// the termination status and the estimator stays unfitted.
//
// Given
// -----
// - The harder-is-worse study and an iteration cap of 1, far too small
//   for the simplex spread to fall below tolerance.
//
// Expect
// ------
// - `fit_with` returns `FitDidNotConverge`; `is_fitted` remains false
//   and the accessors still return `ModelNotFitted`.
fn a_capped_fit_leaves_the_estimator_unfitted() {
    // Arrange
    let study = make_study(&harder_is_worse_counts());
    let mut model = SimplifiedThreePL::new(&study);
    let tols = Tolerances::new(Some(1e-12), Some(1)).expect("valid tolerances");
    let opts = MLEOptions::new(tols, None, false).expect("valid options");

    // Act
    let result = model.fit_with(&opts);

    // Assert
    assert!(
        matches!(result, Err(ModelError::FitDidNotConverge { .. })),
        "expected non-convergence, got {result:?}"
    );
    assert!(!model.is_fitted());
    assert_eq!(model.discrimination(), Err(ModelError::ModelNotFitted));
    assert!(model.fit_outcome().is_none());
}

#[test]
// Purpose
// -------
// The summary sees through the signal-detection derivation: correct is
// hits plus correct rejections, incorrect is misses plus false alarms.
//
// Given
// -----
// - Two conditions with uneven, hand-picked tallies.
//
// Expect
// ------
// - Aggregates match the hand-computed sums.
fn summary_aggregates_signal_detection_tallies() {
    // Arrange
    let study = Study {
        conditions: vec![
            SignalDetection { hits: 20, misses: 5, false_alarms: 10, correct_rejections: 15 },
            SignalDetection { hits: 7, misses: 13, false_alarms: 2, correct_rejections: 8 },
        ],
    };
    let model = SimplifiedThreePL::new(&study);

    // Act
    let summary = model.summary();

    // Assert
    assert_eq!(summary.n_conditions, 2);
    assert_eq!(summary.n_correct, 35 + 15);
    assert_eq!(summary.n_incorrect, 15 + 15);
    assert_eq!(summary.n_total, summary.n_correct + summary.n_incorrect);
}
