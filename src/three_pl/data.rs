//! Collaborator capabilities and data summaries for the 3PL model.
//!
//! Purpose
//! -------
//! Define the in-process contract between the estimator and its two
//! external collaborators: per-condition response counts and the ordered
//! experiment that aggregates them. The estimator never owns or mutates
//! this data; it only reads counts through these traits.
//!
//! Key behaviors
//! -------------
//! - [`ConditionRecord`]: exposes correct/incorrect response counts for
//!   one fixed difficulty level. Non-negativity is structural (`u64`).
//! - [`Experiment`]: exposes an ordered slice of condition records with
//!   stable length and iteration order; the positional index is what
//!   assigns a difficulty value to each record.
//! - [`DataSummary`]: aggregate counts returned by the model's
//!   `summary()`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Conditions are matched to the fixed difficulty values positionally,
//!   so reordering an experiment changes its meaning. The traits demand a
//!   stable order; they cannot demand a meaningful one.
//! - Any experiment length is accepted by `summary`; only the five-
//!   condition layout is semantically meaningful for prediction and
//!   likelihood evaluation.
//!
//! Conventions
//! -----------
//! - The original runtime "is this the right kind of object" check is
//!   replaced by the `E: Experiment` bound on the estimator: handing the
//!   model a non-experiment is a compile error, not a runtime one.
//! - Trait methods are infallible; malformed data cannot be represented.

/// Counts of binary responses observed at one fixed difficulty level.
///
/// A record typically derives its counts from signal-detection tallies
/// (hits, misses, false alarms, correct rejections); the model only needs
/// the correct/incorrect split.
pub trait ConditionRecord {
    /// Number of correct responses in this condition.
    fn n_correct(&self) -> u64;

    /// Number of incorrect responses in this condition.
    fn n_incorrect(&self) -> u64;
}

/// An ordered collection of condition records.
///
/// The slice defines both the length and the iteration order; index `i`
/// is paired with the `i`-th fixed difficulty value during prediction and
/// likelihood evaluation.
pub trait Experiment {
    type Record: ConditionRecord;

    /// The condition records, in difficulty order.
    fn conditions(&self) -> &[Self::Record];
}

/// Aggregate response counts across all conditions of an experiment.
///
/// Returned by `SimplifiedThreePL::summary`; `n_total` is always
/// `n_correct + n_incorrect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSummary {
    pub n_total: u64,
    pub n_correct: u64,
    pub n_incorrect: u64,
    pub n_conditions: usize,
}

// Blanket impl so a borrowed experiment satisfies the bound too.
impl<E: Experiment> Experiment for &E {
    type Record = E::Record;

    fn conditions(&self) -> &[Self::Record] {
        (*self).conditions()
    }
}
