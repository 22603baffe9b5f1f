//! three_pl — simplified 3PL item-response stack: data contracts, parameters, model, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive layer for the simplified three-parameter logistic
//! (3PL) psychometric model: collaborator capability traits, the
//! θ-space ↔ model-space parameter mapping, the estimator itself, and a
//! uniform error surface. This is the module most consumers should
//! depend on.
//!
//! Key behaviors
//! -------------
//! - Define the in-process contract with external collaborators in
//!   [`data`]: per-condition correct/incorrect counts
//!   ([`ConditionRecord`]) aggregated into an ordered experiment
//!   ([`Experiment`]), plus the [`DataSummary`] aggregate.
//! - Map unconstrained optimizer vectors to model parameters in
//!   [`params`], keeping the base rate structurally inside (0, 1) via
//!   its logit.
//! - Expose the estimator API in [`model`] via [`SimplifiedThreePL`]:
//!   data summary, forward prediction, negative log-likelihood, and
//!   derivative-free MLE fitting with explicit fitted/unfitted state.
//! - Centralize model-specific error types in [`errors`] (`ModelError`,
//!   `ParamError`, and the `ModelResult` / `ParamResult` aliases).
//!
//! Invariants & assumptions
//! ------------------------
//! - The five difficulty values `{2, 1, 0, −1, −2}` are a fixed model
//!   constant, paired with condition records positionally.
//! - Parameter accessors are only valid after a successful fit; the
//!   estimator state is an explicit sum type with a one-way
//!   `Unfitted → Fitted` transition.
//! - The experiment is read-only from the estimator's perspective and
//!   is borrowed for the estimator's lifetime.
//!
//! Conventions
//! -----------
//! - All fallible model operations return `ModelResult<T>`; optimizer
//!   internals never leak (`OptError` values are wrapped).
//! - Fitting is synchronous, CPU-bound, and not reentrant-safe;
//!   concurrent fits of one estimator must be serialized by the caller.
//!
//! Downstream usage
//! ----------------
//! - Construct collaborator types implementing the [`data`] traits,
//!   build a [`SimplifiedThreePL`] over them, call `fit`, and read the
//!   fitted discrimination and base rate back through the accessors.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to the code: parameter mapping in [`params`],
//!   response-curve/likelihood/state behavior in [`model`].
//! - End-to-end fits on realistic count data run in the integration
//!   suite (`tests/integration_three_pl.rs`).

pub mod data;
pub mod errors;
pub mod model;
pub mod params;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{ConditionRecord, DataSummary, Experiment};
pub use self::errors::{ModelError, ModelResult, ParamError, ParamResult};
pub use self::model::{DIFFICULTIES, FitState, INITIAL_GUESS, SimplifiedThreePL};
pub use self::params::{N_PARAMS, ThreePLParams};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use psychometrics::three_pl::prelude::*;
//
// to import the main 3PL surface in a single line.

pub mod prelude {
    pub use super::data::{ConditionRecord, DataSummary, Experiment};
    pub use super::errors::{ModelError, ModelResult};
    pub use super::model::{DIFFICULTIES, SimplifiedThreePL};
    pub use super::params::ThreePLParams;
}
