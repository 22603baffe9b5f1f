//! psychometrics — maximum-likelihood estimation for a simplified 3PL model.
//!
//! Purpose
//! -------
//! Serve as the crate root for a small psychometrics library that fits a
//! simplified three-parameter logistic (3PL) item-response model to
//! binary correct/incorrect counts observed at five fixed difficulty
//! levels. The crate estimates two latent parameters — discrimination
//! and a base guessing rate — by derivative-free maximum likelihood.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`three_pl` and `optimization`) as the
//!   public crate surface.
//! - `three_pl` owns the domain: collaborator capability traits, the
//!   response model, the likelihood, and the fitted/unfitted estimator
//!   state machine.
//! - `optimization` owns the numerics: an Argmin-backed Nelder–Mead
//!   log-likelihood maximizer and numerically stable transforms.
//!
//! Invariants & assumptions
//! ------------------------
//! - The base rate is optimized in logit space, so the optimizer works
//!   over an unconstrained domain while the reported probability always
//!   lies in (0, 1).
//! - All heavy numerical work is synchronous and CPU-bound; the crate
//!   performs no I/O and holds no global state.
//!
//! Conventions
//! -----------
//! - Fallible operations return per-layer `Result` aliases
//!   (`ModelResult`, `OptResult`) with hand-rolled error enums; errors
//!   surface synchronously to the caller and are never retried or
//!   swallowed internally.
//! - Parameter vectors are `ndarray` containers over `f64` throughout.
//!
//! Downstream usage
//! ----------------
//! - Implement the `three_pl::data` capability traits for your data
//!   containers, construct a `SimplifiedThreePL` over an experiment,
//!   call `fit`, and read back the fitted parameters.
//! - The `optimization` layer is independently reusable for other
//!   likelihood-based models via the `LogLikelihood` trait.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   the end-to-end fitting scenarios in `tests/integration_three_pl.rs`.

pub mod optimization;
pub mod three_pl;
