//! Numerical stability utilities.
//!
//! Provides safe implementations of the logistic transform and its
//! inverse, which are prone to overflow in naïve form. The functions here
//! follow guarded strategies similar to those in major ML libraries
//! (e.g. PyTorch, TensorFlow), branching on the sign of the input to keep
//! `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`safe_logistic(x)`]: stable version of `1 / (1 + exp(-x))`,
//!   mapping ℝ → (0, 1) without overflow.
//! - [`safe_logit(p)`]: inverse of the logistic, mapping (0, 1) → ℝ.
//!
//! # Rationale
//! These transforms are the building blocks for constrained-parameter
//! optimization over an unconstrained domain: a probability-valued
//! parameter is stored and searched in logit space, and transformed back
//! to (0, 1) only when the model needs the probability itself.

/// Numerically stable logistic (sigmoid): `logistic(x) = 1 / (1 + exp(-x))`.
///
/// Computes the logistic function without overflow for large |x| by
/// branching on the sign of the input:
///
/// - For `x >= 0`, evaluates `1 / (1 + exp(-x))`; `exp(-x)` cannot overflow.
/// - For `x < 0`, evaluates the equivalent `exp(x) / (1 + exp(x))`;
///   `exp(x)` cannot overflow.
///
/// For any finite `x` the result lies in the closed interval `[0, 1]`;
/// in exact arithmetic it is strictly inside `(0, 1)`, but `f64`
/// saturation rounds the tails to exactly `0.0` (around `x < -745`) and
/// `1.0` (around `x > 37`).
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `logistic(x)` as `f64`.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Stable inverse of the logistic on `(0, 1)`: solves for `t` in
/// `logistic(t) = p`, returning `t = ln(p / (1 - p))`.
///
/// Uses `ln_1p` for the denominator term to avoid precision loss when
/// `p` is small.
///
/// # Parameters
/// - `p`: a probability strictly inside `(0, 1)`.
///
/// # Returns
/// - `t` such that `logistic(t) = p`. Non-finite for `p` at or outside
///   the boundary; callers are expected to validate the domain.
pub fn safe_logit(p: f64) -> f64 {
    p.ln() - (-p).ln_1p()
}
