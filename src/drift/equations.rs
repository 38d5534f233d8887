use super::error::{DriftError, Result};

/// Entropy added to the base gradient on every simulated step
pub const ENTROPY_RAMP_PER_STEP: f64 = 0.05;

/// Coherence γ = 1 / (1 + θ·∇S)
///
/// Expects `theta >= 0` and `entropy_grad > 0`. Inside that domain the
/// result lies in (0, 1]. Outside it, a zero denominator is reported
/// instead of yielding infinity.
pub fn coherence(theta: f64, entropy_grad: f64) -> Result<f64> {
    let denominator = 1.0 + theta * entropy_grad;
    if denominator == 0.0 {
        return Err(DriftError::DivisionByZero {
            theta,
            entropy_grad,
        });
    }
    Ok(1.0 / denominator)
}

/// Drift δ = μ·(1 − γ)
pub fn drift(gamma: f64, mu: f64) -> f64 {
    mu * (1.0 - gamma)
}

/// Entropy gradient seen at step `t`; grows linearly from `base`
pub fn local_entropy(base: f64, t: u32) -> f64 {
    base + ENTROPY_RAMP_PER_STEP * f64::from(t)
}
