//! Perceived symbolic time (τ) from coherence, memory rate and entropy.
//!
//! τ = γ · (Δ𝓜 + ∇S)
//!
//! where γ is the phase coherence between present and memory (expected in
//! [0, 1]), Δ𝓜 the memory reinforcement rate and ∇S the entropy gradient.

use serde::{Deserialize, Serialize};

/// Fraction digits used by [`explain_tau`]
pub const EXPLAIN_PRECISION: usize = 2;
/// Delimiter between explanation fields
pub const EXPLAIN_SEPARATOR: &str = " | ";

pub fn compute_tau(gamma: f64, delta_m: f64, entropy_gradient: f64) -> f64 {
    gamma * (delta_m + entropy_gradient)
}

/// Human-readable line: coherence, memory rate, entropy, then τ.
///
/// Each value is rounded to [`EXPLAIN_PRECISION`] digits from its exact
/// binary value, ties to even (Rust's `{:.N}` formatting). Field order and
/// the `" | "` delimiter are fixed; consumers parse this string.
pub fn explain_tau(gamma: f64, delta_m: f64, entropy_gradient: f64) -> String {
    let tau = compute_tau(gamma, delta_m, entropy_gradient);
    format_explanation(gamma, delta_m, entropy_gradient, tau)
}

fn format_explanation(gamma: f64, delta_m: f64, entropy_gradient: f64, tau: f64) -> String {
    let p = EXPLAIN_PRECISION;
    [
        format!("γ (coherence): {gamma:.p$}"),
        format!("Δ𝓜 (memory rate): {delta_m:.p$}"),
        format!("∇S (entropy): {entropy_gradient:.p$}"),
        format!("τ (symbolic time drift): {tau:.p$}"),
    ]
    .join(EXPLAIN_SEPARATOR)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimefieldInputs {
    pub gamma: f64,
    pub delta_m: f64,
    pub entropy_gradient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimefieldResult {
    pub tau: f64,
    pub explanation: Option<String>,
}

impl TimefieldInputs {
    pub fn new(gamma: f64, delta_m: f64, entropy_gradient: f64) -> Self {
        Self {
            gamma,
            delta_m,
            entropy_gradient,
        }
    }

    pub fn evaluate(&self) -> TimefieldResult {
        TimefieldResult {
            tau: compute_tau(self.gamma, self.delta_m, self.entropy_gradient),
            explanation: None,
        }
    }

    /// Like [`evaluate`](Self::evaluate), with the explanation filled in
    pub fn explain(&self) -> TimefieldResult {
        let TimefieldResult { tau, .. } = self.evaluate();
        TimefieldResult {
            tau,
            explanation: Some(format_explanation(
                self.gamma,
                self.delta_m,
                self.entropy_gradient,
                tau,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_tau() {
        assert_eq!(compute_tau(0.5, 1.0, 2.0), 1.5);
        assert_eq!(compute_tau(0.0, 9.0, 9.0), 0.0);
        assert_eq!(compute_tau(1.0, -2.0, 2.0), 0.0);
    }

    #[test]
    fn test_explain_tau_layout() {
        assert_eq!(
            explain_tau(0.5, 1.0, 2.0),
            "γ (coherence): 0.50 | Δ𝓜 (memory rate): 1.00 | ∇S (entropy): 2.00 | τ (symbolic time drift): 1.50"
        );
    }

    #[test]
    fn test_explain_tau_rounding() {
        // 0.125 is exact in binary, so the tie goes to even
        let line = explain_tau(0.125, 0.0, 1.0);
        assert!(line.starts_with("γ (coherence): 0.12 |"));
        assert!(explain_tau(0.375, 0.0, 1.0).starts_with("γ (coherence): 0.38 |"));
        // 0.675 is stored slightly above the tie
        assert!(explain_tau(1.0, 0.675, 0.0).contains("Δ𝓜 (memory rate): 0.68 |"));
    }

    #[test]
    fn test_inputs_explain() {
        let result = TimefieldInputs::new(0.5, 1.0, 2.0).explain();
        assert_eq!(result.tau, 1.5);
        let text = result.explanation.unwrap();
        assert_eq!(text.split(EXPLAIN_SEPARATOR).count(), 4);
        assert!(text.ends_with("1.50"));
        assert!(TimefieldInputs::new(0.5, 1.0, 2.0).evaluate().explanation.is_none());
    }

    #[test]
    fn test_explain_reports_evaluated_tau() {
        let inputs = TimefieldInputs::new(0.37, 2.25, -0.8);
        let result = inputs.explain();
        assert_eq!(result.tau, inputs.evaluate().tau);
        assert_eq!(
            result.explanation.as_deref(),
            Some(explain_tau(0.37, 2.25, -0.8).as_str())
        );
        assert!(result
            .explanation
            .unwrap()
            .ends_with(&format!("τ (symbolic time drift): {:.2}", result.tau)));
    }
}
