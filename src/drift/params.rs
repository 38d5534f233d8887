use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Documented input ranges of the interactive controls
pub struct ParameterDomain;

impl ParameterDomain {
    pub const THETA: RangeInclusive<f64> = 0.0..=2.0;
    pub const MU: RangeInclusive<f64> = 0.0..=5.0;
    pub const ENTROPY_GRAD_BASE: RangeInclusive<f64> = 0.1..=10.0;
}

/// Inputs for a single drift simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Clinging (Θ) to the initial structure
    pub theta: f64,
    /// Memory tension (μ)
    pub mu: f64,
    /// Entropy gradient (∇S) at step zero
    pub entropy_grad_base: f64,
    /// Number of time steps to simulate
    pub steps: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            theta: 1.0,
            mu: 1.0,
            entropy_grad_base: 1.0,
            steps: 20,
        }
    }
}

impl SimulationParameters {
    pub fn new(theta: f64, mu: f64, entropy_grad_base: f64) -> Self {
        Self {
            theta,
            mu,
            entropy_grad_base,
            ..Self::default()
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// True when θ, μ and ∇S all sit inside [`ParameterDomain`]
    pub fn in_domain(&self) -> bool {
        ParameterDomain::THETA.contains(&self.theta)
            && ParameterDomain::MU.contains(&self.mu)
            && ParameterDomain::ENTROPY_GRAD_BASE.contains(&self.entropy_grad_base)
    }
}
