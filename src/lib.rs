//! Symbolic drift simulation.
//!
//! Two small calculators live side by side:
//! - [`drift`]: iterates the coherence/drift recurrence over a time horizon
//!   and classifies the terminal drift into a [`Fate`]
//! - [`timefield`]: single-shot perceived time (τ) and its explanation

pub mod drift;
pub mod timefield;

pub use drift::{
    classify_fate, coherence, drift, forecast, simulate, DriftError, Fate, Forecast,
    ParameterDomain, SimulationParameters, SimulationResult,
};
pub use timefield::{compute_tau, explain_tau, TimefieldInputs, TimefieldResult};
