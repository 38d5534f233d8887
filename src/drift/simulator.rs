use super::equations::{coherence, drift, local_entropy};
use super::error::{DriftError, Result};
use super::fate::{classify_fate, Fate};
use super::params::SimulationParameters;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Time-aligned coherence and drift sequences of one run
///
/// Decoding goes through the same alignment check `simulate` guarantees:
/// three non-empty sequences of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSimulationResult")]
pub struct SimulationResult {
    times: Vec<u32>,
    coherence: Vec<f64>,
    drift: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSimulationResult {
    times: Vec<u32>,
    coherence: Vec<f64>,
    drift: Vec<f64>,
}

impl TryFrom<RawSimulationResult> for SimulationResult {
    type Error = DriftError;

    fn try_from(raw: RawSimulationResult) -> Result<Self> {
        let (times, coherence, drift) = (raw.times.len(), raw.coherence.len(), raw.drift.len());
        if times != coherence || times != drift {
            return Err(DriftError::MisalignedSequences {
                times,
                coherence,
                drift,
            });
        }
        if times == 0 {
            return Err(DriftError::InvalidStepCount(0));
        }
        Ok(Self {
            times: raw.times,
            coherence: raw.coherence,
            drift: raw.drift,
        })
    }
}

impl SimulationResult {
    pub fn times(&self) -> &[u32] { &self.times }
    pub fn coherence(&self) -> &[f64] { &self.coherence }
    pub fn drift(&self) -> &[f64] { &self.drift }
    pub fn len(&self) -> usize { self.times.len() }
    pub fn is_empty(&self) -> bool { self.times.is_empty() }

    /// Drift at the last step. Neither `simulate` nor decoding yields an
    /// empty run, so the NaN fallback is never observed.
    pub fn final_drift(&self) -> f64 {
        self.drift.last().copied().unwrap_or(f64::NAN)
    }

    /// `(t, γ, δ)` triples in time order
    pub fn points(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.times
            .iter()
            .zip(&self.coherence)
            .zip(&self.drift)
            .map(|((&t, &gamma), &delta)| (t, gamma, delta))
    }

    /// CRC-32 over the run's little-endian bit patterns; bit-identical
    /// runs give equal fingerprints
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.times.len() as u64).to_le_bytes());
        for t in &self.times {
            hasher.update(&t.to_le_bytes());
        }
        for value in self.coherence.iter().chain(&self.drift) {
            hasher.update(&value.to_bits().to_le_bytes());
        }
        hasher.finalize()
    }
}

/// Runs the drift recurrence for `params.steps` steps
pub fn simulate(params: SimulationParameters) -> Result<SimulationResult> {
    if params.steps == 0 {
        return Err(DriftError::InvalidStepCount(params.steps));
    }
    if !params.in_domain() {
        warn!(?params, "simulation parameters outside documented domain");
    }
    debug!(?params, "starting drift simulation");

    let steps = params.steps as usize;
    let mut times = Vec::with_capacity(steps);
    let mut coherences = Vec::with_capacity(steps);
    let mut drifts = Vec::with_capacity(steps);

    for t in 0..params.steps {
        let entropy = local_entropy(params.entropy_grad_base, t);
        let gamma = coherence(params.theta, entropy)?;
        let delta = drift(gamma, params.mu);
        trace!(t, entropy, gamma, delta, "drift step");

        times.push(t);
        coherences.push(gamma);
        drifts.push(delta);
    }

    let result = SimulationResult {
        times,
        coherence: coherences,
        drift: drifts,
    };
    debug!(final_drift = result.final_drift(), "drift simulation finished");
    Ok(result)
}

/// A simulation run together with its terminal classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawForecast")]
pub struct Forecast {
    result: SimulationResult,
    final_drift: f64,
    fate: Fate,
}

#[derive(Deserialize)]
struct RawForecast {
    result: SimulationResult,
    final_drift: f64,
    fate: Fate,
}

impl TryFrom<RawForecast> for Forecast {
    type Error = DriftError;

    fn try_from(raw: RawForecast) -> Result<Self> {
        if raw.final_drift.to_bits() != raw.result.final_drift().to_bits() {
            return Err(DriftError::InconsistentForecast(
                "final drift is not the last drift value",
            ));
        }
        if raw.fate != classify_fate(raw.final_drift) {
            return Err(DriftError::InconsistentForecast(
                "fate does not match the final drift",
            ));
        }
        Ok(Self {
            result: raw.result,
            final_drift: raw.final_drift,
            fate: raw.fate,
        })
    }
}

impl Forecast {
    pub fn result(&self) -> &SimulationResult { &self.result }
    pub fn final_drift(&self) -> f64 { self.final_drift }
    pub fn fate(&self) -> Fate { self.fate }

    /// Final drift to four decimal places, as shown in the status panel
    pub fn final_drift_display(&self) -> String {
        format!("{:.4}", self.final_drift)
    }
}

/// Simulates and classifies the drift at the last step
pub fn forecast(params: SimulationParameters) -> Result<Forecast> {
    let result = simulate(params)?;
    let final_drift = result.final_drift();
    let fate = classify_fate(final_drift);
    debug!(final_drift, %fate, "forecast classified");

    Ok(Forecast {
        result,
        final_drift,
        fate,
    })
}
