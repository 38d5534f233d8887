//! Coherence/drift recurrence and fate classification.

pub mod error;
pub mod equations;
pub mod fate;
pub mod params;
pub mod simulator;

pub use error::{DriftError, Result};
pub use equations::{coherence, drift, local_entropy, ENTROPY_RAMP_PER_STEP};
pub use fate::{classify_fate, Fate, COLLAPSE_FLOOR, RECOVER_CEILING};
pub use params::{ParameterDomain, SimulationParameters};
pub use simulator::{forecast, simulate, Forecast, SimulationResult};
