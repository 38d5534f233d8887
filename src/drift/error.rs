use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftError {
    #[error("coherence undefined: 1 + θ·∇S is zero (θ={theta}, ∇S={entropy_grad})")]
    DivisionByZero { theta: f64, entropy_grad: f64 },
    #[error("invalid step count {0}: simulation needs at least one step")]
    InvalidStepCount(u32),
    #[error("misaligned run: {times} times, {coherence} coherence values, {drift} drift values")]
    MisalignedSequences {
        times: usize,
        coherence: usize,
        drift: usize,
    },
    #[error("forecast disagrees with its run: {0}")]
    InconsistentForecast(&'static str),
}

pub type Result<T> = std::result::Result<T, DriftError>;
