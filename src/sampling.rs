//! Everything that turns a caller supplied [`rand::Rng`] into game values. None of these
//! own a generator: reproducibility is entirely up to how the caller seeds theirs.
mod averaged;
mod gaussian;
mod picker;
mod tables;
mod uniform;

pub use averaged::{averaged, DEFAULT_FACTOR};
pub use gaussian::gaussian;
pub use picker::{pick, select, Accumulator, Weight};
pub use tables::{WeightTables, WeightedSampler, PRECISION};
pub use uniform::{between, between_unordered, split_percentages, symmetric};

use std::fmt::{self, Formatter};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SamplingError {
    /// The averaged sampler was asked to average zero draws.
    ZeroFactor,
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SamplingError::ZeroFactor => write!(f, "factor must be at least 1"),
        }
    }
}

impl std::error::Error for SamplingError {}

/// Uniform draw in [0, 1) narrowed to f32. Note that the narrowing can round draws very
/// close to 1 up to exactly 1.0.
fn unit<R: rand::Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f64>() as f32
}
