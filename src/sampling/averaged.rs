use super::SamplingError;
use rand::Rng;

pub const DEFAULT_FACTOR: u32 = 3;

/// Returns a value in [center - spread, center + spread] by averaging factor uniform draws.
/// Larger factors pull results towards center (the shape is triangular for 2, Irwin-Hall
/// in general) but there are never any tails past spread.
pub fn averaged<R: Rng + ?Sized>(
    rng: &mut R,
    center: f32,
    spread: f32,
    factor: u32,
) -> Result<f32, SamplingError> {
    if factor == 0 {
        return Err(SamplingError::ZeroFactor);
    }

    let mut v = 0.0;
    for _ in 0..factor {
        v += super::unit(rng);
    }
    v /= factor as f32;
    Ok(center + (spread - 2.0 * spread * v))
}
