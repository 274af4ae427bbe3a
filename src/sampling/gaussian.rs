use rand::Rng;
use std::f64::consts::PI;

/// Normally distributed value using the Box-Muller transform. A zero std_dev always
/// returns mean and a non-finite std_dev gives a non-finite result.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f32, std_dev: f32) -> f32 {
    // Both draws are in (0, 1] so that ln never sees zero.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = 1.0 - rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).sin();
    (mean as f64 + std_dev as f64 * z) as f32
}
