use rand::Rng;

/// Returns a value in [-value, value], e.g. 4 gives -4 to +4.
pub fn symmetric<R: Rng + ?Sized>(rng: &mut R, value: f32) -> f32 {
    value - 2.0 * value * super::unit(rng)
}

/// Returns a value in [min, max]. If max < min the range is simply flipped.
pub fn between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * super::unit(rng)
}

/// Like between but the bounds may be given in either order.
pub fn between_unordered<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    between(rng, f32::min(a, b), f32::max(a, b))
}

/// Returns splits random fractions that add up to 1. In the (very) unlikely case that every
/// draw was zero the zeros are returned as is.
pub fn split_percentages<R: Rng + ?Sized>(rng: &mut R, splits: usize) -> Vec<f32> {
    let mut values: Vec<f32> = (0..splits).map(|_| super::unit(rng)).collect();
    let total: f32 = values.iter().sum();
    if total != 0.0 {
        for value in values.iter_mut() {
            *value /= total;
        }
    }
    values
}
