use rand::Rng;
use std::ops::{Add, Mul};

/// Float type that weights are summed and rolled in.
pub trait Accumulator: Copy + PartialOrd + Add<Output = Self> + Mul<Output = Self> {
    const ZERO: Self;

    /// Converts a uniform [0, 1) draw. Narrowing to f32 can round it up to 1.0.
    fn from_unit(u: f64) -> Self;
}

impl Accumulator for f32 {
    const ZERO: f32 = 0.0;

    fn from_unit(u: f64) -> f32 {
        u as f32
    }
}

impl Accumulator for f64 {
    const ZERO: f64 = 0.0;

    fn from_unit(u: f64) -> f64 {
        u
    }
}

/// Anything that can be used as a weight for [`pick`]. f64 weights are summed in f64,
/// everything else in f32. Integer weights select exactly like the equivalent f32 weights,
/// which also means that integers above 2^24 lose precision (16_777_217 and 16_777_216 are
/// the same weight).
pub trait Weight: Copy {
    type Acc: Accumulator;

    fn accumulate(self) -> Self::Acc;
}

impl Weight for f32 {
    type Acc = f32;

    fn accumulate(self) -> f32 {
        self
    }
}

impl Weight for f64 {
    type Acc = f64;

    fn accumulate(self) -> f64 {
        self
    }
}

impl Weight for i32 {
    type Acc = f32;

    fn accumulate(self) -> f32 {
        self as f32
    }
}

impl Weight for u32 {
    type Acc = f32;

    fn accumulate(self) -> f32 {
        self as f32
    }
}

impl Weight for usize {
    type Acc = f32;

    fn accumulate(self) -> f32 {
        self as f32
    }
}

/// Returns the index of a randomly chosen entry where each entry's chance is proportional
/// to its (non-negative) weight. Returns None if weights is empty or sums to zero. A draw
/// is always taken from rng, even when nothing can be selected.
pub fn pick<W: Weight, R: Rng + ?Sized>(weights: &[W], rng: &mut R) -> Option<usize> {
    let total = total(weights);
    let roll = total * W::Acc::from_unit(rng.gen::<f64>());
    scan(weights, total, roll)
}

/// The selection step of [`pick`] for a fixed roll in [0, total]. Ranges are inclusive at
/// both ends and the last range containing roll wins, so a roll sitting exactly on a
/// boundary goes to the later entry (zero weight entries included).
pub fn select<W: Weight>(weights: &[W], roll: W::Acc) -> Option<usize> {
    scan(weights, total(weights), roll)
}

fn total<W: Weight>(weights: &[W]) -> W::Acc {
    weights.iter().fold(W::Acc::ZERO, |sum, w| sum + w.accumulate())
}

fn scan<W: Weight>(weights: &[W], total: W::Acc, roll: W::Acc) -> Option<usize> {
    if !(total > W::Acc::ZERO) {
        return None;
    }

    let mut picked = None;
    let mut running = W::Acc::ZERO;
    for (index, weight) in weights.iter().enumerate() {
        let weight = weight.accumulate();
        // No early exit: later matches replace earlier ones.
        if running <= roll && roll <= running + weight {
            picked = Some(index);
        }
        running = running + weight;
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    // Rngs whose f64 draws are exactly 0.0 and (after narrowing to f32) exactly 1.0.
    fn lowest() -> StepRng {
        StepRng::new(0, 0)
    }

    fn highest() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_lowest_roll() {
        assert_eq!(pick(&[1.0, 1.0, 1.0, 1.0], &mut lowest()), Some(0));
        assert_eq!(pick(&[1, 1, 1, 1], &mut lowest()), Some(0));
    }

    #[test]
    fn test_highest_roll() {
        assert_eq!(pick(&[1.0, 1.0, 1.0, 1.0], &mut highest()), Some(3));
        assert_eq!(pick(&[1, 1, 1, 1], &mut highest()), Some(3));
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(select::<i32>(&[1, 1, 1, 1], 1.0), Some(1));
        assert_eq!(select::<i32>(&[1, 1, 1, 1], 0.5), Some(0));
        assert_eq!(select::<i32>(&[2, 0, 0, 3], 1.0), Some(0));
        assert_eq!(select::<i32>(&[2, 0, 0, 3], 4.0), Some(3));
    }

    #[test]
    fn test_zero_weights_on_boundary() {
        // Both zero weight entries contain 2 but the later one wins.
        assert_eq!(select::<i32>(&[2, 0, 0], 2.0), Some(2));
        assert_eq!(pick(&[2, 0, 0], &mut highest()), Some(2));

        // Here the last entry's range [2, 5] also contains 2.
        assert_eq!(select::<i32>(&[2, 0, 0, 3], 2.0), Some(3));
        assert_eq!(select(&[2.0, 0.0, 0.0, 3.0], 2.0), Some(3));
    }

    #[test]
    fn test_no_selection() {
        let empty: [f32; 0] = [];
        assert_eq!(pick(&empty, &mut lowest()), None);
        assert_eq!(pick(&[0.0, 0.0, 0.0], &mut lowest()), None);
        assert_eq!(pick(&[0, 0, 0], &mut highest()), None);
        assert_eq!(select::<i32>(&[0, 0, 0], 0.0), None);

        let empty: [u32; 0] = [];
        assert_eq!(select(&empty, 0.0), None);
    }

    #[test]
    fn test_roll_out_of_range() {
        assert_eq!(select::<i32>(&[1, 1], 2.5), None);
        assert_eq!(select::<i32>(&[1, 1], -0.5), None);
    }

    #[test]
    fn test_integers_match_floats() {
        let ints = [3, 1, 4, 1, 5, 0, 9];
        let floats = [3.0f32, 1.0, 4.0, 1.0, 5.0, 0.0, 9.0];
        let mut rng1 = SmallRng::seed_from_u64(11);
        let mut rng2 = SmallRng::seed_from_u64(11);
        for _ in 0..1000 {
            assert_eq!(pick(&ints, &mut rng1), pick(&floats, &mut rng2));
        }
    }

    #[test]
    fn test_proportions() {
        let weights = [1.0, 3.0];
        let mut rng = SmallRng::seed_from_u64(12);
        let mut counts = [0; 2];
        for _ in 0..10_000 {
            let index = pick(&weights, &mut rng).unwrap();
            counts[index] += 1;
        }
        let p = (counts[1] as f64) / 10_000.0;
        assert!((p - 0.75).abs() < 0.03, "picked the heavy entry {p} of the time");
    }

    #[test]
    fn test_always_in_range() {
        let weights = [0.5, 0.0, 2.25, 0.0, 1.0];
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..10_000 {
            let index = pick(&weights, &mut rng).unwrap();
            assert!(index < weights.len());
        }
    }

    #[test]
    fn test_huge_f64_weights() {
        // These overflow f32.
        let weights = [1.0e40, 1.0e40, 1.0e40];
        let mut rng = SmallRng::seed_from_u64(5);
        let mut counts = [0; 3];
        for _ in 0..9_000 {
            let index = pick(&weights, &mut rng).unwrap();
            counts[index] += 1;
        }
        for (index, &count) in counts.iter().enumerate() {
            assert!(count > 2_700 && count < 3_300, "index {index} was picked {count} times");
        }
        assert_eq!(select(&weights, 1.5e40), Some(1));
    }

    #[test]
    fn test_tiny_f64_weights() {
        // These underflow f32.
        let weights = [1.0e-50, 3.0e-50];
        let mut rng = SmallRng::seed_from_u64(6);
        let mut counts = [0; 2];
        for _ in 0..10_000 {
            let index = pick(&weights, &mut rng).unwrap();
            counts[index] += 1;
        }
        let p = (counts[1] as f64) / 10_000.0;
        assert!((p - 0.75).abs() < 0.03, "picked the heavy entry {p} of the time");
        assert_eq!(pick(&weights, &mut StepRng::new(0, 0)), Some(0));
    }

    #[test]
    fn test_large_integers_round() {
        // Past 2^24 neighboring integers collapse to the same f32 weight.
        assert_eq!(16_777_217usize.accumulate(), 16_777_216usize.accumulate());
        assert_eq!(16_777_217u32.accumulate(), 16_777_216.0f32);
        assert_eq!(16_777_215i32.accumulate(), 16_777_215.0f32);
    }
}
