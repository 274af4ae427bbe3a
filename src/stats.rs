//! Summaries of drawn samples, used to eyeball the samplers from the command line.
use fnv::FnvHashMap;
use std::fmt::{self, Formatter};

/// Min, max, and mean of a batch of samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f64,
}

impl Summary {
    /// Returns None if samples is empty.
    pub fn collect<I>(samples: I) -> Option<Summary>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut count = 0;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0;
        for sample in samples {
            count += 1;
            min = f32::min(min, sample);
            max = f32::max(max, sample);
            sum += sample as f64;
        }
        if count > 0 {
            Some(Summary {
                count,
                min,
                max,
                mean: sum / (count as f64),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min: {:.3}  max: {:.3}  avg: {:.3}  (n = {})",
            self.min, self.max, self.mean, self.count
        )
    }
}

/// Counts samples falling into equal width buckets over [lo, hi]. Samples outside that
/// range are clamped into the first or last bucket.
pub struct Histogram {
    lo: f32,
    hi: f32,
    buckets: usize,
    counts: FnvHashMap<usize, usize>,
}

impl Histogram {
    pub fn new(lo: f32, hi: f32, buckets: usize) -> Histogram {
        assert!(buckets > 0);
        assert!(hi > lo, "hi ({hi}) should be larger than lo ({lo})");
        Histogram {
            lo,
            hi,
            buckets,
            counts: FnvHashMap::default(),
        }
    }

    pub fn add(&mut self, sample: f32) {
        let t = (sample - self.lo) / (self.hi - self.lo);
        let index = (t * self.buckets as f32).floor();
        let index = f32::clamp(index, 0.0, (self.buckets - 1) as f32) as usize;
        let count = self.counts.entry(index).or_insert_with(|| 0);
        *count += 1;
    }

    pub fn count(&self, bucket: usize) -> usize {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Extend<f32> for Histogram {
    fn extend<T: IntoIterator<Item = f32>>(&mut self, iter: T) {
        for sample in iter {
            self.add(sample);
        }
    }
}

impl fmt::Display for Histogram {
    /// One row per bucket, the longest row has 40 stars.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let limit = 40;
        let max_count = self.counts.values().copied().max().unwrap_or(0);
        let scaling = if max_count > limit {
            (max_count as f64) / (limit as f64)
        } else {
            1.0
        };

        let width = (self.hi - self.lo) / (self.buckets as f32);
        let max_stars = ((max_count as f64) / scaling).round() as usize;
        for bucket in 0..self.buckets {
            let n = self.count(bucket);
            let stars = ((n as f64) / scaling).round() as usize;
            let start = self.lo + width * (bucket as f32);
            let padding = " ".repeat(max_stars - stars + 2);
            writeln!(f, "{start:>7.2}: {}{padding}{n}", "*".repeat(stars))?;
        }
        Ok(())
    }
}
