// Weight tables are a cheap way to get skewed random numbers: each value is stored in the
// table once per unit of weight and a uniformly random index is then chosen. With
// PRECISION = 0.1 the primary table holds 0.1 nine times, 0.2 eight times, and so on down
// to a single 0.9 so draws lean towards the low end of whatever range they are scaled to.
//
// The mirrored table is the primary table followed by its reverse. That changes the order
// of the entries but not how often each value appears, so uniform index draws from either
// table have the same distribution. Callers that want the "bell" shape the name suggests
// should use gaussian or averaged instead.
use once_cell::sync::OnceCell;
use rand::Rng;

/// Step used both for the table values and for counting how often each value is stored.
pub const PRECISION: f32 = 0.1;

/// The two immutable lookup tables. Normally obtained through [`WeightedSampler`] but
/// can be built directly, e.g. to inspect the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTables {
    primary: Vec<f32>,
    mirrored: Vec<f32>,
}

impl WeightTables {
    pub fn build() -> WeightTables {
        let primary = accrete(PRECISION);
        assert!(!primary.is_empty(), "PRECISION must be in (0, 1)");

        let mut mirrored = Vec::with_capacity(2 * primary.len());
        mirrored.extend(primary.iter().copied());
        mirrored.extend(primary.iter().rev().copied());

        WeightTables { primary, mirrored }
    }

    /// Ascending values, each repeated according to its weight.
    pub fn primary(&self) -> &[f32] {
        &self.primary
    }

    /// primary followed by primary reversed, always twice as long as primary.
    pub fn mirrored(&self) -> &[f32] {
        &self.mirrored
    }

    /// Distinct values of the primary table in ascending order along with how many times
    /// each appears.
    pub fn multiplicities(&self) -> Vec<(f32, usize)> {
        let mut result: Vec<(f32, usize)> = Vec::new();
        for &value in &self.primary {
            match result.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => result.push((value, 1)),
            }
        }
        result
    }
}

// The counts come from stepping i by precision, not from (1 - current) / precision. With
// f32 the two disagree from 0.6 on (e.g. 0.9 is stored once but the division gives 0).
fn accrete(precision: f32) -> Vec<f32> {
    let mut table = Vec::new();
    let mut current = precision;
    while current < 1.0 {
        let mut i = 0.0;
        while i < 1.0 - current {
            table.push(current);
            i += precision;
        }
        current += precision;
    }
    table
}

/// Owns the weight tables and builds them the first time they are needed. Building is
/// guarded so concurrent first callers see one fully built set of tables. `new` is const
/// so a sampler can live in a static if a process wide instance is wanted.
#[derive(Debug, Default)]
pub struct WeightedSampler {
    tables: OnceCell<WeightTables>,
}

impl WeightedSampler {
    pub const fn new() -> WeightedSampler {
        WeightedSampler {
            tables: OnceCell::new(),
        }
    }

    /// Builds the tables on the first call, afterwards this just returns them.
    pub fn ensure_built(&self) -> &WeightTables {
        self.tables.get_or_init(|| {
            let tables = WeightTables::build();
            debug!(
                "built weight tables with {} primary and {} mirrored entries",
                tables.primary.len(),
                tables.mirrored.len()
            );
            tables
        })
    }

    pub fn is_built(&self) -> bool {
        self.tables.get().is_some()
    }

    /// Returns min + deviation * w where w is a random entry of the primary table. Results
    /// cluster towards min. A negative deviation flips the range (min is then the top).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, min: f32, deviation: f32) -> f32 {
        let table = self.ensure_built().primary();
        min + deviation * table[rng.gen_range(0..table.len())]
    }

    /// Same as sample but indexes into the mirrored table. The output distribution is the
    /// same as sample's.
    pub fn sample_mirrored<R: Rng + ?Sized>(&self, rng: &mut R, min: f32, deviation: f32) -> f32 {
        let table = self.ensure_built().mirrored();
        min + deviation * table[rng.gen_range(0..table.len())]
    }
}
