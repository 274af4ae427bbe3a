//! Random sampling helpers used by the game client: weighted draws from precomputed
//! tables, a cumulative weighted picker, and a couple of shaped distributions.
#[macro_use]
extern crate log;

mod config;
mod sampling;
mod stats;

pub use config::Config;
pub use sampling::*;
pub use stats::{Histogram, Summary};
