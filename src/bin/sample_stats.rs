//! Draws a batch of values from each sampler and prints summaries so that their shapes can
//! be eyeballed (and compared against a reference normal distribution).
#[macro_use]
extern crate log;
extern crate simplelog;

use clap::Parser;
use extra_math::{averaged, gaussian, Config, Histogram, Summary, WeightedSampler, DEFAULT_FACTOR};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::error::Error;
use std::{fs::File, str::FromStr};

const SERVICE: &str = "sample-stats";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML file with [default] and [sample-stats] sections
    #[arg(long, default_value = "config.toml", value_name = "PATH")]
    config: String,

    /// Seed for the random number generator [default: random]
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Number of values to draw from each sampler [default: 10000]
    #[arg(long, value_name = "N")]
    draws: Option<usize>,

    /// Also print histograms for the weighted samplers
    #[arg(long)]
    histogram: bool,

    /// Can be trace, debug, info, warn, error, or off [default: info]
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log file and line number at LEVEL and above [default: off]
    #[arg(long, value_name = "LEVEL")]
    log_location: Option<String>,

    /// Relative path to log file [default: sample-stats.log]
    #[arg(long, value_name = "PATH")]
    log_path: Option<String>,
}

/// Command line options win over the config file which wins over the built in defaults.
struct Settings {
    seed: u64,
    draws: usize,
    histogram: bool,
}

impl Settings {
    fn new(args: &Args, config: &Config) -> Settings {
        let seed = args
            .seed
            .or_else(|| config.int_value("seed").map(|n| n as u64))
            .unwrap_or_else(rand::random);
        let draws = args
            .draws
            .or_else(|| config.int_value("draws").and_then(|n| usize::try_from(n).ok()))
            .unwrap_or(10_000);
        let histogram = args.histogram || config.bool_value("histogram").unwrap_or(false);
        Settings { seed, draws, histogram }
    }
}

fn level(
    arg: &Option<String>,
    config: &Config,
    key: &str,
    default: &str,
) -> Result<LevelFilter, String> {
    let value = arg.clone().unwrap_or_else(|| config.str_value(key, default));
    LevelFilter::from_str(&value).map_err(|_| format!("bad {key}: '{value}'"))
}

fn init_logging(args: &Args, config: &Config) -> Result<(), Box<dyn Error>> {
    // See https://docs.rs/simplelog/0.12.1/simplelog/struct.ConfigBuilder.html
    let location = level(&args.log_location, config, "log_location", "off")?;
    let log_level = level(&args.log_level, config, "log_level", "info")?;
    let log_path = args
        .log_path
        .clone()
        .unwrap_or_else(|| config.str_value("log_path", "sample-stats.log"));
    let logging = ConfigBuilder::new()
        .set_location_level(location) // file names and line numbers
        .set_target_level(LevelFilter::Off) // don't log exe name
        .set_thread_level(LevelFilter::Off) // don't log thread IDs
        .build();
    WriteLogger::init(log_level, logging, File::create(&log_path)?)?;

    let local = chrono::Local::now();
    info!(
        "started up on {} with version {} ----------------------------",
        local.to_rfc2822(),
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn print_summary(name: &str, samples: &[f32]) {
    match Summary::collect(samples.iter().copied()) {
        Some(summary) => {
            println!("{name:<10} {summary}");
            info!("{name}: {summary}");
        }
        None => println!("{name:<10} no samples"),
    }
}

fn print_histogram(samples: &[f32], lo: f32, hi: f32) {
    let mut histogram = Histogram::new(lo, hi, 10);
    histogram.extend(samples.iter().copied());
    println!("{histogram}");
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::load(&args.config, SERVICE);
    init_logging(&args, &config)?;
    if let Some(err) = config.error() {
        error!("error loading {}: {err}", args.config);
    }

    let settings = Settings::new(&args, &config);
    info!("seed {} with {} draws", settings.seed, settings.draws);
    println!("seed: {}\n", settings.seed);

    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let sampler = WeightedSampler::new();
    let weights: Vec<f32> = (0..settings.draws)
        .map(|_| sampler.sample(&mut rng, 0.0, 10.0))
        .collect();
    let bells: Vec<f32> = (0..settings.draws)
        .map(|_| sampler.sample_mirrored(&mut rng, 0.0, 10.0))
        .collect();
    print_summary("weights", &weights);
    print_summary("bell", &bells);
    if settings.histogram {
        println!("\nweights:");
        print_histogram(&weights, 0.0, 10.0);
        println!("bell:");
        print_histogram(&bells, 0.0, 10.0);
    } else {
        println!();
    }

    let gaussians: Vec<f32> = (0..settings.draws).map(|_| gaussian(&mut rng, 0.0, 1.0)).collect();
    let normal = Normal::new(0.0, 1.0)?;
    let reference: Vec<f32> = (0..settings.draws)
        .map(|_| rng.sample::<f64, _>(normal) as f32)
        .collect();
    let averages = (0..settings.draws)
        .map(|_| averaged(&mut rng, 0.0, 1.0, DEFAULT_FACTOR))
        .collect::<Result<Vec<f32>, _>>()?;
    print_summary("gaussian", &gaussians);
    print_summary("normal", &reference);
    print_summary("averaged", &averages);

    Ok(())
}
