use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use e6b::params::{DensityAltitudeParams, WindProblemParams};
use e6b::{Catalog, CatalogFilter, GeneratorConfig, Level, ProblemKey, Side};
use itertools::Itertools;
use math::convert::ConversionPair;
use math::{Altitude, Temp, Unit};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod present;

#[derive(clap::Parser)]
#[clap(version, about)]
struct Options {
    /// JSON file overriding the atmosphere constants and rounding policy.
    #[clap(long, global = true)]
    config:  Option<PathBuf>,
    /// Log more; repeat for even more. `RUST_LOG` takes precedence.
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List the problems that can be generated.
    List {
        #[clap(flatten)]
        filter: FilterArgs,
    },
    /// Generate practice problems.
    Problem {
        /// Problem to generate. Picks at random from the filtered catalog if omitted.
        key:     Option<ProblemKey>,
        /// Seed for reproducible problem sets.
        #[clap(long)]
        seed:    Option<u64>,
        #[clap(long, default_value_t = 1)]
        count:   usize,
        #[clap(flatten)]
        filter:  FilterArgs,
        /// Print the answer below each problem.
        #[clap(long)]
        answers: bool,
        /// Print the steps to work each problem on the E6B.
        #[clap(long)]
        steps:   bool,
        /// Print one JSON object per problem instead.
        #[clap(long)]
        json:    bool,
    },
    /// Solve a wind triangle.
    Wind {
        /// Desired course in degrees true.
        #[clap(long)]
        course:     f64,
        /// True airspeed in knots.
        #[clap(long)]
        tas:        f64,
        /// Direction the wind blows from, in degrees true.
        #[clap(long)]
        wind_from:  f64,
        /// Wind speed in knots.
        #[clap(long)]
        wind_speed: f64,
    },
    /// Convert a value between units on the E6B scales.
    Convert {
        #[clap(allow_negative_numbers = true)]
        value: f64,
        from:  Unit,
        to:    Unit,
    },
    /// Compute density altitude, and true airspeed if a calibrated airspeed is given.
    DensityAltitude {
        /// Pressure altitude in feet.
        #[clap(long)]
        pressure_altitude: f64,
        /// Outside air temperature in °C.
        #[clap(long, allow_negative_numbers = true)]
        temp:              f64,
        /// Calibrated airspeed in knots.
        #[clap(long)]
        cas:               Option<f64>,
    },
}

#[derive(clap::Args)]
struct FilterArgs {
    /// Only problems worked on this side of the E6B.
    #[clap(long)]
    side:  Option<Side>,
    /// Only problems up to this level.
    #[clap(long)]
    level: Option<Level>,
}

impl From<FilterArgs> for CatalogFilter {
    fn from(args: FilterArgs) -> Self { Self { side: args.side, level: args.level } }
}

fn main() -> Result<()> {
    let options: Options = clap::Parser::parse();
    init_logging(options.verbose);

    let config = load_config(options.config.as_deref())?;
    let mut out = String::new();

    match options.command {
        Command::List { filter } => {
            let catalog = Catalog::standard().filtered(filter.into());
            present::catalog(&mut out, &catalog)?;
        }
        Command::Problem { key, seed, count, filter, answers, steps, json } => {
            let catalog = Catalog::standard().filtered(filter.into());
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            tracing::info!(seed, "seeding problem generator");
            let mut rng = SmallRng::seed_from_u64(seed);

            for number in 1..=count {
                let problem = catalog
                    .generate(key, &mut rng, &config)
                    .with_context(|| format!("generate problem {number} of {count}"))?;
                if json {
                    out.push_str(&serde_json::to_string(&problem).context("serialize problem")?);
                    out.push('\n');
                } else {
                    present::problem(
                        &mut out,
                        number,
                        &problem,
                        present::Reveal { answer: answers, steps },
                    )?;
                }
            }
        }
        Command::Wind { course, tas, wind_from, wind_speed } => {
            let params = WindProblemParams::new(course, tas, wind_from, wind_speed)
                .context("invalid wind triangle")?;
            present::wind(&mut out, &params)?;
        }
        Command::Convert { value, from, to } => {
            let pair = ConversionPair::new(value, from, to).with_context(|| {
                format!("{from} converts to {}", from.counterparts().join(", "))
            })?;
            present::conversion(&mut out, &pair, config.rounding)?;
        }
        Command::DensityAltitude { pressure_altitude, temp, cas } => {
            let model = &config.atmosphere;
            if let Some(cas) = cas {
                let params = DensityAltitudeParams::new(pressure_altitude, temp, cas, model)
                    .context("invalid density altitude inputs")?;
                present::density_altitude(
                    &mut out,
                    params.pressure_altitude,
                    params.outside_air_temp,
                    params.density_altitude,
                )?;
                present::true_airspeed(&mut out, &params)?;
            } else {
                let pressure_altitude = Altitude::from_feet(
                    DensityAltitudeParams::PRESSURE_ALTITUDE_INPUT
                        .check(pressure_altitude)
                        .context("invalid pressure altitude")?,
                );
                let temp = Temp::from_celsius(
                    DensityAltitudeParams::OUTSIDE_AIR_TEMP
                        .check(temp)
                        .context("invalid outside air temperature")?,
                );
                present::density_altitude(
                    &mut out,
                    pressure_altitude,
                    temp,
                    model.density_altitude(pressure_altitude, temp),
                )?;
            }
        }
    }

    print!("{out}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else { return Ok(GeneratorConfig::default()) };

    let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config = GeneratorConfig::from_json(&json)
        .with_context(|| format!("load config from {}", path.display()))?;
    tracing::debug!(?config, "loaded generator config");
    Ok(config)
}
