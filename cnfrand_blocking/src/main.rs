use clap::Parser;
use cnfrand::parser::{self as cparser, persisting::write_trials};
use cnfrand::sampler::{self, SampleConfig, DEFAULT_MARKER};
use cnfrand::util;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Writes trials of a CNF file, each keeping a random subset of its blocking clauses.
///
/// Every line up to and including the first comment containing the marker is kept.
/// The lines after it are shuffled and the first PROB fraction of them is kept.
#[derive(Parser)]
#[command(
    name = "blocking-randomizer",
    version,
    arg_required_else_help(true),
    verbatim_doc_comment
)]
struct Cli {
    /// The CNF file containing the blocking clauses.
    input: PathBuf,

    /// The fraction of blocking clauses each trial keeps, between 0 and 1.
    #[arg(allow_negative_numbers = true)]
    probability: f64,

    /// The number of trials, each one is written to its own file.
    trials: usize,

    /// Seed for all trials, any integer.
    /// Derived from the current time when not given, the derived seed is logged on info level.
    #[arg(allow_negative_numbers = true, verbatim_doc_comment)]
    seed: Option<i64>,

    /// The directory the trials are written to.
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// File name prefix of the trials, trial i is written to <PREFIX><i>.cnf.
    #[arg(short, long, default_value = "Randomizer")]
    prefix: String,

    /// The substring identifying the comment that precedes the blocking clauses.
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Logging level for outputting warnings and other information.
    #[arg(short, long, default_value_t = log::LevelFilter::Warn)]
    logging: log::LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(cli.logging)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> cnfrand::Result<()> {
    let config = SampleConfig {
        probability: cli.probability,
        trials: cli.trials,
    };
    config.validate()?;

    let document = cparser::parse_raw_file(&cli.input)?;
    let seed = cli.seed.map(util::seed_from_signed);
    let mut rng = util::rng(seed, util::timestamp_seed);

    let trials = sampler::sample(document, &config, &cli.marker, &mut rng)?;
    let paths = write_trials(trials, &cli.directory, &cli.prefix)?;

    info!(
        "Wrote {} trials to {}.",
        paths.len(),
        cli.directory.display()
    );
    Ok(())
}
