use clap::Parser;
use cnfrand::parser::{
    self as cparser,
    persisting::{write_document, write_document_to_file},
};
use cnfrand::{util, TransformConfig, Transformer};
use log::info;
use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Applies randomized structural transformations to a DIMACS CNF file.
///
/// The header is kept as is. Enabled transformations run in the order
/// clauses, variables, names, signs.
#[derive(Parser)]
#[command(name = "cnf-shuffler", version, arg_required_else_help(true), verbatim_doc_comment)]
struct Cli {
    /// Shuffle the order of the clause lines in the CNF.
    /// Comment lines are shuffled along with the clauses.
    #[arg(short, long, verbatim_doc_comment)]
    clauses: bool,

    /// Shuffle the names of the variables in the clauses.
    #[arg(short, long)]
    names: bool,

    /// Seed for every random decision, any integer.
    /// Drawn from system entropy when not given, the drawn seed is logged on info level.
    #[arg(
        short = 'r',
        long = "random",
        value_name = "SEED",
        allow_negative_numbers = true,
        verbatim_doc_comment
    )]
    seed: Option<i64>,

    /// Flip the sign of literals with the given probability.
    /// The decision is taken once per distinct signed literal, so 3 and -3 are decided independently.
    #[arg(short, long, value_name = "PROB", verbatim_doc_comment)]
    signs: Option<f64>,

    /// Shuffle the order of the literals inside each clause with the given probability.
    /// The terminating 0 stays in place.
    #[arg(short, long, value_name = "PROB", verbatim_doc_comment)]
    variables: Option<f64>,

    /// Output path, stdout when not given.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging level for outputting warnings and other information.
    #[arg(short, long, default_value_t = log::LevelFilter::Warn)]
    logging: log::LevelFilter,

    /// The CNF file to transform.
    input: PathBuf,
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
    let transformer = Transformer::new(TransformConfig {
        clauses: cli.clauses,
        names: cli.names,
        literal_order: cli.variables,
        signs: cli.signs,
    })?;

    let time = Instant::now();
    let mut document = cparser::parse_file(&cli.input)?;
    info!(
        "Parsed {} lines of {} in {:.3}s.",
        document.lines.len(),
        cli.input.display(),
        time.elapsed().as_secs_f64()
    );

    let seed = cli.seed.map(util::seed_from_signed);
    let mut rng = util::rng(seed, util::entropy_seed);
    let transcript = transformer.apply(&mut document, &mut rng)?;

    if let Some(table) = &transcript.sign_flips {
        info!("Decided the signs of {} distinct literals.", table.len());
    }

    match &cli.output {
        Some(path) => write_document_to_file(&document, path)?,
        None => write_document(&document, BufWriter::new(stdout().lock()))?,
    }

    info!("Done after {:.3}s.", time.elapsed().as_secs_f64());
    Ok(())
}
