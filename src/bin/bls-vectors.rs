//! Generates or re-checks BLS compatibility vectors.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};
use tracing_subscriber::fmt;

use bls_scalar::vectors::{self, DEFAULT_RANDOM_CASES};
use bls_scalar::{BlsSchemeOnG2, Error, PairingEngine, SchemeConfig};

#[derive(Parser)]
#[command(name = "bls-vectors")]
#[command(about = "Generate BLS12-381 scalar, hashing and signature test vectors", long_about = None)]
#[command(version)]
struct Cli {
    /// File the vectors are written to
    #[arg(short, long, default_value = "compatibility.dat")]
    output: PathBuf,

    /// Seed for a reproducible run; OS entropy is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random-length messages
    #[arg(long, default_value_t = DEFAULT_RANDOM_CASES)]
    random: usize,

    /// Signing domain; overrides the config file
    #[arg(long)]
    domain: Option<String>,

    /// JSON scheme configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Re-check an existing vector file instead of generating one
    #[arg(long, value_name = "PATH")]
    verify: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<SchemeConfig, Error> {
    let mut config = match &cli.config {
        Some(path) => SchemeConfig::from_json(&fs::read_to_string(path)?)?,
        None => SchemeConfig::default(),
    };
    if let Some(domain) = &cli.domain {
        config.domain = domain.clone();
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = load_config(cli)?;
    let scheme = BlsSchemeOnG2::<PairingEngine>::from_config(&config)?;

    if let Some(path) = &cli.verify {
        let parsed = vectors::from_json(&fs::read_to_string(path)?)?;
        for vector in &parsed {
            vector.check(scheme.domain())?;
        }
        info!(vectors = parsed.len(), path = %path.display(), "all vectors replay");
        return Ok(());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cases = vectors::default_cases(&mut rng, &config.domain, cli.random);
    let generated = vectors::generate(&scheme, &mut rng, &cases)?;
    fs::write(&cli.output, vectors::to_json(&generated)?)?;
    info!(
        vectors = generated.len(),
        path = %cli.output.display(),
        "vectors written"
    );
    Ok(())
}

fn main() -> ExitCode {
    fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "bls-vectors failed");
            ExitCode::FAILURE
        }
    }
}
