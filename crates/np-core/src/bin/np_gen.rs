//! np-gen: generate synthetic network telemetry records.

use clap::Parser;
use np_core::exit_codes::ExitCode;
use np_core::synth::{simulate_telemetry_records, write_telemetry_csv, GeneratorConfig};
use std::path::PathBuf;
use tracing::error;

/// Generate synthetic network telemetry records.
#[derive(Parser, Debug)]
#[command(name = "np-gen", version, about)]
struct GenCli {
    /// Destination CSV path
    #[arg(long, default_value = "data/network_telemetry.csv")]
    output: PathBuf,

    /// Number of records to create
    #[arg(long, default_value_t = 12_000)]
    records: usize,

    /// RNG seed for reproducible output
    #[arg(long, default_value_t = 2024)]
    seed: u64,
}

fn main() {
    let cli = GenCli::parse();
    np_core::logging::init(np_core::cli::LogFormat::Text);

    let config = GeneratorConfig {
        records: cli.records,
        seed: cli.seed,
        ..GeneratorConfig::default()
    };
    let records = simulate_telemetry_records(&config);

    if let Err(err) = write_telemetry_csv(&records, &cli.output) {
        error!(code = err.code(), "{err}");
        std::process::exit(ExitCode::from(&err).as_i32());
    }

    println!(
        "Wrote {} telemetry records to {}",
        records.len(),
        cli.output.display()
    );
}
